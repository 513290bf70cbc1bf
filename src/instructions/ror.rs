use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_ror(&mut self, operand: &Operand) -> u8 {
        let value = operand.value;
        let old_carry = if self.p.contains(StatusFlags::CARRY) { 0x80 } else { 0 };

        self.p.set(StatusFlags::CARRY, (value & 0x01) != 0);
        let result = (value >> 1) | old_carry;

        self.write_back(operand, result);
        self.update_zn(result);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::AddressingMode;
    use crate::rom::Rom;

    #[test]
    fn rotates_accumulator_right_with_carry_in() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.p.insert(StatusFlags::CARRY);
        cpu.a = 0b0101_0100;
        let op = Operand { effective_addr: 0, value: 0b0101_0100, extra_cycles: 0, mode: AddressingMode::Accumulator };
        cpu.handle_ror(&op);
        assert_eq!(cpu.a, 0b1010_1010);
        assert!(!cpu.p.contains(StatusFlags::CARRY));
        assert!(cpu.p.contains(StatusFlags::NEGATIVE));
    }
}
