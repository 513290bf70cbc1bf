use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cmp(&mut self, operand: &Operand) -> u8 {
        let result = self.a.wrapping_sub(operand.value);
        self.p.set(StatusFlags::CARRY, self.a >= operand.value);
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

    fn op(value: u8) -> Operand {
        Operand { effective_addr: 0, value, extra_cycles: 0, mode: AddressingMode::Immediate }
    }

    #[test]
    fn greater_sets_carry_only() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.a = 0x50;
        cpu.handle_cmp(&op(0x30));
        assert!(cpu.p.contains(StatusFlags::CARRY));
        assert!(!cpu.p.contains(StatusFlags::ZERO));
    }

    #[test]
    fn equal_sets_carry_and_zero() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.a = 0x50;
        cpu.handle_cmp(&op(0x50));
        assert!(cpu.p.contains(StatusFlags::CARRY));
        assert!(cpu.p.contains(StatusFlags::ZERO));
    }

    #[test]
    fn less_clears_carry() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.a = 0x50;
        cpu.handle_cmp(&op(0x70));
        assert!(!cpu.p.contains(StatusFlags::CARRY));
        assert!(cpu.p.contains(StatusFlags::NEGATIVE));
    }
}
