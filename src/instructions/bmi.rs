use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_bmi(&mut self, operand: &Operand) -> u8 {
        self.branch(self.p.contains(StatusFlags::NEGATIVE), operand.value as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::AddressingMode;
    use crate::rom::Rom;

    #[test]
    fn branches_on_negative_flag() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.pc = 0x4000;
        cpu.p.insert(StatusFlags::NEGATIVE);
        let op = Operand { effective_addr: 0, value: 0x01, extra_cycles: 0, mode: AddressingMode::Relative };
        cpu.handle_bmi(&op);
        assert_eq!(cpu.pc, 0x4001);
    }
}
