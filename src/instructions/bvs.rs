use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_bvs(&mut self, operand: &Operand) -> u8 {
        self.branch(self.p.contains(StatusFlags::OVERFLOW), operand.value as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::AddressingMode;
    use crate::rom::Rom;

    #[test]
    fn branches_on_overflow_flag() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.pc = 0x7000;
        cpu.p.insert(StatusFlags::OVERFLOW);
        let op = Operand { effective_addr: 0, value: 0x01, extra_cycles: 0, mode: AddressingMode::Relative };
        cpu.handle_bvs(&op);
        assert_eq!(cpu.pc, 0x7001);
    }
}
