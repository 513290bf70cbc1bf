use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_bne(&mut self, operand: &Operand) -> u8 {
        self.branch(!self.p.contains(StatusFlags::ZERO), operand.value as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::AddressingMode;
    use crate::rom::Rom;

    #[test]
    fn does_not_branch_when_zero_set() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.pc = 0x3000;
        cpu.p.insert(StatusFlags::ZERO);
        let op = Operand { effective_addr: 0, value: 0x04, extra_cycles: 0, mode: AddressingMode::Relative };
        let cycles = cpu.handle_bne(&op);
        assert_eq!(cpu.pc, 0x3000);
        assert_eq!(cycles, 0);
    }
}
