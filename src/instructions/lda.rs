use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_lda(&mut self, operand: &Operand) -> u8 {
        self.a = operand.value;
        self.update_zn(self.a);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::{AddressingMode, StatusFlags};
    use crate::rom::Rom;

    fn op(value: u8) -> Operand {
        Operand { effective_addr: 0, value, extra_cycles: 0, mode: AddressingMode::Immediate }
    }

    #[test]
    fn loads_value() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.handle_lda(&op(0x42));
        assert_eq!(cpu.a, 0x42);
        assert!(!cpu.p.contains(StatusFlags::ZERO));
        assert!(!cpu.p.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn sets_zero_flag() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.handle_lda(&op(0x00));
        assert!(cpu.p.contains(StatusFlags::ZERO));
    }

    #[test]
    fn sets_negative_flag() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.handle_lda(&op(0x80));
        assert!(cpu.p.contains(StatusFlags::NEGATIVE));
    }
}
