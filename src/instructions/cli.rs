use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cli(&mut self, _operand: &Operand) -> u8 {
        self.p.remove(StatusFlags::INTERRUPT_DISABLE);
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
    fn clears_interrupt_disable() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        let op = Operand { effective_addr: 0, value: 0, extra_cycles: 0, mode: AddressingMode::Implied };
        cpu.handle_cli(&op);
        assert!(!cpu.p.contains(StatusFlags::INTERRUPT_DISABLE));
    }
}
