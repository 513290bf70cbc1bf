use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_tsx(&mut self, _operand: &Operand) -> u8 {
        self.x = self.sp;
        self.update_zn(self.x);
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
    fn copies_stack_pointer_into_x() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.sp = 0xF0;
        let op = Operand { effective_addr: 0, value: 0, extra_cycles: 0, mode: AddressingMode::Implied };
        cpu.handle_tsx(&op);
        assert_eq!(cpu.x, 0xF0);
        assert!(cpu.p.contains(crate::cpu::StatusFlags::NEGATIVE));
    }
}
