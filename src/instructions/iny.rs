use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_iny(&mut self, _operand: &Operand) -> u8 {
        self.y = self.y.wrapping_add(1);
        self.update_zn(self.y);
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
    fn increments_y() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.y = 0x10;
        let op = Operand { effective_addr: 0, value: 0, extra_cycles: 0, mode: AddressingMode::Implied };
        cpu.handle_iny(&op);
        assert_eq!(cpu.y, 0x11);
    }
}
