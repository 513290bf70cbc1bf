use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_tya(&mut self, _operand: &Operand) -> u8 {
        self.a = self.y;
        self.update_zn(self.a);
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
    fn copies_y_into_accumulator() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.y = 0x63;
        let op = Operand { effective_addr: 0, value: 0, extra_cycles: 0, mode: AddressingMode::Implied };
        cpu.handle_tya(&op);
        assert_eq!(cpu.a, 0x63);
    }
}
