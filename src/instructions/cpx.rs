use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cpx(&mut self, operand: &Operand) -> u8 {
        let result = self.x.wrapping_sub(operand.value);
        self.p.set(StatusFlags::CARRY, self.x >= operand.value);
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
    fn compares_x_register() {
        let mut cpu = Cpu::new(Bus::new(Rom::test_rom()));
        cpu.x = 0x10;
        let op = Operand { effective_addr: 0, value: 0x10, extra_cycles: 0, mode: AddressingMode::Immediate };
        cpu.handle_cpx(&op);
        assert!(cpu.p.contains(StatusFlags::ZERO));
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }
}
