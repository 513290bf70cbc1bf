use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cpy(&mut self, operand: &Operand) -> u8 {
        let result = self.y.wrapping_sub(operand.value);
        self.p.set(StatusFlags::CARRY, self.y >= operand.value);
        self.update_zn(result);
        0
    }
}
