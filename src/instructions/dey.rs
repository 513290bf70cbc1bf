use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_dey(&mut self, _operand: &Operand) -> u8 {
        self.y = self.y.wrapping_sub(1);
        self.update_zn(self.y);
        0
    }
}
