use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_ldy(&mut self, operand: &Operand) -> u8 {
        self.y = operand.value;
        self.update_zn(self.y);
        0
    }
}
