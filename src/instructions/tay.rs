use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_tay(&mut self, _operand: &Operand) -> u8 {
        self.y = self.a;
        self.update_zn(self.y);
        0
    }
}
