use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_txa(&mut self, _operand: &Operand) -> u8 {
        self.a = self.x;
        self.update_zn(self.a);
        0
    }
}
