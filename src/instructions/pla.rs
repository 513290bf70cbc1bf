use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_pla(&mut self, _operand: &Operand) -> u8 {
        self.a = self.pop_u8();
        self.update_zn(self.a);
        0
    }
}
