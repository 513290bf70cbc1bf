use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_dex(&mut self, _operand: &Operand) -> u8 {
        self.x = self.x.wrapping_sub(1);
        self.update_zn(self.x);
        0
    }
}
