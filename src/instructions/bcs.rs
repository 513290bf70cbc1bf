use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_bcs(&mut self, operand: &Operand) -> u8 {
        self.branch(self.p.contains(StatusFlags::CARRY), operand.value as i8)
    }
}
