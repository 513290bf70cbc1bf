use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_bvc(&mut self, operand: &Operand) -> u8 {
        self.branch(!self.p.contains(StatusFlags::OVERFLOW), operand.value as i8)
    }
}
