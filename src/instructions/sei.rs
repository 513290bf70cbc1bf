use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_sei(&mut self, _operand: &Operand) -> u8 {
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        0
    }
}
