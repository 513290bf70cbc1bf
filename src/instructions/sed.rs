use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_sed(&mut self, _operand: &Operand) -> u8 {
        self.p.insert(StatusFlags::DECIMAL);
        0
    }
}
