use crate::cpu::{Cpu, Operand, StatusFlags};

const PRESERVED_ON_PULL: StatusFlags =
    StatusFlags::from_bits_truncate(StatusFlags::BREAK.bits() | StatusFlags::UNUSED.bits());

impl Cpu {
    pub(crate) fn handle_plp(&mut self, _operand: &Operand) -> u8 {
        let popped = StatusFlags::from_bits_truncate(self.pop_u8());
        self.p = (popped & !PRESERVED_ON_PULL) | (self.p & PRESERVED_ON_PULL);
        0
    }
}
