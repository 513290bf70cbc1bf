use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn handle_txs(&mut self, _operand: &Operand) -> u8 {
        // Unlike the other transfers, TXS does not touch any status flags.
        self.sp = self.x;
        0
    }
}
