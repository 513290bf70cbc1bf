use crate::cpu::{Cpu, Operand, StatusFlags};

impl Cpu {
    pub(crate) fn handle_rol(&mut self, operand: &Operand) -> u8 {
        let value = operand.value;
        let old_carry = if self.p.contains(StatusFlags::CARRY) { 1 } else { 0 };

        self.p.set(StatusFlags::CARRY, (value & 0x80) != 0);
        let result = (value << 1) | old_carry;

        self.write_back(operand, result);
        self.update_zn(result);
        0
    }
}
