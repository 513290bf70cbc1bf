use bitflags::bitflags;
use phf::phf_map;

use crate::bus::Bus;

bitflags! {
    /// The 6502 processor status register, bit-packed per the Obelisk reference layout.
    pub struct StatusFlags: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    Stopped,
    Paused,
    Running,
}

/// Fatal conditions the core can hit. Surfaced through `Cpu::take_fault` alongside
/// a `0` cycle count, per the sentinel-cycle-count contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuFault {
    StackOverflow { pc: u16 },
    StackUnderflow { pc: u16 },
}

impl std::fmt::Display for CpuFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CpuFault::StackOverflow { pc } => write!(f, "stack overflow at pc={:#06x}", pc),
            CpuFault::StackUnderflow { pc } => write!(f, "stack underflow at pc={:#06x}", pc),
        }
    }
}

impl std::error::Error for CpuFault {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

/// The resolved operand for one instruction: the effective address (when the mode has
/// one), the loaded value, the addressing-mode cycle penalty, and the mode itself so
/// shift/rotate handlers can tell an accumulator target from a memory target.
#[derive(Debug, Clone, Copy)]
pub struct Operand {
    pub effective_addr: u16,
    pub value: u8,
    pub extra_cycles: u8,
    pub mode: AddressingMode,
}

pub(crate) type Handler = fn(&mut Cpu, &Operand) -> u8;

#[derive(Clone, Copy)]
pub(crate) struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub base_cycles: u8,
    pub bytes: u8,
    pub handler: Handler,
}

const NOP_ENTRY: OpcodeEntry = OpcodeEntry {
    mnemonic: "NOP",
    mode: AddressingMode::Implied,
    base_cycles: 0,
    bytes: 1,
    handler: Cpu::handle_nop,
};

/// The 256-entry opcode decode table, reproduced bit-for-bit from the standard 6502
/// matrix. Unmapped opcodes fall back to `NOP_ENTRY` (see `Cpu::step`); only the
/// ~56 official mnemonics are present here since illegal-opcode behavior is out of scope.
pub(crate) static OPCODE_TABLE: phf::Map<u8, OpcodeEntry> = phf_map! {
    // ADC
    0x69u8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_adc },
    0x65u8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_adc },
    0x75u8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_adc },
    0x6Du8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_adc },
    0x7Du8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_adc },
    0x79u8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_adc },
    0x61u8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_adc },
    0x71u8 => OpcodeEntry { mnemonic: "ADC", mode: AddressingMode::IndirectY, base_cycles: 5, bytes: 2, handler: Cpu::handle_adc },

    // AND
    0x29u8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_and },
    0x25u8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_and },
    0x35u8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_and },
    0x2Du8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_and },
    0x3Du8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_and },
    0x39u8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_and },
    0x21u8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_and },
    0x31u8 => OpcodeEntry { mnemonic: "AND", mode: AddressingMode::IndirectY, base_cycles: 5, bytes: 2, handler: Cpu::handle_and },

    // ASL
    0x0Au8 => OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::Accumulator, base_cycles: 2, bytes: 1, handler: Cpu::handle_asl },
    0x06u8 => OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::ZeroPage,    base_cycles: 5, bytes: 2, handler: Cpu::handle_asl },
    0x16u8 => OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::ZeroPageX,   base_cycles: 6, bytes: 2, handler: Cpu::handle_asl },
    0x0Eu8 => OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::Absolute,    base_cycles: 6, bytes: 3, handler: Cpu::handle_asl },
    0x1Eu8 => OpcodeEntry { mnemonic: "ASL", mode: AddressingMode::AbsoluteX,   base_cycles: 7, bytes: 3, handler: Cpu::handle_asl },

    // Branches
    0x90u8 => OpcodeEntry { mnemonic: "BCC", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_bcc },
    0xB0u8 => OpcodeEntry { mnemonic: "BCS", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_bcs },
    0xF0u8 => OpcodeEntry { mnemonic: "BEQ", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_beq },
    0x30u8 => OpcodeEntry { mnemonic: "BMI", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_bmi },
    0xD0u8 => OpcodeEntry { mnemonic: "BNE", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_bne },
    0x10u8 => OpcodeEntry { mnemonic: "BPL", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_bpl },
    0x50u8 => OpcodeEntry { mnemonic: "BVC", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_bvc },
    0x70u8 => OpcodeEntry { mnemonic: "BVS", mode: AddressingMode::Relative, base_cycles: 2, bytes: 2, handler: Cpu::handle_bvs },

    // BIT
    0x24u8 => OpcodeEntry { mnemonic: "BIT", mode: AddressingMode::ZeroPage, base_cycles: 3, bytes: 2, handler: Cpu::handle_bit },
    0x2Cu8 => OpcodeEntry { mnemonic: "BIT", mode: AddressingMode::Absolute, base_cycles: 4, bytes: 3, handler: Cpu::handle_bit },

    // BRK
    0x00u8 => OpcodeEntry { mnemonic: "BRK", mode: AddressingMode::Implied, base_cycles: 7, bytes: 1, handler: Cpu::handle_brk },

    // Flag clears/sets
    0x18u8 => OpcodeEntry { mnemonic: "CLC", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_clc },
    0xD8u8 => OpcodeEntry { mnemonic: "CLD", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_cld },
    0x58u8 => OpcodeEntry { mnemonic: "CLI", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_cli },
    0xB8u8 => OpcodeEntry { mnemonic: "CLV", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_clv },
    0x38u8 => OpcodeEntry { mnemonic: "SEC", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_sec },
    0xF8u8 => OpcodeEntry { mnemonic: "SED", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_sed },
    0x78u8 => OpcodeEntry { mnemonic: "SEI", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_sei },

    // CMP
    0xC9u8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_cmp },
    0xC5u8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_cmp },
    0xD5u8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_cmp },
    0xCDu8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_cmp },
    0xDDu8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_cmp },
    0xD9u8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_cmp },
    0xC1u8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_cmp },
    0xD1u8 => OpcodeEntry { mnemonic: "CMP", mode: AddressingMode::IndirectY, base_cycles: 5, bytes: 2, handler: Cpu::handle_cmp },

    // CPX / CPY
    0xE0u8 => OpcodeEntry { mnemonic: "CPX", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_cpx },
    0xE4u8 => OpcodeEntry { mnemonic: "CPX", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_cpx },
    0xECu8 => OpcodeEntry { mnemonic: "CPX", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_cpx },
    0xC0u8 => OpcodeEntry { mnemonic: "CPY", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_cpy },
    0xC4u8 => OpcodeEntry { mnemonic: "CPY", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_cpy },
    0xCCu8 => OpcodeEntry { mnemonic: "CPY", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_cpy },

    // DEC / DEX / DEY
    0xC6u8 => OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::ZeroPage,  base_cycles: 5, bytes: 2, handler: Cpu::handle_dec },
    0xD6u8 => OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::ZeroPageX, base_cycles: 6, bytes: 2, handler: Cpu::handle_dec },
    0xCEu8 => OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::Absolute,  base_cycles: 6, bytes: 3, handler: Cpu::handle_dec },
    0xDEu8 => OpcodeEntry { mnemonic: "DEC", mode: AddressingMode::AbsoluteX, base_cycles: 7, bytes: 3, handler: Cpu::handle_dec },
    0xCAu8 => OpcodeEntry { mnemonic: "DEX", mode: AddressingMode::Implied,   base_cycles: 2, bytes: 1, handler: Cpu::handle_dex },
    0x88u8 => OpcodeEntry { mnemonic: "DEY", mode: AddressingMode::Implied,   base_cycles: 2, bytes: 1, handler: Cpu::handle_dey },

    // EOR
    0x49u8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_eor },
    0x45u8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_eor },
    0x55u8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_eor },
    0x4Du8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_eor },
    0x5Du8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_eor },
    0x59u8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_eor },
    0x41u8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_eor },
    0x51u8 => OpcodeEntry { mnemonic: "EOR", mode: AddressingMode::IndirectY, base_cycles: 5, bytes: 2, handler: Cpu::handle_eor },

    // INC / INX / INY
    0xE6u8 => OpcodeEntry { mnemonic: "INC", mode: AddressingMode::ZeroPage,  base_cycles: 5, bytes: 2, handler: Cpu::handle_inc },
    0xF6u8 => OpcodeEntry { mnemonic: "INC", mode: AddressingMode::ZeroPageX, base_cycles: 6, bytes: 2, handler: Cpu::handle_inc },
    0xEEu8 => OpcodeEntry { mnemonic: "INC", mode: AddressingMode::Absolute,  base_cycles: 6, bytes: 3, handler: Cpu::handle_inc },
    0xFEu8 => OpcodeEntry { mnemonic: "INC", mode: AddressingMode::AbsoluteX, base_cycles: 7, bytes: 3, handler: Cpu::handle_inc },
    0xE8u8 => OpcodeEntry { mnemonic: "INX", mode: AddressingMode::Implied,   base_cycles: 2, bytes: 1, handler: Cpu::handle_inx },
    0xC8u8 => OpcodeEntry { mnemonic: "INY", mode: AddressingMode::Implied,   base_cycles: 2, bytes: 1, handler: Cpu::handle_iny },

    // JMP / JSR
    0x4Cu8 => OpcodeEntry { mnemonic: "JMP", mode: AddressingMode::Absolute, base_cycles: 3, bytes: 3, handler: Cpu::handle_jmp },
    0x6Cu8 => OpcodeEntry { mnemonic: "JMP", mode: AddressingMode::Indirect, base_cycles: 5, bytes: 3, handler: Cpu::handle_jmp },
    0x20u8 => OpcodeEntry { mnemonic: "JSR", mode: AddressingMode::Absolute, base_cycles: 6, bytes: 3, handler: Cpu::handle_jsr },

    // LDA
    0xA9u8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_lda },
    0xA5u8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_lda },
    0xB5u8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_lda },
    0xADu8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_lda },
    0xBDu8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_lda },
    0xB9u8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_lda },
    0xA1u8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_lda },
    0xB1u8 => OpcodeEntry { mnemonic: "LDA", mode: AddressingMode::IndirectY, base_cycles: 5, bytes: 2, handler: Cpu::handle_lda },

    // LDX
    0xA2u8 => OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_ldx },
    0xA6u8 => OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_ldx },
    0xB6u8 => OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::ZeroPageY, base_cycles: 4, bytes: 2, handler: Cpu::handle_ldx },
    0xAEu8 => OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_ldx },
    0xBEu8 => OpcodeEntry { mnemonic: "LDX", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_ldx },

    // LDY
    0xA0u8 => OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_ldy },
    0xA4u8 => OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_ldy },
    0xB4u8 => OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_ldy },
    0xACu8 => OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_ldy },
    0xBCu8 => OpcodeEntry { mnemonic: "LDY", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_ldy },

    // LSR
    0x4Au8 => OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::Accumulator, base_cycles: 2, bytes: 1, handler: Cpu::handle_lsr },
    0x46u8 => OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::ZeroPage,    base_cycles: 5, bytes: 2, handler: Cpu::handle_lsr },
    0x56u8 => OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::ZeroPageX,   base_cycles: 6, bytes: 2, handler: Cpu::handle_lsr },
    0x4Eu8 => OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::Absolute,    base_cycles: 6, bytes: 3, handler: Cpu::handle_lsr },
    0x5Eu8 => OpcodeEntry { mnemonic: "LSR", mode: AddressingMode::AbsoluteX,   base_cycles: 7, bytes: 3, handler: Cpu::handle_lsr },

    // NOP
    0xEAu8 => OpcodeEntry { mnemonic: "NOP", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_nop },

    // ORA
    0x09u8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_ora },
    0x05u8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_ora },
    0x15u8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_ora },
    0x0Du8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_ora },
    0x1Du8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_ora },
    0x19u8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_ora },
    0x01u8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_ora },
    0x11u8 => OpcodeEntry { mnemonic: "ORA", mode: AddressingMode::IndirectY, base_cycles: 5, bytes: 2, handler: Cpu::handle_ora },

    // Stack
    0x48u8 => OpcodeEntry { mnemonic: "PHA", mode: AddressingMode::Implied, base_cycles: 3, bytes: 1, handler: Cpu::handle_pha },
    0x08u8 => OpcodeEntry { mnemonic: "PHP", mode: AddressingMode::Implied, base_cycles: 3, bytes: 1, handler: Cpu::handle_php },
    0x68u8 => OpcodeEntry { mnemonic: "PLA", mode: AddressingMode::Implied, base_cycles: 4, bytes: 1, handler: Cpu::handle_pla },
    0x28u8 => OpcodeEntry { mnemonic: "PLP", mode: AddressingMode::Implied, base_cycles: 4, bytes: 1, handler: Cpu::handle_plp },

    // ROL / ROR
    0x2Au8 => OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::Accumulator, base_cycles: 2, bytes: 1, handler: Cpu::handle_rol },
    0x26u8 => OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::ZeroPage,    base_cycles: 5, bytes: 2, handler: Cpu::handle_rol },
    0x36u8 => OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::ZeroPageX,   base_cycles: 6, bytes: 2, handler: Cpu::handle_rol },
    0x2Eu8 => OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::Absolute,    base_cycles: 6, bytes: 3, handler: Cpu::handle_rol },
    0x3Eu8 => OpcodeEntry { mnemonic: "ROL", mode: AddressingMode::AbsoluteX,   base_cycles: 7, bytes: 3, handler: Cpu::handle_rol },
    0x6Au8 => OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::Accumulator, base_cycles: 2, bytes: 1, handler: Cpu::handle_ror },
    0x66u8 => OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::ZeroPage,    base_cycles: 5, bytes: 2, handler: Cpu::handle_ror },
    0x76u8 => OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::ZeroPageX,   base_cycles: 6, bytes: 2, handler: Cpu::handle_ror },
    0x6Eu8 => OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::Absolute,    base_cycles: 6, bytes: 3, handler: Cpu::handle_ror },
    0x7Eu8 => OpcodeEntry { mnemonic: "ROR", mode: AddressingMode::AbsoluteX,   base_cycles: 7, bytes: 3, handler: Cpu::handle_ror },

    // RTI / RTS
    0x40u8 => OpcodeEntry { mnemonic: "RTI", mode: AddressingMode::Implied, base_cycles: 6, bytes: 1, handler: Cpu::handle_rti },
    0x60u8 => OpcodeEntry { mnemonic: "RTS", mode: AddressingMode::Implied, base_cycles: 6, bytes: 1, handler: Cpu::handle_rts },

    // SBC
    0xE9u8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::Immediate, base_cycles: 2, bytes: 2, handler: Cpu::handle_sbc },
    0xE5u8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_sbc },
    0xF5u8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_sbc },
    0xEDu8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_sbc },
    0xFDu8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::AbsoluteX, base_cycles: 4, bytes: 3, handler: Cpu::handle_sbc },
    0xF9u8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::AbsoluteY, base_cycles: 4, bytes: 3, handler: Cpu::handle_sbc },
    0xE1u8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_sbc },
    0xF1u8 => OpcodeEntry { mnemonic: "SBC", mode: AddressingMode::IndirectY, base_cycles: 5, bytes: 2, handler: Cpu::handle_sbc },

    // STA
    0x85u8 => OpcodeEntry { mnemonic: "STA", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_sta },
    0x95u8 => OpcodeEntry { mnemonic: "STA", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_sta },
    0x8Du8 => OpcodeEntry { mnemonic: "STA", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_sta },
    0x9Du8 => OpcodeEntry { mnemonic: "STA", mode: AddressingMode::AbsoluteX, base_cycles: 5, bytes: 3, handler: Cpu::handle_sta },
    0x99u8 => OpcodeEntry { mnemonic: "STA", mode: AddressingMode::AbsoluteY, base_cycles: 5, bytes: 3, handler: Cpu::handle_sta },
    0x81u8 => OpcodeEntry { mnemonic: "STA", mode: AddressingMode::IndirectX, base_cycles: 6, bytes: 2, handler: Cpu::handle_sta },
    0x91u8 => OpcodeEntry { mnemonic: "STA", mode: AddressingMode::IndirectY, base_cycles: 6, bytes: 2, handler: Cpu::handle_sta },

    // STX / STY
    0x86u8 => OpcodeEntry { mnemonic: "STX", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_stx },
    0x96u8 => OpcodeEntry { mnemonic: "STX", mode: AddressingMode::ZeroPageY, base_cycles: 4, bytes: 2, handler: Cpu::handle_stx },
    0x8Eu8 => OpcodeEntry { mnemonic: "STX", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_stx },
    0x84u8 => OpcodeEntry { mnemonic: "STY", mode: AddressingMode::ZeroPage,  base_cycles: 3, bytes: 2, handler: Cpu::handle_sty },
    0x94u8 => OpcodeEntry { mnemonic: "STY", mode: AddressingMode::ZeroPageX, base_cycles: 4, bytes: 2, handler: Cpu::handle_sty },
    0x8Cu8 => OpcodeEntry { mnemonic: "STY", mode: AddressingMode::Absolute,  base_cycles: 4, bytes: 3, handler: Cpu::handle_sty },

    // Register transfers
    0xAAu8 => OpcodeEntry { mnemonic: "TAX", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_tax },
    0xA8u8 => OpcodeEntry { mnemonic: "TAY", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_tay },
    0xBAu8 => OpcodeEntry { mnemonic: "TSX", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_tsx },
    0x8Au8 => OpcodeEntry { mnemonic: "TXA", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_txa },
    0x9Au8 => OpcodeEntry { mnemonic: "TXS", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_txs },
    0x98u8 => OpcodeEntry { mnemonic: "TYA", mode: AddressingMode::Implied, base_cycles: 2, bytes: 1, handler: Cpu::handle_tya },
};

/// The MOS 6502 (2A03 variant, no decimal mode) interpreter core.
pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub p: StatusFlags,
    pub pc: u16,
    pub cycles: u64,
    pub instructions_retired: u64,
    pub state: CpuState,
    pub bus: Bus,
    fault: Option<CpuFault>,
}

impl Cpu {
    pub const STACK_BASE: u16 = 0x0100;
    pub const RESET_VECTOR: u16 = 0xFFFC;
    pub const IRQ_VECTOR: u16 = 0xFFFE;
    pub const NMI_VECTOR: u16 = 0xFFFA;

    /// Builds a CPU over an already-populated bus and honors the reset vector,
    /// matching the "constructed from a memory image" contract in the external
    /// interfaces section: `sp=0xFD`, `p` has Interrupt-Disable and Unused set.
    pub fn new(bus: Bus) -> Self {
        let mut cpu = Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            p: StatusFlags::INTERRUPT_DISABLE | StatusFlags::UNUSED,
            pc: 0,
            cycles: 0,
            instructions_retired: 0,
            state: CpuState::Stopped,
            bus,
            fault: None,
        };
        cpu.reset();
        cpu
    }

    /// Restores the documented power-up/reset register state and loads `pc` from
    /// the reset vector. Does not touch bus contents.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.p = StatusFlags::INTERRUPT_DISABLE | StatusFlags::UNUSED;
        self.pc = self.read_u16(Self::RESET_VECTOR);
        self.cycles = 0;
        self.instructions_retired = 0;
        self.state = CpuState::Running;
        self.fault = None;
    }

    pub fn take_fault(&mut self) -> Option<CpuFault> {
        self.fault.take()
    }

    pub(crate) fn read_u8(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub(crate) fn write_u8(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    pub(crate) fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.bus.read(addr);
        let hi = self.bus.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Pushes a byte onto the page-0x01 stack. `sp == 0x00` is a fatal overflow.
    pub(crate) fn push_u8(&mut self, value: u8) {
        if self.sp == 0x00 {
            self.fault = Some(CpuFault::StackOverflow { pc: self.pc });
            self.state = CpuState::Stopped;
            return;
        }
        let addr = Self::STACK_BASE | self.sp as u16;
        self.bus.write(addr, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes high byte first, then low byte (matches JSR/BRK's documented push order).
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    /// Pulls a byte from the stack. `sp == 0xFF` is a fatal underflow.
    pub(crate) fn pop_u8(&mut self) -> u8 {
        if self.sp == 0xFF {
            self.fault = Some(CpuFault::StackUnderflow { pc: self.pc });
            self.state = CpuState::Stopped;
            return 0;
        }
        self.sp = self.sp.wrapping_add(1);
        let addr = Self::STACK_BASE | self.sp as u16;
        self.bus.read(addr)
    }

    /// Pulls low byte then high byte (the corrected order; see DESIGN.md Open Question 3).
    pub(crate) fn pop_u16(&mut self) -> u16 {
        let lo = self.pop_u8();
        let hi = self.pop_u8();
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn update_zn(&mut self, result: u8) {
        self.p.set(StatusFlags::ZERO, result == 0);
        self.p.set(StatusFlags::NEGATIVE, result & 0x80 != 0);
    }

    /// Writes a shift/rotate result back to the accumulator or to memory, depending
    /// on the addressing mode the operand was resolved under.
    pub(crate) fn write_back(&mut self, operand: &Operand, value: u8) {
        if operand.mode == AddressingMode::Accumulator {
            self.a = value;
        } else {
            self.bus.write(operand.effective_addr, value);
        }
    }

    /// Centralizes branch behavior: applies the signed offset if `condition` holds
    /// and reports the +1 (taken) / +2 (taken, page-crossed) cycle penalty.
    pub(crate) fn branch(&mut self, condition: bool, offset: i8) -> u8 {
        if !condition {
            return 0;
        }
        let old_pc = self.pc;
        self.pc = self.pc.wrapping_add(offset as u16);
        if (old_pc & 0xFF00) != (self.pc & 0xFF00) {
            2
        } else {
            1
        }
    }

    /// Fetches the operand for `mode` starting at the opcode's address (`self.pc`),
    /// advancing `pc` past the opcode and its inline bytes. Handlers that redirect
    /// control flow (JMP/JSR/RTS/RTI/BRK/taken branches) overwrite `pc` afterward.
    fn resolve(&mut self, mode: AddressingMode) -> Operand {
        let opcode_addr = self.pc;
        match mode {
            AddressingMode::Implied => {
                self.pc = opcode_addr.wrapping_add(1);
                Operand { effective_addr: 0, value: 0, extra_cycles: 0, mode }
            }
            AddressingMode::Accumulator => {
                self.pc = opcode_addr.wrapping_add(1);
                Operand { effective_addr: 0, value: self.a, extra_cycles: 0, mode }
            }
            AddressingMode::Immediate => {
                let addr = opcode_addr.wrapping_add(1);
                self.pc = opcode_addr.wrapping_add(2);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: 0, mode }
            }
            AddressingMode::ZeroPage => {
                let addr = self.bus.read(opcode_addr.wrapping_add(1)) as u16;
                self.pc = opcode_addr.wrapping_add(2);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: 0, mode }
            }
            AddressingMode::ZeroPageX => {
                let base = self.bus.read(opcode_addr.wrapping_add(1));
                let addr = base.wrapping_add(self.x) as u16;
                self.pc = opcode_addr.wrapping_add(2);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: 0, mode }
            }
            AddressingMode::ZeroPageY => {
                let base = self.bus.read(opcode_addr.wrapping_add(1));
                let addr = base.wrapping_add(self.y) as u16;
                self.pc = opcode_addr.wrapping_add(2);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: 0, mode }
            }
            AddressingMode::Relative => {
                let operand_addr = opcode_addr.wrapping_add(1);
                let offset = self.bus.read(operand_addr);
                self.pc = opcode_addr.wrapping_add(2);
                Operand { effective_addr: operand_addr, value: offset, extra_cycles: 0, mode }
            }
            AddressingMode::Absolute => {
                let addr = self.read_u16(opcode_addr.wrapping_add(1));
                self.pc = opcode_addr.wrapping_add(3);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: 0, mode }
            }
            AddressingMode::AbsoluteX => {
                let base = self.read_u16(opcode_addr.wrapping_add(1));
                let addr = base.wrapping_add(self.x as u16);
                let extra = if (base & 0xFF00) != (addr & 0xFF00) { 1 } else { 0 };
                self.pc = opcode_addr.wrapping_add(3);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: extra, mode }
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_u16(opcode_addr.wrapping_add(1));
                let addr = base.wrapping_add(self.y as u16);
                let extra = if (base & 0xFF00) != (addr & 0xFF00) { 1 } else { 0 };
                self.pc = opcode_addr.wrapping_add(3);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: extra, mode }
            }
            AddressingMode::Indirect => {
                let ptr = self.read_u16(opcode_addr.wrapping_add(1));
                let lo = self.bus.read(ptr);
                // Hardware page-wrap bug: when the pointer's low byte is 0xFF, the
                // high byte is fetched from the start of the same page, not the next.
                let hi = if ptr & 0x00FF == 0x00FF {
                    self.bus.read(ptr & 0xFF00)
                } else {
                    self.bus.read(ptr.wrapping_add(1))
                };
                let addr = u16::from_le_bytes([lo, hi]);
                self.pc = opcode_addr.wrapping_add(3);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: 0, mode }
            }
            AddressingMode::IndirectX => {
                let zp_base = self.bus.read(opcode_addr.wrapping_add(1));
                let zp = zp_base.wrapping_add(self.x);
                let lo = self.bus.read(zp as u16);
                let hi = self.bus.read(zp.wrapping_add(1) as u16);
                let addr = u16::from_le_bytes([lo, hi]);
                self.pc = opcode_addr.wrapping_add(2);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: 0, mode }
            }
            AddressingMode::IndirectY => {
                let zp = self.bus.read(opcode_addr.wrapping_add(1));
                let lo = self.bus.read(zp as u16);
                let hi = self.bus.read(zp.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                let addr = base.wrapping_add(self.y as u16);
                let extra = if (base & 0xFF00) != (addr & 0xFF00) { 1 } else { 0 };
                self.pc = opcode_addr.wrapping_add(2);
                let value = self.bus.read(addr);
                Operand { effective_addr: addr, value, extra_cycles: extra, mode }
            }
        }
    }

    /// Executes one instruction: fetch, decode, resolve operand, dispatch, account
    /// cycles. Returns the cycles consumed, or `0` if a fatal fault stopped the CPU.
    pub fn step(&mut self) -> u64 {
        if self.state != CpuState::Running {
            return 0;
        }

        let opcode = self.bus.read(self.pc);
        let entry = match OPCODE_TABLE.get(&opcode) {
            Some(entry) => *entry,
            None => {
                eprintln!("diagnostic: unimplemented opcode {:#04x} at pc={:#06x}", opcode, self.pc);
                NOP_ENTRY
            }
        };

        let operand = self.resolve(entry.mode);
        let handler_extra = (entry.handler)(self, &operand);

        if self.fault.is_some() {
            self.state = CpuState::Stopped;
            return 0;
        }

        let total = entry.base_cycles as u64 + operand.extra_cycles as u64 + handler_extra as u64;
        self.cycles += total;
        self.instructions_retired += 1;
        total
    }

    /// Services a non-maskable interrupt: pushes `pc` and `p` (B clear, Unused set),
    /// sets the Interrupt-Disable flag, and loads `pc` from the NMI vector.
    pub fn nmi(&mut self) -> u64 {
        self.push_u16(self.pc);
        let status = (self.p & !StatusFlags::BREAK) | StatusFlags::UNUSED;
        self.push_u8(status.bits());
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.read_u16(Self::NMI_VECTOR);
        if self.fault.is_some() {
            self.state = CpuState::Stopped;
            return 0;
        }
        7
    }

    /// Services a maskable interrupt request. No-op while the Interrupt-Disable
    /// flag is set.
    pub fn irq(&mut self) -> u64 {
        if self.p.contains(StatusFlags::INTERRUPT_DISABLE) {
            return 0;
        }
        self.push_u16(self.pc);
        let status = (self.p & !StatusFlags::BREAK) | StatusFlags::UNUSED;
        self.push_u8(status.bits());
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.read_u16(Self::IRQ_VECTOR);
        if self.fault.is_some() {
            self.state = CpuState::Stopped;
            return 0;
        }
        7
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::rom::Rom;

    fn test_cpu() -> Cpu {
        Cpu::new(Bus::new(Rom::test_rom()))
    }

    #[test]
    fn reset_yields_documented_power_up_state() {
        let mut cpu = test_cpu();
        cpu.bus.write(Cpu::RESET_VECTOR, 0x00);
        cpu.bus.write(Cpu::RESET_VECTOR + 1, 0x80);
        cpu.a = 0x42;
        cpu.x = 0x11;
        cpu.reset();
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.sp, 0xFD);
        assert_eq!(cpu.p.bits(), 0x24);
        assert_eq!(cpu.pc, 0x8000);
    }

    #[test]
    fn s1_lda_immediate() {
        let mut cpu = test_cpu();
        cpu.pc = 0x8000;
        cpu.bus.write(0x8000, 0xA9);
        cpu.bus.write(0x8001, 0x42);
        let cycles = cpu.step();
        assert_eq!(cpu.a, 0x42);
        assert!(!cpu.p.contains(StatusFlags::ZERO));
        assert!(!cpu.p.contains(StatusFlags::NEGATIVE));
        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cycles, 2);
    }

    #[test]
    fn s3_branch_taken_across_page() {
        let mut cpu = test_cpu();
        cpu.pc = 0x80F0;
        cpu.p.insert(StatusFlags::CARRY);
        cpu.bus.write(0x80F0, 0xB0); // BCS
        cpu.bus.write(0x80F1, 0x20);
        let cycles = cpu.step();
        assert_eq!(cpu.pc, 0x8112);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn s4_zero_page_x_wraps() {
        let mut cpu = test_cpu();
        cpu.x = 0xFF;
        cpu.pc = 0x8000;
        cpu.bus.write(0x8000, 0xB5); // LDA $80,X
        cpu.bus.write(0x8001, 0x80);
        cpu.bus.write(0x7F, 0x99);
        cpu.step();
        assert_eq!(cpu.a, 0x99);
    }

    #[test]
    fn s5_jsr_rts_round_trip() {
        let mut cpu = test_cpu();
        cpu.pc = 0x8000;
        cpu.sp = 0xFD;
        cpu.bus.write(0x8000, 0x20); // JSR $1234
        cpu.bus.write(0x8001, 0x34);
        cpu.bus.write(0x8002, 0x12);
        cpu.bus.write(0x1234, 0x60); // RTS
        cpu.step();
        assert_eq!(cpu.pc, 0x1234);
        cpu.step();
        assert_eq!(cpu.pc, 0x8003);
        assert_eq!(cpu.sp, 0xFD);
    }

    #[test]
    fn s6_brk_pushes_pc_and_status_then_jumps_to_irq_vector() {
        let mut cpu = test_cpu();
        cpu.pc = 0x9000;
        cpu.p = StatusFlags::from_bits_truncate(0x24);
        cpu.bus.write(0x9000, 0x00); // BRK
        cpu.bus.write(Cpu::IRQ_VECTOR, 0xCD);
        cpu.bus.write(Cpu::IRQ_VECTOR + 1, 0xAB);
        cpu.step();
        assert_eq!(cpu.pc, 0xABCD);
        assert!(cpu.p.contains(StatusFlags::INTERRUPT_DISABLE));
        let status = cpu.bus.read(Cpu::STACK_BASE | (cpu.sp.wrapping_add(1)) as u16);
        assert_eq!(status, 0x24 | 0x30);
        let pc_lo = cpu.bus.read(Cpu::STACK_BASE | (cpu.sp.wrapping_add(2)) as u16);
        let pc_hi = cpu.bus.read(Cpu::STACK_BASE | (cpu.sp.wrapping_add(3)) as u16);
        assert_eq!(u16::from_be_bytes([pc_hi, pc_lo]), 0x9002);
    }

    #[test]
    fn stack_overflow_is_fatal_and_returns_zero_cycles() {
        let mut cpu = test_cpu();
        cpu.sp = 0x00;
        cpu.pc = 0x8000;
        cpu.bus.write(0x8000, 0x48); // PHA
        let cycles = cpu.step();
        assert_eq!(cycles, 0);
        assert_eq!(cpu.state, CpuState::Stopped);
        assert_eq!(cpu.take_fault(), Some(CpuFault::StackOverflow { pc: 0x8000 }));
    }

    #[test]
    fn stack_underflow_is_fatal_and_returns_zero_cycles() {
        let mut cpu = test_cpu();
        cpu.sp = 0xFF;
        cpu.pc = 0x8000;
        cpu.bus.write(0x8000, 0x68); // PLA
        let cycles = cpu.step();
        assert_eq!(cycles, 0);
        assert_eq!(cpu.state, CpuState::Stopped);
        assert_eq!(cpu.take_fault(), Some(CpuFault::StackUnderflow { pc: 0x8000 }));
    }

    #[test]
    fn indirect_jmp_reproduces_page_wrap_bug() {
        let mut cpu = test_cpu();
        cpu.pc = 0x8000;
        cpu.bus.write(0x8000, 0x6C); // JMP ($20FF)
        cpu.bus.write(0x8001, 0xFF);
        cpu.bus.write(0x8002, 0x20);
        cpu.bus.write(0x20FF, 0x34);
        cpu.bus.write(0x2000, 0x56); // wraps to start of the same page, not 0x2100
        cpu.step();
        assert_eq!(cpu.pc, 0x5634);
    }

    #[test]
    fn unmapped_opcode_is_treated_as_nop_not_fatal() {
        let mut cpu = test_cpu();
        cpu.pc = 0x8000;
        cpu.bus.write(0x8000, 0x02); // not in the official opcode table
        let cycles = cpu.step();
        assert_eq!(cycles, 0);
        assert_eq!(cpu.pc, 0x8001);
        assert_eq!(cpu.state, CpuState::Running);
    }
}
