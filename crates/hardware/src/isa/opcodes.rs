//! Instruction encodings: primary opcodes and function codes.
//!
//! The primary opcode occupies bits 31-26. Opcode `0` selects a
//! register-format instruction whose operation is given by the function code
//! in bits 5-0; opcode `1` (REGIMM) selects BLTZ/BGEZ on the rt field.

/// Register-format escape: the function code selects the operation.
pub const OP_SPECIAL: u32 = 0x00;

/// REGIMM escape: the rt field selects BLTZ or BGEZ.
pub const OP_REGIMM: u32 = 0x01;

/// Unconditional jump (J).
pub const OP_J: u32 = 0x02;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Branch on less than or equal to zero (BLEZ).
pub const OP_BLEZ: u32 = 0x06;

/// Branch on greater than zero (BGTZ).
pub const OP_BGTZ: u32 = 0x07;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Add immediate unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2B;

/// Shift left logical (SLL). The all-zero word additionally encodes NOP.
pub const FUNCT_SLL: u32 = 0x00;

/// Shift right logical (SRL).
pub const FUNCT_SRL: u32 = 0x02;

/// Shift right arithmetic (SRA).
pub const FUNCT_SRA: u32 = 0x03;

/// Jump register (JR).
pub const FUNCT_JR: u32 = 0x08;

/// Halt the simulation (BREAK).
pub const FUNCT_BREAK: u32 = 0x0D;

/// Add (ADD).
pub const FUNCT_ADD: u32 = 0x20;

/// Add unsigned (ADDU).
pub const FUNCT_ADDU: u32 = 0x21;

/// Subtract (SUB).
pub const FUNCT_SUB: u32 = 0x22;

/// Subtract unsigned (SUBU).
pub const FUNCT_SUBU: u32 = 0x23;

/// Bitwise AND.
pub const FUNCT_AND: u32 = 0x24;

/// Bitwise OR.
pub const FUNCT_OR: u32 = 0x25;

/// Bitwise XOR.
pub const FUNCT_XOR: u32 = 0x26;

/// Bitwise NOR.
pub const FUNCT_NOR: u32 = 0x27;

/// Set on less than (SLT).
pub const FUNCT_SLT: u32 = 0x2A;

/// REGIMM rt selector for BLTZ.
pub const RT_BLTZ: u32 = 0x00;

/// REGIMM rt selector for BGEZ.
pub const RT_BGEZ: u32 = 0x01;
