//! Decoded instruction structure and field-extraction helpers.
//!
//! Provides the closed [`Opcode`] enumeration, the read/write metadata that
//! drives all hazard and forwarding decisions, and bit-field extraction for
//! the fixed 32-bit MIPS encoding.

use std::fmt;

use crate::isa::disasm;

/// Bit mask for 6-bit opcode and function-code fields.
pub const OP_MASK: u32 = 0x3F;
/// Bit mask for 5-bit register and shift-amount fields.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit immediate/offset field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump-target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from an encoded word.
///
/// Field layout: `op[31:26] rs[25:21] rt[20:16] rd[15:11] shamt[10:6]
/// funct[5:0]`, with `imm[15:0]` and `target[25:0]` overlapping the low bits
/// for immediate- and jump-format instructions.
pub trait InstructionBits {
    /// Extracts the 6-bit primary opcode (bits 31-26).
    fn op(&self) -> u32;
    /// Extracts the rs field (bits 25-21); also the base register for loads/stores.
    fn rs(&self) -> u32;
    /// Extracts the rt field (bits 20-16).
    fn rt(&self) -> u32;
    /// Extracts the rd field (bits 15-11).
    fn rd(&self) -> u32;
    /// Extracts the 5-bit shift amount (bits 10-6).
    fn shamt(&self) -> u32;
    /// Extracts the 6-bit function code (bits 5-0).
    fn funct(&self) -> u32;
    /// Extracts the 16-bit immediate, sign-extended to 32 bits.
    fn imm(&self) -> i32;
    /// Extracts the 16-bit branch offset, sign-extended and converted from
    /// word units to a byte offset (shifted left 2).
    fn branch_offset(&self) -> i32;
    /// Extracts the 26-bit jump target, converted from word units to a byte
    /// address (shifted left 2).
    fn jump_target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn op(&self) -> u32 {
        (self >> 26) & OP_MASK
    }

    #[inline]
    fn rs(&self) -> u32 {
        (self >> 21) & REG_MASK
    }

    #[inline]
    fn rt(&self) -> u32 {
        (self >> 16) & REG_MASK
    }

    #[inline]
    fn rd(&self) -> u32 {
        (self >> 11) & REG_MASK
    }

    #[inline]
    fn shamt(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline]
    fn funct(&self) -> u32 {
        self & OP_MASK
    }

    #[inline]
    fn imm(&self) -> i32 {
        i32::from((self & IMM_MASK) as i16)
    }

    #[inline]
    fn branch_offset(&self) -> i32 {
        self.imm() << 2
    }

    #[inline]
    fn jump_target(&self) -> u32 {
        (self & TARGET_MASK) << 2
    }
}

/// The supported operations.
///
/// `Nop` is both the decoded form of the all-zero word and the silent-degrade
/// result for unrecognized encodings. `Bubble` is the stall/squash sentinel:
/// it occupies a pipeline slot but carries no hazard or forwarding
/// obligations and never commits anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opcode {
    /// No operation (all-zero word, or an unrecognized encoding).
    #[default]
    Nop,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Jump register.
    Jr,
    /// Halt the simulation.
    Break,
    /// Add.
    Add,
    /// Add unsigned.
    Addu,
    /// Subtract.
    Sub,
    /// Subtract unsigned.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set on less than.
    Slt,
    /// Branch on less than zero.
    Bltz,
    /// Branch on greater than or equal to zero.
    Bgez,
    /// Unconditional jump.
    J,
    /// Branch on equal.
    Beq,
    /// Branch on not equal.
    Bne,
    /// Branch on less than or equal to zero.
    Blez,
    /// Branch on greater than zero.
    Bgtz,
    /// Add immediate.
    Addi,
    /// Add immediate unsigned.
    Addiu,
    /// Set on less than immediate.
    Slti,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Stall/squash placeholder occupying a pipeline slot.
    Bubble,
}

impl Opcode {
    /// Returns the display mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Sll => "SLL",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::Jr => "JR",
            Self::Break => "BREAK",
            Self::Add => "ADD",
            Self::Addu => "ADDU",
            Self::Sub => "SUB",
            Self::Subu => "SUBU",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nor => "NOR",
            Self::Slt => "SLT",
            Self::Bltz => "BLTZ",
            Self::Bgez => "BGEZ",
            Self::J => "J",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Blez => "BLEZ",
            Self::Bgtz => "BGTZ",
            Self::Addi => "ADDI",
            Self::Addiu => "ADDIU",
            Self::Slti => "SLTI",
            Self::Lw => "LW",
            Self::Sw => "SW",
            Self::Bubble => "**STALL**",
        }
    }

    /// True for the conditional branch operations.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Self::Beq | Self::Bne | Self::Bltz | Self::Bgez | Self::Blez | Self::Bgtz
        )
    }

    /// True for the unconditional jumps (J, JR).
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::J | Self::Jr)
    }

    /// True for the three-register ALU operations.
    pub const fn is_three_reg(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Or
                | Self::Xor
                | Self::Nor
                | Self::Add
                | Self::Addu
                | Self::Sub
                | Self::Subu
                | Self::Slt
        )
    }

    /// True for the register-immediate ALU operations.
    pub const fn is_imm_alu(self) -> bool {
        matches!(self, Self::Addi | Self::Addiu | Self::Slti)
    }

    /// True for the shift operations.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }
}

/// Instruction format family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Register format (opcode 0, funct-selected).
    Register,
    /// Immediate format.
    #[default]
    Immediate,
    /// Jump format.
    Jump,
}

/// Which operand fields are register reads requiring hazard checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadSet {
    /// No register reads.
    #[default]
    None,
    /// Reads rs only.
    Rs,
    /// Reads rt only.
    Rt,
    /// Reads rs and rt.
    RsRt,
    /// Reads the base register only (loads).
    Base,
    /// Reads the base register and rt (stores: rt is the store data).
    BaseRt,
}

impl ReadSet {
    /// True when the base register is part of the read set.
    pub const fn uses_base(self) -> bool {
        matches!(self, Self::Base | Self::BaseRt)
    }

    /// True when rs is part of the read set.
    pub const fn uses_rs(self) -> bool {
        matches!(self, Self::Rs | Self::RsRt)
    }

    /// True when rt is part of the read set.
    pub const fn uses_rt(self) -> bool {
        matches!(self, Self::Rt | Self::RsRt | Self::BaseRt)
    }
}

/// Which register field an instruction writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteTarget {
    /// Writes nothing (branches, jumps, stores, BREAK, NOP, bubbles).
    #[default]
    None,
    /// Writes rt (immediate-format ALU ops and loads).
    Rt,
    /// Writes rd (register-format ALU and shift ops).
    Rd,
}

/// One fetched and decoded instruction.
///
/// Immutable once decoded; travels by value through the pipeline slots.
/// Only the operand fields relevant to `op` are meaningful — the rest keep
/// their zero defaults. All downstream hazard and forwarding logic is driven
/// by the `reads`/`writes` metadata, never by the opcode directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instruction {
    /// The decoded operation.
    pub op: Opcode,
    /// Format family of the encoding.
    pub format: Format,
    /// Primary source register.
    pub rs: u32,
    /// Secondary source register (also store data, and the shift input).
    pub rt: u32,
    /// Destination register for register-format operations.
    pub rd: u32,
    /// Base register for loads and stores.
    pub base: u32,
    /// Sign-extended immediate.
    pub imm: i32,
    /// Sign-extended branch or load/store offset (branch offsets are in
    /// bytes, already shifted left 2 at decode).
    pub offset: i32,
    /// Unsigned shift amount.
    pub shamt: u32,
    /// Jump target address (already shifted left 2 at decode).
    pub target: u32,
    /// Register read set for hazard and forwarding checks.
    pub reads: ReadSet,
    /// Register write target.
    pub writes: WriteTarget,
    /// Address this word was fetched from.
    pub pc: u32,
}

impl Instruction {
    /// Creates the stall/squash bubble.
    pub fn bubble() -> Self {
        Self {
            op: Opcode::Bubble,
            ..Self::default()
        }
    }

    /// True when this slot holds the stall/squash bubble.
    pub fn is_bubble(&self) -> bool {
        self.op == Opcode::Bubble
    }

    /// True for the load instruction.
    pub fn is_load(&self) -> bool {
        self.op == Opcode::Lw
    }

    /// True for the store instruction.
    pub fn is_store(&self) -> bool {
        self.op == Opcode::Sw
    }

    /// True for the halt instruction.
    pub fn is_halt(&self) -> bool {
        self.op == Opcode::Break
    }

    /// The register this instruction writes, if any.
    pub const fn dest_reg(&self) -> Option<u32> {
        match self.writes {
            WriteTarget::None => None,
            WriteTarget::Rt => Some(self.rt),
            WriteTarget::Rd => Some(self.rd),
        }
    }

    /// True when this instruction's declared write target is `reg`.
    pub const fn writes_to(&self, reg: u32) -> bool {
        match self.writes {
            WriteTarget::None => false,
            WriteTarget::Rt => self.rt == reg,
            WriteTarget::Rd => self.rd == reg,
        }
    }
}

impl fmt::Display for Instruction {
    /// Renders `MNEMONIC operands`, e.g. `ADD R3, R1, R2` or `LW R1, 0(R0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = disasm::operands(self);
        if operands.is_empty() {
            write!(f, "{}", self.op.mnemonic())
        } else {
            write!(f, "{} {}", self.op.mnemonic(), operands)
        }
    }
}
