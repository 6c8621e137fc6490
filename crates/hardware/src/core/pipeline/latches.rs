//! Pipeline stage slots and inter-stage latches.
//!
//! The 8 stages are IF, IS (the two fetch stages), ID (decode), RF
//! (register fetch), EX (execute), DF and DS (the two memory stages), and
//! WB (writeback). Every stage slot is always occupied: idle or squashed
//! slots hold a bubble, never nothing. Values travel between stages only
//! through the latches — a stage never reads a neighbor's current-cycle
//! instruction to get a value, only its own latch.

use std::fmt;

use crate::isa::Instruction;

/// Contents of one of the two raw-bit fetch stages.
///
/// Decoding is deferred until the word leaves IS, so these slots hold the
/// fetched word directly. A squash replaces them with `Bubble`; the default
/// `Word(0)` decodes to NOP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSlot {
    /// A fetched (not yet decoded) instruction word.
    Word(u32),
    /// A squashed slot.
    Bubble,
}

impl FetchSlot {
    /// The raw word carried by this slot; bubbles read as zero.
    pub const fn word(self) -> u32 {
        match self {
            Self::Word(w) => w,
            Self::Bubble => 0,
        }
    }

    /// True when this slot was squashed.
    pub const fn is_bubble(self) -> bool {
        matches!(self, Self::Bubble)
    }
}

impl Default for FetchSlot {
    fn default() -> Self {
        Self::Word(0)
    }
}

impl fmt::Display for FetchSlot {
    /// Renders `<Fetched: xx xx xx xx>` for a nonzero word, `NOP` for the
    /// zero word, and `**STALL**` for a squashed slot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Word(0) => write!(f, "NOP"),
            Self::Word(w) => {
                let b = w.to_be_bytes();
                write!(
                    f,
                    "<Fetched: {:02X} {:02X} {:02X} {:02X}>",
                    b[0], b[1], b[2], b[3]
                )
            }
            Self::Bubble => write!(f, "**STALL**"),
        }
    }
}

/// The instruction (or raw word) occupying each of the 8 pipeline stages.
#[derive(Debug, Clone, Default)]
pub struct StageSlots {
    /// IF: the word fetched this cycle.
    pub fetch1: FetchSlot,
    /// IS: the word fetched last cycle, about to be decoded.
    pub fetch2: FetchSlot,
    /// ID: the freshly decoded instruction.
    pub decode: Instruction,
    /// RF: the instruction reading its register operands.
    pub regfetch: Instruction,
    /// EX: the instruction executing.
    pub execute: Instruction,
    /// DF: the first memory stage.
    pub mem1: Instruction,
    /// DS: the second memory stage (loads and stores act here).
    pub mem2: Instruction,
    /// WB: the instruction committing to the register file.
    pub writeback: Instruction,
}

/// The scalar values each stage hands to its successor.
///
/// Each latch is written by one stage and read by the next stage on the
/// following cycle. The reverse-order update sequence in the engine is what
/// guarantees a latch is never read in the same cycle it is overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineLatches {
    /// IF → IS: the next program counter.
    pub if_is_npc: u32,
    /// IS → ID: the raw instruction word.
    pub is_id_ir: u32,
    /// RF → EX: the left (rs or base) operand.
    pub rf_ex_a: i32,
    /// RF → EX: the right (rt) operand.
    pub rf_ex_b: i32,
    /// EX → DF: the ALU result, effective address, or branch target.
    pub ex_df_alu: i32,
    /// EX → DF: the rt operand, carried for stores.
    pub ex_df_b: i32,
    /// DS → WB: the ALU result or loaded memory word.
    pub ds_wb_value: i32,
}
