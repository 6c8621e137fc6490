//! Global system constants.
//!
//! Machine-geometry and pipeline-policy constants used across the simulator.
//! Addresses that vary per program image (text base, data base, memory size)
//! live in [`crate::config::Config`] instead.

/// Size of one machine word in bytes. Instructions and data words are both
/// one word wide, and all addresses advance in word-size steps.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose integer registers.
pub const NUM_REGISTERS: usize = 32;

/// Number of pipeline stages (IF, IS, ID, RF, EX, DF, DS, WB).
pub const STAGE_COUNT: usize = 8;

/// Stall cycles inserted for a load-use hazard.
///
/// An instruction in decode that reads the destination of a load sitting in
/// register-fetch must wait until the load has passed both memory stages.
pub const LOAD_USE_STALL_CYCLES: u32 = 2;

/// Stall cycles charged when a taken branch or jump squashes the younger
/// in-flight instructions (one per squashed fetch/decode/register-fetch slot).
pub const BRANCH_STALL_PENALTY: u64 = 4;
