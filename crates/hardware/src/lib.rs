//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator for a scalar, 8-stage
//! pipelined MIPS-like processor with the following:
//! 1. **Core:** The stage scheduler, pipeline latches, hazard detection, and the
//!    multi-path forwarding network (IF, IS, ID, RF, EX, DF, DS, WB stages).
//! 2. **ISA:** Decoding, operand/read/write metadata, and disassembly for the
//!    supported MIPS subset (arithmetic, logical, shift, branch, jump, load/store, BREAK).
//! 3. **Memory:** A flat, bounds-checked word-addressed data memory.
//! 4. **Simulation:** Bitstream program loader, per-cycle snapshots, and
//!    statistics collection (stalls by cause, forwards by path).

/// Common types and constants (addresses, registers, errors).
pub mod common;
/// Simulator configuration (base addresses, data memory size).
pub mod config;
/// CPU core (pipeline engine, stages, hazards, forwarding, ALU, memory).
pub mod core;
/// Instruction set (opcodes, decode, instruction metadata, disassembly).
pub mod isa;
/// Program loading, the simulation driver, and cycle snapshots.
pub mod sim;
/// Simulation statistics collection.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, stage slots, latches, and stats.
pub use crate::core::Cpu;
/// Top-level simulation driver; construct with `Simulator::new`.
pub use crate::sim::simulator::Simulator;
