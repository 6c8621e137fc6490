//! The 8-stage instruction pipeline.
//!
//! This module contains the pipeline implementation:
//! 1. **Engine:** The per-cycle driver that updates every stage in strict
//!    reverse pipeline order.
//! 2. **Latches:** Inter-stage values (IF/IS.NPC, IS/ID.IR, RF/EX.A/B,
//!    EX/DF.ALUout/B, DS/WB.ALUout-LMD) and the stage slots.
//! 3. **Hazards:** Decode-stage lookahead, load-use stalls, and advisory
//!    dependency reporting.
//! 4. **Forwarding:** The execute-stage and memory-stage bypass networks.
//! 5. **Stages:** The individual stage-update steps.

/// The per-cycle reverse-order stage scheduler.
pub mod engine;
/// The forwarding (bypass) network.
pub mod forward;
/// Hazard detection and stall bookkeeping.
pub mod hazards;
/// Stage slots and inter-stage latches.
pub mod latches;
/// Pipeline stage implementations.
pub mod stages;
