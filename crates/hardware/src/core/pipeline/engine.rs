//! The per-cycle stage scheduler.
//!
//! Each simulated cycle updates the stages in **strict reverse pipeline
//! order** — writeback first, fetch last — so every stage reads only latch
//! values produced in a previous cycle, never a value another stage is
//! overwriting in the same cycle. This ordering is what makes the sequential
//! simulation equivalent to simultaneous hardware stages without
//! double-buffering any state; it is an ordering contract, not an
//! optimization, and must never be reordered or parallelized.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::stages;

/// Advances the pipeline by one clock cycle.
///
/// Returns `Some(pc)` — the program counter of the halt instruction — the
/// cycle BREAK is observed leaving writeback; the pipeline state is left
/// untouched that cycle. Returns `None` while the simulation continues.
///
/// # Errors
///
/// Propagates the fatal addressing faults ([`SimError`]) raised by the
/// fetch and memory stages.
pub fn tick(cpu: &mut Cpu) -> Result<Option<u32>, SimError> {
    if cpu.slots.writeback.is_halt() {
        tracing::debug!(pc = cpu.slots.writeback.pc, "halt committed");
        return Ok(Some(cpu.slots.writeback.pc));
    }

    stages::writeback::writeback_stage(cpu);
    stages::memory::mem2_stage(cpu)?;
    stages::memory::mem1_stage(cpu);
    stages::execute::execute_stage(cpu);
    stages::regfetch::regfetch_stage(cpu);
    stages::decode::decode_stage(cpu);
    stages::fetch::fetch2_stage(cpu);
    stages::fetch::fetch1_stage(cpu)?;

    Ok(None)
}
