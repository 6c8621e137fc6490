//! DF and DS: the two memory stages.
//!
//! DS is where loads and stores touch data memory; DF is where the
//! store-data bypass runs and where a taken branch (signaled by EX last
//! cycle) squashes the younger half of the pipeline.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::forward;

/// DS: advances from DF and performs the memory side effect.
///
/// A store writes its (possibly bypassed) data register value to the
/// effective address carried in the DF→DS working value; a load replaces
/// that value with the memory word. Either way the result lands in the
/// DS/WB latch for commit next cycle.
///
/// # Errors
///
/// [`SimError::DataAccessFault`] when the effective address falls outside
/// the configured data memory.
pub fn mem2_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    cpu.slots.mem2 = cpu.slots.mem1.clone();

    let instr = &cpu.slots.mem2;
    if instr.is_store() {
        let data = cpu
            .values
            .store_data
            .unwrap_or_else(|| cpu.regs.read(instr.rt));
        cpu.mem.write(cpu.df_ds as u32, data)?;
        cpu.df_ds = 0;
    } else if instr.is_load() {
        cpu.df_ds = cpu.mem.read(cpu.df_ds as u32)?;
    }
    cpu.latches.ds_wb_value = cpu.df_ds;
    Ok(())
}

/// DF: advances from EX, runs the store-data bypass, and resolves a taken
/// branch.
///
/// Branch resolution is deliberately one cycle after EX: when the taken
/// signal is set, every younger in-flight instruction is squashed and fetch
/// is redirected to the target latched in EX/DF.ALUout.
pub fn mem1_stage(cpu: &mut Cpu) {
    cpu.slots.mem1 = cpu.slots.execute.clone();
    forward::mem_bypass(cpu);

    if cpu.take_branch {
        cpu.take_branch = false;
        cpu.squash_younger();
    }
    cpu.df_ds = cpu.latches.ex_df_alu;
}
