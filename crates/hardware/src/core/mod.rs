//! CPU core: the execution context and the pipeline that drives it.

/// Instruction and data memory.
pub mod mem;
/// The 8-stage pipeline (engine, stages, latches, hazards, forwarding).
pub mod pipeline;
/// Execution units (ALU/branch evaluation).
pub mod units;

use crate::common::RegisterFile;
use crate::common::constants::BRANCH_STALL_PENALTY;
use crate::core::mem::{DataMemory, ProgramImage};
use crate::core::pipeline::forward::{ActiveForwards, ForwardValues};
use crate::core::pipeline::hazards::StallState;
use crate::core::pipeline::latches::{FetchSlot, PipelineLatches, StageSlots};
use crate::isa::Instruction;
use crate::stats::SimStats;

/// The complete mutable execution context.
///
/// One instance owns everything a cycle touches: the register file, data
/// memory, program image, the 8 stage slots, the latches, and the transient
/// hazard/forwarding state. It is passed explicitly through the per-cycle
/// update path; there are no process-wide singletons. All mutation happens
/// inside the single-threaded engine tick.
#[derive(Debug)]
pub struct Cpu {
    /// Address of the next word to fetch.
    pub pc: u32,
    /// The loaded program image.
    pub program: ProgramImage,
    /// The 32 general-purpose registers.
    pub regs: RegisterFile,
    /// Flat data memory.
    pub mem: DataMemory,
    /// The instruction occupying each pipeline stage.
    pub slots: StageSlots,
    /// Inter-stage latch values.
    pub latches: PipelineLatches,
    /// The DF → DS working value: effective address in, load result out.
    pub df_ds: i32,
    /// Branch-taken signal raised in EX, consumed one cycle later at the
    /// EX → DF boundary.
    pub take_branch: bool,
    /// Stall cause, countdown, and the held-back instruction.
    pub stall: StallState,
    /// Per-cycle forwarding links for the cycle trace.
    pub forwards: ActiveForwards,
    /// Per-cycle bypassed operand values.
    pub values: ForwardValues,
    /// Running stall and forward counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with an empty pipeline, fetching from the image base.
    pub fn new(program: ProgramImage, mem: DataMemory) -> Self {
        Self {
            pc: program.base(),
            program,
            regs: RegisterFile::new(),
            mem,
            slots: StageSlots::default(),
            latches: PipelineLatches::default(),
            df_ds: 0,
            take_branch: false,
            stall: StallState::default(),
            forwards: ActiveForwards::default(),
            values: ForwardValues::default(),
            stats: SimStats::default(),
        }
    }

    /// Squashes every instruction younger than a resolved-taken branch and
    /// redirects fetch to its target.
    ///
    /// Called at the EX → DF boundary, before the younger stages shift this
    /// cycle: the register-fetch through fetch slots become bubbles, their
    /// latches are cleared, and the fixed branch penalty is charged.
    pub(crate) fn squash_younger(&mut self) {
        let target = self.latches.ex_df_alu as u32;
        tracing::trace!(
            branch_target = target,
            "taken branch, squashing younger instructions"
        );
        self.pc = target;
        self.latches.rf_ex_a = 0;
        self.latches.rf_ex_b = 0;
        self.latches.ex_df_b = 0;
        self.slots.regfetch = Instruction::bubble();
        self.slots.decode = Instruction::bubble();
        self.slots.fetch2 = FetchSlot::Bubble;
        self.slots.fetch1 = FetchSlot::Bubble;
        self.stats.stalls_branch += BRANCH_STALL_PENALTY;
    }
}
