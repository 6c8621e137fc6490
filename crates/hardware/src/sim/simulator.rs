//! The top-level simulation driver.
//!
//! Owns the CPU and the cycle counter and runs the engine until the halt
//! instruction commits or a fatal addressing fault surfaces.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::mem::{DataMemory, ProgramImage};
use crate::core::pipeline::engine;
use crate::sim::loader::LoadedProgram;
use crate::sim::snapshot::{CycleSnapshot, HaltSummary, StepOutcome};

/// The simulation driver: CPU state plus the cycle counter.
#[derive(Debug)]
pub struct Simulator {
    /// The complete execution context.
    pub cpu: Cpu,
    cycle: u64,
}

impl Simulator {
    /// Creates a simulator over a parsed image and preloaded data memory.
    pub fn new(image: ProgramImage, memory: DataMemory) -> Self {
        Self {
            cpu: Cpu::new(image, memory),
            cycle: 0,
        }
    }

    /// Creates a simulator from a loader result.
    pub fn from_program(program: LoadedProgram) -> Self {
        Self::new(program.image, program.memory)
    }

    /// The number of the next cycle to simulate.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates fatal addressing faults from the engine; the simulation
    /// must not be stepped further after an error.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        match engine::tick(&mut self.cpu)? {
            Some(break_pc) => Ok(StepOutcome::Halted(HaltSummary {
                break_pc,
                total_cycles: self.cycle.saturating_sub(1),
            })),
            None => {
                let snap = Box::new(self.snapshot());
                self.cycle += 1;
                Ok(StepOutcome::Cycle(snap))
            }
        }
    }

    /// Runs to completion, handing each cycle's snapshot to `on_cycle`.
    ///
    /// # Errors
    ///
    /// Propagates fatal addressing faults from the engine.
    pub fn run(
        &mut self,
        mut on_cycle: impl FnMut(&CycleSnapshot),
    ) -> Result<HaltSummary, SimError> {
        loop {
            match self.step()? {
                StepOutcome::Cycle(snap) => on_cycle(&snap),
                StepOutcome::Halted(summary) => return Ok(summary),
            }
        }
    }

    /// Captures the observable state at the end of the current cycle.
    fn snapshot(&self) -> CycleSnapshot {
        CycleSnapshot {
            cycle: self.cycle,
            pc: self.cpu.pc,
            slots: self.cpu.slots.clone(),
            stall: self.cpu.stall.clone(),
            forwards: self.cpu.forwards.clone(),
            latches: self.cpu.latches,
            registers: self.cpu.regs.snapshot(),
            memory: self.cpu.mem.words().to_vec(),
            stats: self.cpu.stats.clone(),
        }
    }
}
