//! The forwarding (bypass) network.
//!
//! Two independent checks, both recomputed from scratch every cycle:
//!
//! - **Execute-stage bypass** — for the instruction entering EX, each operand
//!   it reads is matched against the three stages ahead (DF, DS, WB) nearest
//!   first; the first match supplies the operand value in place of the stale
//!   register-fetch latch.
//! - **Memory-stage bypass** — for a store entering DF, its store-data
//!   register is matched against DS then WB, because the producing
//!   instruction may not have committed when the store writes memory.
//!
//! Forwarding exists precisely so most hazards cost nothing; only the
//! load-use case (see [`super::hazards`]) is severe enough to stall.

use crate::core::Cpu;
use crate::isa::Instruction;

/// A forwarding path, named by the source and destination pipeline latches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardPath {
    /// EX/DF latch to RF/EX latch (producer one stage ahead of EX).
    ExDfToRfEx,
    /// DF/DS latch to EX/DF latch (store-data, producer one stage ahead).
    DfDsToExDf,
    /// DF/DS latch to RF/EX latch (producer two stages ahead of EX).
    DfDsToRfEx,
    /// DS/WB latch to EX/DF latch (store-data, producer two stages ahead).
    DsWbToExDf,
    /// DS/WB latch to RF/EX latch (producer three stages ahead of EX).
    DsWbToRfEx,
}

impl ForwardPath {
    /// All paths, in display order.
    pub const ALL: [Self; 5] = [
        Self::ExDfToRfEx,
        Self::DfDsToExDf,
        Self::DfDsToRfEx,
        Self::DsWbToExDf,
        Self::DsWbToRfEx,
    ];

    /// Human-readable path label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExDfToRfEx => "EX/DF -> RF/EX",
            Self::DfDsToExDf => "DF/DS -> EX/DF",
            Self::DfDsToRfEx => "DF/DS -> RF/EX",
            Self::DsWbToExDf => "DS/WB -> EX/DF",
            Self::DsWbToRfEx => "DS/WB -> RF/EX",
        }
    }

    /// Index into per-path tables.
    pub const fn index(self) -> usize {
        match self {
            Self::ExDfToRfEx => 0,
            Self::DfDsToExDf => 1,
            Self::DfDsToRfEx => 2,
            Self::DsWbToExDf => 3,
            Self::DsWbToRfEx => 4,
        }
    }
}

/// One active producer→consumer forwarding (or advisory dependency) link.
#[derive(Debug, Clone)]
pub struct ForwardLink {
    /// The producing instruction.
    pub from: Instruction,
    /// The consuming instruction.
    pub to: Instruction,
}

/// Per-cycle forwarding observability: the advisory dependencies detected in
/// decode and the links active on each forwarding path.
#[derive(Debug, Clone, Default)]
pub struct ActiveForwards {
    /// Up to two decode-stage advisory dependencies (informational only).
    pub detected: [Option<ForwardLink>; 2],
    /// The link active on each path this cycle, indexed by [`ForwardPath`].
    pub paths: [Option<ForwardLink>; 5],
}

impl ActiveForwards {
    /// The link active on `path`, if any.
    pub fn path(&self, path: ForwardPath) -> Option<&ForwardLink> {
        self.paths[path.index()].as_ref()
    }
}

/// The operand substitutions produced by the bypass checks.
///
/// At most one substitution is ever active per operand side per cycle: the
/// nearest producing stage wins and the scan stops there.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardValues {
    /// Replacement for the left (base/rs) ALU operand.
    pub ex_left: Option<i32>,
    /// Replacement for the right (rt) ALU operand.
    pub ex_right: Option<i32>,
    /// Replacement for a store's data register value, consumed one cycle
    /// later when the store writes memory in DS.
    pub store_data: Option<i32>,
}

/// Which ALU operand slot a bypassed value lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperandSide {
    Left,
    Right,
}

/// The producing stages visible from EX, nearest first, with the forwarding
/// path each one uses.
const EX_SOURCES: [ForwardPath; 3] = [
    ForwardPath::ExDfToRfEx,
    ForwardPath::DfDsToRfEx,
    ForwardPath::DsWbToRfEx,
];

/// Runs the execute-stage bypass for the instruction entering EX.
///
/// Checks the base register, rs, and rt operands (rt is skipped for stores,
/// whose second register is data rather than an ALU operand). Each activated
/// path is counted in the statistics and recorded for the cycle trace.
pub fn ex_bypass(cpu: &mut Cpu) {
    for path in EX_SOURCES {
        cpu.forwards.paths[path.index()] = None;
    }
    cpu.values.ex_left = None;
    cpu.values.ex_right = None;

    let consumer = cpu.slots.execute.clone();
    if consumer.reads.uses_base() {
        ex_check_operand(cpu, &consumer, consumer.base, OperandSide::Left);
    }
    if consumer.reads.uses_rs() {
        ex_check_operand(cpu, &consumer, consumer.rs, OperandSide::Left);
    }
    if consumer.reads.uses_rt() && !consumer.is_store() {
        ex_check_operand(cpu, &consumer, consumer.rt, OperandSide::Right);
    }
}

/// Finds the nearest producer of `reg` ahead of EX and records the bypass.
fn ex_check_operand(cpu: &mut Cpu, consumer: &Instruction, reg: u32, side: OperandSide) {
    if reg == 0 {
        return;
    }

    let stages = [&cpu.slots.mem1, &cpu.slots.mem2, &cpu.slots.writeback];
    let Some(pos) = stages.iter().position(|instr| instr.writes_to(reg)) else {
        return;
    };
    let producer = stages[pos].clone();
    let path = EX_SOURCES[pos];

    // DF holds this cycle's freshly computed result; DS holds its latch; a
    // producer already in WB has just committed to the register file.
    let value = match path {
        ForwardPath::ExDfToRfEx => cpu.df_ds,
        ForwardPath::DfDsToRfEx => cpu.latches.ds_wb_value,
        _ => read_committed(cpu, &producer),
    };

    tracing::trace!(path = path.label(), value, consumer = %consumer, "forward to EX");
    cpu.forwards.paths[path.index()] = Some(ForwardLink {
        from: producer,
        to: consumer.clone(),
    });
    cpu.stats.record_forward(path);
    match side {
        OperandSide::Left => cpu.values.ex_left = Some(value),
        OperandSide::Right => cpu.values.ex_right = Some(value),
    }
}

/// The producing stages visible from DF for store data, nearest first.
const MEM_SOURCES: [ForwardPath; 2] = [ForwardPath::DfDsToExDf, ForwardPath::DsWbToExDf];

/// Runs the memory-stage bypass for a store entering DF.
///
/// Only the store-data register (rt) needs this path; every other operand
/// was already resolved by the time the store left EX.
pub fn mem_bypass(cpu: &mut Cpu) {
    for path in MEM_SOURCES {
        cpu.forwards.paths[path.index()] = None;
    }
    cpu.values.store_data = None;

    let consumer = cpu.slots.mem1.clone();
    if !consumer.is_store() || consumer.rt == 0 {
        return;
    }

    let stages = [&cpu.slots.mem2, &cpu.slots.writeback];
    let Some(pos) = stages.iter().position(|instr| instr.writes_to(consumer.rt)) else {
        return;
    };
    let producer = stages[pos].clone();
    let path = MEM_SOURCES[pos];

    let value = match path {
        ForwardPath::DfDsToExDf => cpu.latches.ds_wb_value,
        _ => read_committed(cpu, &producer),
    };

    tracing::trace!(path = path.label(), value, consumer = %consumer, "forward store data");
    cpu.forwards.paths[path.index()] = Some(ForwardLink {
        from: producer,
        to: consumer,
    });
    cpu.stats.record_forward(path);
    cpu.values.store_data = Some(value);
}

/// Reads a WB-stage producer's value as just committed to the register file.
fn read_committed(cpu: &Cpu, producer: &Instruction) -> i32 {
    producer
        .dest_reg()
        .map_or(0, |reg| cpu.regs.read(reg))
}
