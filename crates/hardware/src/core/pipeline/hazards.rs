//! Decode-stage hazard lookahead.
//!
//! Every non-stalled cycle, the instruction that just entered decode is
//! checked against everything ahead of it in the pipeline. A load sitting in
//! register-fetch whose destination the decoded instruction reads is a
//! load-use hazard and stalls the front of the pipeline; any other producer
//! match is recorded as an advisory dependency for the cycle trace. Only the
//! nearest producer per operand matters — the scan stops at the first match.

use crate::common::constants::LOAD_USE_STALL_CYCLES;
use crate::core::Cpu;
use crate::core::pipeline::forward::ForwardLink;
use crate::isa::Instruction;

/// Why the front of the pipeline is stalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StallCause {
    /// Load-use hazard.
    Load,
    /// Taken branch or jump.
    Branch,
    /// Any other cause.
    Other,
    /// Not stalled.
    #[default]
    None,
}

/// Stall bookkeeping: the cause, the remaining countdown, and the
/// instruction held back in decode.
#[derive(Debug, Clone, Default)]
pub struct StallState {
    /// Why the stall was inserted.
    pub cause: StallCause,
    /// Cycles left before the stalled instruction may advance.
    pub count: u32,
    /// The instruction waiting in decode, while a stall is active.
    pub instr: Option<Instruction>,
}

impl StallState {
    /// True while a stall is in effect.
    pub const fn active(&self) -> bool {
        self.count > 0
    }
}

/// The five stages ahead of decode, nearest first, paired with whether the
/// stage is register-fetch (where a load producer forces a stall).
fn producers(cpu: &Cpu) -> [(&Instruction, bool); 5] {
    [
        (&cpu.slots.regfetch, true),
        (&cpu.slots.execute, false),
        (&cpu.slots.mem1, false),
        (&cpu.slots.mem2, false),
        (&cpu.slots.writeback, false),
    ]
}

/// Runs the decode-stage lookahead for the instruction currently in decode.
///
/// Operands are checked in fixed priority order — base register first, then
/// rs, then rt — skipping register 0, and once a stall is raised no further
/// dependencies are recorded this cycle. Advisory dependencies fill at most
/// two slots, first found first.
pub fn check_decode_hazards(cpu: &mut Cpu) {
    cpu.forwards.detected = [None, None];
    cpu.stall.cause = StallCause::None;

    let consumer = cpu.slots.decode.clone();
    let mut stalled = false;

    if consumer.reads.uses_base() {
        check_operand(cpu, &consumer, consumer.base, &mut stalled);
    }
    if consumer.reads.uses_rs() && !stalled {
        check_operand(cpu, &consumer, consumer.rs, &mut stalled);
    }
    if consumer.reads.uses_rt() && !stalled {
        check_operand(cpu, &consumer, consumer.rt, &mut stalled);
    }
}

/// Scans the later stages for the first producer of `reg` and either raises
/// a load-use stall or records an advisory dependency.
fn check_operand(cpu: &mut Cpu, consumer: &Instruction, reg: u32, stalled: &mut bool) {
    if reg == 0 {
        return;
    }

    let producer = producers(cpu)
        .into_iter()
        .find(|(instr, _)| instr.writes_to(reg))
        .map(|(instr, in_regfetch)| (instr.clone(), in_regfetch));

    let Some((producer, in_regfetch)) = producer else {
        return;
    };

    if producer.is_load() && in_regfetch {
        // Load result is not available in time for any bypass: hold the
        // consumer in decode until the load clears both memory stages.
        tracing::trace!(consumer = %consumer, producer = %producer, "load-use stall");
        cpu.stall = StallState {
            cause: StallCause::Load,
            count: LOAD_USE_STALL_CYCLES,
            instr: Some(consumer.clone()),
        };
        cpu.forwards.detected = [None, None];
        *stalled = true;
        return;
    }

    let link = ForwardLink {
        from: producer,
        to: consumer.clone(),
    };
    if cpu.forwards.detected[0].is_none() {
        cpu.forwards.detected[0] = Some(link);
    } else {
        cpu.forwards.detected[1] = Some(link);
    }
}
