//! IF and IS: the two raw-word fetch stages.
//!
//! Both stages are frozen while a stall is active; the stall countdown and
//! per-cause stall accounting happen here, in the slot the fetch would have
//! used.

use crate::common::SimError;
use crate::common::constants::WORD_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::FetchSlot;

/// IS: shifts the previously fetched word forward and latches it for decode.
pub fn fetch2_stage(cpu: &mut Cpu) {
    if cpu.stall.active() {
        return;
    }
    cpu.slots.fetch2 = cpu.slots.fetch1;
    cpu.latches.is_id_ir = cpu.slots.fetch2.word();
}

/// IF: fetches the word at the program counter and advances it.
///
/// On non-stalled cycles this also runs the decode-stage hazard lookahead
/// on the instruction that just entered ID. On stalled cycles the fetch is
/// skipped, the countdown decrements, and the stalled cycle is charged to
/// its cause.
///
/// # Errors
///
/// [`SimError::FetchOutOfRange`] when the program counter has run past the
/// program image.
pub fn fetch1_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    if cpu.stall.active() {
        cpu.stall.count -= 1;
        if cpu.stall.count == 0 {
            cpu.stall.instr = None;
        }
        cpu.stats.record_stall(cpu.stall.cause);
        return Ok(());
    }

    let word = cpu.program.fetch(cpu.pc)?;
    cpu.slots.fetch1 = FetchSlot::Word(word);
    cpu.pc += WORD_SIZE;
    cpu.latches.if_is_npc = cpu.pc;

    hazards::check_decode_hazards(cpu);
    Ok(())
}
