//! Text rendering for the cycle trace, summary, and disassembly listing.
//!
//! Pure presentation: everything here formats state the core already
//! exposes through [`CycleSnapshot`], [`HaltSummary`], and the program
//! image. No simulation logic lives in this module.

use mipsim_core::common::constants::WORD_SIZE;
use mipsim_core::core::mem::ProgramImage;
use mipsim_core::core::pipeline::forward::{ActiveForwards, ForwardLink, ForwardPath};
use mipsim_core::core::pipeline::latches::FetchSlot;
use mipsim_core::isa::decode;
use mipsim_core::sim::snapshot::{CycleSnapshot, HaltSummary};
use mipsim_core::stats::SimStats;

/// Number of data memory words shown in each trace block.
const MEMORY_DISPLAY_WORDS: usize = 10;

/// Renders one `(from) to (to)` link, or `(none)`.
fn link_text(link: Option<&ForwardLink>) -> String {
    link.map_or_else(
        || "(none)".to_string(),
        |l| format!("({}) to ({})", l.from, l.to),
    )
}

/// Renders the IS/ID.IR latch: the raw word as four hex bytes, or the
/// zero word for NOP/squashed slots.
fn ir_text(slot: FetchSlot) -> String {
    match slot {
        FetchSlot::Word(w) if w != 0 => {
            let b = w.to_be_bytes();
            format!("<{:02X} {:02X} {:02X} {:02X}>", b[0], b[1], b[2], b[3])
        }
        _ => "<00 00 00 00>".to_string(),
    }
}

/// Appends the trace block for one cycle.
pub fn render_cycle(out: &mut String, snap: &CycleSnapshot, data_base: u32) {
    out.push_str(&format!(
        "****Cycle #{}***********************************************\n",
        snap.cycle
    ));
    out.push_str(&format!(
        "Current PC = {}:\n\n",
        snap.pc.wrapping_sub(WORD_SIZE)
    ));

    out.push_str("Pipeline Status:\n");
    out.push_str("* IF : <unknown>\n");
    out.push_str(&format!("* IS : {}\n", snap.slots.fetch2));
    out.push_str(&format!("* ID : {}\n", snap.slots.decode));
    out.push_str(&format!("* RF : {}\n", snap.slots.regfetch));
    out.push_str(&format!("* EX : {}\n", snap.slots.execute));
    out.push_str(&format!("* DF : {}\n", snap.slots.mem1));
    out.push_str(&format!("* DS : {}\n", snap.slots.mem2));
    out.push_str(&format!("* WB : {}\n\n", snap.slots.writeback));

    let stall_text = snap
        .stall
        .instr
        .as_ref()
        .map_or_else(|| "(none)".to_string(), ToString::to_string);
    out.push_str(&format!("Stall Instruction: {stall_text}\n\n"));

    out.push_str("Forwarded:\n");
    out.push_str(&format!(" Detected: {}\n", detected_text(&snap.forwards)));
    out.push_str(" Forwarding:\n");
    for path in ForwardPath::ALL {
        out.push_str(&format!(
            " * {} : {}\n",
            path.label(),
            link_text(snap.forwards.path(path))
        ));
    }
    out.push('\n');

    out.push_str("Pipeline Registers:\n");
    out.push_str(&format!("* IF/IS.NPC\t\t: {}\n", snap.latches.if_is_npc));
    out.push_str(&format!(
        "* IS/ID.IR\t\t: {}\n",
        ir_text(snap.slots.fetch2)
    ));
    out.push_str(&format!("* RF/EX.A\t\t: {}\n", snap.latches.rf_ex_a));
    out.push_str(&format!("* RF/EX.B\t\t: {}\n", snap.latches.rf_ex_b));
    out.push_str(&format!("* EX/DF.ALUout\t: {}\n", snap.latches.ex_df_alu));
    out.push_str(&format!("* EX/DF.B\t\t: {}\n", snap.latches.ex_df_b));
    out.push_str(&format!(
        "* DS/WB.ALUout-LMD\t: {}\n\n",
        snap.latches.ds_wb_value
    ));

    render_machine_state(out, &snap.registers, &snap.memory, data_base, &snap.stats);
}

/// Renders the advisory dependency line(s) detected in decode.
fn detected_text(forwards: &ActiveForwards) -> String {
    match (&forwards.detected[0], &forwards.detected[1]) {
        (Some(a), Some(b)) => format!(
            "({}) to ({})\n\t({}) to ({})",
            a.from, a.to, b.from, b.to
        ),
        (Some(a), None) => format!("({}) to ({})", a.from, a.to),
        (None, Some(b)) => format!("({}) to ({})", b.from, b.to),
        (None, None) => "(none)".to_string(),
    }
}

/// Appends registers, data memory, and the running stall/forward totals —
/// shared between every cycle block and the final summary.
pub fn render_machine_state(
    out: &mut String,
    registers: &[i32],
    memory: &[i32],
    data_base: u32,
    stats: &SimStats,
) {
    out.push_str("Integer registers:\n");
    for (i, value) in registers.iter().enumerate() {
        out.push_str(&format!("R{i}\t{value}\t"));
        if (i + 1) % 4 == 0 {
            out.push('\n');
        }
    }

    out.push_str("\nData memory:\n");
    for (i, value) in memory.iter().take(MEMORY_DISPLAY_WORDS).enumerate() {
        let addr = data_base + (i as u32) * WORD_SIZE;
        out.push_str(&format!("{addr}: {value}\n"));
    }

    out.push_str("\nTotal Stalls:\n");
    out.push_str(&format!("*Loads\t: {}\n", stats.stalls_load));
    out.push_str(&format!("*Branches: {}\n", stats.stalls_branch));
    out.push_str(&format!("*Other\t: {}\n\n", stats.stalls_other));

    out.push_str("Total Forwardings:\n");
    for path in ForwardPath::ALL {
        out.push_str(&format!(
            "* {} : {}\n",
            path.label(),
            stats.forward_count(path)
        ));
    }
    out.push('\n');
}

/// Appends the end-of-run summary.
pub fn render_summary(
    out: &mut String,
    summary: &HaltSummary,
    registers: &[i32],
    memory: &[i32],
    data_base: u32,
    stats: &SimStats,
) {
    out.push_str("**** Summary ************************************************\n\n");
    out.push_str(&format!("BREAK PC = {}\n\n", summary.break_pc));
    out.push_str(&format!(
        "Total Cycles Simulated = {}\n\n",
        summary.total_cycles
    ));
    render_machine_state(out, registers, memory, data_base, stats);
}

/// Groups a word's 32 bits as the 6-5-5-5-5-6 field layout.
fn grouped_bits(word: u32) -> String {
    let bits = format!("{word:032b}");
    let mut grouped = String::with_capacity(37);
    for (i, ch) in bits.chars().enumerate() {
        grouped.push(ch);
        if matches!(i, 5 | 10 | 15 | 20 | 25) {
            grouped.push(' ');
        }
    }
    grouped
}

/// Renders the disassembly-only listing for a program image.
///
/// Instructions are shown with their bit fields grouped, address, mnemonic,
/// and operand text; every word after the halt instruction is shown as an
/// ungrouped bit pattern with its signed decimal value.
pub fn render_disassembly(image: &ProgramImage) -> String {
    let mut out = String::new();
    let mut after_break = false;
    for (addr, word) in image.iter() {
        if after_break {
            out.push_str(&format!("{word:032b}\t{addr}\t{}\n", word as i32));
        } else {
            let instr = decode(word, addr);
            out.push_str(&format!(
                "{}\t{addr}\t{}\t{}\n",
                grouped_bits(word),
                instr.op.mnemonic(),
                mipsim_core::isa::disasm::operands(&instr)
            ));
            after_break = instr.is_halt();
        }
    }
    out
}
