//! RF: register operand fetch.

use crate::core::Cpu;
use crate::isa::Instruction;

/// Advances RF from ID — inserting a bubble instead while a load-use stall
/// is pending — and reads the base register-file operands into the RF/EX
/// latches. Loads and stores read their base register on the left; everyone
/// else reads rs.
pub fn regfetch_stage(cpu: &mut Cpu) {
    if cpu.stall.active() {
        cpu.slots.regfetch = Instruction::bubble();
    } else {
        cpu.slots.regfetch = cpu.slots.decode.clone();
    }

    let instr = &cpu.slots.regfetch;
    let left_reg = if instr.is_load() || instr.is_store() {
        instr.base
    } else {
        instr.rs
    };
    cpu.latches.rf_ex_a = cpu.regs.read(left_reg);
    cpu.latches.rf_ex_b = cpu.regs.read(instr.rt);
}
