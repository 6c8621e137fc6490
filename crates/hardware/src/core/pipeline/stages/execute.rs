//! EX: operand selection, bypass substitution, and execution.

use crate::core::Cpu;
use crate::core::pipeline::forward;
use crate::core::units::alu;

/// Advances EX from RF, resolves operands, and executes.
///
/// Base operand values before any bypass: the RF/EX latches for
/// register-register operations, the immediate on the right for the
/// immediate family, the shift amount (left) and the current rt register
/// value (right) for shifts, and the offset on the right for loads and
/// stores. An active bypass substitution always overrides the base value.
pub fn execute_stage(cpu: &mut Cpu) {
    cpu.slots.execute = cpu.slots.regfetch.clone();
    forward::ex_bypass(cpu);

    let instr = cpu.slots.execute.clone();
    let mut left = cpu.latches.rf_ex_a;
    let mut right = cpu.latches.rf_ex_b;
    if instr.op.is_imm_alu() {
        right = instr.imm;
    } else if instr.op.is_shift() {
        left = instr.shamt as i32;
        right = cpu.regs.read(instr.rt);
    } else if instr.is_load() || instr.is_store() {
        right = instr.offset;
    }

    if let Some(value) = cpu.values.ex_left {
        left = value;
    }
    if let Some(value) = cpu.values.ex_right {
        right = value;
    }

    let outcome = alu::execute(&instr, left, right);
    cpu.latches.ex_df_alu = outcome.value;
    cpu.latches.ex_df_b = cpu.latches.rf_ex_b;
    cpu.take_branch = outcome.taken;
}
