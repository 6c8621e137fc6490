//! WB stage: register-file commit.

use crate::core::Cpu;
use crate::isa::WriteTarget;

/// Advances WB from DS and commits the DS/WB latch value to the declared
/// write target. Writes to register 0 are discarded by the register file.
pub fn writeback_stage(cpu: &mut Cpu) {
    cpu.slots.writeback = cpu.slots.mem2.clone();

    let instr = &cpu.slots.writeback;
    let value = cpu.latches.ds_wb_value;
    match instr.writes {
        WriteTarget::Rd => cpu.regs.write(instr.rd, value),
        WriteTarget::Rt => cpu.regs.write(instr.rt, value),
        WriteTarget::None => {}
    }
}
