//! Operand text rendering for decoded instructions.
//!
//! Produces the operand portion of a disassembly line (the mnemonic comes
//! from [`Opcode::mnemonic`]). Formats follow the classic listing style:
//! `R3, R1, R2` / `R1, R2, #10` / `R1, 0(R2)` / `#640`.
//!
//! [`Opcode::mnemonic`]: crate::isa::instruction::Opcode::mnemonic

use crate::isa::instruction::{Instruction, Opcode};

/// Renders the operand text for `instr`.
///
/// NOP, BREAK, and bubbles render as the empty string.
pub fn operands(instr: &Instruction) -> String {
    let op = instr.op;
    if op.is_three_reg() {
        return format!("R{}, R{}, R{}", instr.rd, instr.rs, instr.rt);
    }
    if op.is_imm_alu() {
        return format!("R{}, R{}, #{}", instr.rt, instr.rs, instr.imm);
    }
    if op.is_shift() {
        return format!("R{}, R{}, #{}", instr.rd, instr.rt, instr.shamt);
    }
    match op {
        Opcode::Bltz | Opcode::Bgez | Opcode::Blez | Opcode::Bgtz => {
            format!("R{}, #{}", instr.rs, instr.offset)
        }
        Opcode::Beq | Opcode::Bne => {
            format!("R{}, R{}, #{}", instr.rs, instr.rt, instr.offset)
        }
        Opcode::Lw | Opcode::Sw => {
            format!("R{}, {}(R{})", instr.rt, instr.offset, instr.base)
        }
        Opcode::Jr => format!("R{}", instr.rs),
        Opcode::J => format!("#{}", instr.target),
        _ => String::new(),
    }
}
