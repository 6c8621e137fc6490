//! The execution unit.
//!
//! Computes the ALU result, effective address, or branch decision for one
//! instruction, given operands that have already had any active bypass
//! substitution applied. Branch resolution is deliberately late: the taken
//! signal produced here is acted on by the engine one cycle later, when the
//! branch leaves EX.

use crate::common::constants::WORD_SIZE;
use crate::isa::{Instruction, Opcode};

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecOutcome {
    /// ALU result, effective address, or branch/jump target.
    pub value: i32,
    /// Whether a branch/jump signaled taken. Always true for jumps, the
    /// comparison outcome for branches, false otherwise.
    pub taken: bool,
}

/// Evaluates a conditional branch on already-bypassed operands.
fn branch_taken(op: Opcode, left: i32, right: i32) -> bool {
    match op {
        Opcode::Bne => left != right,
        Opcode::Beq => left == right,
        Opcode::Bgtz => left > 0,
        Opcode::Bgez => left >= 0,
        Opcode::Bltz => left < 0,
        // Blez is the only remaining branch opcode.
        _ => left <= 0,
    }
}

/// Executes `instr` on resolved operands.
///
/// All arithmetic wraps. The unsigned variants (ADDU, SUBU, ADDIU) differ
/// from their signed counterparts only in overflow trapping on real
/// hardware, which this simulator does not model, so both families
/// reinterpret the same bit patterns and wrap. Shift amounts use the low
/// 5 bits of the left operand. Branches return `pc + 4 + offset` alongside
/// the taken signal; J returns its decoded target; JR returns the (bypassed)
/// register value in the left operand as the target.
pub fn execute(instr: &Instruction, left: i32, right: i32) -> ExecOutcome {
    let value = match instr.op {
        Opcode::Add | Opcode::Addi | Opcode::Lw | Opcode::Sw => left.wrapping_add(right),
        Opcode::Addu | Opcode::Addiu => {
            ((left as u32).wrapping_add(right as u32)) as i32
        }
        Opcode::Sub => left.wrapping_sub(right),
        Opcode::Subu => ((left as u32).wrapping_sub(right as u32)) as i32,
        Opcode::And => left & right,
        Opcode::Or => left | right,
        Opcode::Xor => left ^ right,
        Opcode::Nor => !(left | right),
        Opcode::Sll => right.wrapping_shl(left as u32 & 0x1F),
        Opcode::Sra => right.wrapping_shr(left as u32 & 0x1F),
        Opcode::Srl => ((right as u32).wrapping_shr(left as u32 & 0x1F)) as i32,
        Opcode::Slt | Opcode::Slti => i32::from(left < right),
        Opcode::J => {
            return ExecOutcome {
                value: instr.target as i32,
                taken: true,
            };
        }
        Opcode::Jr => {
            return ExecOutcome {
                value: left,
                taken: true,
            };
        }
        op if op.is_branch() => {
            return ExecOutcome {
                value: (instr.pc as i32)
                    .wrapping_add(WORD_SIZE as i32)
                    .wrapping_add(instr.offset),
                taken: branch_taken(op, left, right),
            };
        }
        // NOP, BREAK, and bubbles produce nothing.
        _ => 0,
    };
    ExecOutcome {
        value,
        taken: false,
    }
}
