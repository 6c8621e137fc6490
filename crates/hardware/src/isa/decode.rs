//! Instruction decoder.
//!
//! Turns a 32-bit instruction word into an [`Instruction`] record: the
//! operation, its operand fields, and the read/write metadata that drives
//! hazard detection and forwarding. Decoding is pure and never fails:
//! unrecognized opcode/funct combinations degrade silently to NOP.

use crate::isa::instruction::{Format, Instruction, InstructionBits, Opcode, ReadSet, WriteTarget};
use crate::isa::opcodes::{
    FUNCT_ADD, FUNCT_ADDU, FUNCT_AND, FUNCT_BREAK, FUNCT_JR, FUNCT_NOR, FUNCT_OR, FUNCT_SLL,
    FUNCT_SLT, FUNCT_SRA, FUNCT_SRL, FUNCT_SUB, FUNCT_SUBU, FUNCT_XOR, OP_ADDI, OP_ADDIU, OP_BEQ,
    OP_BGTZ, OP_BLEZ, OP_BNE, OP_J, OP_LW, OP_REGIMM, OP_SLTI, OP_SPECIAL, OP_SW, RT_BGEZ,
    RT_BLTZ,
};

/// Selects the operation and format for a word.
///
/// Opcode 0 dispatches on the function code; the all-zero word is NOP rather
/// than `SLL R0, R0, 0`. Anything unrecognized is NOP.
fn select_op(word: u32) -> (Opcode, Format) {
    match word.op() {
        OP_SPECIAL => {
            let op = match word.funct() {
                FUNCT_SLL => {
                    if word == 0 {
                        Opcode::Nop
                    } else {
                        Opcode::Sll
                    }
                }
                FUNCT_SRL => Opcode::Srl,
                FUNCT_SRA => Opcode::Sra,
                FUNCT_JR => Opcode::Jr,
                FUNCT_BREAK => Opcode::Break,
                FUNCT_ADD => Opcode::Add,
                FUNCT_ADDU => Opcode::Addu,
                FUNCT_SUB => Opcode::Sub,
                FUNCT_SUBU => Opcode::Subu,
                FUNCT_AND => Opcode::And,
                FUNCT_OR => Opcode::Or,
                FUNCT_XOR => Opcode::Xor,
                FUNCT_NOR => Opcode::Nor,
                FUNCT_SLT => Opcode::Slt,
                _ => Opcode::Nop,
            };
            (op, Format::Register)
        }
        OP_REGIMM => {
            let op = match word.rt() {
                RT_BLTZ => Opcode::Bltz,
                RT_BGEZ => Opcode::Bgez,
                _ => Opcode::Nop,
            };
            (op, Format::Immediate)
        }
        OP_J => (Opcode::J, Format::Jump),
        OP_BEQ => (Opcode::Beq, Format::Immediate),
        OP_BNE => (Opcode::Bne, Format::Immediate),
        OP_BLEZ => (Opcode::Blez, Format::Immediate),
        OP_BGTZ => (Opcode::Bgtz, Format::Immediate),
        OP_ADDI => (Opcode::Addi, Format::Immediate),
        OP_ADDIU => (Opcode::Addiu, Format::Immediate),
        OP_SLTI => (Opcode::Slti, Format::Immediate),
        OP_LW => (Opcode::Lw, Format::Immediate),
        OP_SW => (Opcode::Sw, Format::Immediate),
        _ => (Opcode::Nop, Format::Immediate),
    }
}

/// Decodes one instruction word fetched at `pc`.
///
/// Every recognized operation is stamped with its exhaustive `reads`/`writes`
/// metadata; branches and jumps write nothing. Branch offsets and jump
/// targets are converted from word units to byte units here, so downstream
/// consumers never shift again.
pub fn decode(word: u32, pc: u32) -> Instruction {
    let (op, format) = select_op(word);
    let mut instr = Instruction {
        op,
        format,
        pc,
        ..Instruction::default()
    };

    if op.is_three_reg() {
        instr.rd = word.rd();
        instr.rs = word.rs();
        instr.rt = word.rt();
        instr.reads = ReadSet::RsRt;
        instr.writes = WriteTarget::Rd;
    } else if op.is_imm_alu() {
        instr.rt = word.rt();
        instr.rs = word.rs();
        instr.imm = word.imm();
        instr.reads = ReadSet::Rs;
        instr.writes = WriteTarget::Rt;
    } else if op.is_shift() {
        instr.rt = word.rt();
        instr.rd = word.rd();
        instr.shamt = word.shamt();
        instr.reads = ReadSet::Rt;
        instr.writes = WriteTarget::Rd;
    } else {
        match op {
            Opcode::Bltz | Opcode::Bgez | Opcode::Blez | Opcode::Bgtz => {
                instr.rs = word.rs();
                instr.offset = word.branch_offset();
                instr.reads = ReadSet::Rs;
            }
            Opcode::Beq | Opcode::Bne => {
                instr.rs = word.rs();
                instr.rt = word.rt();
                instr.offset = word.branch_offset();
                instr.reads = ReadSet::RsRt;
            }
            Opcode::Lw => {
                instr.rt = word.rt();
                instr.base = word.rs();
                instr.offset = word.imm();
                instr.reads = ReadSet::Base;
                instr.writes = WriteTarget::Rt;
            }
            Opcode::Sw => {
                instr.rt = word.rt();
                instr.base = word.rs();
                instr.offset = word.imm();
                instr.reads = ReadSet::BaseRt;
            }
            Opcode::Jr => {
                instr.rs = word.rs();
                instr.reads = ReadSet::Rs;
            }
            Opcode::J => {
                instr.target = word.jump_target();
            }
            // NOP, BREAK: no operands, no reads, no writes.
            _ => {}
        }
    }

    instr
}
