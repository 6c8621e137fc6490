//! Instruction word encoders for tests.
//!
//! A small fluent builder over the fixed MIPS field layout
//! (`op[31:26] rs[25:21] rt[20:16] rd[15:11] shamt[10:6] funct[5:0]`),
//! plus one convenience function per supported operation.

use mipsim_core::isa::opcodes::{
    FUNCT_ADD, FUNCT_ADDU, FUNCT_AND, FUNCT_BREAK, FUNCT_JR, FUNCT_NOR, FUNCT_OR, FUNCT_SLL,
    FUNCT_SLT, FUNCT_SRA, FUNCT_SRL, FUNCT_SUB, FUNCT_SUBU, FUNCT_XOR, OP_ADDI, OP_ADDIU, OP_BEQ,
    OP_BGTZ, OP_BLEZ, OP_BNE, OP_J, OP_LW, OP_REGIMM, OP_SLTI, OP_SW, RT_BGEZ, RT_BLTZ,
};

/// Fluent encoder for one instruction word.
pub struct InstructionBuilder {
    op: u32,
    rs: u32,
    rt: u32,
    rd: u32,
    shamt: u32,
    funct: u32,
    imm: Option<i16>,
    target: Option<u32>,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            op: 0,
            rs: 0,
            rt: 0,
            rd: 0,
            shamt: 0,
            funct: 0,
            imm: None,
            target: None,
        }
    }

    pub fn op(mut self, op: u32) -> Self {
        self.op = op;
        self
    }

    pub fn rs(mut self, rs: u32) -> Self {
        self.rs = rs;
        self
    }

    pub fn rt(mut self, rt: u32) -> Self {
        self.rt = rt;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn shamt(mut self, shamt: u32) -> Self {
        self.shamt = shamt;
        self
    }

    pub fn funct(mut self, funct: u32) -> Self {
        self.funct = funct;
        self
    }

    /// Sign-extended 16-bit immediate/offset; overlays the rd/shamt/funct bits.
    pub fn imm(mut self, imm: i16) -> Self {
        self.imm = Some(imm);
        self
    }

    /// 26-bit jump target in word units; overlays everything but the opcode.
    pub fn target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    pub fn build(self) -> u32 {
        if let Some(target) = self.target {
            return (self.op << 26) | (target & 0x03FF_FFFF);
        }
        let mut word = (self.op << 26) | (self.rs << 21) | (self.rt << 16);
        if let Some(imm) = self.imm {
            word |= u32::from(imm as u16);
        } else {
            word |= (self.rd << 11) | (self.shamt << 6) | self.funct;
        }
        word
    }
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn r_type(funct: u32, rd: u32, rs: u32, rt: u32) -> u32 {
    InstructionBuilder::new()
        .funct(funct)
        .rd(rd)
        .rs(rs)
        .rt(rt)
        .build()
}

fn i_type(op: u32, rt: u32, rs: u32, imm: i16) -> u32 {
    InstructionBuilder::new().op(op).rt(rt).rs(rs).imm(imm).build()
}

pub fn nop() -> u32 {
    0
}

pub fn add(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_ADD, rd, rs, rt)
}

pub fn addu(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_ADDU, rd, rs, rt)
}

pub fn sub(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_SUB, rd, rs, rt)
}

pub fn subu(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_SUBU, rd, rs, rt)
}

pub fn and(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_AND, rd, rs, rt)
}

pub fn or(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_OR, rd, rs, rt)
}

pub fn xor(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_XOR, rd, rs, rt)
}

pub fn nor(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_NOR, rd, rs, rt)
}

pub fn slt(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(FUNCT_SLT, rd, rs, rt)
}

pub fn sll(rd: u32, rt: u32, shamt: u32) -> u32 {
    InstructionBuilder::new()
        .funct(FUNCT_SLL)
        .rd(rd)
        .rt(rt)
        .shamt(shamt)
        .build()
}

pub fn srl(rd: u32, rt: u32, shamt: u32) -> u32 {
    InstructionBuilder::new()
        .funct(FUNCT_SRL)
        .rd(rd)
        .rt(rt)
        .shamt(shamt)
        .build()
}

pub fn sra(rd: u32, rt: u32, shamt: u32) -> u32 {
    InstructionBuilder::new()
        .funct(FUNCT_SRA)
        .rd(rd)
        .rt(rt)
        .shamt(shamt)
        .build()
}

pub fn jr(rs: u32) -> u32 {
    InstructionBuilder::new().funct(FUNCT_JR).rs(rs).build()
}

pub fn break_() -> u32 {
    InstructionBuilder::new().funct(FUNCT_BREAK).build()
}

pub fn addi(rt: u32, rs: u32, imm: i16) -> u32 {
    i_type(OP_ADDI, rt, rs, imm)
}

pub fn addiu(rt: u32, rs: u32, imm: i16) -> u32 {
    i_type(OP_ADDIU, rt, rs, imm)
}

pub fn slti(rt: u32, rs: u32, imm: i16) -> u32 {
    i_type(OP_SLTI, rt, rs, imm)
}

pub fn lw(rt: u32, base: u32, offset: i16) -> u32 {
    i_type(OP_LW, rt, base, offset)
}

pub fn sw(rt: u32, base: u32, offset: i16) -> u32 {
    i_type(OP_SW, rt, base, offset)
}

/// Branch offsets are given in words (the decoder shifts left 2).
pub fn beq(rs: u32, rt: u32, offset_words: i16) -> u32 {
    i_type(OP_BEQ, rt, rs, offset_words)
}

pub fn bne(rs: u32, rt: u32, offset_words: i16) -> u32 {
    i_type(OP_BNE, rt, rs, offset_words)
}

pub fn blez(rs: u32, offset_words: i16) -> u32 {
    i_type(OP_BLEZ, 0, rs, offset_words)
}

pub fn bgtz(rs: u32, offset_words: i16) -> u32 {
    i_type(OP_BGTZ, 0, rs, offset_words)
}

pub fn bltz(rs: u32, offset_words: i16) -> u32 {
    i_type(OP_REGIMM, RT_BLTZ, rs, offset_words)
}

pub fn bgez(rs: u32, offset_words: i16) -> u32 {
    i_type(OP_REGIMM, RT_BGEZ, rs, offset_words)
}

/// Jump target given as a byte address (the encoder stores word units).
pub fn j(target_addr: u32) -> u32 {
    InstructionBuilder::new()
        .op(OP_J)
        .target(target_addr >> 2)
        .build()
}
