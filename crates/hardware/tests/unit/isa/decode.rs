//! Decoder tests.
//!
//! Verifies opcode selection, operand field extraction, offset/target
//! scaling, the read/write metadata every operation must carry, and the
//! permissive-decode policy for unrecognized encodings.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder;
use mipsim_core::isa::{Opcode, ReadSet, WriteTarget, decode};

#[rstest]
#[case(builder::add(3, 1, 2), Opcode::Add)]
#[case(builder::addu(3, 1, 2), Opcode::Addu)]
#[case(builder::sub(3, 1, 2), Opcode::Sub)]
#[case(builder::subu(3, 1, 2), Opcode::Subu)]
#[case(builder::and(3, 1, 2), Opcode::And)]
#[case(builder::or(3, 1, 2), Opcode::Or)]
#[case(builder::xor(3, 1, 2), Opcode::Xor)]
#[case(builder::nor(3, 1, 2), Opcode::Nor)]
#[case(builder::slt(3, 1, 2), Opcode::Slt)]
#[case(builder::sll(3, 1, 4), Opcode::Sll)]
#[case(builder::srl(3, 1, 4), Opcode::Srl)]
#[case(builder::sra(3, 1, 4), Opcode::Sra)]
#[case(builder::jr(31), Opcode::Jr)]
#[case(builder::break_(), Opcode::Break)]
#[case(builder::addi(3, 1, 5), Opcode::Addi)]
#[case(builder::addiu(3, 1, 5), Opcode::Addiu)]
#[case(builder::slti(3, 1, 5), Opcode::Slti)]
#[case(builder::lw(3, 1, 0), Opcode::Lw)]
#[case(builder::sw(3, 1, 0), Opcode::Sw)]
#[case(builder::beq(1, 2, 1), Opcode::Beq)]
#[case(builder::bne(1, 2, 1), Opcode::Bne)]
#[case(builder::blez(1, 1), Opcode::Blez)]
#[case(builder::bgtz(1, 1), Opcode::Bgtz)]
#[case(builder::bltz(1, 1), Opcode::Bltz)]
#[case(builder::bgez(1, 1), Opcode::Bgez)]
#[case(builder::j(640), Opcode::J)]
fn selects_operation(#[case] word: u32, #[case] expected: Opcode) {
    assert_eq!(decode(word, 0).op, expected);
}

#[test]
fn zero_word_is_nop_not_sll() {
    let instr = decode(0, 0);
    assert_eq!(instr.op, Opcode::Nop);
    assert_eq!(instr.reads, ReadSet::None);
    assert_eq!(instr.writes, WriteTarget::None);
}

#[test]
fn nonzero_sll_encoding_is_sll() {
    assert_eq!(decode(builder::sll(1, 2, 3), 0).op, Opcode::Sll);
}

#[test]
fn unrecognized_encodings_degrade_to_nop() {
    // Unused primary opcode, and unused funct under SPECIAL.
    for word in [0x3F << 26, 0x3E, (0x01 << 26) | (7 << 16)] {
        let instr = decode(word, 0);
        assert_eq!(instr.op, Opcode::Nop);
        assert_eq!(instr.writes, WriteTarget::None);
    }
}

#[test]
fn three_reg_fields_and_metadata() {
    let instr = decode(builder::add(3, 1, 2), 496);
    assert_eq!((instr.rd, instr.rs, instr.rt), (3, 1, 2));
    assert_eq!(instr.reads, ReadSet::RsRt);
    assert_eq!(instr.writes, WriteTarget::Rd);
    assert_eq!(instr.pc, 496);
}

#[test]
fn immediate_is_sign_extended() {
    let instr = decode(builder::addi(5, 2, -7), 0);
    assert_eq!((instr.rt, instr.rs, instr.imm), (5, 2, -7));
    assert_eq!(instr.reads, ReadSet::Rs);
    assert_eq!(instr.writes, WriteTarget::Rt);
}

#[test]
fn shift_fields_and_metadata() {
    let instr = decode(builder::sra(4, 6, 31), 0);
    assert_eq!((instr.rd, instr.rt, instr.shamt), (4, 6, 31));
    assert_eq!(instr.reads, ReadSet::Rt);
    assert_eq!(instr.writes, WriteTarget::Rd);
}

#[test]
fn branch_offset_scales_to_bytes() {
    let instr = decode(builder::beq(1, 2, 3), 0);
    assert_eq!(instr.offset, 12);
    assert_eq!(instr.reads, ReadSet::RsRt);
    assert_eq!(instr.writes, WriteTarget::None);

    let back = decode(builder::bne(1, 2, -2), 0);
    assert_eq!(back.offset, -8);
}

#[test]
fn regimm_branches_read_rs_only() {
    let instr = decode(builder::bltz(9, -1), 0);
    assert_eq!(instr.rs, 9);
    assert_eq!(instr.offset, -4);
    assert_eq!(instr.reads, ReadSet::Rs);
    assert_eq!(instr.writes, WriteTarget::None);
}

#[test]
fn load_reads_base_and_writes_rt() {
    let instr = decode(builder::lw(7, 3, 600), 0);
    assert_eq!((instr.rt, instr.base, instr.offset), (7, 3, 600));
    assert_eq!(instr.reads, ReadSet::Base);
    assert_eq!(instr.writes, WriteTarget::Rt);
}

#[test]
fn store_reads_base_and_rt_writes_nothing() {
    let instr = decode(builder::sw(7, 3, -4), 0);
    assert_eq!((instr.rt, instr.base, instr.offset), (7, 3, -4));
    assert_eq!(instr.reads, ReadSet::BaseRt);
    assert_eq!(instr.writes, WriteTarget::None);
}

#[test]
fn jump_target_scales_to_bytes() {
    let instr = decode(builder::j(640), 0);
    assert_eq!(instr.target, 640);
    assert_eq!(instr.reads, ReadSet::None);
    assert_eq!(instr.writes, WriteTarget::None);
}

#[test]
fn jump_register_reads_rs() {
    let instr = decode(builder::jr(31), 0);
    assert_eq!(instr.rs, 31);
    assert_eq!(instr.reads, ReadSet::Rs);
    assert_eq!(instr.writes, WriteTarget::None);
}

proptest! {
    /// Encoding any three-register operation and decoding it reproduces the
    /// register fields.
    #[test]
    fn r_format_round_trip(rd in 0u32..32, rs in 0u32..32, rt in 0u32..32) {
        let instr = decode(builder::add(rd, rs, rt), 0);
        // The all-zero ADD encoding is still ADD (only SLL overlaps NOP).
        prop_assert_eq!(instr.op, Opcode::Add);
        prop_assert_eq!((instr.rd, instr.rs, instr.rt), (rd, rs, rt));
    }

    /// Load/store offsets survive sign extension for the whole 16-bit range.
    #[test]
    fn memory_offset_round_trip(rt in 0u32..32, base in 0u32..32, offset: i16) {
        let instr = decode(builder::lw(rt, base, offset), 0);
        prop_assert_eq!(instr.offset, i32::from(offset));
        prop_assert_eq!((instr.rt, instr.base), (rt, base));
    }

    /// Branch offsets decode to exactly four times the encoded word offset.
    #[test]
    fn branch_offset_round_trip(rs in 0u32..32, rt in 0u32..32, offset: i16) {
        let instr = decode(builder::beq(rs, rt, offset), 0);
        prop_assert_eq!(instr.offset, i32::from(offset) << 2);
    }
}
