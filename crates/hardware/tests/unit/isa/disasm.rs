//! Operand text rendering tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder;
use mipsim_core::isa::decode;

#[rstest]
#[case(builder::add(3, 1, 2), "ADD R3, R1, R2")]
#[case(builder::addi(5, 2, -7), "ADDI R5, R2, #-7")]
#[case(builder::sll(4, 6, 2), "SLL R4, R6, #2")]
#[case(builder::lw(1, 0, 600), "LW R1, 600(R0)")]
#[case(builder::sw(2, 3, -4), "SW R2, -4(R3)")]
#[case(builder::beq(1, 2, 3), "BEQ R1, R2, #12")]
#[case(builder::bltz(9, -1), "BLTZ R9, #-4")]
#[case(builder::jr(31), "JR R31")]
#[case(builder::j(640), "J #640")]
#[case(builder::break_(), "BREAK")]
#[case(builder::nop(), "NOP")]
fn renders_listing_text(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(decode(word, 0).to_string(), expected);
}

#[test]
fn bubble_renders_stall_marker() {
    use mipsim_core::isa::Instruction;
    assert_eq!(Instruction::bubble().to_string(), "**STALL**");
}
