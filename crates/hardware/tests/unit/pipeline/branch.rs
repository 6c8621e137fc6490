//! Branch and jump squash tests.
//!
//! A taken branch resolves one cycle after EX; every younger in-flight
//! instruction must vanish without committing anything, fetch must resume
//! at the target, and exactly four stalls are charged to the branch
//! counter.

use pretty_assertions::assert_eq;

use crate::common::builder;
use crate::common::harness::TestContext;
use mipsim_core::common::constants::WORD_SIZE;

#[test]
fn taken_branch_squashes_wrong_path() {
    let mut ctx = TestContext::with_program(
        &[
            builder::beq(0, 0, 2), // 496: always taken, target 508
            builder::addi(1, 0, 1), // 500: must never execute
            builder::addi(2, 0, 1), // 504: must never execute
            builder::addi(3, 0, 7), // 508: target
            builder::break_(),      // 512
        ],
        &[],
    );
    let summary = ctx.run_to_halt();

    assert_eq!(ctx.reg(1), 0, "wrong-path instruction committed");
    assert_eq!(ctx.reg(2), 0, "wrong-path instruction committed");
    assert_eq!(ctx.reg(3), 7, "target instruction did not execute");
    assert_eq!(ctx.sim.cpu.stats.stalls_branch, 4);
    assert_eq!(summary.break_pc, 512);

    // No wrong-path instruction ever reached writeback.
    for snap in &ctx.snapshots {
        let wb_pc = snap.slots.writeback.pc;
        assert!(
            snap.slots.writeback.is_bubble() || (wb_pc != 500 && wb_pc != 504),
            "wrong-path instruction at {wb_pc} reached writeback"
        );
    }

    // The squash cycle redirected the PC to the branch target.
    assert!(
        ctx.snapshots
            .iter()
            .any(|snap| snap.pc.wrapping_sub(WORD_SIZE) == 508),
        "no cycle observed the PC at the branch target"
    );
}

#[test]
fn not_taken_branch_falls_through() {
    let mut ctx = TestContext::with_program(
        &[
            builder::bne(0, 0, 2), // never taken
            builder::addi(1, 0, 1),
            builder::addi(2, 0, 2),
            builder::break_(),
        ],
        &[],
    );
    ctx.run_to_halt();

    assert_eq!(ctx.reg(1), 1);
    assert_eq!(ctx.reg(2), 2);
    assert_eq!(ctx.sim.cpu.stats.stalls_branch, 0);
}

#[test]
fn jump_squashes_and_lands_on_target() {
    let mut ctx = TestContext::with_program(
        &[
            builder::j(512),        // 496
            builder::addi(1, 0, 1), // 500: must never execute
            builder::addi(2, 0, 1), // 504: must never execute
            builder::nop(),         // 508
            builder::addi(3, 0, 9), // 512: target
            builder::break_(),      // 516
        ],
        &[],
    );
    ctx.run_to_halt();

    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.reg(2), 0);
    assert_eq!(ctx.reg(3), 9);
    assert_eq!(ctx.sim.cpu.stats.stalls_branch, 4);
}

#[test]
fn jump_register_targets_forwarded_register_value() {
    let mut ctx = TestContext::with_program(
        &[
            builder::addi(1, 0, 516), // 496: target into R1
            builder::jr(1),           // 500: reads R1 via the bypass
            builder::addi(4, 0, 1),   // 504: must never execute
            builder::addi(5, 0, 1),   // 508: must never execute
            builder::nop(),           // 512
            builder::addi(7, 0, 9),   // 516: target
            builder::break_(),        // 520
        ],
        &[],
    );
    ctx.run_to_halt();

    assert_eq!(ctx.reg(4), 0);
    assert_eq!(ctx.reg(5), 0);
    assert_eq!(ctx.reg(7), 9);
    assert_eq!(ctx.sim.cpu.stats.stalls_branch, 4);
}

#[test]
fn backward_branch_loops() {
    // R1 counts down from 2; BGTZ jumps back over the decrement once.
    let mut ctx = TestContext::with_program(
        &[
            builder::addi(1, 0, 2),  // 496
            builder::addi(1, 1, -1), // 500: R1 -= 1
            builder::bgtz(1, -2),    // 504: back to 500 while R1 > 0
            builder::break_(),       // 508
        ],
        &[],
    );
    ctx.run_to_halt();

    assert_eq!(ctx.reg(1), 0);
    // Taken once: one squash worth of branch stalls.
    assert_eq!(ctx.sim.cpu.stats.stalls_branch, 4);
}
