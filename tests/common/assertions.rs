//! High-level assertion helpers for common test patterns.

#![allow(dead_code)]

use super::fixtures::ledger_with_record;
use contract_multitool::{MultitoolError, RunCounters, TestLedger};

/// Asserts the counters hold `(total, pass, fail)` and stay consistent.
pub fn assert_counters(counters: RunCounters, total: u64, pass: u64, fail: u64) {
    assert_eq!(
        (counters.total, counters.pass, counters.fail),
        (total, pass, fail),
        "Unexpected counters"
    );
    assert!(
        counters.is_consistent(),
        "Counters should satisfy total == pass + fail"
    );
}

/// Asserts that replaying a record file made of `lines` from zero yields
/// `(total, pass, fail)`.
pub fn assert_replay_yields(lines: &[&str], total: u64, pass: u64, fail: u64) {
    let (_fixture, mut ledger) = ledger_with_record(lines);
    let counters = ledger
        .replay_record_file(true)
        .expect("Replay should have succeeded");
    assert_counters(counters, total, pass, fail);
    assert_eq!(ledger.counters(), counters, "Replay should update the ledger");
}

/// Asserts that replaying `lines` stops with a corrupt-history error at `line`.
pub fn assert_replay_corrupt_at(lines: &[&str], line: usize) {
    let (_fixture, mut ledger) = ledger_with_record(lines);
    match ledger.replay_record_file(true) {
        Ok(c) => panic!("Expected corrupt history, but replay yielded {:?}", c),
        Err(MultitoolError::CorruptHistory { line: at, .. }) => {
            assert_eq!(at, line, "Corruption reported at the wrong line")
        }
        Err(other) => panic!("Expected corrupt history, got: {}", other),
    }
}

/// Records each condition on `ledger` with a generated label.
pub fn record_all(ledger: &mut TestLedger, conditions: &[bool]) {
    for (i, &condition) in conditions.iter().enumerate() {
        ledger.record_assertion(condition, &format!("check {}", i), "");
    }
}
