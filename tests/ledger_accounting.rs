//! Tests for in-memory assertion counting

use contract_multitool::{RunCounters, TestLedger};
use rand::{rngs::StdRng, Rng, SeedableRng};

mod common;
use common::assertions::{assert_counters, record_all};
use common::RecordFixture;

#[test]
fn test_new_ledger_starts_at_zero() {
    let fixture = RecordFixture::empty();
    assert_counters(fixture.ledger().counters(), 0, 0, 0);
    assert_eq!(TestLedger::default().counters(), RunCounters::default());
}

#[test]
fn test_random_assertion_sequences_keep_invariant() {
    let fixture = RecordFixture::empty();
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..20 {
        let mut ledger = fixture.ledger();
        let n = rng.gen_range(0..200);
        let conditions: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.7)).collect();
        let expected_pass = conditions.iter().filter(|&&c| c).count() as u64;

        record_all(&mut ledger, &conditions);

        let c = ledger.counters();
        assert_eq!(c.total, n as u64, "round {}: total should equal N", round);
        assert_counters(c, n as u64, expected_pass, n as u64 - expected_pass);
    }
}

#[test]
fn test_record_assertion_returns_condition() {
    let fixture = RecordFixture::empty();
    let mut ledger = fixture.ledger();
    assert!(ledger.record_assertion(true, "owner set", ""));
    assert!(!ledger.record_assertion(false, "balance", "balance mismatch"));
    assert_counters(ledger.counters(), 2, 1, 1);
}

#[test]
fn test_reset_is_idempotent() {
    let fixture = RecordFixture::empty();
    let mut ledger = fixture.ledger();
    record_all(&mut ledger, &[true, false, true]);

    ledger.reset_counters();
    let once = ledger.counters();
    ledger.reset_counters();
    assert_eq!(ledger.counters(), once);
    assert_counters(once, 0, 0, 0);
}

#[test]
fn test_counters_consistency_check() {
    assert!(RunCounters::new(5, 3, 2).is_consistent());
    assert!(!RunCounters::new(5, 2, 2).is_consistent());
    assert!(!RunCounters::new(0, u64::MAX, 1).is_consistent());
}

#[test]
fn test_report_without_io_returns_current_counters() {
    let fixture = RecordFixture::empty();
    let mut ledger = fixture.ledger();
    record_all(&mut ledger, &[true, true, false]);

    let reported = ledger.report("token", false, false).unwrap();
    assert_counters(reported, 3, 2, 1);
    assert!(
        !fixture.path().exists(),
        "Report without write should not create the record file"
    );
}

#[test]
fn test_report_writes_summary_line() {
    let fixture = RecordFixture::empty();
    let mut ledger = fixture.ledger();
    record_all(&mut ledger, &[true, false]);

    ledger.report("vault", false, true).unwrap();

    let lines = fixture.lines();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].starts_with("vault total 2 pass 1 fail 1 -- "),
        "Unexpected summary line: {}",
        lines[0]
    );
}

#[test]
fn test_report_with_read_adds_history_to_current_run() {
    let fixture = RecordFixture::with_lines(&["earlier total 4 pass 4 fail 0 -- 1"]);
    let mut ledger = fixture.ledger();
    record_all(&mut ledger, &[false]);

    let reported = ledger.report("SUMMARY", true, false).unwrap();
    assert_counters(reported, 5, 4, 1);
}

#[test]
fn test_saturated_counters_do_not_overflow() {
    let max = u64::MAX.to_string();
    let line = format!("a total {} pass {} fail 0 -- 1", max, max);
    let fixture = RecordFixture::with_lines(&[line.as_str()]);
    let mut ledger = fixture.ledger();
    ledger.replay_record_file(true).unwrap();

    assert!(ledger.record_assertion(true, "after saturation", ""));
    assert!(!ledger.record_assertion(false, "after saturation", ""));
    assert_counters(ledger.counters(), u64::MAX, u64::MAX, 0);
}
