//! Pass/fail accounting for contract test scripts.
//!
//! This module defines the [`TestLedger`], which counts assertions made during
//! a script run and persists run summaries to an append-only record file. A
//! batch of independent script invocations shares one record file; the last
//! script in the batch replays it to obtain the aggregate result.
//!
//! ## Counter Invariant
//!
//! **INVARIANT**: `total == pass + fail` for every [`RunCounters`] value after a
//! mutation completes. The ledger refuses to persist counters that break it
//! ([`MultitoolError::InconsistentCounters`]) and stops a replay whose running
//! totals break it ([`MultitoolError::CorruptHistory`]).
//!
//! ## Reset Markers
//!
//! A reset marker line zeroes the running totals during replay, so only the
//! summaries appended after the last marker contribute to the final result.

use crate::config::{DEFAULT_RECORD_FILE, DEFAULT_TEST_NAME};
use crate::console::{Color, ColorMode, Palette};
use crate::record::{normalize_name, RecordEntry, ResetMarker, SummaryLine};
use crate::{MultitoolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Assertion counts for one run, or the aggregate of a replayed record file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounters {
    pub total: u64,
    pub pass: u64,
    pub fail: u64,
}

impl RunCounters {
    pub fn new(total: u64, pass: u64, fail: u64) -> Self {
        Self { total, pass, fail }
    }

    /// Whether `total == pass + fail`. Overflowing sums are inconsistent.
    pub fn is_consistent(&self) -> bool {
        self.pass.checked_add(self.fail) == Some(self.total)
    }

    /// Adds `other` into `self`, returning `false` on overflow (self unchanged).
    fn checked_accumulate(&mut self, other: &RunCounters) -> bool {
        match (
            self.total.checked_add(other.total),
            self.pass.checked_add(other.pass),
            self.fail.checked_add(other.fail),
        ) {
            (Some(total), Some(pass), Some(fail)) => {
                *self = RunCounters { total, pass, fail };
                true
            }
            _ => false,
        }
    }
}

impl From<&SummaryLine> for RunCounters {
    fn from(line: &SummaryLine) -> Self {
        RunCounters::new(line.total, line.pass, line.fail)
    }
}

/// The `TestLedger` tracks assertion results for the current process and
/// reads/writes the shared record file.
#[derive(Debug, Clone)]
pub struct TestLedger {
    counters: RunCounters,
    record_path: PathBuf,
    palette: Palette,
}

impl Default for TestLedger {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_FILE)
    }
}

impl TestLedger {
    /// Creates a ledger with zeroed counters backed by the record file at `record_path`.
    pub fn new(record_path: impl Into<PathBuf>) -> Self {
        Self {
            counters: RunCounters::default(),
            record_path: record_path.into(),
            palette: Palette::default(),
        }
    }

    /// Sets how console output is colored.
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.palette = Palette::from_mode(mode);
        self
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    pub fn record_path(&self) -> &Path {
        &self.record_path
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Records one assertion and prints its outcome.
    ///
    /// An empty `fail_label` falls back to `pass_label`. Returns `condition`.
    pub fn record_assertion(
        &mut self,
        condition: bool,
        pass_label: &str,
        fail_label: &str,
    ) -> bool {
        let step = RunCounters::new(1, condition as u64, !condition as u64);
        if !self.counters.checked_accumulate(&step) {
            warn!(counters = ?self.counters, "Counters saturated, assertion not counted");
        }

        let p = &self.palette;
        if condition {
            println!(
                "{}{}",
                p.amber("assertion: "),
                p.green(format!("{} -- PASS", pass_label))
            );
        } else {
            let label = if fail_label.is_empty() {
                pass_label
            } else {
                fail_label
            };
            println!(
                "{}{}",
                p.amber("assertion: "),
                p.red(format!("{} -- FAIL", label))
            );
        }
        condition
    }

    /// Clears the pass/fail record.
    pub fn reset_counters(&mut self) {
        self.counters = RunCounters::default();
    }

    /// Appends a summary line for `counters`, timestamped now.
    pub fn append_summary(&self, name: &str, counters: &RunCounters) -> Result<()> {
        self.append_summary_at(name, counters, chrono::Utc::now().timestamp_millis())
    }

    /// Appends a summary line for `counters` with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// [`MultitoolError::InconsistentCounters`] if the counts do not add up; the
    /// record file is not touched in that case.
    pub fn append_summary_at(
        &self,
        name: &str,
        counters: &RunCounters,
        timestamp_millis: i64,
    ) -> Result<()> {
        if !counters.is_consistent() {
            return Err(MultitoolError::InconsistentCounters {
                total: counters.total,
                pass: counters.pass,
                fail: counters.fail,
            });
        }

        let line = SummaryLine {
            name: normalize_name(name),
            total: counters.total,
            pass: counters.pass,
            fail: counters.fail,
            timestamp_millis: Some(timestamp_millis),
        };
        self.append_line(&line.to_string())?;
        info!(
            name = %line.name,
            total = line.total,
            pass = line.pass,
            fail = line.fail,
            "Appended summary"
        );
        Ok(())
    }

    /// Appends a reset marker labeled with the current local time.
    pub fn append_reset_marker(&self) -> Result<()> {
        let label = chrono::Local::now()
            .format("%a %b %d %Y %H:%M:%S GMT%z")
            .to_string();
        self.append_reset_marker_labeled(&label)
    }

    /// Appends a reset marker with a caller-chosen label.
    pub fn append_reset_marker_labeled(&self, label: &str) -> Result<()> {
        let marker = ResetMarker {
            label: label.trim().to_string(),
        };
        self.append_line(&marker.to_string())?;
        info!(label = %marker.label, "Appended reset marker");
        Ok(())
    }

    /// Writes one line in append mode, creating the file if needed.
    fn append_line(&self, line: &str) -> Result<()> {
        let write_err = |e: std::io::Error| MultitoolError::RecordFileWrite {
            path: self.record_path.display().to_string(),
            reason: e.to_string(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.record_path)
            .map_err(write_err)?;

        // Single write so concurrent appenders do not interleave within a line.
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes()).map_err(write_err)
    }

    /// Replays the record file into the in-memory counters and returns them.
    ///
    /// With `clear_first`, counters start from zero; otherwise the file is added
    /// on top of the current counts. Malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// - [`MultitoolError::RecordFileUnavailable`] if the file cannot be read.
    /// - [`MultitoolError::CorruptHistory`] if the running totals stop adding up.
    pub fn replay_record_file(&mut self, clear_first: bool) -> Result<RunCounters> {
        debug!(path = %self.record_path.display(), clear_first, "Replaying record file");
        if clear_first {
            self.reset_counters();
        }

        let bytes = fs::read(&self.record_path).map_err(|e| {
            MultitoolError::RecordFileUnavailable {
                path: self.record_path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        // Undecodable bytes become U+FFFD and the affected line parses as malformed.
        let data = String::from_utf8_lossy(&bytes);

        for (idx, raw) in data.lines().enumerate() {
            let line_no = idx + 1;
            match RecordEntry::parse(raw) {
                RecordEntry::Blank | RecordEntry::Comment(_) => continue,
                RecordEntry::Reset(marker) => {
                    let p = &self.palette;
                    let c = self.counters;
                    println!(
                        "{}{}",
                        p.blue("==> "),
                        p.counts(c.total, c.pass, c.fail)
                    );
                    p.bluelog(format!("==> {}", marker));
                    self.reset_counters();
                }
                RecordEntry::Malformed(text) => {
                    debug!(line = line_no, record = %text, "Skipping malformed record");
                }
                RecordEntry::Summary(summary) => {
                    let entry = RunCounters::from(&summary);
                    let before = self.counters;
                    if !self.counters.checked_accumulate(&entry) || !self.counters.is_consistent()
                    {
                        // Leave the in-memory counters as they were before this line.
                        self.counters = before;
                        return Err(MultitoolError::CorruptHistory {
                            line: line_no,
                            total: before.total.saturating_add(entry.total),
                            pass: before.pass.saturating_add(entry.pass),
                            fail: before.fail.saturating_add(entry.fail),
                        });
                    }
                    println!(
                        "==> {}: {}",
                        summary.name,
                        self.palette.counts(entry.total, entry.pass, entry.fail)
                    );
                }
            }
        }

        Ok(self.counters)
    }

    /// Prints a testing report, optionally replaying the record file first and
    /// appending the reported counters afterwards.
    pub fn report(
        &mut self,
        name: &str,
        read_first: bool,
        write_after: bool,
    ) -> Result<RunCounters> {
        if read_first {
            self.replay_record_file(false)?;
        }

        let name = if name.trim().is_empty() {
            DEFAULT_TEST_NAME
        } else {
            name
        };
        let p = &self.palette;
        let c = self.counters;
        p.amberlog("=====================================");
        p.bluelog(format!("{}{} TESTING REPORT", p.code(Color::BgGreen), name));
        p.amberlog("=====================================");
        println!("Total tests: [{}]", p.amber(c.total));
        println!("pass total: [{}]  fail total: [{}]", p.green(c.pass), p.red(c.fail));

        if write_after {
            println!("writing report...");
            self.append_summary(name, &c)?;
        }
        Ok(c)
    }
}
