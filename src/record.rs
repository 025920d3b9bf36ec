//! Line format of the pass/fail record file.
//!
//! The record file is plain text, one entry per line, appended to by every
//! test script in a batch:
//!
//! ```text
//! <name> total <N> pass <N> fail <N> -- <epochMillis>
//! ! Resetting counters at <free-text timestamp>
//! # optional comment line
//! ```
//!
//! Parsing is tolerant: a line that is not a comment, a reset marker or a
//! well-formed summary is classified as [`RecordEntry::Malformed`] rather than
//! rejected, so stray content in a shared file never aborts a replay.

use crate::config::{
    COMMENT_MARKER, DEFAULT_TEST_NAME, FAIL_KEYWORD, FAIL_KEYWORD_POS, PASS_KEYWORD,
    PASS_KEYWORD_POS, RESET_MARKER, RESET_MARKER_PREFIX, TIMESTAMP_SEPARATOR, TOTAL_KEYWORD,
    TOTAL_KEYWORD_POS,
};
use std::fmt;

/// Snapshot of counters appended when a named test (or batch) finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub total: u64,
    pub pass: u64,
    pub fail: u64,
    /// Absent on hand-written lines that stop after the counts.
    pub timestamp_millis: Option<i64>,
}

/// Sentinel telling a replay to zero its running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetMarker {
    pub label: String,
}

/// One classified line of the record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEntry {
    Summary(SummaryLine),
    Reset(ResetMarker),
    Comment(String),
    Blank,
    Malformed(String),
}

impl RecordEntry {
    /// Classifies a single line (without its trailing newline).
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return RecordEntry::Blank;
        }
        if line.starts_with(COMMENT_MARKER) {
            return RecordEntry::Comment(line.to_string());
        }
        if line.starts_with(RESET_MARKER) {
            let label = line
                .strip_prefix(RESET_MARKER_PREFIX)
                .unwrap_or(&line[RESET_MARKER.len_utf8()..])
                .trim()
                .to_string();
            return RecordEntry::Reset(ResetMarker { label });
        }
        match SummaryLine::parse(line) {
            Some(summary) => RecordEntry::Summary(summary),
            None => RecordEntry::Malformed(line.to_string()),
        }
    }
}

impl SummaryLine {
    /// Parses `<name> total <N> pass <N> fail <N> [-- <millis>]`.
    ///
    /// Returns `None` when a keyword is missing or a count is not an unsigned
    /// integer. The trailing timestamp is optional and ignored if unparseable.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.get(TOTAL_KEYWORD_POS) != Some(&TOTAL_KEYWORD)
            || tokens.get(PASS_KEYWORD_POS) != Some(&PASS_KEYWORD)
            || tokens.get(FAIL_KEYWORD_POS) != Some(&FAIL_KEYWORD)
        {
            return None;
        }

        let count = |pos: usize| tokens.get(pos + 1)?.parse::<u64>().ok();
        let total = count(TOTAL_KEYWORD_POS)?;
        let pass = count(PASS_KEYWORD_POS)?;
        let fail = count(FAIL_KEYWORD_POS)?;

        let ts_pos = FAIL_KEYWORD_POS + 2;
        let timestamp_millis = match tokens.get(ts_pos) {
            Some(&sep) if sep == TIMESTAMP_SEPARATOR => {
                tokens.get(ts_pos + 1).and_then(|t| t.parse::<i64>().ok())
            }
            _ => None,
        };

        Some(SummaryLine {
            name: tokens[0].to_string(),
            total,
            pass,
            fail,
            timestamp_millis,
        })
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.name, TOTAL_KEYWORD, self.total, PASS_KEYWORD, self.pass, FAIL_KEYWORD, self.fail
        )?;
        if let Some(ts) = self.timestamp_millis {
            write!(f, " {} {}", TIMESTAMP_SEPARATOR, ts)?;
        }
        Ok(())
    }
}

impl fmt::Display for ResetMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", RESET_MARKER_PREFIX, self.label)
    }
}

/// Makes `name` usable as the first token of a summary line.
///
/// Whitespace would shift the keyword positions and a leading marker
/// character would turn the line into a comment or a reset on replay.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return DEFAULT_TEST_NAME.to_string();
    }
    let joined: String = trimmed
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if joined.starts_with(COMMENT_MARKER) || joined.starts_with(RESET_MARKER) {
        format!("_{}", joined)
    } else {
        joined
    }
}
