//! Centralized configuration for the contract multitool.
//!
//! This module contains constants and default parameters used throughout the
//! library and the `multitool` binary to ensure consistency and ease of modification.

// --- Record File Parameters ---

/// Default file name for recording pass/fail summaries.
pub const DEFAULT_RECORD_FILE: &str = "passFail.txt";

/// First character of a comment line in the record file.
pub const COMMENT_MARKER: char = '#';

/// First character of a counter reset line in the record file.
pub const RESET_MARKER: char = '!';

/// Text written after the reset marker, followed by a timestamp label.
pub const RESET_MARKER_PREFIX: &str = "! Resetting counters at ";

/// Literal keyword tokens of a summary line and their positions after
/// whitespace splitting.
/// Layout: `<name> total <N> pass <N> fail <N> -- <epochMillis>`
pub const TOTAL_KEYWORD: &str = "total";
pub const PASS_KEYWORD: &str = "pass";
pub const FAIL_KEYWORD: &str = "fail";
pub const TOTAL_KEYWORD_POS: usize = 1;
pub const PASS_KEYWORD_POS: usize = 3;
pub const FAIL_KEYWORD_POS: usize = 5;

/// Separator between the counts and the timestamp of a summary line.
pub const TIMESTAMP_SEPARATOR: &str = "--";

/// Test name used when none is given.
pub const DEFAULT_TEST_NAME: &str = "-";

/// Test name used by the end-of-batch summary report.
pub const SUMMARY_TEST_NAME: &str = "SUMMARY";

// --- Closeness Parameters ---

/// Default tolerance for floating-point closeness checks.
pub const SMALL_EPSILON: f64 = 1.0e-6;

/// Default tolerance for fixed-point closeness checks is 10^BIG_EPSILON_EXPONENT.
/// With an 18-decimal denominator this leaves room for gas fee slop.
pub const BIG_EPSILON_EXPONENT: usize = 15;

// --- Fixed-Point Parameters ---

/// Decimals of the fixed-point denominator used for ether-like amounts.
pub const FIXED_POINT_DECIMALS: u32 = 18;

/// Decimal places kept when converting a float to fixed point.
pub const DEFAULT_FIXED_POINT_PRECISION: u32 = 10;

// --- Contract Deployment ---

/// The zero address for contracts.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
