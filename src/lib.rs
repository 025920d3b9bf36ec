//! Contract multitool library
//!
//! Lightweight helpers for scripting smart-contract deployment and
//! testing against a local development chain: assertion counting with a shared
//! pass/fail record file, closeness checks for float and 18-decimal fixed-point
//! values, revert expectations, contract address files and colored output.
//!
//! ## Main Components
//!
//! - [`ledger`]: Assertion counters and the append-only pass/fail record file
//! - [`record`]: Line format of the record file
//! - [`numeric`]: Closeness comparators and fixed-point conversion
//! - [`revert`]: Typed call outcomes and revert expectations
//! - [`address`]: Deployed contract address files
//! - [`console`]: ANSI colored console output
//! - [`config`]: Centralized configuration constants
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, MultitoolError>`:
//!
//! - `TestLedger::append_summary()` fails on inconsistent counters
//! - `TestLedger::replay_record_file()` fails on unreadable files or corrupt history
//! - `read_contract_address()` fails when the address file cannot be read
//!
//! Malformed lines in the record file are skipped, never reported as errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contract_multitool::{numeric, MultitoolError, TestLedger};
//!
//! let mut ledger = TestLedger::new("passFail.txt");
//! ledger.record_assertion(numeric::close(0.1 + 0.2, 0.3), "float sum", "");
//! ledger.record_assertion(2 + 2 == 4, "integer sum", "");
//!
//! // Append this script's result to the shared record
//! ledger.report("arith", false, true)?;
//!
//! // A final script in the batch aggregates everything since the last reset
//! let mut summary = TestLedger::new("passFail.txt");
//! let totals = summary.report("SUMMARY", true, false)?;
//! assert_eq!(totals.total, totals.pass + totals.fail);
//! # Ok::<(), MultitoolError>(())
//! ```

pub mod address;
pub mod config;
pub mod console;
pub mod error;
pub mod ledger;
pub mod numeric;
pub mod record;
pub mod revert;

// Re-export commonly used types and functions for convenience
pub use address::{
    read_contract_address, read_contract_address_or_empty, write_contract_address, ZERO_ADDRESS,
};
pub use console::{Color, ColorMode, Palette};
pub use error::{MultitoolError, Result};
pub use ledger::{RunCounters, TestLedger};
pub use numeric::{big_close, big_close_within, close, close_within};
pub use record::{RecordEntry, ResetMarker, SummaryLine};
pub use revert::{expect_revert, CallOutcome, RevertReason};
