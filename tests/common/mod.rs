//! Common test utilities and shared infrastructure.
//!
//! This module provides the shared functionality used across the test suite:
//! - `fixtures`: temporary record files and ledgers
//! - `assertions`: High-level assertion helpers for common test patterns

pub mod assertions;
pub mod fixtures;

// Re-export commonly used test helpers
#[allow(unused_imports)] // These are used across many test files
pub use fixtures::{ledger_with_record, RecordFixture};
