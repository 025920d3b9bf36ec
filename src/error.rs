//! Error types for the contract multitool

/// Error types for the contract multitool
#[derive(Debug, thiserror::Error)]
pub enum MultitoolError {
    /// Refused to persist a summary whose counts do not add up
    #[error("Inconsistent counters: total {total} != pass {pass} + fail {fail}")]
    InconsistentCounters { total: u64, pass: u64, fail: u64 },

    /// Replaying the record file produced counters that do not add up
    #[error(
        "Corrupt history at line {line}: pass {pass} + fail {fail} does not add up to total {total}"
    )]
    CorruptHistory {
        line: usize,
        total: u64,
        pass: u64,
        fail: u64,
    },

    /// Record file could not be read
    #[error("Record file unavailable: {path}: {reason}")]
    RecordFileUnavailable { path: String, reason: String },

    /// Record file could not be appended to
    #[error("Failed to write record file {path}: {reason}")]
    RecordFileWrite { path: String, reason: String },

    /// Contract address file could not be read or written
    #[error("Address file error: {path}: {reason}")]
    AddressFile { path: String, reason: String },

    /// Serialization of report output failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Big-number parsing or fixed-point conversion failed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Convenience Result type for multitool operations
pub type Result<T> = std::result::Result<T, MultitoolError>;
