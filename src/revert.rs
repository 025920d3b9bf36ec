//! Expecting contract calls to revert.
//!
//! The result of a call under test is first classified into a [`CallOutcome`],
//! then [`expect_revert`] compares it against the expected revert message and
//! records exactly one assertion on the ledger.

use crate::ledger::TestLedger;

/// How a contract call under test ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// The call returned normally.
    Succeeded,
    /// The call reverted and the node reported a reason.
    RevertedWithMessage(String),
    /// The call failed in a way that carries no revert reason.
    RevertedUnrecognized,
    /// The transaction was mined with a success status.
    DidNotRevert,
}

/// Errors that may carry a revert reason.
pub trait RevertReason {
    /// The revert reason, if this error represents a revert.
    fn revert_message(&self) -> Option<String>;
}

impl RevertReason for String {
    fn revert_message(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl RevertReason for &str {
    fn revert_message(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

/// Transport failures never carry a revert reason.
impl RevertReason for std::io::Error {
    fn revert_message(&self) -> Option<String> {
        None
    }
}

impl CallOutcome {
    /// Classifies the return value of a call.
    pub fn from_result<T, E: RevertReason>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => CallOutcome::Succeeded,
            Err(e) => match e.revert_message() {
                Some(msg) => CallOutcome::RevertedWithMessage(msg),
                None => CallOutcome::RevertedUnrecognized,
            },
        }
    }

    /// Classifies a mined transaction receipt (`status` 1 = success).
    pub fn from_receipt(status: u64, reason: Option<&str>) -> Self {
        if status == 1 {
            return CallOutcome::DidNotRevert;
        }
        match reason {
            Some(msg) => CallOutcome::RevertedWithMessage(msg.to_string()),
            None => CallOutcome::RevertedUnrecognized,
        }
    }

    pub fn is_revert(&self) -> bool {
        matches!(
            self,
            CallOutcome::RevertedWithMessage(_) | CallOutcome::RevertedUnrecognized
        )
    }
}

/// Records an assertion that `outcome` reverted with a message containing
/// `expected`. Returns whether the assertion passed.
pub fn expect_revert(
    ledger: &mut TestLedger,
    outcome: &CallOutcome,
    expected: &str,
    label: &str,
) -> bool {
    match outcome {
        CallOutcome::RevertedWithMessage(msg) => {
            let fail_label = format!("incorrect exception: {} - {}", msg, label);
            ledger.record_assertion(msg.contains(expected), label, &fail_label)
        }
        CallOutcome::RevertedUnrecognized => {
            ledger.record_assertion(false, label, &format!("bad exception type: {}", label))
        }
        CallOutcome::Succeeded | CallOutcome::DidNotRevert => {
            ledger.record_assertion(false, label, &format!("no exception: {}", label))
        }
    }
}
