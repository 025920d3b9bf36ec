//! Deployed contract address files.
//!
//! A deployment script writes the address of the contract it just deployed to
//! a single-line file; later scripts read it back to attach to the contract.

use crate::{MultitoolError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error};

pub use crate::config::ZERO_ADDRESS;

/// Writes `address` followed by a newline, replacing any previous content.
pub fn write_contract_address(path: &Path, address: &str) -> Result<()> {
    fs::write(path, format!("{}\n", address.trim())).map_err(|e| MultitoolError::AddressFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), address, "Wrote contract address");
    Ok(())
}

/// Reads the address stored at `path`, with surrounding whitespace trimmed.
pub fn read_contract_address(path: &Path) -> Result<String> {
    let data = fs::read_to_string(path).map_err(|e| MultitoolError::AddressFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(data.trim().to_string())
}

/// Like [`read_contract_address`], but logs a failure and returns an empty string.
pub fn read_contract_address_or_empty(path: &Path) -> String {
    read_contract_address(path).unwrap_or_else(|e| {
        error!("{}", e);
        String::new()
    })
}
