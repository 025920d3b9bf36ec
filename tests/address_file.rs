//! Tests for deployed contract address files

use contract_multitool::{
    read_contract_address, read_contract_address_or_empty, write_contract_address, MultitoolError,
    ZERO_ADDRESS,
};
use std::fs;

const ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

#[test]
fn test_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.addr");

    write_contract_address(&path, ADDR).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", ADDR));
    assert_eq!(read_contract_address(&path).unwrap(), ADDR);
}

#[test]
fn test_write_replaces_previous_address() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.addr");

    write_contract_address(&path, ZERO_ADDRESS).unwrap();
    write_contract_address(&path, ADDR).unwrap();
    assert_eq!(read_contract_address(&path).unwrap(), ADDR);
}

#[test]
fn test_read_trims_hand_edited_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.addr");
    fs::write(&path, format!("  {}\r\n\n", ADDR)).unwrap();
    assert_eq!(read_contract_address(&path).unwrap(), ADDR);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.addr");

    assert!(matches!(
        read_contract_address(&path),
        Err(MultitoolError::AddressFile { .. })
    ));
    assert_eq!(read_contract_address_or_empty(&path), "");
}
