//! Test fixtures: isolated record files and ledgers.

#![allow(dead_code)]

use contract_multitool::{ColorMode, TestLedger};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A record file inside its own temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct RecordFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl RecordFixture {
    /// A fixture whose record file does not exist yet.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("passFail.txt");
        Self { _dir: dir, path }
    }

    /// A fixture whose record file holds `lines`, one per line.
    pub fn with_lines(lines: &[&str]) -> Self {
        let fixture = Self::empty();
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&fixture.path, content).expect("Failed to seed record file");
        fixture
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A fresh, uncolored ledger backed by this record file.
    pub fn ledger(&self) -> TestLedger {
        TestLedger::new(&self.path).with_color_mode(ColorMode::Never)
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

/// Shorthand for a seeded fixture plus a ledger on it.
pub fn ledger_with_record(lines: &[&str]) -> (RecordFixture, TestLedger) {
    let fixture = RecordFixture::with_lines(lines);
    let ledger = fixture.ledger();
    (fixture, ledger)
}
