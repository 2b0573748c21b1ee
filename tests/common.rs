#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated HOME plus a ledger file inside it.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn ledger(&self) -> PathBuf {
        self.home.path().join("ot.json")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    pub fn ledger_content(&self) -> String {
        fs::read_to_string(self.ledger()).expect("read ledger")
    }

    /// `otledger --file <ledger>` with HOME pointing into the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = bare_cmd(self.home.path());
        cmd.arg("--file").arg(self.ledger());
        cmd
    }

    pub fn add(&self, date: &str, amount: &str) {
        self.cmd().args(["add", date, amount]).assert().success();
    }
}

/// `otledger` with HOME set, without any ledger override.
pub fn bare_cmd(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("otledger");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// A sandbox with a small dataset spread over June 2025.
pub fn sandbox_with_data() -> Sandbox {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["add", "2025-06-10", "45", "--reason", "hotfix", "--by", "Kit"])
        .assert()
        .success();
    sb.add("2025-06-03", "30");
    sb.add("2025-05-28", "15");
    sb
}
