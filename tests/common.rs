#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated home directory plus a database path inside it.
pub struct TestEnv {
    pub home: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let db: PathBuf = home.path().join("board.sqlite");
        Self {
            db: db.to_string_lossy().to_string(),
            home,
        }
    }

    /// `shiftboard --no-color` run from the temp dir, with HOME pointing at it.
    pub fn bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("shiftboard");
        cmd.env("HOME", self.home.path())
            .env_remove("RUST_LOG")
            .current_dir(self.home.path())
            .arg("--no-color");
        cmd
    }

    /// `shiftboard --no-color --db <db>`, with HOME pointing at the temp dir.
    pub fn sb(&self) -> Command {
        let mut cmd = self.bare();
        cmd.args(["--db", &self.db]);
        cmd
    }

    /// Run `init` in test mode (no config file written).
    pub fn init(&self) {
        self.sb().args(["--test", "init"]).assert().success();
    }

    pub fn run_ok(&self, args: &[&str]) {
        self.sb().args(args).assert().success();
    }

    /// Raw blob stored under the default key, read straight from SQLite.
    pub fn stored_blob(&self) -> Option<String> {
        let conn = rusqlite::Connection::open(&self.db).expect("open db");
        conn.query_row(
            "SELECT value FROM kv WHERE key = 'employeeDashboard'",
            [],
            |row| row.get(0),
        )
        .ok()
    }
}
