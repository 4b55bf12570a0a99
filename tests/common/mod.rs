//! Shared test infrastructure for integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A database written to a temp dir for one test run.
pub struct TestDatabase {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDatabase {
    pub fn new(collection: &serde_json::Value) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("eix-current.json");
        std::fs::write(&path, serde_json::to_vec_pretty(collection)?)?;
        Ok(Self { _dir: dir, path })
    }

    /// Run the binary against this database with extra args placed first.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        let output = Command::new(bin())
            .args(args)
            .arg(&self.path)
            .env_remove("RUST_LOG")
            .output()?;
        Ok(output)
    }
}

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_eix-pycheck")
}

/// Run the binary with `stdin` piped as the database.
pub fn run_with_stdin(args: &[&str], stdin: &[u8]) -> anyhow::Result<Output> {
    let mut child = Command::new(bin())
        .args(args)
        .arg("-")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or_else(|| anyhow::anyhow!("stdin not piped"))?
        .write_all(stdin)?;
    Ok(child.wait_with_output()?)
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// A stable main-tree version with the given `REQUIRED_USE`.
pub fn stable_version(id: &str, required_use: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "required_use": required_use,
        "system_key_flags": { "key_flag": ["ARCHSTABLE"] }
    })
}
