// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the `sened` binary.
//!
//! Every run passes an explicit `--config` so the host's config files never
//! leak into the results.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::{NamedTempFile, TempDir};

struct Env {
    dir: TempDir,
    config: std::path::PathBuf,
}

impl Env {
    fn new(config: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("sened.toml");
        std::fs::write(&path, config).expect("write config");
        Self { dir, config: path }
    }

    fn document(&self, name: &str, text: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).expect("write document");
        path
    }

    fn run(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_sened"))
            .arg("--config")
            .arg(&self.config)
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn sened");
        {
            let mut pipe = child.stdin.take().expect("stdin");
            if let Some(text) = stdin {
                pipe.write_all(text.as_bytes()).expect("write stdin");
            }
        }
        child.wait_with_output().expect("wait for sened")
    }
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn classify_file_as_json() {
    let env = Env::new("");
    let doc = env.document(
        "invoice.txt",
        "INVOICE NUMBER INV-001 TOTAL AMOUNT $1000.00 TAX AMOUNT $150.00",
    );
    let out = env.run(&["classify", doc.to_str().unwrap(), "--json"], None);
    assert!(out.status.success());
    let value = json(&out);
    assert_eq!(value["category"], "invoice");
    assert_eq!(value["decision"], "accepted");
}

#[test]
fn classify_reads_stdin() {
    let env = Env::new("");
    let out = env.run(
        &["classify", "-", "--json"],
        Some("This document is a file on paper"),
    );
    assert!(out.status.success());
    assert_eq!(json(&out)["category"], "other");
}

#[test]
fn classify_plain_report() {
    let env = Env::new("");
    let out = env.run(&["classify", "--plain"], Some("Hi."));
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[FALLBACK] other"));
    assert!(stdout.contains("text too short"));
}

#[test]
fn input_is_truncated_to_max_chars() {
    let env = Env::new("[input]\nmax_chars = 5\n");
    let out = env.run(&["analyze", "--json"], Some("INVOICE NUMBER INV-001"));
    assert!(out.status.success());
    let value = json(&out);
    assert_eq!(value["preview"], "INVOI");
    assert_eq!(value["classification"]["decision"], "too_short");
}

#[test]
fn analyze_reports_script() {
    let env = Env::new("");
    let doc = env.document("amharic.txt", "የሽያጭ ፋክተር ቁጥር INV-001 ጠቅላላ መጠን 1000 ብር");
    let out = env.run(&["analyze", doc.to_str().unwrap(), "--json"], None);
    assert!(out.status.success());
    let value = json(&out);
    assert_eq!(value["script"], "ethiopic");
    assert_eq!(value["word_count"], 8);
    assert_eq!(value["classification"]["category"], "invoice");
}

#[test]
fn categories_include_configured_rules() {
    let env = Env::new(
        "[[classifier.rules]]\ncategory = \"other\"\npattern = \"memo\"\nweight = 1.0\n",
    );
    let out = env.run(&["categories", "--json"], None);
    assert!(out.status.success());
    let value = json(&out);
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 9);
    let other = rows.iter().find(|r| r["id"] == "other").expect("other row");
    assert_eq!(other["fallback"], true);
    assert!(other["rules"].as_u64().unwrap() >= 1);
}

#[test]
fn self_test_passes() {
    let env = Env::new("");
    let out = env.run(&["self-test", "--plain"], None);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("14/14 passed"));
}

#[test]
fn self_test_fails_with_impossible_threshold() {
    let env = Env::new("[classifier]\nconfidence_threshold = 1000.0\n");
    let out = env.run(&["self-test", "--plain"], None);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("self-test failed"));
}

#[test]
fn missing_input_file_exits_with_io_code() {
    let env = Env::new("");
    let out = env.run(&["classify", "/nonexistent/sened/input.txt"], None);
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read"));
}

#[test]
fn invalid_config_exits_with_config_code() {
    let env = Env::new("[classifier]\nconfidence_treshold = 2.0\n");
    let out = env.run(&["categories"], None);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn unreadable_config_path_exits_with_config_code() {
    let missing = NamedTempFile::new().expect("temp file").path().to_path_buf();
    let out = Command::new(env!("CARGO_BIN_EXE_sened"))
        .arg("--config")
        .arg(&missing)
        .arg("categories")
        .output()
        .expect("run sened");
    assert_eq!(out.status.code(), Some(2));
}
