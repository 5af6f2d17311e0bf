use assert_cmd::prelude::*;
use ropee::LOG_FILE_NAME;
use std::fs;
use std::process::Command;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn cli_start_and_log() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("ropee-server").unwrap();
    let mut child = cmd
        .args(&[
            "--listen-addr",
            "127.0.0.1:0",
            "--log-file-path",
            temp_dir.path().to_str().unwrap(),
        ])
        .spawn()
        .unwrap();
    thread::sleep(Duration::from_secs(1));
    child.kill().expect("Closed before killed");

    let content = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();
    assert!(content.contains("starting server"));
    assert!(content.contains("level=info"));
}

#[test]
fn cli_invalid_timeout() {
    Command::cargo_bin("ropee-server")
        .unwrap()
        .args(&["--timeout", "soon", "--log-file-path", "-"])
        .assert()
        .failure();
    Command::cargo_bin("ropee-server")
        .unwrap()
        .args(&["--timeout", "0", "--log-file-path", "-"])
        .assert()
        .failure();
}

#[test]
fn cli_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("ropee-server")
        .unwrap()
        .args(&[
            "--config",
            temp_dir.path().join("missing.yaml").to_str().unwrap(),
            "--log-file-path",
            "-",
        ])
        .assert()
        .failure();
}

#[test]
fn cli_unwritable_log_dir() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("ropee-server")
        .unwrap()
        .args(&[
            "--listen-addr",
            "127.0.0.1:0",
            "--log-file-path",
            temp_dir.path().join("no").join("such").join("dir").to_str().unwrap(),
        ])
        .assert()
        .failure();
}
