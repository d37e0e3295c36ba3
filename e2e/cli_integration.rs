// e2e/cli_integration.rs: the `fastlz` binary as a black box
//
// Runs the built binary through std::process::Command: compress/decompress
// round-trips via files and stdio, the printed length contract, level
// selection through flags and FASTLZ_LEVEL, and exit codes on failure.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Locate the `fastlz` binary produced by Cargo.
fn fastlz_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_fastlz") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("fastlz");
    p
}

fn make_temp_input(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(fastlz_bin())
        .args(args)
        .env_remove("FASTLZ_LEVEL")
        .output()
        .expect("failed to run fastlz")
}

fn printed_length(out: &std::process::Output) -> usize {
    String::from_utf8_lossy(&out.stdout).trim().parse().unwrap()
}

// ── 1. File round-trip ───────────────────────────────────────────────────────

#[test]
fn test_cli_compress_decompress_roundtrip() {
    let original = b"Hello, FastLZ!\n".repeat(300);
    let (dir, input) = make_temp_input(&original);
    let packed = dir.path().join("output.flz");
    let restored = dir.path().join("restored.txt");

    let out = run(&["compress", input.to_str().unwrap(), packed.to_str().unwrap()]);
    assert!(out.status.success(), "compress should exit 0");
    let len = printed_length(&out);
    assert_eq!(len, original.len());
    assert!(fs::metadata(&packed).unwrap().len() < original.len() as u64);

    let out = run(&[
        "decompress",
        "--size",
        &len.to_string(),
        packed.to_str().unwrap(),
        restored.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "decompress should exit 0");
    assert_eq!(fs::read(&restored).unwrap(), original);
}

#[test]
fn test_cli_output_is_raw_stream() {
    let (dir, input) = make_temp_input(b"\x01hello\x00world\x00\x00");
    let packed = dir.path().join("out.flz");
    let out = run(&["compress", input.to_str().unwrap(), packed.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(printed_length(&out), 14);

    let mut expected = vec![0x0d];
    expected.extend_from_slice(b"\x01hello\x00world\x00\x00");
    assert_eq!(fs::read(&packed).unwrap(), expected);
}

// ── 2. Level selection ───────────────────────────────────────────────────────

#[test]
fn test_cli_level_flag_sets_tag() {
    let (dir, input) = make_temp_input(b"short input");
    let packed = dir.path().join("out.flz");
    let out = run(&["compress", "-l", "2", input.to_str().unwrap(), packed.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(fs::read(&packed).unwrap()[0] >> 5, 1);
}

#[test]
fn test_cli_env_level_default() {
    let (dir, input) = make_temp_input(b"short input");
    let packed = dir.path().join("out.flz");
    let status = Command::new(fastlz_bin())
        .args(["compress", input.to_str().unwrap(), packed.to_str().unwrap()])
        .env("FASTLZ_LEVEL", "2")
        .stdout(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&packed).unwrap()[0] >> 5, 1);
}

#[test]
fn test_cli_bad_level_is_usage_error() {
    let (dir, input) = make_temp_input(b"x");
    let packed = dir.path().join("out.flz");
    let out = run(&["compress", "-l", "3", input.to_str().unwrap(), packed.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(!packed.exists());
}

// ── 3. Stdio ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_stdio_pipeline() {
    let original = b"piped through stdin and stdout, piped through stdin and stdout".to_vec();

    let mut child = Command::new(fastlz_bin())
        .args(["-q", "compress", "-", "-"])
        .env_remove("FASTLZ_LEVEL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&original).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    // length goes to stderr when stdout carries the stream
    let len: usize = String::from_utf8_lossy(&out.stderr).trim().parse().unwrap();
    assert_eq!(len, original.len());
    let packed = out.stdout;

    let mut child = Command::new(fastlz_bin())
        .args(["decompress", "--size", &len.to_string(), "-", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&packed).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, original);
}

// ── 4. Failures ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_wrong_size_fails() {
    let original = b"abcabcabcabcabcabc".to_vec();
    let (dir, input) = make_temp_input(&original);
    let packed = dir.path().join("out.flz");
    let restored = dir.path().join("restored");
    assert!(run(&["compress", input.to_str().unwrap(), packed.to_str().unwrap()])
        .status
        .success());

    let out = run(&[
        "decompress",
        "--size",
        &(original.len() + 1).to_string(),
        packed.to_str().unwrap(),
        restored.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("could not decompress"));
    assert!(!restored.exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let out = run(&["compress", missing.to_str().unwrap(), "-"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read"));
}

#[test]
fn test_cli_quiet_suppresses_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let out = run(&["-qq", "compress", missing.to_str().unwrap(), "-"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty());
}
