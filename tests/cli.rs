//! Runs of the `hamming128` binary: exit status, stderr and report output.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn hamming128(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hamming128"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(line) = stdin {
            pipe.write_all(line.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn table_rows(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| {
            line.split_whitespace()
                .next()
                .and_then(|first| first.parse::<usize>().ok())
                .is_some()
        })
        .collect()
}

#[test]
fn test_short_stdin_line_rejected() {
    let line = format!("{}\n", "0".repeat(127));
    let output = hamming128(&[], Some(&line));
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter exactly 128 bits (0s and 1s)"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_stdin_rejected() {
    let output = hamming128(&[], Some("\n"));
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter the 128-bit code"));
}

#[test]
fn test_stdin_payload_processed() {
    let line = format!("{}\n", "01".repeat(64));
    let output = hamming128(&["--positions", "8"], Some(&line));
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Corrected 128-bit code: {}", "01".repeat(64))));
}

#[test]
fn test_generated_payload_fully_corrected() {
    for seed in ["1", "5", "2024"] {
        let output = hamming128(&["--generate", "--seed", seed], None);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout
                .trim_end()
                .ends_with("Successfully corrected 128 out of 128 bits"),
            "seed {}: {}",
            seed,
            stdout
        );
    }
}

#[test]
fn test_generated_payload_is_reproducible() {
    let a = hamming128(&["--generate", "--seed", "77"], None);
    let b = hamming128(&["--generate", "--seed", "77"], None);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_bad_hex_rejected() {
    let output = hamming128(&["--hex", "0123"], None);
    assert_eq!(output.status.code(), Some(1));
    let output = hamming128(&["--hex", &"zz".repeat(16)], None);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_hex_payload_processed() {
    let output = hamming128(&["--hex", &"00".repeat(16), "--positions", "3"], None);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All errors successfully corrected!"));
}

#[test]
fn test_fixed_positions_table() {
    let code = "0".repeat(128);
    let output = hamming128(
        &["--positions", "1,2,3,4,5,6,7,8", "--code", &code],
        None,
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 16);
    for (i, row) in rows.iter().enumerate() {
        let fields: Vec<String> = row.split_whitespace().map(String::from).collect();
        let expected = vec![
            (i + 1).to_string(),
            "00000000".to_string(),
            (i % 8 + 1).to_string(),
            "00000000".to_string(),
        ];
        assert_eq!(fields, expected);
    }
    assert!(stdout
        .trim_end()
        .ends_with("Successfully corrected 128 out of 128 bits"));
}

#[test]
fn test_bad_flags_exit_with_failure() {
    let output = hamming128(&["--bogus"], None);
    assert_eq!(output.status.code(), Some(1));
    let output = hamming128(&["--positions", "9", "--generate"], None);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help() {
    let output = hamming128(&["--help"], None);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("USAGE:"));
}
