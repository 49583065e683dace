#![cfg(feature = "cli")]

use std::process::Command;

#[test]
fn sim_subcommand_sinks_the_fleet() {
    let output = Command::new(env!("CARGO_BIN_EXE_battleship"))
        .args(["sim", "--seed", "1"])
        .output()
        .expect("failed to run battleship binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["won"], true);
    assert_eq!(v["remaining"], 0);
    assert_eq!(v["sunk"], 10);
    assert_eq!(v["fleet"].as_array().map(Vec::len), Some(10));
}

#[test]
fn play_subcommand_reads_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_battleship"))
        .args(["play", "--seed", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run battleship binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"A1\nA1\nstatus\nquit\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Already fired at A1."));
    assert!(stdout.contains("Shots: 1"));
}
