//! Exit behaviour of the `tick_sched` binary.

use std::process::Command;

fn tick_sched() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tick_sched"))
}

#[test]
fn unknown_policy_is_fatal_and_names_it() {
    let out = tick_sched()
        .args(["--policy", "mlfq"])
        .output()
        .expect("spawn tick_sched");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'mlfq'"), "stderr was: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn known_policy_runs_to_completion() {
    let out = tick_sched()
        .args([
            "--policy",
            "rrq",
            "--quantum",
            "4",
            "--ticks",
            "5",
            "--p-arrival",
            "1",
            "--short-ticks",
            "3",
            "--long-ticks",
            "7",
        ])
        .output()
        .expect("spawn tick_sched");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("t=0 ")));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("job ")).count(), 5);
}
