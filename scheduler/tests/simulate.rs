use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use similar_asserts::assert_eq;

fn simulate(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cpu-scheduling-sim"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("should spawn simulator");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("should write stdin");

    child.wait_with_output().expect("simulator should exit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

#[test]
fn interactive_round_robin_session() {
    let output = simulate(&[], "3\n0 4 0\n1 3 0\n2 5 0\n4\n2\n");
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("Enter Time Quantum: "));
    assert!(stdout.contains("=== Round Robin Scheduling ===\nTime Quantum: 2\n"));
    assert!(stdout.contains("Average Waiting Time: 4.67\n"));
    assert!(stdout.contains("Average Turnaround Time: 8.67\n"));
}

#[test]
fn algorithm_from_command_line_skips_menu() {
    let output = simulate(&["-a", "sjf"], "3\n0 5 0\n1 3 0\n2 8 0\n");
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(!stdout.contains("Choose Scheduling Algorithm"));
    let table: Vec<_> = stdout
        .lines()
        .skip_while(|line| !line.starts_with("PID"))
        .skip(1)
        .take(3)
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .collect();
    assert_eq!(
        table,
        vec![
            vec!["1", "0", "5", "0", "5"],
            vec!["2", "1", "3", "4", "7"],
            vec!["3", "2", "8", "6", "14"],
        ]
    );
}

#[test]
fn invalid_menu_choice_fails_before_simulating() {
    let output = simulate(&[], "1\n0 1 0\n9\n");
    assert!(!output.status.success());

    assert!(!stdout(&output).contains("Scheduling ==="));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid algorithm choice \"9\""));
}

#[test]
fn malformed_number_fails() {
    let output = simulate(&["-a", "fcfs"], "2\n0 x 0\n");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected a burst time, got \"x\""));
}

#[test]
fn compare_workload_file() {
    let mut workload = tempfile::NamedTempFile::new().expect("should create workload file");
    write!(
        workload,
        r#"{{"processes": [
            {{"arrival": 0, "burst": 5, "priority": 2}},
            {{"arrival": 1, "burst": 3, "priority": 1}},
            {{"arrival": 2, "burst": 8, "priority": 4}},
            {{"arrival": 3, "burst": 6, "priority": 3}}
        ]}}"#
    )
    .expect("should write workload");

    let path = workload.path().to_str().expect("utf-8 path");
    let output = simulate(&["--compare", "-q", "3", "-w", path], "");
    assert!(output.status.success());

    let stdout = stdout(&output);
    for title in [
        "=== FCFS Scheduling ===",
        "=== SJF Scheduling ===",
        "=== Priority Scheduling ===",
        "=== Round Robin Scheduling ===\nTime Quantum: 3\n",
        "=== SRT Scheduling ===",
        "=== HRRN Scheduling ===",
        "=== Feedback Scheduling ===\nLevels: 3, Base Quantum: 3\n",
        "=== Comparison ===",
    ] {
        assert!(stdout.contains(title), "missing {title}");
    }
}
