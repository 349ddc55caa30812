//! Integration tests for the command-line surface

use assert_cmd::Command;
use predicates::prelude::*;

fn hackterm() -> Command {
    Command::cargo_bin("hackterm").unwrap()
}

#[test]
fn help_lists_every_flag() {
    hackterm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--no-browser"))
        .stdout(predicate::str::contains("--no-minimize"))
        .stdout(predicate::str::contains("--scenarios-dir"))
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn version_reports_package_version() {
    hackterm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "hackterm ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn out_of_range_port_is_a_usage_error() {
    hackterm()
        .args(["--port", "70000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    hackterm()
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn malformed_host_is_a_usage_error() {
    hackterm()
        .args(["--host", "not-an-address"])
        .assert()
        .code(2);
}

#[cfg(unix)]
#[test]
fn sigterm_shuts_down_with_success() {
    use std::io::{BufRead, BufReader};
    use std::process::{Command as StdCommand, Stdio};
    use std::time::{Duration, Instant};

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("hackterm"))
        .args(["--no-browser", "--no-minimize", "--port", "0"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    loop {
        line.clear();
        let read = stdout.read_line(&mut line).unwrap();
        assert!(read > 0, "exited before announcing it was serving");
        if line.contains("Press Ctrl+C") {
            break;
        }
    }

    let killed = StdCommand::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("still running 10s after SIGTERM");
        }
        std::thread::sleep(Duration::from_millis(20));
    };
    assert!(status.success(), "{status:?}");
    drop(stdout);
}
