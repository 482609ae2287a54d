use std::process::{Command, Output};
use std::time::{Duration, Instant};

const SLOWPROD_EXE: &str = env!("CARGO_BIN_EXE_slowprod");

const MESSAGE: &str = "this is a default (sheddableplus)\n";

fn run_fixture(args: &[&str]) -> Output {
    Command::new(SLOWPROD_EXE)
        .args(args)
        .output()
        .expect("Failed to spawn fixture")
}

fn assert_usage_error(output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "usage errors must not write output");
    assert!(!output.stderr.is_empty(), "expected usage text on stderr");
}

#[test]
fn emits_bursts_around_the_delayed_line() {
    let start = Instant::now();
    let output = run_fixture(&["2", "1"]);
    let elapsed = start.elapsed();

    assert!(output.status.success());
    // Two lines, the delayed line, two lines.
    assert_eq!(output.stdout, MESSAGE.repeat(5).into_bytes());
    assert!(
        elapsed >= Duration::from_secs(1),
        "the pause before the newline must hold for the full delay"
    );
}

#[test]
fn line_count_scales_both_bursts() {
    let output = run_fixture(&["3", "1"]);

    assert!(output.status.success());
    assert_eq!(output.stdout, MESSAGE.repeat(7).into_bytes());
}

#[test]
fn zero_num_lines_is_a_usage_error() {
    assert_usage_error(&run_fixture(&["0"]));
}

#[test]
fn zero_delay_is_a_usage_error() {
    assert_usage_error(&run_fixture(&["1", "0"]));
}

#[test]
fn too_many_arguments_are_rejected() {
    assert_usage_error(&run_fixture(&["1", "1", "1"]));
}

#[test]
fn non_numeric_argument_is_rejected() {
    assert_usage_error(&run_fixture(&["five"]));
}
