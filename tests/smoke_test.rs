/// Smoke tests to verify the binary runs without panicking
use std::process::{Command, Output};

fn termglobe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termglobe"))
        .args(args)
        // keep a real user config out of the picture
        .env("XDG_CONFIG_HOME", "/nonexistent/termglobe-smoke")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute termglobe")
}

#[test]
fn binary_shows_help() {
    let output = termglobe(&["--help"]);

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("termglobe"), "Help output should mention termglobe");
    assert!(stdout.contains("render"));
    assert!(stdout.contains("live"));
}

#[test]
fn binary_shows_version() {
    let output = termglobe(&["--version"]);

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = termglobe(&["nonexistent-command"]);

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}

#[test]
fn distance_quarter_of_the_equator() {
    let output = termglobe(&["distance", "0,0", "0,90", "--radius", "6371"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("10007.54"), "unexpected distance: {stdout}");
    assert!(stdout.trim_end().ends_with("km"));
}

#[test]
fn interpolate_antipodal_points_is_an_error() {
    let output = termglobe(&["interpolate", "0,0", "0,180", "0.5"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("termglobe:"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("panicked at"));
}

#[test]
fn render_prints_braille() {
    let output = termglobe(&["render", "--cols", "30", "--rows", "15", "--land"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 15);
    assert!(
        stdout.chars().any(|c| ('\u{2801}'..='\u{28ff}').contains(&c)),
        "render output should contain braille dots"
    );
}

#[test]
fn render_rejects_missing_config() {
    let output = termglobe(&["render", "--config", "/nonexistent/termglobe.toml"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("settings error"));
}

#[test]
fn live_rejects_infinite_frame_time() {
    let output = termglobe(&["live", "--time", "inf"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("termglobe:"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("panicked at"));
}
