//! End-to-end tests for the `spinlog` binary.

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the binary against an empty config directory so the user's config never leaks in.
fn spinlog(args: &[&str]) -> Output {
    spinlog_with_stdin(args, None)
}

fn spinlog_with_stdin(args: &[&str], stdin: Option<&str>) -> Output {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("spinlog.toml");
    let mut child = Command::new(env!("CARGO_BIN_EXE_spinlog"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn warn_with_default_colors() {
    let out = spinlog(&["warn", "count=%d", "42"]);
    assert!(out.status.success());
    assert_eq!(text(&out.stderr), "\x1b[38;5;202m[warning]: \x1b[0mcount=42\n");
    assert!(out.stdout.is_empty());
}

#[test]
fn color_flag_overrides_config() {
    let out = spinlog(&["--color", "never", "error", "%s failed with %d", "sync", "-2"]);
    assert!(out.status.success());
    assert_eq!(text(&out.stderr), "[error]: sync failed with -2\n");
}

#[test]
fn info_interprets_escapes_without_newline() {
    let out = spinlog(&["info", "a\\tb\\n%05.1f", "3.14"]);
    assert!(out.status.success());
    assert_eq!(text(&out.stdout), "a\tb\n003.1");
    assert!(out.stderr.is_empty());
}

#[test]
fn log_severity() {
    let out = spinlog(&["--color", "never", "log", "100%% done"]);
    assert_eq!(text(&out.stderr), "[log]: 100% done\n");
}

#[test]
fn argument_count_mismatch_fails() {
    let out = spinlog(&["--color", "never", "warn", "%d and %d", "1"]);
    assert!(!out.status.success());
    let stderr = text(&out.stderr);
    assert!(stderr.starts_with("[error]: "));
    assert!(stderr.contains("expects 2 argument(s), got 1"));
}

#[test]
fn bad_number_fails() {
    let out = spinlog(&["--color", "never", "warn", "%d", "ten"]);
    assert!(!out.status.success());
    assert!(text(&out.stderr).contains("invalid number"));
}

#[test]
fn debug_follows_feature() {
    let out = spinlog(&["--color", "never", "debug", "x=%d", "1"]);
    assert!(out.status.success());
    if cfg!(feature = "debug") {
        assert_eq!(text(&out.stderr), "[debug]: x=1\n");
    } else {
        assert!(out.stderr.is_empty());
    }
}

#[test]
fn json_argument() {
    let out = spinlog(&["--color", "never", "json", r#"{"severity":"error","msg":"boom %d"}"#]);
    assert!(out.status.success());
    assert_eq!(text(&out.stderr), "[error]: boom %d\n");
}

#[test]
fn json_stdin_lines() {
    let input = "{\"severity\":\"warn\",\"msg\":\"one\"}\n\n{\"msg\":\"two\"}\n";
    let out = spinlog_with_stdin(&["--color", "never", "json", "-"], Some(input));
    assert!(out.status.success());
    assert_eq!(text(&out.stderr), "[warning]: one\n");
    assert_eq!(text(&out.stdout), "two");
}

#[test]
fn json_invalid_fails() {
    let out = spinlog(&["--color", "never", "json", r#"{"severity":"loud","msg":"x"}"#]);
    assert!(!out.status.success());
    assert!(text(&out.stderr).contains("unknown severity: 'loud'"));
}

#[test]
fn clear_writes_sequence() {
    let out = spinlog(&["clear"]);
    assert!(out.status.success());
    assert_eq!(text(&out.stdout), "\x1b[1;1H\x1b[2J");
}

#[test]
fn severities_lists_everything() {
    let out = spinlog(&["--color", "never", "severities"]);
    assert!(out.status.success());
    let stdout = text(&out.stdout);
    let stderr = text(&out.stderr);
    assert!(stdout.starts_with("info"));
    assert!(stderr.contains("[warning]: warn on stderr (color 202)"));
    assert!(stderr.contains("[error]: error on stderr (color 160)"));
    assert!(stderr.contains("[log]: log on stderr (color 40)"));
}

#[test]
fn app_override_from_config() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("spinlog.toml");
    std::fs::write(&config, "[general]\ncolors = \"always\"\n[apps.ci]\ncolors = \"never\"\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_spinlog"))
        .arg("--config")
        .arg(&config)
        .args(["--app", "ci", "warn", "plain"])
        .output()
        .unwrap();
    assert_eq!(text(&out.stderr), "[warning]: plain\n");
}

#[test]
fn shell_reads_commands_until_eof() {
    let input = "warn \"disk %s at %d%%\" sda 93\nbogus\nquit\n";
    let out = spinlog_with_stdin(&["--color", "never", "shell"], Some(input));
    assert!(out.status.success());
    let stderr = text(&out.stderr);
    assert!(stderr.contains("[warning]: disk sda at 93%\n"));
    assert!(stderr.contains("unknown severity: 'bogus'"));
}
