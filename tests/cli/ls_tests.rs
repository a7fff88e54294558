use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

fn ls() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ls"))
}

fn fixture() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "# hi\n").unwrap();
    fs::write(dir.path().join("big.bin"), vec![0u8; 1500]).unwrap();
    fs::write(dir.path().join(".env"), "KEY=1\n").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    dir
}

fn sorted_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect();
    lines.sort();
    lines
}

#[test]
fn lists_visible_entries() {
    let dir = fixture();
    let output = ls().arg(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(sorted_lines(&output.stdout), ["big.bin", "readme.md", "src"]);
}

#[test]
fn all_flag_includes_dotfiles() {
    let dir = fixture();
    let output = ls().arg("-a").arg(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        sorted_lines(&output.stdout),
        [".env", "big.bin", "readme.md", "src"]
    );
}

#[test]
fn defaults_to_current_directory() {
    let dir = fixture();
    let output = ls().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(sorted_lines(&output.stdout), ["big.bin", "readme.md", "src"]);
}

#[test]
fn missing_path_is_fatal() {
    let dir = fixture();
    let missing = dir.path().join("does-not-exist");

    ls().arg(&missing)
        .assert()
        .code(1)
        .stdout(format!(
            "ls: cannot access: {}: No such file or directory\n",
            missing.display()
        ));
}

#[test]
fn fatal_error_stops_remaining_paths() {
    let first = fixture();
    let last = tempdir().unwrap();
    fs::write(last.path().join("unreached"), "").unwrap();

    ls().arg(first.path())
        .arg(first.path().join("nope"))
        .arg(last.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("readme.md"))
        .stdout(predicate::str::contains("cannot access"))
        .stdout(predicate::str::contains("unreached").not());
}

#[test]
fn long_form_has_four_fields_in_order() {
    let dir = fixture();
    let output = ls().arg("-l").arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let lines = sorted_lines(&output.stdout);
    let big = lines.iter().find(|l| l.ends_with(" big.bin")).unwrap();
    let fields: Vec<&str> = big.split_whitespace().collect();
    // mode, size, day, month, time, name
    assert_eq!(fields.len(), 6);
    assert!(fields[0].starts_with('-'));
    assert_eq!(fields[0].len(), 10);
    assert_eq!(fields[1], "1500");
    assert_eq!(fields[4].len(), 5);
    assert_eq!(fields[5], "big.bin");

    let src = lines.iter().find(|l| l.ends_with(" src")).unwrap();
    assert!(src.starts_with('d'));
}

#[test]
fn human_readable_sizes() {
    let dir = fixture();
    ls().args(["-l", "-h"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1.5K "))
        .stdout(predicate::str::contains("1500").not());
}

#[test]
fn bundled_flags_work() {
    let dir = fixture();
    ls().arg("-lah")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".env"))
        .stdout(predicate::str::contains("1.5K"));
}

#[test]
fn color_wraps_directories() {
    let dir = fixture();
    let output = ls().arg("-G").arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let lines = sorted_lines(&output.stdout);
    let src = lines.iter().find(|l| l.contains("src")).unwrap();
    assert_eq!(src, &format!("{CYAN}src{RESET}"));
    assert!(lines.contains(&"readme.md".to_owned()));
}

#[test]
fn no_escapes_without_color_flag() {
    let dir = fixture();
    ls().arg("-l")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn repeated_runs_are_identical() {
    let dir = fixture();
    let first = ls().arg("-la").arg(dir.path()).output().unwrap();
    let second = ls().arg("-la").arg(dir.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn help_is_long_only() {
    ls().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("human-readable"));
}
