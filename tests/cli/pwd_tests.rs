use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pwd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pwd"))
}

#[test]
fn prints_working_directory() {
    let dir = tempdir().unwrap();
    let canonical = dir.path().canonicalize().unwrap();

    pwd()
        .current_dir(&canonical)
        .assert()
        .success()
        .stdout(format!("current working directory: {}\n", canonical.display()));
}

#[test]
fn nested_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().canonicalize().unwrap().join("x");
    std::fs::create_dir(&nested).unwrap();

    pwd()
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("x\n"));
}

#[test]
fn rejects_arguments() {
    pwd().arg("somewhere").assert().failure();
}

#[cfg(target_os = "linux")]
#[test]
fn removed_directory_is_fatal() {
    let dir = tempdir().unwrap();

    Command::new("sh")
        .arg("-c")
        .arg(r#"mkdir d && cd d && rmdir ../d && exec "$PWD_BIN""#)
        .env("PWD_BIN", env!("CARGO_BIN_EXE_pwd"))
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout("pwd: cannot find directory\n");
}
