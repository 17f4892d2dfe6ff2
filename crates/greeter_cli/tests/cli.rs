use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_greeter(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_greeter"))
        .current_dir(dir)
        .output()
        .expect("failed to run greeter binary")
}

#[test]
fn test_prints_hello_world() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_greeter(dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_ignores_arguments() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_greeter"))
        .arg("Alice")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
}

#[test]
fn test_ignores_files_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("greeter.toml"), "title = \"x\"\n").unwrap();
    fs::write(dir.path().join("name"), "Alice\n").unwrap();

    let output = run_greeter(dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
}
