// End-to-end: run the built binaries and compare stdout byte for byte.
use std::io::Write;
use std::process::{Command, Output};

fn run_lifecycle(config: Option<&std::path::Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lambda_lifecycle"));
    cmd.env_remove("RUST_LOG");
    match config {
        Some(path) => cmd.env("LAMBDA_LIFECYCLE_CONFIG", path),
        None => cmd.env_remove("LAMBDA_LIFECYCLE_CONFIG"),
    };
    cmd.output().expect("failed to run lambda_lifecycle")
}

#[test]
fn lifecycle_trace_is_byte_exact() {
    let output = run_lifecycle(None);
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Object erstellt\n\
         Objekt kopiert\n\
         Hello world\n\
         5\n\
         Hello object\n\
         Hello object\n\
         Objekt zerstoert\n\
         Objekt zerstoert\n"
    );
}

#[test]
fn lifecycle_trace_is_deterministic() {
    let first = run_lifecycle(None);
    let second = run_lifecycle(None);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn debug_logging_stays_off_stdout() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let output = run_lifecycle(Some(file.path()));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 8);
    assert!(!output.stderr.is_empty());
}

#[test]
fn config_overrides_closure_output() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "greeting = \"Servus\"").unwrap();
    writeln!(file, "captured_number = -12").unwrap();

    let output = run_lifecycle(Some(file.path()));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[2], "Servus");
    assert_eq!(lines[3], "-12");
}

#[test]
fn broken_config_exits_with_code_one() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "captured_number = [").unwrap();

    let output = run_lifecycle(Some(file.path()));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse"));
}

#[test]
fn missing_config_exits_with_code_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_lifecycle(Some(&dir.path().join("absent.toml")));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn parameter_passing_trace() {
    let output = Command::new(env!("CARGO_BIN_EXE_p2_parameter_passing"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run p2_parameter_passing");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Object erstellt\n\
         Objekt kopiert\n\
         Hello object\n\
         Objekt zerstoert\n\
         Hello object\n\
         Objekt zerstoert\n"
    );
}
