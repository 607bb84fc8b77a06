//! Tests for exec mode (`aws-env COMMAND...`).

use crate::support::*;

#[test]
fn test_exec_injects_resolved_values() {
    let t = Test::new();

    let output = t.exec(
        &[
            ("DB_USER", "secretsmanager://app/db##user"),
            ("DB_PORT", "secretsmanager://app/db##port"),
            ("TOKEN", "secretsmanager://token"),
        ],
        &["sh", "-c", "printf '%s|%s|%s' \"$DB_USER\" \"$DB_PORT\" \"$TOKEN\""],
    );
    assert_success(&output);
    assert_stdout_eq(&output, "admin|5432|t0k3n");
}

#[test]
fn test_exec_leaves_plain_variables_alone() {
    let t = Test::new();

    let output = t.exec(
        &[("GREETING", "  hello  ")],
        &["sh", "-c", "printf '[%s]' \"$GREETING\""],
    );
    assert_success(&output);
    assert_stdout_eq(&output, "[  hello  ]");
    assert!(t.calls().is_empty());
}

#[test]
fn test_exec_keeps_unresolved_reference() {
    let t = Test::new();

    let output = t.exec(
        &[("MISSING", "secretsmanager://missing")],
        &["sh", "-c", "printf '%s' \"$MISSING\""],
    );
    assert_success(&output);
    assert_stdout_eq(&output, "secretsmanager://missing");
    assert_stderr_contains(&output, "secret missing (path=) not found");
}

#[test]
fn test_exec_fetches_shared_secret_once() {
    let t = Test::new();

    let output = t.exec(
        &[
            ("DB_USER", "secretsmanager://app/db##user"),
            ("DB_TLS", "secretsmanager://app/db##tls"),
            ("DB_RAW", "secretsmanager://app/db"),
        ],
        &["true"],
    );
    assert_success(&output);
    assert_eq!(t.calls(), ["app/db"]);
}

#[test]
fn test_exec_passes_exit_code_through() {
    let t = Test::new();

    let output = t.exec(&[], &["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_exec_passes_command_flags_through() {
    let t = Test::new();

    let output = t.exec(&[], &["sh", "-c", "printf '%s' \"$0\"", "-s"]);
    assert_success(&output);
    assert_stdout_eq(&output, "-s");
}

#[test]
fn test_exec_warns_about_pipe_only_flags() {
    let t = Test::new();

    let output = t.exec(&[], &["-e", "-a", "ARR", "true"]);
    assert_success(&output);
    assert_stderr_contains(&output, "-a is only valid in pipe mode");
    assert_stderr_contains(&output, "-e is only valid in pipe mode");
}
