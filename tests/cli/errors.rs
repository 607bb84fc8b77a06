//! Tests for error handling, flags and logging.

use crate::support::*;

#[test]
fn test_help_lists_modes() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "--pipe");
    assert_stdout_contains(&output, "secretsmanager://SECRET##JMESPATH");
}

#[test]
fn test_array_and_export_conflict_in_pipe_mode() {
    let t = Test::new();

    let output = t.pipe(&["-a", "ARR", "-e"], "A=1\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "only one of -a or -e can be used at a time");
    assert_stdout_eq(&output, "");
}

#[test]
fn test_conflict_is_silent_with_silent_flag() {
    let t = Test::new();

    let output = t.pipe(&["-s", "-a", "ARR", "-e"], "A=1\n");
    assert_failure(&output);
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_exec_without_command_fails() {
    let t = Test::new();

    let output = t.exec(&[], &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_exec_unknown_command_fails() {
    let t = Test::new();

    let output = t.exec(&[], &["aws-env-test-no-such-program"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found: aws-env-test-no-such-program");
}

#[test]
fn test_sdk_store_requires_feature() {
    if cfg!(feature = "aws") {
        return;
    }
    let t = Test::new();

    let output = t.cmd().args(["--store", "sdk", "-p"]).write_stdin("A=1\n").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--features aws");
}

#[test]
fn test_debug_log_via_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("AWS_ENV_LOG", "aws_env=debug")
        .args(["--store", "cli", "-p", "-s"])
        .write_stdin("T=secretsmanager://token\nM=secretsmanager://missing\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "fetched secret");
    assert_stderr_contains(&output, "secret fetch failed");
    // values never reach the logs
    assert_stderr_excludes(&output, "t0k3n");
}

#[test]
fn test_verbose_flag_enables_debug() {
    let t = Test::new();

    let output = t.pipe(&["-v"], "T=secretsmanager://token\n");
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::new();

    let output = t.pipe(&[], "T=secretsmanager://token\n");
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_json_log_format() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("AWS_ENV_LOG", "aws_env=debug")
        .env("AWS_ENV_LOG_FORMAT", "json")
        .args(["--store", "cli", "-p", "-s"])
        .write_stdin("T=secretsmanager://token\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "\"level\":\"DEBUG\"");
    assert_stderr_contains(&output, "\"kind\":\"cli\"");
}

#[test]
fn test_region_and_profile_reach_the_cli() {
    let t = Test::new();
    // The fake aws ignores extra args; a wrapper records them
    let wrapper = t.dir.path().join("aws");
    let original = std::fs::read_to_string(&wrapper).unwrap();
    let recording = original.replacen(
        "#!/bin/sh\n",
        "#!/bin/sh\necho \"$*\" >> \"$AWS_ENV_TEST_CALLS.args\"\n",
        1,
    );
    std::fs::write(&wrapper, recording).unwrap();

    let output = t.pipe(
        &["-s", "--region", "eu-west-1", "--profile", "ops"],
        "T=secretsmanager://token\n",
    );
    assert_success(&output);

    let args_log = format!("{}.args", t.calls_path().display());
    let args = std::fs::read_to_string(args_log).unwrap();
    assert!(args.contains("--region eu-west-1 --profile ops"), "got: {}", args);
}
