//! The `permission-gate` binary: environment in, stdout commands and exit code out.

use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

/// Binary with a clean environment plus a valid token and context.
fn gate_cmd() -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("permission-gate");
    cmd.timeout(Duration::from_secs(10))
        .env_clear()
        .env("GITHUB_TOKEN", "test-token")
        .env("GITHUB_ACTOR", "actor")
        .env("GITHUB_REPOSITORY", "owner/repo")
        .env("GITHUB_API_URL", "http://127.0.0.1:9");
    cmd
}

#[test]
fn config_failure_keeps_boolean_encoding() {
    gate_cmd()
        .env("INPUT_OUTPUT-ENCODING", "boolean")
        .env("ADD_TEST_PERMISSION", "maybe")
        .env("INPUT_REQUIRED-PERMISSION", "read")
        .assert()
        .code(1)
        .stdout(
            "::set-output name=has-permission::false\n\
             ::error::Configuration error: ADD_TEST_PERMISSION: expected a boolean, got \"maybe\"\n",
        );
}

#[test]
fn config_failure_honors_cli_encoding() {
    gate_cmd()
        .env("ADD_TEST_PERMISSION", "maybe")
        .args(["--encoding", "boolean", "--required-permission", "read"])
        .assert()
        .code(1)
        .stdout(contains("::set-output name=has-permission::false\n"));
}

#[test]
fn config_failure_defaults_to_flag() {
    gate_cmd()
        .env("ADD_TEST_PERMISSION", "maybe")
        .assert()
        .code(1)
        .stdout(contains("::set-output name=has-permission::\n"));
}

#[test]
fn invalid_permission_fails_before_lookup() {
    gate_cmd()
        .env("INPUT_OUTPUT-ENCODING", "boolean")
        .env("INPUT_REQUIRED-PERMISSION", "superadmin")
        .assert()
        .code(1)
        .stdout(
            "::set-output name=has-permission::false\n\
             ::error::Required permission must be one of: none,read,write,admin\n",
        );
}

#[test]
fn missing_context_keeps_configured_encoding() {
    gate_cmd()
        .env_remove("GITHUB_ACTOR")
        .env("INPUT_OUTPUT-ENCODING", "boolean")
        .env("INPUT_REQUIRED-PERMISSION", "read")
        .assert()
        .code(1)
        .stdout(contains("::set-output name=has-permission::false\n"))
        .stdout(contains("::error::Configuration error: GITHUB_ACTOR must be set"));
}
