use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the docguard binary.
#[allow(deprecated)]
fn docguard_cmd() -> Command {
    Command::cargo_bin("docguard").unwrap()
}

#[test]
fn help_works() {
    docguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn check_help_lists_manifest_overrides() {
    docguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--manifest-path"))
        .stdout(predicate::str::contains("--manifest-url"))
        .stdout(predicate::str::contains("--fetch-timeout-secs"));
}
