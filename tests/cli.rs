// Black-box checks on the regex-tree binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn default_pattern_prints_a_tree() {
    let mut cmd = Command::cargo_bin("regex-tree").unwrap();
    cmd.assert()
        .success()
        .stdout(contains("OR").and(contains("OPTIONAL")));
}

#[test]
fn explicit_pattern() {
    let mut cmd = Command::cargo_bin("regex-tree").unwrap();
    cmd.arg("a+");
    cmd.assert()
        .success()
        .stdout(contains("ONE_OR_MORE").and(contains("CHAR [97, 98)")));
}

#[test]
fn lenient_mode_reports_leftover_input() {
    let mut cmd = Command::cargo_bin("regex-tree").unwrap();
    cmd.arg("a|b|c");
    cmd.assert()
        .success()
        .stdout(contains("OR"))
        .stderr(contains("trailing input"));
}

#[test]
fn strict_mode_rejects_leftover_input() {
    let mut cmd = Command::cargo_bin("regex-tree").unwrap();
    cmd.arg("--strict").arg("a|b|c");
    cmd.assert().failure().stderr(contains("trailing input"));
}

#[test]
fn invalid_pattern_exits_nonzero() {
    let mut cmd = Command::cargo_bin("regex-tree").unwrap();
    cmd.arg("(");
    cmd.assert()
        .failure()
        .stderr(contains("valid expression"));
}
