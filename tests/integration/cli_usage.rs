use predicates::prelude::*;
use test_support::cmd_bin;

#[test]
fn no_subcommand_is_usage_error() {
  cmd_bin("build-info")
    .assert()
    .code(2)
    .stderr(predicate::str::contains("Provide a subcommand"));
}

#[test]
fn missing_owner_is_usage_error_before_token_check() {
  cmd_bin("build-info")
    .args(["--repo-name", "widgets", "--pr", "1", "has-label", "-l", "bug"])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("--repo-owner"));
}

#[test]
fn non_numeric_pr_is_rejected_by_clap() {
  cmd_bin("build-info")
    .args(["--repo-owner", "o", "--repo-name", "n", "--pr", "abc", "has-label"])
    .assert()
    .code(2);
}

#[test]
fn long_version_prints_build_info_template() {
  cmd_bin("build-info")
    .arg("--version")
    .assert()
    .success()
    .stdout(
      predicate::str::starts_with("build-info ")
        .and(predicate::str::contains("(branch: "))
        .and(predicate::str::contains("build user:"))
        .and(predicate::str::contains("platform:")),
    );
}

#[test]
fn help_lists_subcommands() {
  cmd_bin("build-info")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("has-label").and(predicate::str::contains("labels")));
}
