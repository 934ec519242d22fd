use predicates::prelude::*;
use test_support::cmd_bin;

#[test]
fn cli_generates_man_page() {
  let out = cmd_bin("build-info").args(["--gen-man"]).output().unwrap();
  assert!(out.status.success());
  let s = String::from_utf8_lossy(&out.stdout);
  // clap_mangen emits a roff manpage starting with .TH and mentions the binary name
  assert!(s.contains(".TH") || s.contains(".Nm"));
  assert!(s.contains("build-info"));
}

#[test]
fn gen_man_needs_no_token_or_coordinates() {
  cmd_bin("build-info").args(["--gen-man", "has-label"]).assert().success();
}

#[test]
fn bash_completions_cover_has_label_and_label_flag() {
  cmd_bin("build-info")
    .args(["--completions", "bash"])
    .assert()
    .success()
    .stdout(
      predicate::str::contains("has-label")
        .and(predicate::str::contains("--label"))
        .and(predicate::str::contains("build-info")),
    );
}

#[test]
fn unknown_completion_shell_is_usage_error() {
  cmd_bin("build-info").args(["--completions", "tcsh"]).assert().code(2);
}
