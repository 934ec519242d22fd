use predicates::prelude::*;
use test_support::{cmd_bin, labels_page, FakeGraphql, ScriptedResponse};

fn labels_cmd(endpoint: &str) -> assert_cmd::Command {
  let mut cmd = cmd_bin("build-info");
  cmd
    .env("GITHUB_TOKEN", "test-token")
    .env("GITHUB_ENDPOINT", endpoint)
    .args(["--repo-owner", "octo", "--repo-name", "widgets", "--pr", "5", "labels"]);
  cmd
}

#[test]
fn prints_labels_across_pages_in_order() {
  let server = FakeGraphql::serve(vec![
    ScriptedResponse::json(labels_page(["bug", "P1"], Some("c1"), true)),
    ScriptedResponse::json(labels_page(["bug", "docs"], None, false)),
  ]);

  labels_cmd(server.url()).assert().success().stdout("bug\nP1\nbug\ndocs\n");

  assert_eq!(server.finish().len(), 2);
}

#[test]
fn json_output_carries_coordinates() {
  let server = FakeGraphql::serve(vec![ScriptedResponse::json(labels_page(["bug", "P1"], None, false))]);

  let out = labels_cmd(server.url()).arg("--json").output().unwrap();
  server.finish();

  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(
    v,
    serde_json::json!({ "owner": "octo", "name": "widgets", "pull_request": 5, "labels": ["bug", "P1"] })
  );
}

#[test]
fn pull_request_without_labels_prints_nothing() {
  let server = FakeGraphql::serve(vec![ScriptedResponse::json(labels_page(Vec::<String>::new(), None, false))]);

  labels_cmd(server.url()).assert().success().stdout(predicate::str::is_empty());

  server.finish();
}

#[test]
fn missing_token_is_reported_before_listing() {
  let server = FakeGraphql::serve(vec![ScriptedResponse::json(labels_page(["bug"], None, false))]);

  let mut cmd = labels_cmd(server.url());
  cmd.env_remove("GITHUB_TOKEN");
  cmd.assert().code(126).stdout(predicate::str::is_empty());

  assert!(server.finish().is_empty());
}

#[test]
fn query_failure_prints_no_partial_listing() {
  let server = FakeGraphql::serve(vec![
    ScriptedResponse::json(labels_page(["bug"], Some("c1"), true)),
    ScriptedResponse::new(500, "boom"),
  ]);

  labels_cmd(server.url()).assert().code(3).stdout(predicate::str::is_empty());

  server.finish();
}
