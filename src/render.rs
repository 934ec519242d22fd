// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render the accumulated label sequence for the `labels` subcommand
// role: output/render
// inputs: PullRequestRef, labels in API order, LabelFormat
// outputs: Newline-terminated text (one label per line) or pretty JSON
// invariants: Label order and duplicates are preserved exactly as fetched
// errors: JSON serialization failures bubble as anyhow errors
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use serde::Serialize;

use crate::params::PullRequestRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
  Lines,
  Json,
}

#[derive(Serialize)]
struct LabelReport<'a> {
  owner: &'a str,
  name: &'a str,
  pull_request: u32,
  labels: &'a [String],
}

pub fn render_labels(pull_request: &PullRequestRef, labels: &[String], format: LabelFormat) -> Result<String> {
  match format {
    LabelFormat::Lines => Ok(labels.iter().map(|l| format!("{}\n", l)).collect()),
    LabelFormat::Json => {
      let report = LabelReport {
        owner: &pull_request.owner,
        name: &pull_request.name,
        pull_request: pull_request.number,
        labels,
      };
      let mut s = serde_json::to_string_pretty(&report)?;
      s.push('\n');

      Ok(s)
    }
  }
}
