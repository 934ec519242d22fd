use std::fmt;

use crate::cli::EffectiveConfig;

/// Coordinates of one pull request on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
  pub owner: String,
  pub name: String,
  pub number: u32,
}

impl fmt::Display for PullRequestRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}#{}", self.owner, self.name, self.number)
  }
}

/// Everything a single label lookup needs; replaces flag-bound globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCheck {
  pub pull_request: PullRequestRef,
  /// Compared byte-for-byte; the empty string is a legal target.
  pub label: String,
}

pub fn pull_request_ref(cfg: &EffectiveConfig) -> PullRequestRef {
  PullRequestRef {
    owner: cfg.owner.clone(),
    name: cfg.name.clone(),
    number: cfg.number,
  }
}

pub fn label_check(cfg: &EffectiveConfig, label: &str) -> LabelCheck {
  LabelCheck {
    pull_request: pull_request_ref(cfg),
    label: label.to_string(),
  }
}
