// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve GitHub credential and GraphQL endpoint from the environment
// role: github/settings
// inputs: env GITHUB_TOKEN, GH_TOKEN, GITHUB_ENDPOINT
// outputs: GithubSettings (token optional, endpoint always set)
// side_effects: Reads process environment in from_env only
// invariants:
// - Token discovery prefers GITHUB_TOKEN, then GH_TOKEN; blank values count as absent
// - Endpoint falls back to the public api.github.com GraphQL URL
// - The token never appears in Debug output
// errors: token() returns MissingToken; nothing else fails here
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;

use crate::error::BuildInfoError;

pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];
pub const ENDPOINT_VAR: &str = "GITHUB_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

#[derive(Clone)]
pub struct GithubSettings {
  token: Option<String>,
  endpoint: String,
}

impl GithubSettings {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Resolve settings through `lookup` instead of the process environment.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let token = TOKEN_VARS
      .iter()
      .filter_map(|key| lookup(key))
      .map(|t| t.trim().to_string())
      .find(|t| !t.is_empty());

    let endpoint = lookup(ENDPOINT_VAR)
      .map(|e| e.trim().to_string())
      .filter(|e| !e.is_empty())
      .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Self { token, endpoint }
  }

  /// The bearer credential, or the precondition error when none was provided.
  pub fn token(&self) -> Result<&str, BuildInfoError> {
    self.token.as_deref().ok_or(BuildInfoError::MissingToken)
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }
}

impl fmt::Debug for GithubSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GithubSettings")
      .field("token", &self.token.as_ref().map(|_| "<redacted>"))
      .field("endpoint", &self.endpoint)
      .finish()
  }
}
