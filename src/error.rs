// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Error taxonomy for label lookups and the process exit code table
// role: errors/exit-codes
// outputs: BuildInfoError (top level), QueryError (per page fetch), exit code constants
// invariants:
// - A query failure never maps to the "label not found" exit code
// - Missing credential has its own exit code and is raised before any request
// errors: Every variant carries enough context to print a single user-facing line
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::process::ExitCode;

use thiserror::Error;

/// Label present on the pull request.
pub const EXIT_FOUND: u8 = 0;
/// Lookup succeeded, label absent.
pub const EXIT_NOT_FOUND: u8 = 1;
/// Invalid or missing command line input (same code clap uses).
pub const EXIT_USAGE: u8 = 2;
/// A page fetch failed; the label could not be determined.
pub const EXIT_QUERY_FAILED: u8 = 3;
/// Writing output (man page, label listing) failed.
pub const EXIT_OUTPUT_FAILED: u8 = 4;
/// No GitHub credential in the environment.
pub const EXIT_MISSING_TOKEN: u8 = 126;

/// Failure while fetching a single page of labels.
#[derive(Debug, Error)]
pub enum QueryError {
  /// The request never produced an HTTP response (DNS, connect, TLS, reset).
  #[error("request to {endpoint} failed: {message}")]
  Transport { endpoint: String, message: String },

  /// The endpoint answered with a non-success status (401 for a rejected token, etc.).
  #[error("{endpoint} answered HTTP {status}: {body}")]
  Status { endpoint: String, status: u16, body: String },

  /// The body was not the JSON shape of a label page.
  #[error("malformed response: {0}")]
  Decode(String),

  /// The GraphQL layer reported errors.
  #[error("GraphQL errors: {0}")]
  Graphql(String),

  /// The response had no repository or pull request node.
  #[error("pull request #{number} not found in {owner}/{name}")]
  MissingPullRequest { owner: String, name: String, number: u32 },

  #[error("page reports more labels but carries no end cursor")]
  MissingCursor,
}

#[derive(Debug, Error)]
pub enum BuildInfoError {
  #[error("{0:#}")]
  Usage(anyhow::Error),

  #[error("Authentication token for Github not provided (set GITHUB_TOKEN)")]
  MissingToken,

  #[error("could not fetch labels (page {page}): {source}")]
  Query {
    page: usize,
    #[source]
    source: QueryError,
  },

  #[error("failed to write output: {0:#}")]
  Output(anyhow::Error),
}

impl BuildInfoError {
  pub fn exit_code(&self) -> ExitCode {
    ExitCode::from(self.code())
  }

  pub fn code(&self) -> u8 {
    match self {
      BuildInfoError::Usage(_) => EXIT_USAGE,
      BuildInfoError::MissingToken => EXIT_MISSING_TOKEN,
      BuildInfoError::Query { .. } => EXIT_QUERY_FAILED,
      BuildInfoError::Output(_) => EXIT_OUTPUT_FAILED,
    }
  }
}
