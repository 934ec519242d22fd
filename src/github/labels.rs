// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fetch every label on a pull request page by page and test membership of a target label
// role: github/labels
// inputs: LabelTransport (one per invocation), PullRequestRef or LabelCheck, GithubSettings for the credential precondition
// outputs: Accumulated labels in API order; LabelLookup { found, labels, pages }
// side_effects: One transport call per page, strictly sequential
// invariants:
// - First page is requested without a cursor; each later page with the previous page's end cursor
// - Pagination stops at the first page whose has_next_page is false
// - Labels are concatenated in arrival order; duplicates are kept
// - Membership is an exact, case-sensitive string comparison
// - Missing credential fails before the transport is constructed
// errors: Any page failure aborts with BuildInfoError::Query; never reported as "not found"
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::iter::FusedIterator;
use std::process::ExitCode;

use tracing::{debug, info};

use crate::error::{BuildInfoError, QueryError, EXIT_FOUND, EXIT_NOT_FOUND};
use crate::github::settings::GithubSettings;
use crate::params::{LabelCheck, PullRequestRef};

/// Labels requested per page.
pub const LABEL_PAGE_SIZE: u32 = 100;

/// One page of the label connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPage {
  pub labels: Vec<String>,
  pub has_next_page: bool,
  /// Only meaningful while `has_next_page` is true.
  pub end_cursor: Option<String>,
}

// --- Trait seam for the label-listing API ---
pub trait LabelTransport {
  /// Fetch up to `LABEL_PAGE_SIZE` labels after `cursor` (from the start when `None`).
  fn fetch_page(&self, pull_request: &PullRequestRef, cursor: Option<&str>) -> Result<LabelPage, QueryError>;
}

impl<T: LabelTransport + ?Sized> LabelTransport for &T {
  fn fetch_page(&self, pull_request: &PullRequestRef, cursor: Option<&str>) -> Result<LabelPage, QueryError> {
    (**self).fetch_page(pull_request, cursor)
  }
}

/// Lazy sequence of label pages. Pulls the next page only when asked and
/// ends after the last page or the first error; it cannot be restarted.
pub struct LabelPages<'a, T: ?Sized> {
  transport: &'a T,
  pull_request: &'a PullRequestRef,
  cursor: Option<String>,
  fetched: usize,
  exhausted: bool,
}

impl<'a, T: LabelTransport + ?Sized> LabelPages<'a, T> {
  pub fn new(transport: &'a T, pull_request: &'a PullRequestRef) -> Self {
    Self {
      transport,
      pull_request,
      cursor: None,
      fetched: 0,
      exhausted: false,
    }
  }

  /// Number of fetch attempts made so far (including a failed one).
  pub fn pages_fetched(&self) -> usize {
    self.fetched
  }

  fn fail(&mut self, source: QueryError) -> Option<Result<LabelPage, BuildInfoError>> {
    self.exhausted = true;

    Some(Err(BuildInfoError::Query {
      page: self.fetched,
      source,
    }))
  }
}

impl<'a, T: LabelTransport + ?Sized> Iterator for LabelPages<'a, T> {
  type Item = Result<LabelPage, BuildInfoError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.exhausted {
      return None;
    }

    self.fetched += 1;

    let page = match self.transport.fetch_page(self.pull_request, self.cursor.as_deref()) {
      Ok(p) => p,
      Err(e) => return self.fail(e),
    };

    debug!(
      pull_request = %self.pull_request,
      page = self.fetched,
      labels = page.labels.len(),
      has_next_page = page.has_next_page,
      "fetched label page"
    );

    if !page.has_next_page {
      self.exhausted = true;
      return Some(Ok(page));
    }

    match page.end_cursor.clone() {
      Some(c) => {
        self.cursor = Some(c);
        Some(Ok(page))
      }
      // Re-requesting without a cursor would loop on page one forever.
      None => self.fail(QueryError::MissingCursor),
    }
  }
}

impl<'a, T: LabelTransport + ?Sized> FusedIterator for LabelPages<'a, T> {}

/// Outcome of a completed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLookup {
  pub found: bool,
  pub labels: Vec<String>,
  pub pages: usize,
}

impl LabelLookup {
  pub fn exit_code(&self) -> ExitCode {
    ExitCode::from(self.code())
  }

  pub fn code(&self) -> u8 {
    if self.found {
      EXIT_FOUND
    } else {
      EXIT_NOT_FOUND
    }
  }
}

/// Check the credential precondition, then build the transport with `connect(endpoint, token)`.
pub fn authenticate<T, F>(settings: &GithubSettings, connect: F) -> Result<T, BuildInfoError>
where
  F: FnOnce(&str, &str) -> T,
{
  let token = settings.token()?;

  Ok(connect(settings.endpoint(), token))
}

fn accumulate<T>(transport: &T, pull_request: &PullRequestRef) -> Result<(Vec<String>, usize), BuildInfoError>
where
  T: LabelTransport + ?Sized,
{
  let mut pages = LabelPages::new(transport, pull_request);
  let mut labels: Vec<String> = Vec::new();

  for page in pages.by_ref() {
    labels.extend(page?.labels);
  }

  Ok((labels, pages.pages_fetched()))
}

/// Every label on the pull request, concatenated across pages in API order.
pub fn fetch_labels<T>(transport: &T, pull_request: &PullRequestRef) -> Result<Vec<String>, BuildInfoError>
where
  T: LabelTransport + ?Sized,
{
  accumulate(transport, pull_request).map(|(labels, _)| labels)
}

pub fn has_label<T>(transport: &T, check: &LabelCheck) -> Result<LabelLookup, BuildInfoError>
where
  T: LabelTransport + ?Sized,
{
  let (labels, pages) = accumulate(transport, &check.pull_request)?;
  let found = labels.iter().any(|l| *l == check.label);

  info!(
    pull_request = %check.pull_request,
    label = %check.label,
    found,
    pages,
    total = labels.len(),
    "label lookup finished"
  );

  Ok(LabelLookup { found, labels, pages })
}
