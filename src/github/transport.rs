// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Authenticated GitHub GraphQL transport used for every label page of one invocation
// role: github/transport
// inputs: GraphQL endpoint URL, bearer token, PullRequestRef, optional page cursor
// outputs: LabelPage values decoded from the labels connection
// side_effects: Blocking HTTPS POSTs via a single ureq Agent
// invariants:
// - Exactly one HTTP request per fetch_page call; no retries
// - Variables always carry owner, name, prnumber, labelsCursor (null on first page) and pageSize
// - GraphQL `errors`, non-2xx statuses and unexpected shapes all surface as QueryError
// errors: QueryError variants; the token never appears in error text
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::github::labels::{LabelPage, LabelTransport, LABEL_PAGE_SIZE};
use crate::params::PullRequestRef;

const USER_AGENT: &str = "build-info";
const MAX_ERROR_BODY_CHARS: usize = 300;

pub const LABELS_QUERY: &str = r"
query PullRequestLabels($owner: String!, $name: String!, $prnumber: Int!, $labelsCursor: String, $pageSize: Int!) {
  repository(owner: $owner, name: $name) {
    pullRequest(number: $prnumber) {
      labels(first: $pageSize, after: $labelsCursor) {
        pageInfo {
          endCursor
          startCursor
          hasNextPage
        }
        edges {
          node {
            name
          }
        }
      }
    }
  }
}
";

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
  query: &'a str,
  variables: V,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
  data: Option<T>,
  errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
  message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelsVariables<'a> {
  owner: &'a str,
  name: &'a str,
  prnumber: u32,
  labels_cursor: Option<&'a str>,
  page_size: u32,
}

#[derive(Deserialize)]
struct LabelsData {
  repository: Option<RepositoryNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
  pull_request: Option<PullRequestNode>,
}

#[derive(Deserialize)]
struct PullRequestNode {
  labels: Option<LabelConnection>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelConnection {
  page_info: PageInfo,
  edges: Option<Vec<Option<LabelEdge>>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
  end_cursor: Option<String>,
  has_next_page: bool,
}

#[derive(Deserialize)]
struct LabelEdge {
  node: Option<LabelNode>,
}

#[derive(Deserialize)]
struct LabelNode {
  name: String,
}

pub struct GraphqlTransport {
  agent: ureq::Agent,
  endpoint: String,
  token: String,
}

impl GraphqlTransport {
  pub fn new(endpoint: &str, token: &str) -> Self {
    let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();

    Self {
      agent,
      endpoint: endpoint.to_string(),
      token: token.to_string(),
    }
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// POST one GraphQL document and decode its `data` member as `R`.
  pub fn query<V, R>(&self, query: &str, variables: V) -> Result<R, QueryError>
  where
    V: Serialize,
    R: DeserializeOwned,
  {
    let request = GraphqlRequest { query, variables };

    let resp = self
      .agent
      .post(&self.endpoint)
      .set("Accept", "application/json")
      .set("Authorization", &format!("Bearer {}", self.token))
      .send_json(&request);

    let resp = match resp {
      Ok(r) => r,
      Err(ureq::Error::Status(status, r)) => {
        let body = r.into_string().unwrap_or_default();
        return Err(QueryError::Status {
          endpoint: self.endpoint.clone(),
          status,
          body: clip(body.trim(), MAX_ERROR_BODY_CHARS),
        });
      }
      Err(ureq::Error::Transport(t)) => {
        return Err(QueryError::Transport {
          endpoint: self.endpoint.clone(),
          message: t.to_string(),
        });
      }
    };

    let envelope: GraphqlResponse<R> = resp.into_json().map_err(|e| QueryError::Decode(e.to_string()))?;

    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
      let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
      return Err(QueryError::Graphql(messages.join("; ")));
    }

    envelope
      .data
      .ok_or_else(|| QueryError::Decode("no data in GraphQL response".into()))
  }
}

impl LabelTransport for GraphqlTransport {
  fn fetch_page(&self, pull_request: &PullRequestRef, cursor: Option<&str>) -> Result<LabelPage, QueryError> {
    let variables = LabelsVariables {
      owner: &pull_request.owner,
      name: &pull_request.name,
      prnumber: pull_request.number,
      labels_cursor: cursor,
      page_size: LABEL_PAGE_SIZE,
    };

    let data: LabelsData = self.query(LABELS_QUERY, variables)?;
    page_from_data(data, pull_request)
  }
}

fn page_from_data(data: LabelsData, pull_request: &PullRequestRef) -> Result<LabelPage, QueryError> {
  let Some(pr_node) = data.repository.and_then(|r| r.pull_request) else {
    return Err(QueryError::MissingPullRequest {
      owner: pull_request.owner.clone(),
      name: pull_request.name.clone(),
      number: pull_request.number,
    });
  };
  let Some(connection) = pr_node.labels else {
    return Err(QueryError::Decode("pull request has no labels connection".into()));
  };

  let labels = connection
    .edges
    .unwrap_or_default()
    .into_iter()
    .flatten()
    .filter_map(|edge| edge.node)
    .map(|node| node.name)
    .collect();

  Ok(LabelPage {
    labels,
    has_next_page: connection.page_info.has_next_page,
    end_cursor: connection.page_info.end_cursor,
  })
}

fn clip(s: &str, max_chars: usize) -> String {
  if s.chars().count() <= max_chars {
    return s.to_string();
  }
  let mut out: String = s.chars().take(max_chars).collect();
  out.push('…');

  out
}
