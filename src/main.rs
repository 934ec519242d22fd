use std::io::Write;
use std::process::ExitCode;

mod cli;
mod error;
mod github;
mod logging;
mod params;
mod render;
mod version;

use crate::cli::{Action, Cli};
use crate::error::BuildInfoError;
use crate::github::labels;
use crate::github::settings::GithubSettings;
use crate::github::transport::GraphqlTransport;

fn main() -> ExitCode {
  let cli = cli::parse();
  logging::init(cli.verbose);

  match run(cli) {
    Ok(code) => code,
    Err(err) => {
      tracing::debug!(error = ?err, "build-info failed");
      eprintln!("build-info: {}", err);
      err.exit_code()
    }
  }
}

fn run(cli: Cli) -> Result<ExitCode, BuildInfoError> {
  if cli.gen_man {
    let page = cli::render_man_page(cli::command()).map_err(BuildInfoError::Output)?;
    write_stdout(&page)?;
    return Ok(ExitCode::SUCCESS);
  }

  if let Some(shell) = cli.completions {
    let script = cli::render_completions(shell, cli::command()).map_err(BuildInfoError::Output)?;
    write_stdout(&script)?;
    return Ok(ExitCode::SUCCESS);
  }

  // Phase 1: normalize CLI into explicit parameters
  let cfg = cli::normalize(cli).map_err(BuildInfoError::Usage)?;
  let pull_request = params::pull_request_ref(&cfg);

  // Phase 2: credential precondition, then one transport for every page
  let settings = GithubSettings::from_env();
  let transport = labels::authenticate(&settings, GraphqlTransport::new)?;
  tracing::debug!(endpoint = transport.endpoint(), %pull_request, "querying labels");

  // Phase 3: paginate and report
  match &cfg.action {
    Action::HasLabel { label } => {
      let check = params::label_check(&cfg, label);
      let lookup = labels::has_label(&transport, &check)?;
      tracing::debug!(labels = ?lookup.labels, pages = lookup.pages, "accumulated labels");

      Ok(lookup.exit_code())
    }
    Action::ListLabels { format } => {
      let names = labels::fetch_labels(&transport, &pull_request)?;
      let out = render::render_labels(&pull_request, &names, *format).map_err(BuildInfoError::Output)?;
      write_stdout(&out)?;

      Ok(ExitCode::SUCCESS)
    }
  }
}

fn write_stdout(s: &str) -> Result<(), BuildInfoError> {
  let mut stdout = std::io::stdout().lock();
  stdout
    .write_all(s.as_bytes())
    .and_then(|_| stdout.flush())
    .map_err(|e| BuildInfoError::Output(e.into()))
}
