use anyhow::{anyhow, bail, Result};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;

use crate::render::LabelFormat;
use crate::version::BuildInfo;

#[derive(Parser, Debug)]
#[command(
    name = "build-info",
    version,
    about = "Get info from a build",
    long_about = None,
    author = "Danny Grove <danny@drgrovellc.com>"
)]
pub struct Cli {
  /// Set the owner of the repository
  #[arg(long = "repo-owner", env = "GITHUB_REPO_OWNER", global = true)]
  pub repo_owner: Option<String>,

  /// Set the name of the repository to query
  #[arg(long = "repo-name", env = "GITHUB_REPO_NAME", global = true)]
  pub repo_name: Option<String>,

  /// Set the pull request number to get the labels from
  #[arg(long = "pr", env = "GITHUB_PR", global = true, value_parser = clap::value_parser!(u32).range(1..))]
  pub pr: Option<u32>,

  /// Log every fetched page to stderr (overrides BUILD_INFO_LOG)
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Emit a shell completion script to stdout (internal; for packaging)
  #[arg(long, hide = true, value_name = "SHELL")]
  pub completions: Option<Shell>,

  #[command(subcommand)]
  pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Check if a PR has a label (exit 0 when present, 1 when absent)
  HasLabel {
    /// Label name, matched exactly and case-sensitively
    #[arg(short, long, default_value = "")]
    label: String,
  },

  /// Print every label on a PR, in API order
  Labels {
    /// Print a JSON document instead of one label per line
    #[arg(long)]
    json: bool,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  HasLabel { label: String },
  ListLabels { format: LabelFormat },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
  pub owner: String,
  pub name: String,
  pub number: u32,
  pub action: Action,
}

/// The clap command with the long build-info version attached.
pub fn command() -> clap::Command {
  Cli::command().long_version(BuildInfo::current().render())
}

pub fn parse() -> Cli {
  let matches = command().get_matches();

  match Cli::from_arg_matches(&matches) {
    Ok(cli) => cli,
    Err(e) => e.exit(),
  }
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let Some(command) = cli.command else {
    bail!("Provide a subcommand: has-label or labels (see --help)");
  };

  let owner = non_blank(cli.repo_owner).ok_or_else(|| anyhow!("Missing --repo-owner (or GITHUB_REPO_OWNER)"))?;
  let name = non_blank(cli.repo_name).ok_or_else(|| anyhow!("Missing --repo-name (or GITHUB_REPO_NAME)"))?;
  let number = cli.pr.ok_or_else(|| anyhow!("Missing --pr (or GITHUB_PR)"))?;

  let action = match command {
    Command::HasLabel { label } => Action::HasLabel { label },
    Command::Labels { json } => Action::ListLabels {
      format: if json { LabelFormat::Json } else { LabelFormat::Lines },
    },
  };

  Ok(EffectiveConfig {
    owner,
    name,
    number,
    action,
  })
}

fn non_blank(v: Option<String>) -> Option<String> {
  v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Render a section-1 man page for `cmd` as troff text.
pub fn render_man_page(cmd: clap::Command) -> Result<String> {
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

/// Render a completion script for `shell`, keyed on the command's own name.
pub fn render_completions(shell: Shell, mut cmd: clap::Command) -> Result<String> {
  let bin = cmd.get_name().to_string();
  let mut buf: Vec<u8> = Vec::new();

  clap_complete::generate(shell, &mut cmd, bin, &mut buf);

  Ok(String::from_utf8(buf)?)
}
