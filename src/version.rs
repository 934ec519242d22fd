// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build metadata baked in at compile time and its --version rendering
// role: version/build-info
// inputs: compile-time env BUILD_INFO_REVISION, BUILD_INFO_BRANCH, BUILD_INFO_BUILD_USER, BUILD_INFO_BUILD_DATE, BUILD_INFO_RUSTC_VERSION
// outputs: BuildInfo and its multi-line long version text
// invariants: Missing build variables render as "unknown"; output has no trailing newline
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
  pub version: String,
  pub revision: String,
  pub branch: String,
  pub build_user: String,
  pub build_date: String,
  pub rustc_version: String,
  pub platform: String,
}

impl BuildInfo {
  pub fn current() -> Self {
    Self {
      version: env!("CARGO_PKG_VERSION").to_string(),
      revision: option_env!("BUILD_INFO_REVISION").unwrap_or(UNKNOWN).to_string(),
      branch: option_env!("BUILD_INFO_BRANCH").unwrap_or(UNKNOWN).to_string(),
      build_user: option_env!("BUILD_INFO_BUILD_USER").unwrap_or(UNKNOWN).to_string(),
      build_date: option_env!("BUILD_INFO_BUILD_DATE").unwrap_or(UNKNOWN).to_string(),
      rustc_version: option_env!("BUILD_INFO_RUSTC_VERSION").unwrap_or(UNKNOWN).to_string(),
      platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
    }
  }

  /// Long version text; clap prefixes it with the program name.
  pub fn render(&self) -> String {
    format!(
      "{} (branch: {}, revision: {})\n  build user:       {}\n  build date:       {}\n  rust version:     {}\n  platform:         {}",
      self.version, self.branch, self.revision, self.build_user, self.build_date, self.rustc_version, self.platform
    )
  }
}
