// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Install the process-wide tracing subscriber for diagnostics on stderr
// role: runtime/logging
// inputs: --verbose flag, BUILD_INFO_LOG filter directive
// outputs: Global fmt subscriber writing to stderr (ANSI only on a terminal)
// side_effects: Sets the global default subscriber once; later calls are no-ops
// invariants: stdout never carries log output; --verbose forces debug; blank or unset BUILD_INFO_LOG means warn
// errors: Invalid directives fall back to warn; a second init is ignored
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Filter directive source, e.g. `BUILD_INFO_LOG=build_info=debug`.
pub const LOG_ENV: &str = "BUILD_INFO_LOG";

/// Install the stderr `fmt` subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
  let directive = filter_directive(verbose, std::env::var(LOG_ENV).ok().as_deref());
  let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(false)
    .try_init();
}

fn filter_directive(verbose: bool, from_env: Option<&str>) -> String {
  if verbose {
    return "debug".to_string();
  }

  match from_env.map(str::trim) {
    Some(d) if !d.is_empty() => d.to_string(),
    _ => "warn".to_string(),
  }
}
