// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Namespace for everything that talks to GitHub (settings, transport, label pagination)
// role: github/namespace
// outputs: Public submodules settings, transport, labels
// invariants: Network access is confined to transport; labels only sees the LabelTransport trait
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod labels;
pub mod settings;
pub mod transport;
