//! Sweep configuration assembled from a TOML file, `--set` overrides, CLI flags,
//! and built-in defaults, in increasing order of precedence.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_config, build_eval_config};
