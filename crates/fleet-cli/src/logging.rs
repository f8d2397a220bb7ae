//! Log filter setup shared by the CLI binaries.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Crates whose events are shown at info level unless `RUST_LOG` says otherwise.
pub const DEFAULT_LOG_DIRECTIVES: &[&str] =
    &["fleet_sim=info", "fleet_cli=info", "fleet_core=info"];

/// Build a filter from `env` (usually `RUST_LOG`) plus the default directives.
pub fn log_filter(env: &str) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder().parse_lossy(env);
    for directive in DEFAULT_LOG_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}
