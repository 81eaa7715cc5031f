use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["knn_eval", "knn_helpers", "k_nn", "binary_metrics"];

/// Environment variable holding the demo's verbosity (0-3).
pub const VERBOSITY_VAR: &str = "KNN_EVAL_VERBOSITY";

/// Reads [`VERBOSITY_VAR`], defaulting to 1 (info) when unset or unparsable.
pub fn verbosity_from_env() -> u8 {
    std::env::var(VERBOSITY_VAR)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(1)
}

/// Initialize tracing based on a verbosity level.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
///
/// The level normally comes from [`VERBOSITY_VAR`] (`KNN_EVAL_VERBOSITY`)
/// via [`verbosity_from_env`]. A set `RUST_LOG` replaces the whole filter.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// One `target=level` directive per workspace crate.
fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
