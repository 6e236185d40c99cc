use tracing_subscriber::EnvFilter;

/// `--debug` wins over `RUST_LOG`; with neither, only warnings are shown.
pub fn log_filter(debug: bool, env: Option<&str>) -> EnvFilter {
    if debug {
        return EnvFilter::new("slack_search=debug");
    }

    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Logs go to stderr; stdout carries only the report.
pub fn init(debug: bool) {
    let env = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_enables_crate_debug() {
        let filter = log_filter(true, None).to_string();
        assert!(filter.contains("slack_search=debug"), "{}", filter);

        // RUST_LOG is ignored when --debug is given.
        let filter = log_filter(true, Some("off")).to_string();
        assert!(filter.contains("slack_search=debug"), "{}", filter);
    }

    #[test]
    fn test_default_filter_is_warn() {
        assert_eq!(log_filter(false, None).to_string(), "warn");
    }

    #[test]
    fn test_rust_log_used_without_debug_flag() {
        let filter = log_filter(false, Some("slack_search=info")).to_string();
        assert!(filter.contains("slack_search=info"), "{}", filter);
        assert!(!filter.contains("debug"));
    }

    #[test]
    fn test_debug_filter_drops_other_crates() {
        let (logs, _guard) = testing::capture(true);
        tracing::debug!(target: "hyper", "connection pooled");
        tracing::debug!(target: "slack_search::search", "query: x");
        let output = logs.contents();
        assert!(output.contains("query: x"));
        assert!(!output.contains("connection pooled"));
    }
}
