use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Output goes to stderr so stdout stays
/// reserved for JSON.
pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wp_folio=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wp_folio=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Maps a `[logging] level` value from a TOML config onto the verbose switch.
pub fn is_verbose_level(level: &str) -> bool {
    matches!(level.to_ascii_lowercase().as_str(), "debug" | "trace")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_levels() {
        assert!(is_verbose_level("debug"));
        assert!(is_verbose_level("TRACE"));
        assert!(!is_verbose_level("info"));
        assert!(!is_verbose_level("warn"));
    }
}
