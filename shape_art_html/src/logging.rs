// Logger setup for the `generate` binary.
//
// `log` facade with an `env_logger` backend writing to stderr. The filter is
// the `--log` flag if given, else `RUST_LOG`, else `info`. Timestamps are
// left out; runs are short and the output is a progress trace.

/// Filter used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Pick the filter directive from the flag value and the environment value.
pub fn effective_filter(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .or(env)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global logger. A second call leaves the first logger in place.
pub fn init_logging(flag: Option<&str>) {
    let filter = effective_filter(flag, std::env::var("RUST_LOG").ok());
    let installed = env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp(None)
        .try_init();
    if installed.is_ok() {
        log::debug!("logging initialized with filter `{filter}`");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(
            effective_filter(Some("debug"), Some("warn".to_string())),
            "debug"
        );
    }

    #[test]
    fn environment_used_without_flag() {
        assert_eq!(
            effective_filter(None, Some("shape_art=trace".to_string())),
            "shape_art=trace"
        );
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(effective_filter(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(Some("warn"));
        init_logging(Some("debug"));
    }
}
