//! Structured JSON logging to stdout.

use tracing_subscriber::EnvFilter;

/// Map a `LOG_LEVEL` value to an `EnvFilter` directive. Unknown values fall back to `info`.
pub fn filter_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warning" | "warn" => "warn",
        "error" | "fatal" | "panic" => "error",
        _ => "info",
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `LOG_LEVEL`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::filter_directive;

    #[test]
    fn maps_known_levels() {
        assert_eq!(filter_directive("trace"), "trace");
        assert_eq!(filter_directive("debug"), "debug");
        assert_eq!(filter_directive("warning"), "warn");
        assert_eq!(filter_directive("fatal"), "error");
        assert_eq!(filter_directive("panic"), "error");
    }

    #[test]
    fn is_case_insensitive_and_defaults_to_info() {
        assert_eq!(filter_directive("ERROR"), "error");
        assert_eq!(filter_directive(" Debug "), "debug");
        assert_eq!(filter_directive("verbose"), "info");
        assert_eq!(filter_directive(""), "info");
    }
}
