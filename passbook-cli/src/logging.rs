use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map common level spellings onto tracing's lowercase names.
pub fn normalise_level(level: &str) -> String {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => "trace".to_string(),
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARN" | "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => level.trim().to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// JSON and CSV output.
///
/// Precedence: `--log-level`, then `RUST_LOG`, then the config file.
pub fn init_logging(flag: Option<&str>, configured: &str) {
    let filter = match flag {
        Some(level) => EnvFilter::try_new(normalise_level(level)),
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(normalise_level(configured))),
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
