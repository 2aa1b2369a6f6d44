use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { value: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { value, .. } => {
                write!(f, "invalid log level/filter '{value}'")
            }
            TelemetryError::Init(err) => write!(f, "failed to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// Resolves the effective log filter. A valid `RUST_LOG`-style override
/// wins; a malformed override is ignored rather than fatal, falling back to
/// the configured level. Only a malformed configured level is an error.
fn resolve_filter(
    config: &TelemetryConfig,
    env_override: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    if let Some(raw) = env_override {
        if let Ok(filter) = EnvFilter::try_new(raw) {
            return Ok(filter);
        }
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
        value: config.log_level.clone(),
        source,
    })
}

/// Installs the global tracing subscriber for the scoring service. Output
/// is compact single-line text without ANSI colors so log shippers and
/// local runs see the same bytes.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_override = std::env::var("RUST_LOG").ok();
    let filter = resolve_filter(config, env_override.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Init)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn configured_level_applies_without_override() {
        let filter = resolve_filter(&config("info"), None).expect("plain level parses");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn valid_override_wins_over_configured_level() {
        let filter = resolve_filter(&config("info"), Some("warn,finwell=debug"))
            .expect("directives parse");
        assert!(filter.to_string().contains("finwell=debug"));
    }

    #[test]
    fn malformed_override_falls_back_to_configured_level() {
        let filter =
            resolve_filter(&config("debug"), Some("no=such=level")).expect("fallback applies");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn malformed_configured_level_is_an_error() {
        let err = resolve_filter(&config("no=such=level"), None).expect_err("bad level fails");
        match err {
            TelemetryError::InvalidFilter { value, .. } => assert_eq!(value, "no=such=level"),
            other => panic!("expected invalid filter error, got {other:?}"),
        }
    }
}
