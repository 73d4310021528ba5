//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("global subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// How logs are filtered and formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter used when `RUST_LOG` is unset, e.g. `phase_api=debug,tower_http=debug`.
    pub default_filter: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "phase_api=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

impl TracingConfig {
    /// Resolve the filter: `RUST_LOG` wins, otherwise `default_filter`.
    pub fn env_filter(&self) -> Result<EnvFilter, TracingError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.default_filter).map_err(|e| TracingError::InvalidFilter {
            filter: self.default_filter.clone(),
            message: e.to_string(),
        })
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let filter = config.env_filter()?;

    let json_layer = config.json.then(|| fmt::layer().json().with_current_span(true));
    let text_layer = (!config.json).then(fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TracingError::AlreadyInstalled(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert!(!config.json);
        assert!(config.default_filter.contains("phase_api"));
    }

    #[test]
    fn test_invalid_filter_is_reported() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TracingConfig {
            default_filter: "phase_api=notalevel".to_string(),
            json: false,
        };
        let err = config.env_filter().unwrap_err();
        assert!(matches!(err, TracingError::InvalidFilter { .. }));
    }

    #[test]
    fn test_second_install_fails() {
        let config = TracingConfig {
            default_filter: "warn".to_string(),
            json: true,
        };
        // Another test in this binary may have installed a subscriber first.
        let _ = init_tracing(&config);
        assert!(matches!(
            init_tracing(&config),
            Err(TracingError::AlreadyInstalled(_))
        ));
    }
}
