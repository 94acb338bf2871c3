//! Structured logging setup.
//!
//! The library only emits `tracing` events and spans. Binaries and test
//! harnesses that want to see them install a subscriber once through
//! [`init_tracing`].

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level applied to this crate when `RUST_LOG` is unset.
    pub level: Level,
    /// Emit JSON lines instead of human-readable text.
    pub json_format: bool,
    /// Log span open and close events.
    pub include_spans: bool,
    /// Include file and line of each event.
    pub include_location: bool,
    /// Include the module path of each event.
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            include_spans: false,
            include_location: false,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    /// Verbose text output for local debugging.
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json_format: false,
            include_spans: true,
            include_location: true,
            include_target: true,
        }
    }

    /// JSON output for log shipping.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            level: Level::INFO,
            json_format: true,
            include_spans: false,
            include_location: false,
            include_target: true,
        }
    }

    /// Directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("kanban_ledger={}", self.level)
    }
}

/// Installs a global `tracing` subscriber for `config`.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::level`].
///
/// # Errors
///
/// Returns [`TelemetryError::Install`] when a global subscriber is already
/// installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));
    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_target(config.include_target);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()?;
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_target(config.include_target);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{LoggingConfig, init_tracing};
    use rstest::rstest;
    use tracing::Level;

    #[rstest]
    fn default_directive_targets_this_crate() {
        assert_eq!(
            LoggingConfig::default().default_directive(),
            "kanban_ledger=INFO"
        );
        assert_eq!(LoggingConfig::development().level, Level::DEBUG);
        assert!(LoggingConfig::production().json_format);
    }

    #[rstest]
    fn second_install_is_rejected() {
        let config = LoggingConfig::development();
        // The first call may lose to another test in this binary.
        let _installed = init_tracing(&config).is_ok();
        assert!(init_tracing(&config).is_err());
    }
}
