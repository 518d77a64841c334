//! Core functionality for the Vantage health dashboard
//!
//! This crate contains the check-aggregation engine: probe implementations
//! for every check kind, the concurrent dispatcher, the status reducer, and
//! configuration loading. The HTTP transport that exposes the engine lives
//! in the `daemon` crate.

pub mod checks;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod reduce;

// Re-export schema types for convenience
pub use schema::*;

pub use config::{
    load_settings_from_toml_path, load_settings_from_toml_str, Settings, DEFAULT_CONFIG_PATH,
};
pub use dispatch::{run_all, run_report, DEFAULT_TOTAL_TIMEOUT};
pub use error::{CoreError, Result};
pub use reduce::{aggregate, overall_status};

/// Core utilities and helper functions
pub mod utils {
    use tracing::info;

    /// Initialize tracing for the application
    pub fn init_tracing(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| crate::CoreError::InitializationError(e.to_string()))?;

        info!("Tracing initialized with level: {}", level);
        Ok(())
    }
}
