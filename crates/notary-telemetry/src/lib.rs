//! # Notary Telemetry
//!
//! Log output for Notary-Ledger binaries and test harnesses.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use notary_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_tracing(&config).expect("Failed to init tracing");
//!
//!     // Ledger and extractor events are now written to stdout
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NL_SERVICE_NAME` | `notary-ledger` | Service name in log lines |
//! | `NL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `NL_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `NL_JSON_LOGS` | `false` (`true` in containers) | JSON formatting |

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{env_filter, init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience macro for creating a span with subsystem context.
///
/// # Example
///
/// ```rust,ignore
/// use notary_telemetry::subsystem_span;
///
/// fn scan_box() {
///     let _span = subsystem_span!("scan_box", subsystem = "nl-02", box_type = "paymentsInbox");
///     // ... extraction
/// }
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
