//! # Observability
//!
//! One-time subscriber setup for every binary and test harness built on the store.
//!
//! Every actor logs its lifecycle with an `entity_type` field (`Product`, `Order`, ...):
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO Batch committed entity_type="Product" touched=2
//! WARN Action failed entity_type="Order" id=order_3 error=Invalid status transition from Delivered to Shipped
//! ```
//!
//! `RUST_LOG` always wins over the configured default filter:
//!
//! ```bash
//! RUST_LOG=debug cargo run                    # full payloads
//! RUST_LOG=resource_actor=warn,info cargo run # quiet store, chatty app
//! ```

use tracing_subscriber::EnvFilter;

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line text with inline spans.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Installs the global subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset or unparsable. Calling this twice is
/// harmless: the second installation attempt is ignored.
pub fn setup_tracing(default_filter: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
