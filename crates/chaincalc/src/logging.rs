//! Log output for the terminal host
//!
//! `RUST_LOG` takes precedence over the configured filter:
//! ```bash
//! RUST_LOG=chaincalc=debug chaincalc --eval "5+3="
//! ```
//!
//! Events go to stderr so they never mix with the rendered calculator.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::HostConfig;

static INIT: Once = Once::new();

/// Builds the filter: `RUST_LOG` if set, the configured directive otherwise
#[must_use]
pub fn filter_for(config: &HostConfig) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Installs the global subscriber. Only the first call takes effect.
pub fn init_with_config(config: &HostConfig) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter_for(config));

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Installs the global subscriber with the default `warn` filter
pub fn init() {
    init_with_config(&HostConfig::default());
}
