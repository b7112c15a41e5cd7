//! Logging initialization
//!
//! Single initialization point for the host application: pick a profile,
//! call [`init`] once at startup. The recorder itself only emits
//! `tracing` events and works under whatever subscriber the host
//! installs; these profiles are the batteries-included defaults.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging sink
///
/// Call once at application startup; later calls are no-ops.
///
/// # Profiles
///
/// - **Development**: human-readable logs, `calltrace=debug` by default
/// - **Production**: JSON structured logs, `calltrace=info` by default
/// - **Test**: leaves the global default unset so
///   [`init_test_capture`](crate::test_capture::init_test_capture) can
///   install the capture subscriber afterwards
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("calltrace=debug")),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("calltrace=info")),
                    )
                    .init();
            }
            Profile::Test => {
                // Capture is installed separately via init_test_capture();
                // setting a global default here would collide with it.
            }
        }
    });
}
