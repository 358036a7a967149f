//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation for the workspace's `tracing` events.
//!
//! Events are written to standard error so that standard output carries only
//! digests. The `MD5_DIGEST_LOG` environment variable accepts the usual
//! `EnvFilter` directive syntax and overrides the verbosity-derived default.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: "md5::cli", "arguments parsed");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::VerbosityConfig;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "MD5_DIGEST_LOG";

/// Build the event filter for `config`, honouring [`LOG_ENV_VAR`] when set.
pub fn env_filter(config: VerbosityConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(config.max_level().into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Install the global tracing subscriber.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is left untouched. Calling this repeatedly is safe.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(layer)
        .try_init()
        .is_ok()
}
