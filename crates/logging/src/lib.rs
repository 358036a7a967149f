#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the command-line verbosity of `md5-digest` onto the
//! [`tracing`](https://docs.rs/tracing/) ecosystem. Library crates emit
//! ordinary `tracing` events under `md5::*` targets; binaries call
//! [`init_tracing`] once to install a `tracing-subscriber` formatter on
//! standard error.
//!
//! # Design
//!
//! [`VerbosityConfig`] records the number of `-v` flags and converts it to a
//! [`LevelFilter`](tracing::level_filters::LevelFilter). [`env_filter`] turns
//! that into the default directive of an `EnvFilter`, which
//! [`LOG_ENV_VAR`] can override per target.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//! use tracing::level_filters::LevelFilter;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.max_level(), LevelFilter::DEBUG);
//! ```

mod config;
mod tracing_bridge;

pub use config::{MAX_VERBOSE_LEVEL, VerbosityConfig};
pub use tracing_bridge::{LOG_ENV_VAR, env_filter, init_tracing};
