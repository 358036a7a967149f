//! crates/logging/src/config.rs
//! Verbosity configuration derived from repeated `-v` flags.

use tracing::level_filters::LevelFilter;

/// Highest `-v` count with a distinct meaning; larger counts saturate.
pub const MAX_VERBOSE_LEVEL: u8 = 3;

/// Verbosity selected on the command line.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Number of `-v` flags, clamped to [`MAX_VERBOSE_LEVEL`].
    pub level: u8,
}

impl VerbosityConfig {
    /// Create a configuration from a `-v` count.
    pub fn from_verbose_level(level: u8) -> Self {
        Self {
            level: level.min(MAX_VERBOSE_LEVEL),
        }
    }

    /// Most verbose tracing level enabled by this configuration.
    ///
    /// | level | filter |
    /// |-------|--------|
    /// | 0     | WARN   |
    /// | 1     | INFO   |
    /// | 2     | DEBUG  |
    /// | 3     | TRACE  |
    pub fn max_level(self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
