//! Error types.

use crate::event::EventKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// A checked downcast asked for a variant the handle does not hold.
    ///
    /// Indicates misrouting in the consumer; not recoverable by retrying.
    #[error("event type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: EventKind,
        found: EventKind,
    },
}

/// Errors raised while loading a [`QueueConfig`](crate::config::QueueConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
