//! Core error types for carousel operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

use crate::direction::Direction;

/// Core error type for carousel operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid carousel config: {reason}")]
    InvalidConfig { reason: String },

    #[error("carousel config parse error: {reason}")]
    ConfigParse { reason: String },

    // Host errors
    #[error("failed to update marker on illustration {index}: {reason}")]
    Marker { index: usize, reason: String },

    #[error("failed to register {direction} trigger: {reason}")]
    TriggerRegistration {
        direction: Direction,
        reason: String,
    },

    /// A trigger fired while a previous activation still held the carousel state.
    #[error("carousel is busy handling another activation")]
    Busy,
}

impl Error {
    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            reason: reason.into(),
        }
    }

    /// Create a marker error for the illustration at `index`.
    pub fn marker(index: usize, reason: impl Into<String>) -> Self {
        Self::Marker {
            index,
            reason: reason.into(),
        }
    }

    /// Create a trigger registration error.
    pub fn trigger_registration(direction: Direction, reason: impl Into<String>) -> Self {
        Self::TriggerRegistration {
            direction,
            reason: reason.into(),
        }
    }
}
