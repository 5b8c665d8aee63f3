use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pubsub::Channel;

// =============================================================================
// Handler failures
// =============================================================================

/// Error returned by a fallible subscriber handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HandlerError {
    pub message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// A handler failed while a payload was being dispatched.
///
/// `position` is the handler's index in the channel's registration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler #{position} on channel '{channel}' failed: {source}")]
pub struct PublishError {
    pub channel: Channel,
    pub position: usize,
    #[source]
    pub source: HandlerError,
}

// =============================================================================
// Crate-wide error
// =============================================================================

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("{kind} doesn't exist")]
    UnknownCar { kind: String },

    #[error("No handler to validate type {check}")]
    MissingChecker { check: String },

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("Failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    ConfigToml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

impl PatternError {
    pub fn unknown_car(kind: impl Into<String>) -> Self {
        Self::UnknownCar { kind: kind.into() }
    }

    pub fn missing_checker(check: impl Into<String>) -> Self {
        Self::MissingChecker {
            check: check.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_car_message() {
        let err = PatternError::unknown_car("Tank");
        assert_eq!(err.to_string(), "Tank doesn't exist");
    }

    #[test]
    fn test_missing_checker_message() {
        let err = PatternError::missing_checker("isEmail");
        assert_eq!(err.to_string(), "No handler to validate type isEmail");
    }

    #[test]
    fn test_publish_error_names_channel_and_position() {
        let err = PublishError {
            channel: Channel::from("monthly"),
            position: 2,
            source: HandlerError::from("out of coffee"),
        };
        assert_eq!(
            err.to_string(),
            "handler #2 on channel 'monthly' failed: out of coffee"
        );

        let wrapped: PatternError = err.into();
        assert!(wrapped.to_string().contains("out of coffee"));
    }
}
