//! Error types for Titan Crash
//!
//! Gameplay never fails: illegal clicks are declined and reported as
//! [`Rejection`](crate::rules::Rejection) values. Only configuration can
//! be invalid.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: expected {expected}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("clock must be at least 1 second")]
    ZeroClock,

    #[error("titans per player must be between 1 and {max}, got {got}")]
    TitanCapOutOfRange { got: u8, max: u8 },

    #[error("{field} must be a positive finite number, got {value}")]
    InvalidGeometry { field: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
