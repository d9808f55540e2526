//! Error types for game-core.
//!
//! Gameplay itself never fails: a missing ball or an inactive stage simply
//! yields no action. The only fallible surface is configuration.

use thiserror::Error;

/// A configuration value outside its valid range.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("defensive threshold {defensive} must be below offensive threshold {offensive}")]
    InvertedThresholds { defensive: f32, offensive: f32 },

    #[error("winning score must be at least 1")]
    ZeroWinningScore,
}

impl ConfigError {
    pub(crate) fn check_positive(field: &'static str, value: f32) -> Result<(), Self> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(Self::NotPositive { field, value })
        }
    }

    pub(crate) fn check_non_negative(field: &'static str, value: f32) -> Result<(), Self> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(Self::Negative { field, value })
        }
    }

    pub(crate) fn check_unit(field: &'static str, value: f32) -> Result<(), Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfUnitRange { field, value })
        }
    }
}
