//! Errors surfaced by the runtime API.
use thiserror::Error;

use game_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error, PartialEq)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation step must be positive, got {0}")]
    InvalidTimeStep(f32),

    #[error("fixed step {fixed_step} is larger than frame step {frame_step}")]
    FixedStepTooLarge { fixed_step: f32, frame_step: f32 },

    #[error("simulation needs at least one frame")]
    NoFrames,
}
