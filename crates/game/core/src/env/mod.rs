//! Traits describing the host engine around the AI core.
//!
//! The core never talks to an engine directly. Physics bodies, audio and
//! visual feedback, the game-stage gate and randomness are injected through
//! the traits re-exported here, each with a small concrete implementation for
//! headless use.
mod body;
mod feedback;
mod rng;
mod stage;

pub use body::{BallContact, KinematicBody, RigidBody2D};
pub use feedback::{
    AudioSink, EffectsSink, Feedback, FeedbackLog, NullAudio, NullEffects, SoundCue, VisualEffect,
};
pub use rng::{FixedRandom, RandomSource, SeededRandom};
pub use stage::{AlwaysActive, StageGate};
