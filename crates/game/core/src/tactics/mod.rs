//! Tactical positioning for AI players.
//!
//! Everything here is a pure function of the current situation, the AI
//! profile and an injected [`crate::RandomSource`]. Nothing is cached between
//! ticks; callers build a fresh [`Situation`] and [`TacticalSnapshot`] every
//! time they need one.
mod evaluator;
mod profile;

pub use evaluator::{Situation, TacticalEvaluator, TacticalSnapshot};
pub use profile::{AiProfile, Personality};
