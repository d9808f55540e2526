//! Decision providers for players.

pub mod ai;

pub use ai::{AiController, ControllerSettings};
