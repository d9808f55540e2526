//! Behavior-tree AI for soccer players.
//!
//! # Core Components
//!
//! - [`AiBlackboard`]: sensor snapshot, tactical view and command queue that
//!   tree nodes share
//! - [`nodes`]: conditions and actions over the blackboard
//! - [`presets`]: the input-processing and autonomous trees
//! - [`AiController`]: ticks a tree, runs tactics and injects decisions into
//!   the player's input driver

pub mod blackboard;
pub mod controller;
pub mod nodes;
pub mod presets;

pub use blackboard::{AiBlackboard, AiCommand, BallSnapshot, Sensors, TacticalView};
pub use controller::{AiController, AiTick, ControllerSettings};
pub use presets::SoccerTree;
