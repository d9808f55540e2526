//! Runtime glue for planet soccer players.
//!
//! This crate wires the behavior-tree AI to the player state machine from
//! `game-core` and provides a headless match driver.
//!
//! Modules are organized by responsibility:
//! - [`providers`] hosts the AI: blackboard, tree nodes, presets, controller
//! - [`agent`] drives one player through input, AI and state machine passes
//! - [`simulation`] runs a seeded AI-versus-AI match without an engine
pub mod agent;
pub mod error;
pub mod providers;
pub mod simulation;

pub use agent::PlayerAgent;
pub use error::{Result, RuntimeError};
pub use providers::ai::{
    AiBlackboard, AiCommand, AiController, AiTick, BallSnapshot, ControllerSettings, Sensors,
    SoccerTree, TacticalView, presets,
};
pub use simulation::{MatchSummary, Simulation, SimulationConfig};
