//! Game logic for two-player soccer on a small round planet.
//!
//! `game-core` owns everything that decides how a player behaves: planet
//! geometry and physics helpers, the input driver, power-ups, the per-player
//! state machine, tactical positioning for AI players, and match bookkeeping.
//! The host engine is reached only through the traits in [`env`], so the same
//! code runs inside a game, a headless simulation, or a unit test.
pub mod config;
pub mod env;
pub mod error;
pub mod fsm;
pub mod input;
pub mod match_state;
pub mod math;
pub mod physics;
pub mod planet;
pub mod power_up;
pub mod spawner;
pub mod tactics;
pub mod team;

pub use config::{
    GameConfig, InputConfig, KickConfig, MatchConfig, MovementConfig, PhysicsConfig,
    PowerUpConfig, SpawnerConfig, TacticsConfig,
};
pub use env::{
    AlwaysActive, AudioSink, BallContact, EffectsSink, Feedback, FeedbackLog, FixedRandom,
    KinematicBody, NullAudio, NullEffects, RandomSource, RigidBody2D, SeededRandom, SoundCue,
    StageGate, VisualEffect,
};
pub use error::ConfigError;
pub use fsm::{
    Actor, IdleState, JumpingState, KickingState, MovingState, PlayerState, PlayerStateMachine,
    PoweredUpState, StateContext, StateKind, Transition,
};
pub use input::{DeviceInput, InputDriver, InputSource, InputState};
pub use match_state::{MatchOutcome, MatchStage, MatchState};
pub use physics::KickImpulse;
pub use planet::Planet;
pub use power_up::{PowerUpKind, PowerUps};
pub use spawner::BallSpawner;
pub use tactics::{AiProfile, Personality, Situation, TacticalEvaluator, TacticalSnapshot};
pub use team::{FieldLayout, PlayerNumber};
