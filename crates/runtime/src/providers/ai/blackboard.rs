//! Shared state that soccer AI nodes read and write.
//!
//! The blackboard is owned by the controller and refreshed from [`Sensors`]
//! at the start of every tick. Nodes never touch the physics body or the
//! state machine directly; action nodes queue [`AiCommand`]s that the player
//! agent applies after the tree has run.

use behavior_tree::GameClock;
use game_core::{InputState, PlayerNumber, PowerUpKind, TacticalSnapshot};
use glam::Vec2;

/// Position and velocity of the ball.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BallSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// What a player perceives at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sensors {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub input: InputState,
    pub moving: bool,
    pub power_up: Option<PowerUpKind>,
    pub ball: Option<BallSnapshot>,
}

/// Output of an action node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AiCommand {
    /// Drive along the surface with the given axis.
    Move(f32),
    Jump,
    /// The ball is in kicking range.
    Kick,
    ApplyPowerUp(PowerUpKind),
}

/// Tactical verdicts computed by the controller for the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TacticalView {
    pub snapshot: TacticalSnapshot,
    pub chase_aggressively: bool,
    pub defend: bool,
    /// Movement axis toward the optimal position.
    pub move_axis: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AiBlackboard {
    player: PlayerNumber,
    time: f32,
    pub sensors: Sensors,
    pub tactics: Option<TacticalView>,
    /// Power-ups lying on the field that the player could collect.
    pub available_power_ups: Vec<PowerUpKind>,
    commands: Vec<AiCommand>,
}

impl AiBlackboard {
    pub fn new(player: PlayerNumber) -> Self {
        Self {
            player,
            time: 0.0,
            sensors: Sensors::default(),
            tactics: None,
            available_power_ups: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn player(&self) -> PlayerNumber {
        self.player
    }

    /// Starts a new tick: advances the clock, replaces the sensor snapshot
    /// and drops commands nobody collected.
    pub fn refresh(&mut self, sensors: Sensors, dt: f32) {
        self.time += dt.max(0.0);
        self.sensors = sensors;
        self.tactics = None;
        self.commands.clear();
    }

    pub fn is_grounded(&self) -> bool {
        self.sensors.grounded
    }

    pub fn is_moving(&self) -> bool {
        self.sensors.moving
    }

    /// Distance to the ball, if there is one.
    pub fn ball_distance(&self) -> Option<f32> {
        self.sensors
            .ball
            .map(|ball| ball.position.distance(self.sensors.position))
    }

    pub fn push(&mut self, command: AiCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[AiCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<AiCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl GameClock for AiBlackboard {
    fn now(&self) -> f32 {
        self.time
    }
}
