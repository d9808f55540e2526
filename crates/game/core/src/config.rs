//! Game configuration constants and tunable parameters.
//!
//! Every section carries its defaults as named constants so the values can be
//! referenced without building a config. With the `serde` feature enabled a
//! partial JSON document deserializes on top of the defaults.
use crate::error::ConfigError;
use crate::{FieldLayout, Planet};

/// Complete set of tunables for one match.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub planet: Planet,
    pub field: FieldLayout,
    pub movement: MovementConfig,
    pub physics: PhysicsConfig,
    pub kick: KickConfig,
    pub power_up: PowerUpConfig,
    pub input: InputConfig,
    pub tactics: TacticsConfig,
    pub match_rules: MatchConfig,
    pub spawner: SpawnerConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every section, returning the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("planet.radius", self.planet.radius)?;
        ConfigError::check_non_negative("planet.player_offset", self.planet.player_offset)?;
        self.movement.validate()?;
        self.physics.validate()?;
        self.kick.validate()?;
        self.power_up.validate()?;
        self.input.validate()?;
        self.tactics.validate()?;
        self.match_rules.validate()?;
        self.spawner.validate()
    }
}

/// Player locomotion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    /// Maximum surface distance that still counts as grounded.
    pub ground_check_distance: f32,
    /// Fraction of the tangential target speed available in the air.
    pub air_control: f32,
    /// Velocity scale applied on the airborne to grounded edge.
    pub landing_damping: f32,
}

impl MovementConfig {
    pub const DEFAULT_MOVE_SPEED: f32 = 3.0;
    pub const DEFAULT_JUMP_FORCE: f32 = 8.0;
    pub const DEFAULT_GROUND_CHECK_DISTANCE: f32 = 1.0;
    pub const DEFAULT_AIR_CONTROL: f32 = 0.3;
    pub const DEFAULT_LANDING_DAMPING: f32 = 0.8;

    fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("movement.move_speed", self.move_speed)?;
        ConfigError::check_positive("movement.jump_force", self.jump_force)?;
        ConfigError::check_non_negative(
            "movement.ground_check_distance",
            self.ground_check_distance,
        )?;
        ConfigError::check_unit("movement.air_control", self.air_control)?;
        ConfigError::check_unit("movement.landing_damping", self.landing_damping)
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: Self::DEFAULT_MOVE_SPEED,
            jump_force: Self::DEFAULT_JUMP_FORCE,
            ground_check_distance: Self::DEFAULT_GROUND_CHECK_DISTANCE,
            air_control: Self::DEFAULT_AIR_CONTROL,
            landing_damping: Self::DEFAULT_LANDING_DAMPING,
        }
    }
}

/// Planet gravity and surface alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    pub gravity_strength: f32,
    /// Surface distance at which gravity reaches zero.
    pub gravity_fade_distance: f32,
    /// Orientation interpolation rate per second while grounded.
    pub grounded_turn_rate: f32,
    /// Orientation interpolation rate per second while airborne.
    pub airborne_turn_rate: f32,
}

impl PhysicsConfig {
    pub const DEFAULT_GRAVITY_STRENGTH: f32 = 50.0;
    pub const DEFAULT_GRAVITY_FADE_DISTANCE: f32 = 10.0;
    pub const DEFAULT_GROUNDED_TURN_RATE: f32 = 10.0;
    pub const DEFAULT_AIRBORNE_TURN_RATE: f32 = 3.0;

    fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("physics.gravity_strength", self.gravity_strength)?;
        ConfigError::check_positive("physics.gravity_fade_distance", self.gravity_fade_distance)?;
        ConfigError::check_non_negative("physics.grounded_turn_rate", self.grounded_turn_rate)?;
        ConfigError::check_non_negative("physics.airborne_turn_rate", self.airborne_turn_rate)
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_strength: Self::DEFAULT_GRAVITY_STRENGTH,
            gravity_fade_distance: Self::DEFAULT_GRAVITY_FADE_DISTANCE,
            grounded_turn_rate: Self::DEFAULT_GROUNDED_TURN_RATE,
            airborne_turn_rate: Self::DEFAULT_AIRBORNE_TURN_RATE,
        }
    }
}

/// Ball kicking.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KickConfig {
    pub collision_kick_force: f32,
    /// Extra strength per unit of player/ball relative speed.
    pub relative_velocity_factor: f32,
    /// Weight of the tangential component in the kick direction.
    pub tangent_blend: f32,
    /// Time spent in the kicking state.
    pub duration: f32,
}

impl KickConfig {
    pub const DEFAULT_COLLISION_KICK_FORCE: f32 = 15.0;
    pub const DEFAULT_RELATIVE_VELOCITY_FACTOR: f32 = 1.5;
    pub const DEFAULT_TANGENT_BLEND: f32 = 0.4;
    pub const DEFAULT_DURATION: f32 = 0.2;

    fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("kick.collision_kick_force", self.collision_kick_force)?;
        ConfigError::check_non_negative(
            "kick.relative_velocity_factor",
            self.relative_velocity_factor,
        )?;
        ConfigError::check_non_negative("kick.tangent_blend", self.tangent_blend)?;
        ConfigError::check_positive("kick.duration", self.duration)
    }
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            collision_kick_force: Self::DEFAULT_COLLISION_KICK_FORCE,
            relative_velocity_factor: Self::DEFAULT_RELATIVE_VELOCITY_FACTOR,
            tangent_blend: Self::DEFAULT_TANGENT_BLEND,
            duration: Self::DEFAULT_DURATION,
        }
    }
}

/// Power-up strength and duration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerUpConfig {
    pub duration: f32,
    pub kick_multiplier: f32,
    pub size_multiplier: f32,
    pub jump_multiplier: f32,
}

impl PowerUpConfig {
    pub const DEFAULT_DURATION: f32 = 5.0;
    pub const DEFAULT_KICK_MULTIPLIER: f32 = 2.0;
    pub const DEFAULT_SIZE_MULTIPLIER: f32 = 1.5;
    pub const DEFAULT_JUMP_MULTIPLIER: f32 = 2.0;

    fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("power_up.duration", self.duration)?;
        ConfigError::check_positive("power_up.kick_multiplier", self.kick_multiplier)?;
        ConfigError::check_positive("power_up.size_multiplier", self.size_multiplier)?;
        ConfigError::check_positive("power_up.jump_multiplier", self.jump_multiplier)
    }
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            kick_multiplier: Self::DEFAULT_KICK_MULTIPLIER,
            size_multiplier: Self::DEFAULT_SIZE_MULTIPLIER,
            jump_multiplier: Self::DEFAULT_JUMP_MULTIPLIER,
        }
    }
}

/// Input processing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Smoothing time for injected AI movement.
    pub ai_smooth_time: f32,
    /// Lets AI input override human input in hybrid mode.
    pub allow_ai_override: bool,
    /// Axis magnitude above which the actor counts as moving.
    pub moving_threshold: f32,
}

impl InputConfig {
    pub const DEFAULT_AI_SMOOTH_TIME: f32 = 0.1;
    pub const DEFAULT_MOVING_THRESHOLD: f32 = 0.1;

    fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("input.ai_smooth_time", self.ai_smooth_time)?;
        ConfigError::check_unit("input.moving_threshold", self.moving_threshold)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            ai_smooth_time: Self::DEFAULT_AI_SMOOTH_TIME,
            allow_ai_override: false,
            moving_threshold: Self::DEFAULT_MOVING_THRESHOLD,
        }
    }
}

/// Tactical evaluation and AI decision pacing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TacticsConfig {
    /// How far ahead the ball is predicted, in seconds.
    pub lookahead: f32,
    pub positioning_radius: f32,
    pub goal_defense_radius: f32,
    pub offensive_threshold: f32,
    pub defensive_threshold: f32,
    /// Minimum time between AI move/jump decisions.
    pub decision_update_rate: f32,
}

impl TacticsConfig {
    pub const DEFAULT_LOOKAHEAD: f32 = 0.5;
    pub const DEFAULT_POSITIONING_RADIUS: f32 = 5.0;
    pub const DEFAULT_GOAL_DEFENSE_RADIUS: f32 = 4.0;
    pub const DEFAULT_OFFENSIVE_THRESHOLD: f32 = 0.6;
    pub const DEFAULT_DEFENSIVE_THRESHOLD: f32 = 0.3;
    pub const DEFAULT_DECISION_UPDATE_RATE: f32 = 0.1;

    fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("tactics.lookahead", self.lookahead)?;
        ConfigError::check_non_negative("tactics.positioning_radius", self.positioning_radius)?;
        ConfigError::check_non_negative("tactics.goal_defense_radius", self.goal_defense_radius)?;
        ConfigError::check_unit("tactics.offensive_threshold", self.offensive_threshold)?;
        ConfigError::check_unit("tactics.defensive_threshold", self.defensive_threshold)?;
        if self.defensive_threshold >= self.offensive_threshold {
            return Err(ConfigError::InvertedThresholds {
                defensive: self.defensive_threshold,
                offensive: self.offensive_threshold,
            });
        }
        ConfigError::check_non_negative("tactics.decision_update_rate", self.decision_update_rate)
    }
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            lookahead: Self::DEFAULT_LOOKAHEAD,
            positioning_radius: Self::DEFAULT_POSITIONING_RADIUS,
            goal_defense_radius: Self::DEFAULT_GOAL_DEFENSE_RADIUS,
            offensive_threshold: Self::DEFAULT_OFFENSIVE_THRESHOLD,
            defensive_threshold: Self::DEFAULT_DEFENSIVE_THRESHOLD,
            decision_update_rate: Self::DEFAULT_DECISION_UPDATE_RATE,
        }
    }
}

/// Match rules.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    pub winning_score: u32,
    /// Match length in seconds.
    pub match_time: f32,
    pub use_timer: bool,
}

impl MatchConfig {
    pub const DEFAULT_WINNING_SCORE: u32 = 5;
    pub const DEFAULT_MATCH_TIME: f32 = 300.0;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        ConfigError::check_positive("match_rules.match_time", self.match_time)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: Self::DEFAULT_WINNING_SCORE,
            match_time: Self::DEFAULT_MATCH_TIME,
            use_timer: true,
        }
    }
}

/// Ball spawning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnerConfig {
    pub max_balls: usize,
    /// Height above the surface, also the radius of the random scatter.
    pub spawn_radius: f32,
    pub spawn_offset: glam::Vec2,
    pub use_random_position: bool,
}

impl SpawnerConfig {
    pub const DEFAULT_MAX_BALLS: usize = 1;
    pub const DEFAULT_SPAWN_RADIUS: f32 = 2.0;
    pub const DEFAULT_SPAWN_OFFSET: glam::Vec2 = glam::Vec2::Y;

    fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("spawner.spawn_radius", self.spawn_radius)
    }
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            max_balls: Self::DEFAULT_MAX_BALLS,
            spawn_radius: Self::DEFAULT_SPAWN_RADIUS,
            spawn_offset: Self::DEFAULT_SPAWN_OFFSET,
            use_random_position: false,
        }
    }
}
