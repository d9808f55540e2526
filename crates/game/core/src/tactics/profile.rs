use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ConfigError;

/// Play style of an AI player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Personality {
    /// Stays between the ball and the enemy goal.
    Aggressive,
    /// Guards its own goal.
    Defensive,
    /// Switches style depending on where the ball is.
    #[default]
    Balanced,
    /// Waits near its goal and strikes when the ball comes close.
    Opportunist,
}

impl Personality {
    pub const BASE_CHASE_DISTANCE: f32 = 8.0;

    /// Distance within which the simple fallback AI chases the ball.
    pub fn chase_distance(self) -> f32 {
        let factor = match self {
            Self::Aggressive => 1.5,
            Self::Defensive => 0.7,
            Self::Balanced => 1.0,
            Self::Opportunist => 0.9,
        };
        Self::BASE_CHASE_DISTANCE * factor
    }
}

/// Personality and skill of one AI player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiProfile {
    pub personality: Personality,
    /// 0 is clumsy, 1 is perfect.
    pub skill: f32,
    /// Minimum seconds between decisions.
    pub reaction_time: f32,
}

impl AiProfile {
    pub const DEFAULT_SKILL: f32 = 0.7;
    pub const DEFAULT_REACTION_TIME: f32 = 0.2;

    pub fn new(personality: Personality, skill: f32) -> Self {
        Self {
            personality,
            skill,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit("ai.skill", self.skill)?;
        ConfigError::check_non_negative("ai.reaction_time", self.reaction_time)
    }
}

impl Default for AiProfile {
    fn default() -> Self {
        Self {
            personality: Personality::default(),
            skill: Self::DEFAULT_SKILL,
            reaction_time: Self::DEFAULT_REACTION_TIME,
        }
    }
}
