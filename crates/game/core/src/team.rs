//! Team identity and field layout.

use glam::Vec2;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Which side a player is on.
///
/// Player one starts on the left, defends the negative-x goal and moves
/// counter-clockwise for positive input. Player two is mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerNumber {
    #[strum(to_string = "one", serialize = "1")]
    One,
    #[strum(to_string = "two", serialize = "2")]
    Two,
}

impl PlayerNumber {
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Spawn angle on the planet, in radians.
    pub fn spawn_angle(self) -> f32 {
        match self {
            Self::One => std::f32::consts::PI,
            Self::Two => 0.0,
        }
    }

    /// Tangent for positive movement input, given the unit to-center vector.
    pub fn movement_tangent(self, to_center: Vec2) -> Vec2 {
        match self {
            Self::One => Vec2::new(-to_center.y, to_center.x),
            Self::Two => Vec2::new(to_center.y, -to_center.x),
        }
    }

    /// Device input is mirrored for the right-hand player.
    pub fn mirror_axis(self, axis: f32) -> f32 {
        match self {
            Self::One => axis,
            Self::Two => -axis,
        }
    }
}

/// Goal positions used by tactical positioning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldLayout {
    /// Goal defended by player one; player two defends its mirror image.
    pub left_goal: Vec2,
    pub right_goal: Vec2,
}

impl FieldLayout {
    pub const DEFAULT_GOAL_DISTANCE: f32 = 10.0;

    pub fn own_goal(&self, player: PlayerNumber) -> Vec2 {
        match player {
            PlayerNumber::One => self.left_goal,
            PlayerNumber::Two => self.right_goal,
        }
    }

    pub fn enemy_goal(&self, player: PlayerNumber) -> Vec2 {
        self.own_goal(player.opponent())
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            left_goal: Vec2::new(-Self::DEFAULT_GOAL_DISTANCE, 0.0),
            right_goal: Vec2::new(Self::DEFAULT_GOAL_DISTANCE, 0.0),
        }
    }
}
