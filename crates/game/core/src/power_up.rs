//! Timed power-ups.

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::config::PowerUpConfig;

/// Collectible power-up kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerUpKind {
    PowerfulKick,
    BiggerBody,
    HigherJump,
}

/// Active power-up and the stat multipliers it grants.
///
/// Only one power-up is active at a time. Applying a new one replaces the old
/// one and restarts the timer.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerUps {
    config: PowerUpConfig,
    active: Option<PowerUpKind>,
    remaining: f32,
    kick_multiplier: f32,
    size_multiplier: f32,
    jump_multiplier: f32,
}

impl PowerUps {
    pub fn new(config: PowerUpConfig) -> Self {
        Self {
            config,
            active: None,
            remaining: 0.0,
            kick_multiplier: 1.0,
            size_multiplier: 1.0,
            jump_multiplier: 1.0,
        }
    }

    pub fn apply(&mut self, kind: PowerUpKind) {
        self.reset();
        match kind {
            PowerUpKind::PowerfulKick => self.kick_multiplier = self.config.kick_multiplier,
            PowerUpKind::BiggerBody => self.size_multiplier = self.config.size_multiplier,
            PowerUpKind::HigherJump => self.jump_multiplier = self.config.jump_multiplier,
        }
        self.active = Some(kind);
        self.remaining = self.config.duration;
        tracing::debug!(power_up = %kind, duration = self.remaining, "power-up applied");
    }

    /// Counts down the active power-up. Returns the kind that expired, if any.
    pub fn advance(&mut self, dt: f32) -> Option<PowerUpKind> {
        let kind = self.active?;
        self.remaining -= dt;
        if self.remaining > 0.0 {
            return None;
        }

        self.reset();
        tracing::debug!(power_up = %kind, "power-up expired");
        Some(kind)
    }

    /// Clears the active power-up and restores base stats.
    pub fn reset(&mut self) {
        self.active = None;
        self.remaining = 0.0;
        self.kick_multiplier = 1.0;
        self.size_multiplier = 1.0;
        self.jump_multiplier = 1.0;
    }

    pub fn active(&self) -> Option<PowerUpKind> {
        self.active
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Seconds left on the active power-up, zero when none is active.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn kick_multiplier(&self) -> f32 {
        self.kick_multiplier
    }

    pub fn size_multiplier(&self) -> f32 {
        self.size_multiplier
    }

    pub fn jump_multiplier(&self) -> f32 {
        self.jump_multiplier
    }
}

impl Default for PowerUps {
    fn default() -> Self {
        Self::new(PowerUpConfig::default())
    }
}
