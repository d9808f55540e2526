//! Per-player data the state machine operates on.

use crate::env::{AudioSink, EffectsSink, NullAudio, NullEffects, RigidBody2D};
use crate::input::{InputDriver, InputSource};
use crate::power_up::PowerUps;
use crate::{GameConfig, Planet, PlayerNumber};

/// A player as seen by its states: identity, tuning, input, power-ups and
/// feedback outputs.
///
/// The physics body is not owned here; it is lent to every state hook through
/// [`super::StateContext`].
pub struct Actor {
    number: PlayerNumber,
    config: GameConfig,
    pub input: InputDriver,
    pub power_ups: PowerUps,
    audio: Box<dyn AudioSink>,
    effects: Box<dyn EffectsSink>,
    was_grounded: bool,
    facing_right: bool,
}

impl Actor {
    pub fn new(number: PlayerNumber, source: InputSource, config: GameConfig) -> Self {
        Self {
            number,
            input: InputDriver::new(number, source, config.input),
            power_ups: PowerUps::new(config.power_up),
            audio: Box::new(NullAudio),
            effects: Box::new(NullEffects),
            was_grounded: true,
            facing_right: true,
            config,
        }
    }

    pub fn with_audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    pub fn with_effects(mut self, effects: impl EffectsSink + 'static) -> Self {
        self.effects = Box::new(effects);
        self
    }

    pub fn number(&self) -> PlayerNumber {
        self.number
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn audio(&mut self) -> &mut dyn AudioSink {
        self.audio.as_mut()
    }

    pub fn effects(&mut self) -> &mut dyn EffectsSink {
        self.effects.as_mut()
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    /// Turns the actor toward the movement direction.
    pub fn face(&mut self, axis: f32) {
        self.facing_right = axis > 0.0;
    }

    /// Grounded test against the current body position.
    pub fn is_grounded(&self, body: &dyn RigidBody2D, planet: &Planet) -> bool {
        let reach = self.config.movement.ground_check_distance;
        planet.is_grounded(body.position(), reach)
    }

    /// Grounded test that also damps velocity on the landing edge.
    pub fn check_grounded(&mut self, body: &mut dyn RigidBody2D, planet: &Planet) -> bool {
        let grounded = self.is_grounded(body, planet);
        if grounded && !self.was_grounded {
            body.set_velocity(body.velocity() * self.config.movement.landing_damping);
        }
        self.was_grounded = grounded;
        grounded
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actor")
            .field("number", &self.number)
            .field("input", &self.input.state())
            .field("power_up", &self.power_ups.active())
            .field("facing_right", &self.facing_right)
            .finish()
    }
}
