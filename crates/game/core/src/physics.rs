//! Player forces and impulses applied through [`RigidBody2D`].
//!
//! These are the per-tick physics rules every player state shares. Integration
//! and collision response belong to the host engine.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::config::{KickConfig, MovementConfig, PhysicsConfig};
use crate::env::{BallContact, RigidBody2D};
use crate::math::{clamp01, lerp_angle};
use crate::{Planet, PlayerNumber};

/// Pulls the body toward the planet center, fading out with altitude.
pub fn apply_planet_gravity(body: &mut dyn RigidBody2D, planet: &Planet, config: &PhysicsConfig) {
    let position = body.position();
    let surface_distance = planet.surface_distance(position);
    if surface_distance > config.gravity_fade_distance {
        return;
    }

    let falloff = 1.0 - clamp01(surface_distance / config.gravity_fade_distance);
    let strength = config.gravity_strength * falloff;
    body.add_force(planet.to_center(position) * strength);
}

/// Rotation (radians) that stands a body upright on the surface.
pub fn upright_rotation(planet: &Planet, position: Vec2) -> f32 {
    let to_center = planet.to_center(position);
    to_center.y.atan2(to_center.x) - FRAC_PI_2
}

/// Turns the body toward its upright rotation along the shortest arc.
pub fn orient_to_planet(
    body: &mut dyn RigidBody2D,
    planet: &Planet,
    config: &PhysicsConfig,
    grounded: bool,
    fixed_dt: f32,
) {
    let target = upright_rotation(planet, body.position());
    let rate = if grounded {
        config.grounded_turn_rate
    } else {
        config.airborne_turn_rate
    };
    body.set_rotation(lerp_angle(body.rotation(), target, fixed_dt * rate));
}

/// Drives the body along the surface tangent, keeping its radial speed.
pub fn move_around_planet(
    body: &mut dyn RigidBody2D,
    planet: &Planet,
    player: PlayerNumber,
    axis: f32,
    grounded: bool,
    config: &MovementConfig,
) {
    let to_center = planet.to_center(body.position());
    let mut target = player.movement_tangent(to_center) * axis * config.move_speed;
    if !grounded {
        target *= config.air_control;
    }

    let radial = to_center * body.velocity().dot(to_center);
    body.set_velocity(target + radial);
}

/// Launches the body away from the planet.
pub fn jump(body: &mut dyn RigidBody2D, planet: &Planet, config: &MovementConfig, multiplier: f32) {
    let outward = planet.outward(body.position());
    body.add_impulse(outward * config.jump_force * multiplier);
}

/// Outward radial speed. Positive while moving away from the planet.
pub fn radial_speed(body: &dyn RigidBody2D, planet: &Planet) -> f32 {
    body.velocity().dot(planet.outward(body.position()))
}

/// Impulse imparted to the ball by a kick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KickImpulse {
    /// Unit direction of the kick.
    pub direction: Vec2,
    pub strength: f32,
}

impl KickImpulse {
    /// Computes the kick for a player touching the ball.
    ///
    /// The ball is pushed away from the player, skewed along the contact
    /// tangent in the direction the player is travelling.
    pub fn compute(
        contact: &BallContact,
        player_velocity: Vec2,
        ball_velocity: Vec2,
        config: &KickConfig,
        multiplier: f32,
    ) -> Self {
        let away = -contact.normal;
        let relative_speed = (player_velocity - ball_velocity).length();
        let bonus = relative_speed * config.relative_velocity_factor;
        let strength = (config.collision_kick_force + bonus) * multiplier;

        let mut tangent = contact.normal.perp();
        if player_velocity.dot(tangent) < 0.0 {
            tangent = -tangent;
        }

        Self {
            direction: (away + tangent * config.tangent_blend).normalize_or_zero(),
            strength,
        }
    }

    pub fn impulse(&self) -> Vec2 {
        self.direction * self.strength
    }
}
