//! Rigid body seam and a kinematic stand-in.

use glam::Vec2;

use crate::Planet;

/// Physics body owned by the host engine.
///
/// Rotation is in radians. Forces accumulate until the host integrates them;
/// impulses change velocity immediately.
pub trait RigidBody2D {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn rotation(&self) -> f32;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_rotation(&mut self, rotation: f32);
    fn add_force(&mut self, force: Vec2);
    fn add_impulse(&mut self, impulse: Vec2);
}

/// A single contact between a player and the ball.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallContact {
    pub point: Vec2,
    /// Unit normal pointing from the ball toward the player.
    pub normal: Vec2,
}

impl BallContact {
    /// Builds a contact from the two body centers.
    pub fn between(player: Vec2, ball: Vec2) -> Self {
        let normal = (player - ball).normalize_or_zero();
        Self {
            point: ball + normal * 0.5 * player.distance(ball),
            normal,
        }
    }
}

/// Velocity-integrating body with no collision response.
///
/// Good enough to drive the AI headlessly. The only world interaction is
/// [`KinematicBody::clamp_to_surface`], which keeps the body from sinking
/// into the planet.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub mass: f32,
    force: Vec2,
}

impl KinematicBody {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            mass: 1.0,
            force: Vec2::ZERO,
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass.max(f32::EPSILON);
        self
    }

    /// Force accumulated since the last integration.
    pub fn pending_force(&self) -> Vec2 {
        self.force
    }

    /// Applies accumulated forces and advances the position.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.force / self.mass * dt;
        self.position += self.velocity * dt;
        self.force = Vec2::ZERO;
    }

    /// Pushes the body back onto the surface shell and cancels inward speed.
    ///
    /// Returns `true` when the body had to be corrected.
    pub fn clamp_to_surface(&mut self, planet: &Planet, clearance: f32) -> bool {
        let min_distance = planet.radius + clearance;
        let offset = self.position - planet.center;
        if offset.length() >= min_distance {
            return false;
        }

        let outward = offset.try_normalize().unwrap_or(Vec2::Y);
        self.position = planet.center + outward * min_distance;

        let radial = self.velocity.dot(outward);
        if radial < 0.0 {
            self.velocity -= outward * radial;
        }
        true
    }
}

impl RigidBody2D for KinematicBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    fn add_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_is_immediate_force_is_deferred() {
        let mut body = KinematicBody::new(Vec2::ZERO).with_mass(2.0);
        body.add_impulse(Vec2::new(4.0, 0.0));
        body.add_force(Vec2::new(0.0, 10.0));

        assert_eq!(body.velocity, Vec2::new(2.0, 0.0));

        body.integrate(0.5);
        assert_eq!(body.velocity, Vec2::new(2.0, 2.5));
        assert_eq!(body.position, Vec2::new(1.0, 1.25));
        assert_eq!(body.pending_force(), Vec2::ZERO);
    }

    #[test]
    fn clamp_removes_inward_velocity_only() {
        let planet = Planet::default();
        let mut body = KinematicBody::new(Vec2::new(0.0, 5.2));
        body.velocity = Vec2::new(1.0, -3.0);

        assert!(body.clamp_to_surface(&planet, 0.5));
        assert!((body.position - Vec2::new(0.0, 5.5)).length() < 1.0e-5);
        assert!((body.velocity - Vec2::new(1.0, 0.0)).length() < 1.0e-5);
    }

    #[test]
    fn contact_normal_points_at_player() {
        let contact = BallContact::between(Vec2::new(0.0, 1.0), Vec2::ZERO);
        assert_eq!(contact.normal, Vec2::Y);
        assert_eq!(contact.point, Vec2::new(0.0, 0.5));
    }
}
