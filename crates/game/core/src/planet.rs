//! Planet geometry.

use glam::Vec2;

/// Circular playing surface with radial gravity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Planet {
    pub center: Vec2,
    pub radius: f32,
    /// Height above the surface at which players stand.
    pub player_offset: f32,
}

impl Planet {
    pub const DEFAULT_RADIUS: f32 = 5.0;
    pub const DEFAULT_PLAYER_OFFSET: f32 = 0.5;

    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            player_offset: Self::DEFAULT_PLAYER_OFFSET,
        }
    }

    /// Signed distance from the surface. Negative means inside the planet.
    pub fn surface_distance(&self, position: Vec2) -> f32 {
        position.distance(self.center) - self.radius
    }

    /// Unit vector from `position` toward the center, zero at the center.
    pub fn to_center(&self, position: Vec2) -> Vec2 {
        (self.center - position).normalize_or_zero()
    }

    /// Unit surface normal at `position`, zero at the center.
    pub fn outward(&self, position: Vec2) -> Vec2 {
        -self.to_center(position)
    }

    /// Standing position for a player at `angle` radians.
    pub fn surface_position(&self, angle: f32) -> Vec2 {
        self.center + Vec2::from_angle(angle) * (self.radius + self.player_offset)
    }

    /// Polar angle of `position` around the center, in radians.
    pub fn angle_of(&self, position: Vec2) -> f32 {
        let offset = position - self.center;
        offset.y.atan2(offset.x)
    }

    /// Whether `position` lies within `threshold` of the surface.
    pub fn is_grounded(&self, position: Vec2, threshold: f32) -> bool {
        self.surface_distance(position) <= threshold
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Self::DEFAULT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn surface_position_round_trips_angle() {
        let planet = Planet::default();
        let position = planet.surface_position(PI / 2.0);

        assert!((position - Vec2::new(0.0, 5.5)).length() < 1.0e-5);
        assert!((planet.angle_of(position) - PI / 2.0).abs() < 1.0e-5);
        assert!((planet.surface_distance(position) - 0.5).abs() < 1.0e-5);
    }

    #[test]
    fn grounded_uses_threshold() {
        let planet = Planet::default();
        assert!(planet.is_grounded(Vec2::new(6.0, 0.0), 1.0));
        assert!(!planet.is_grounded(Vec2::new(6.1, 0.0), 1.0));
    }

    #[test]
    fn directions_at_center_are_zero() {
        let planet = Planet::default();
        assert_eq!(planet.to_center(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(planet.outward(Vec2::new(0.0, 8.0)), Vec2::Y);
    }
}
