//! Places balls above the planet surface.

use glam::Vec2;
use tracing::debug;

use crate::Planet;
use crate::config::SpawnerConfig;
use crate::env::{RandomSource, StageGate};

/// Tracks live balls and decides where new ones appear.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BallSpawner {
    config: SpawnerConfig,
    ball_count: usize,
}

impl BallSpawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            config,
            ball_count: 0,
        }
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count
    }

    pub fn can_spawn(&self, gate: &dyn StageGate) -> bool {
        gate.is_gameplay_active() && self.ball_count < self.config.max_balls
    }

    /// Spawn point for a ball, `spawn_radius` above the surface in the
    /// direction of `anchor`.
    ///
    /// Falls back to straight up when `anchor` is the planet center.
    pub fn spawn_position(
        &self,
        planet: &Planet,
        anchor: Vec2,
        rng: &mut dyn RandomSource,
    ) -> Vec2 {
        let outward = (anchor - planet.center).try_normalize().unwrap_or(Vec2::Y);
        let altitude = planet.radius + self.config.spawn_radius;
        let mut position = planet.center + outward * altitude + self.config.spawn_offset;

        if self.config.use_random_position {
            let angle = std::f32::consts::TAU * rng.next_unit();
            let distance = rng.next_unit().sqrt() * self.config.spawn_radius;
            position += Vec2::from_angle(angle) * distance;
        }
        position
    }

    /// Registers a new ball and returns where it goes, or `None` when
    /// spawning is not allowed right now.
    pub fn try_spawn(
        &mut self,
        gate: &dyn StageGate,
        planet: &Planet,
        anchor: Vec2,
        rng: &mut dyn RandomSource,
    ) -> Option<Vec2> {
        if !self.can_spawn(gate) {
            return None;
        }

        let position = self.spawn_position(planet, anchor, rng);
        self.ball_count += 1;
        debug!(
            x = position.x,
            y = position.y,
            count = self.ball_count,
            "ball spawned"
        );
        Some(position)
    }

    /// Call when a ball leaves play.
    pub fn ball_removed(&mut self) {
        self.ball_count = self.ball_count.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.ball_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AlwaysActive, FixedRandom};
    use crate::{MatchState, PlayerNumber};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1.0e-4
    }

    #[test]
    fn spawns_above_anchor_with_offset() {
        let spawner = BallSpawner::default();
        let planet = Planet::default();
        let mut rng = FixedRandom::default();
        let position = spawner.spawn_position(&planet, Vec2::new(0.0, 20.0), &mut rng);
        assert!(approx(position, Vec2::new(0.0, 8.0)));
    }

    #[test]
    fn anchor_at_center_spawns_straight_up() {
        let spawner = BallSpawner::new(SpawnerConfig {
            spawn_offset: Vec2::ZERO,
            ..SpawnerConfig::default()
        });
        let planet = Planet::default();
        let mut rng = FixedRandom::default();
        let position = spawner.spawn_position(&planet, planet.center, &mut rng);
        assert!(approx(position, Vec2::new(0.0, 7.0)));
    }

    #[test]
    fn random_offset_stays_inside_spawn_radius() {
        let spawner = BallSpawner::new(SpawnerConfig {
            use_random_position: true,
            spawn_offset: Vec2::ZERO,
            ..SpawnerConfig::default()
        });
        let planet = Planet::default();
        let base = Vec2::new(0.0, 7.0);
        let mut rng = FixedRandom::new(vec![0.0, 0.25, 0.5, 0.99, 0.75, 0.64]);

        for _ in 0..3 {
            let position = spawner.spawn_position(&planet, Vec2::Y, &mut rng);
            assert!(position.distance(base) <= SpawnerConfig::DEFAULT_SPAWN_RADIUS + 1.0e-4);
        }
    }

    #[test]
    fn respects_ball_limit() {
        let mut spawner = BallSpawner::default();
        let planet = Planet::default();
        let mut rng = FixedRandom::default();

        let first = spawner.try_spawn(&AlwaysActive, &planet, Vec2::Y, &mut rng);
        assert!(first.is_some());
        let second = spawner.try_spawn(&AlwaysActive, &planet, Vec2::Y, &mut rng);
        assert!(second.is_none());

        spawner.ball_removed();
        assert_eq!(spawner.ball_count(), 0);
        let again = spawner.try_spawn(&AlwaysActive, &planet, Vec2::Y, &mut rng);
        assert!(again.is_some());
    }

    #[test]
    fn refuses_when_match_is_over() {
        let mut spawner = BallSpawner::default();
        let mut state = MatchState::default();
        for _ in 0..5 {
            state.player_scored(PlayerNumber::One);
        }

        let mut rng = FixedRandom::default();
        let spawned = spawner.try_spawn(&state, &Planet::default(), Vec2::Y, &mut rng);
        assert!(spawned.is_none());
        assert_eq!(spawner.ball_count(), 0);
    }
}
