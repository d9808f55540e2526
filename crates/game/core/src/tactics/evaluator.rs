use glam::Vec2;

use super::{AiProfile, Personality};
use crate::config::TacticsConfig;
use crate::env::RandomSource;
use crate::math::{inverse_lerp, sign};
use crate::{FieldLayout, GameConfig, PlayerNumber};

/// What an AI player knows about the world this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Situation {
    pub player: PlayerNumber,
    pub position: Vec2,
    pub grounded: bool,
    pub ball_position: Vec2,
    pub ball_velocity: Vec2,
}

/// Result of one tactical analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticalSnapshot {
    pub predicted_ball: Vec2,
    pub optimal_position: Vec2,
    /// 0 is fully defensive, 1 fully offensive.
    pub tactical_state: f32,
}

/// Positioning and prediction rules for AI players.
#[derive(Clone, Debug, PartialEq)]
pub struct TacticalEvaluator {
    config: TacticsConfig,
    field: FieldLayout,
    move_speed: f32,
}

impl TacticalEvaluator {
    /// Distance kept in front of the ball when attacking.
    const ATTACK_OFFSET: f32 = 2.0;
    /// Skill at or above which attacking positions are exact.
    const PRECISE_SKILL: f32 = 0.8;
    const OFFENSIVE_FIELD_RATIO: f32 = 0.6;
    const DEFENSIVE_FIELD_RATIO: f32 = 0.4;
    const MIDFIELD_OFFSET: f32 = 3.0;
    const STRIKE_DISTANCE: f32 = 4.0;
    const WAIT_BLEND: f32 = 0.7;
    const CLOSE_BALL_DISTANCE: f32 = 5.0;
    const FAST_BALL_SPEED: f32 = 5.0;
    const MOVING_BALL_SPEED: f32 = 2.0;
    const INTERCEPT_TOLERANCE: f32 = 0.5;
    const JUMP_HEIGHT: f32 = 1.0;
    const JUMP_REACH: f32 = 3.0;
    const ARRIVAL_DISTANCE: f32 = 0.5;
    const SLOWDOWN_DISTANCE: f32 = 2.0;

    pub fn new(config: TacticsConfig, field: FieldLayout, move_speed: f32) -> Self {
        Self {
            config,
            field,
            move_speed,
        }
    }

    pub fn from_game_config(config: &GameConfig) -> Self {
        Self::new(config.tactics, config.field, config.movement.move_speed)
    }

    pub fn config(&self) -> &TacticsConfig {
        &self.config
    }

    pub fn field(&self) -> &FieldLayout {
        &self.field
    }

    /// Linear extrapolation of the ball over the lookahead window.
    pub fn predict_ball(&self, position: Vec2, velocity: Vec2) -> Vec2 {
        position + velocity * self.config.lookahead
    }

    /// How far up the field the ball is from `player`'s point of view.
    pub fn field_ratio(&self, player: PlayerNumber, ball: Vec2) -> f32 {
        let own = self.field.own_goal(player);
        let enemy = self.field.enemy_goal(player);
        let ratio = inverse_lerp(own.x, enemy.x, ball.x);
        match player {
            PlayerNumber::One => ratio,
            PlayerNumber::Two => 1.0 - ratio,
        }
    }

    /// Just in front of the ball on the line toward the enemy goal.
    pub fn aggressive_position(
        &self,
        ball: Vec2,
        enemy_goal: Vec2,
        skill: f32,
        rng: &mut dyn RandomSource,
    ) -> Vec2 {
        let mut target = ball + (enemy_goal - ball).normalize_or_zero() * Self::ATTACK_OFFSET;
        if skill < Self::PRECISE_SKILL {
            target += jitter((1.0 - skill) * 2.0, rng);
        }
        target
    }

    /// Between the ball and the own goal, never further out than the goal
    /// defense radius.
    pub fn defensive_position(&self, ball: Vec2, own_goal: Vec2) -> Vec2 {
        let ball_to_goal = (own_goal - ball).normalize_or_zero();
        let distance = self
            .config
            .goal_defense_radius
            .min(ball.distance(own_goal) * 0.5);
        own_goal - ball_to_goal * distance
    }

    pub fn balanced_position(
        &self,
        situation: &Situation,
        skill: f32,
        rng: &mut dyn RandomSource,
    ) -> Vec2 {
        let own = self.field.own_goal(situation.player);
        let enemy = self.field.enemy_goal(situation.player);
        let ball = situation.ball_position;
        let ratio = self.field_ratio(situation.player, ball);

        if ratio > Self::OFFENSIVE_FIELD_RATIO {
            self.aggressive_position(ball, enemy, skill, rng)
        } else if ratio < Self::DEFENSIVE_FIELD_RATIO {
            self.defensive_position(ball, own)
        } else {
            let midfield = own.lerp(enemy, 0.5);
            midfield + (ball - midfield).normalize_or_zero() * Self::MIDFIELD_OFFSET
        }
    }

    pub fn opportunist_position(
        &self,
        situation: &Situation,
        skill: f32,
        rng: &mut dyn RandomSource,
    ) -> Vec2 {
        let own = self.field.own_goal(situation.player);
        let ball = situation.ball_position;

        if situation.position.distance(ball) < Self::STRIKE_DISTANCE {
            let enemy = self.field.enemy_goal(situation.player);
            self.aggressive_position(ball, enemy, skill, rng)
        } else {
            own.lerp(ball, Self::WAIT_BLEND)
        }
    }

    /// Where `profile`'s personality wants to stand.
    pub fn optimal_position(
        &self,
        situation: &Situation,
        profile: &AiProfile,
        rng: &mut dyn RandomSource,
    ) -> Vec2 {
        let ball = situation.ball_position;
        match profile.personality {
            Personality::Aggressive => {
                let enemy = self.field.enemy_goal(situation.player);
                self.aggressive_position(ball, enemy, profile.skill, rng)
            }
            Personality::Defensive => {
                let own = self.field.own_goal(situation.player);
                self.defensive_position(ball, own)
            }
            Personality::Balanced => self.balanced_position(situation, profile.skill, rng),
            Personality::Opportunist => self.opportunist_position(situation, profile.skill, rng),
        }
    }

    /// Offensive/defensive scalar in `[0, 1]`.
    pub fn tactical_state(&self, situation: &Situation) -> f32 {
        let ball = situation.ball_position;
        let mut tactical = self.field_ratio(situation.player, ball);

        tactical += if situation.position.distance(ball) < Self::CLOSE_BALL_DISTANCE {
            0.2
        } else {
            -0.1
        };
        tactical += if situation.ball_velocity.length() > Self::FAST_BALL_SPEED {
            -0.1
        } else {
            0.1
        };

        tactical.clamp(0.0, 1.0)
    }

    pub fn analyze(
        &self,
        situation: &Situation,
        profile: &AiProfile,
        rng: &mut dyn RandomSource,
    ) -> TacticalSnapshot {
        TacticalSnapshot {
            predicted_ball: self.predict_ball(situation.ball_position, situation.ball_velocity),
            optimal_position: self.optimal_position(situation, profile, rng),
            tactical_state: self.tactical_state(situation),
        }
    }

    pub fn should_chase_aggressively(&self, snapshot: &TacticalSnapshot) -> bool {
        snapshot.tactical_state > self.config.offensive_threshold
    }

    pub fn should_defend(&self, snapshot: &TacticalSnapshot) -> bool {
        snapshot.tactical_state < self.config.defensive_threshold
    }

    /// Whether the player would reach the predicted ball position at about
    /// the time the ball does.
    ///
    /// The ball's arrival time is taken to be the lookahead window itself.
    pub fn should_position_for_intercept(&self, situation: &Situation) -> bool {
        if situation.ball_velocity.length() <= Self::MOVING_BALL_SPEED {
            return false;
        }

        let intercept = self.predict_ball(situation.ball_position, situation.ball_velocity);
        let time_to_intercept = situation.position.distance(intercept) / self.move_speed;
        (time_to_intercept - self.config.lookahead).abs() < Self::INTERCEPT_TOLERANCE
    }

    /// Rolls a skill-weighted jump when the predicted ball is overhead.
    pub fn should_jump_for_ball(
        &self,
        situation: &Situation,
        snapshot: &TacticalSnapshot,
        skill: f32,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let ball = snapshot.predicted_ball;
        let above = ball.y > situation.position.y + Self::JUMP_HEIGHT;
        let close = ball.distance(situation.position) < Self::JUMP_REACH;
        if !(above && close && situation.grounded) {
            return false;
        }

        rng.chance(skill * 0.8 + 0.2)
    }

    /// Movement axis in `[-1, 1]` that steers from `current` toward `target`.
    ///
    /// Imperfect players aim at a jittered target. The axis eases off within
    /// two units of the target and is zero within half a unit.
    pub fn move_direction(
        &self,
        current: Vec2,
        target: Vec2,
        skill: f32,
        rng: &mut dyn RandomSource,
    ) -> f32 {
        let mut target = target;
        if skill < 1.0 {
            target += jitter((1.0 - skill) * 2.0, rng);
        }

        let mut direction = sign(target.x - current.x);
        let distance = (target.x - current.x).abs();
        if distance < Self::ARRIVAL_DISTANCE {
            return 0.0;
        }
        if distance < Self::SLOWDOWN_DISTANCE {
            direction *= distance / Self::SLOWDOWN_DISTANCE;
        }
        direction.clamp(-1.0, 1.0)
    }
}

impl Default for TacticalEvaluator {
    fn default() -> Self {
        Self::from_game_config(&GameConfig::default())
    }
}

fn jitter(margin: f32, rng: &mut dyn RandomSource) -> Vec2 {
    let x = rng.range(-margin, margin);
    let y = rng.range(-margin, margin);
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::env::{FixedRandom, SeededRandom};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1.0e-4
    }

    fn situation(position: Vec2, ball_position: Vec2, ball_velocity: Vec2) -> Situation {
        Situation {
            player: PlayerNumber::One,
            position,
            grounded: true,
            ball_position,
            ball_velocity,
        }
    }

    #[test]
    fn predicts_ball_over_lookahead() {
        let evaluator = TacticalEvaluator::default();
        let predicted = evaluator.predict_ball(Vec2::new(2.0, 3.0), Vec2::new(4.0, 0.0));
        assert_eq!(predicted, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn defensive_position_caps_at_goal_radius() {
        let evaluator = TacticalEvaluator::default();
        let position = evaluator.defensive_position(Vec2::ZERO, Vec2::new(-10.0, 0.0));
        assert!(approx(position, Vec2::new(-6.0, 0.0)));
    }

    #[test]
    fn defensive_position_halves_short_distances() {
        let evaluator = TacticalEvaluator::default();
        let position = evaluator.defensive_position(Vec2::new(-4.0, 0.0), Vec2::new(-10.0, 0.0));
        assert!(approx(position, Vec2::new(-7.0, 0.0)));
    }

    #[test]
    fn aggressive_position_is_exact_for_skilled_players() {
        let evaluator = TacticalEvaluator::default();
        let mut rng = FixedRandom::constant(0.9);
        let goal = Vec2::new(10.0, 0.0);
        let position = evaluator.aggressive_position(Vec2::ZERO, goal, 0.8, &mut rng);
        assert!(approx(position, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn aggressive_position_jitters_for_weaker_players() {
        let evaluator = TacticalEvaluator::default();
        let mut rng = FixedRandom::constant(0.75);
        let goal = Vec2::new(10.0, 0.0);
        let position = evaluator.aggressive_position(Vec2::ZERO, goal, 0.5, &mut rng);
        assert!(approx(position, Vec2::new(2.5, 0.5)));
    }

    #[test]
    fn balanced_switches_on_field_position() {
        let evaluator = TacticalEvaluator::default();
        let mut rng = FixedRandom::default();

        let attacking = situation(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::ZERO);
        assert!(approx(
            evaluator.balanced_position(&attacking, 1.0, &mut rng),
            Vec2::new(7.0, 0.0)
        ));

        let defending = situation(Vec2::ZERO, Vec2::new(-5.0, 0.0), Vec2::ZERO);
        assert!(approx(
            evaluator.balanced_position(&defending, 1.0, &mut rng),
            Vec2::new(-7.5, 0.0)
        ));

        let midfield = situation(Vec2::ZERO, Vec2::new(0.0, 2.0), Vec2::ZERO);
        assert!(approx(
            evaluator.balanced_position(&midfield, 1.0, &mut rng),
            Vec2::new(0.0, 3.0)
        ));
    }

    #[test]
    fn player_two_field_ratio_is_mirrored() {
        let evaluator = TacticalEvaluator::default();
        let ball = Vec2::new(5.0, 0.0);
        assert_eq!(evaluator.field_ratio(PlayerNumber::One, ball), 0.75);
        assert_eq!(evaluator.field_ratio(PlayerNumber::Two, ball), 0.75);
    }

    #[test]
    fn opportunist_waits_until_ball_is_close() {
        let evaluator = TacticalEvaluator::default();
        let mut rng = FixedRandom::default();

        let far = situation(Vec2::new(-8.0, 0.0), Vec2::ZERO, Vec2::ZERO);
        assert!(approx(
            evaluator.opportunist_position(&far, 1.0, &mut rng),
            Vec2::new(-3.0, 0.0)
        ));

        let near = situation(Vec2::new(-2.0, 0.0), Vec2::ZERO, Vec2::ZERO);
        assert!(approx(
            evaluator.opportunist_position(&near, 1.0, &mut rng),
            Vec2::new(2.0, 0.0)
        ));
    }

    #[test]
    fn optimal_position_dispatches_on_personality() {
        let evaluator = TacticalEvaluator::default();
        let mut rng = FixedRandom::default();
        let here = situation(Vec2::new(-8.0, 0.0), Vec2::ZERO, Vec2::ZERO);

        let defensive = AiProfile::new(Personality::Defensive, 1.0);
        assert!(approx(
            evaluator.optimal_position(&here, &defensive, &mut rng),
            Vec2::new(-6.0, 0.0)
        ));

        let aggressive = AiProfile::new(Personality::Aggressive, 1.0);
        assert!(approx(
            evaluator.optimal_position(&here, &aggressive, &mut rng),
            Vec2::new(2.0, 0.0)
        ));
    }

    #[test]
    fn tactical_state_combines_factors() {
        let evaluator = TacticalEvaluator::default();
        let profile = AiProfile::default();
        let mut rng = FixedRandom::default();

        let close_slow = situation(Vec2::new(-1.0, 0.0), Vec2::ZERO, Vec2::ZERO);
        let snapshot = evaluator.analyze(&close_slow, &profile, &mut rng);
        assert!((snapshot.tactical_state - 0.8).abs() < 1.0e-5);
        assert!(evaluator.should_chase_aggressively(&snapshot));
        assert!(!evaluator.should_defend(&snapshot));

        let ball = Vec2::new(-10.0, 0.0);
        let far_fast = situation(Vec2::new(8.0, 0.0), ball, Vec2::new(-8.0, 0.0));
        let snapshot = evaluator.analyze(&far_fast, &profile, &mut rng);
        assert_eq!(snapshot.tactical_state, 0.0);
        assert!(evaluator.should_defend(&snapshot));
    }

    #[test]
    fn intercept_requires_matching_arrival_time() {
        let evaluator = TacticalEvaluator::default();

        let ball = Vec2::new(1.0, 0.0);
        let reachable = situation(Vec2::ZERO, ball, Vec2::new(3.0, 0.0));
        assert!(evaluator.should_position_for_intercept(&reachable));

        let slow = situation(Vec2::ZERO, ball, Vec2::new(1.0, 0.0));
        assert!(!evaluator.should_position_for_intercept(&slow));

        let too_far = situation(Vec2::new(-9.0, 0.0), ball, Vec2::new(3.0, 0.0));
        assert!(!evaluator.should_position_for_intercept(&too_far));
    }

    #[test]
    fn jump_for_ball_rolls_against_skill() {
        let evaluator = TacticalEvaluator::default();
        let here = situation(Vec2::ZERO, Vec2::new(0.0, 2.0), Vec2::ZERO);
        let snapshot = TacticalSnapshot {
            predicted_ball: Vec2::new(0.0, 2.0),
            optimal_position: Vec2::ZERO,
            tactical_state: 0.5,
        };

        let mut low = FixedRandom::constant(0.5);
        assert!(evaluator.should_jump_for_ball(&here, &snapshot, 0.5, &mut low));
        let mut high = FixedRandom::constant(0.7);
        assert!(!evaluator.should_jump_for_ball(&here, &snapshot, 0.5, &mut high));

        let airborne = Situation {
            grounded: false,
            ..here
        };
        let mut rng = FixedRandom::default();
        assert!(!evaluator.should_jump_for_ball(&airborne, &snapshot, 1.0, &mut rng));
    }

    #[test]
    fn move_direction_eases_into_target() {
        let evaluator = TacticalEvaluator::default();
        let mut rng = FixedRandom::default();

        for (x, expected) in [(5.0, 1.0), (-5.0, -1.0), (1.0, 0.5), (0.3, 0.0)] {
            let target = Vec2::new(x, 0.0);
            let axis = evaluator.move_direction(Vec2::ZERO, target, 1.0, &mut rng);
            assert_eq!(axis, expected, "target x = {x}");
        }
    }

    #[test]
    fn move_direction_jitter_uses_random_source() {
        let evaluator = TacticalEvaluator::default();
        let target = Vec2::new(1.0, 0.0);
        let mut centered = FixedRandom::constant(0.5);
        let axis = evaluator.move_direction(Vec2::ZERO, target, 0.5, &mut centered);
        assert_eq!(axis, 0.5);

        let mut high = FixedRandom::constant(0.75);
        let axis = evaluator.move_direction(Vec2::ZERO, target, 0.5, &mut high);
        assert_eq!(axis, 0.75);
    }

    fn coordinate() -> impl Strategy<Value = f32> {
        -50.0f32..50.0
    }

    proptest! {
        #[test]
        fn tactical_state_is_bounded(
            px in coordinate(), py in coordinate(),
            bx in coordinate(), by in coordinate(),
            vx in coordinate(), vy in coordinate(),
            two in any::<bool>(),
        ) {
            let evaluator = TacticalEvaluator::default();
            let situation = Situation {
                player: if two { PlayerNumber::Two } else { PlayerNumber::One },
                position: Vec2::new(px, py),
                grounded: true,
                ball_position: Vec2::new(bx, by),
                ball_velocity: Vec2::new(vx, vy),
            };
            let state = evaluator.tactical_state(&situation);
            prop_assert!((0.0..=1.0).contains(&state));
        }

        #[test]
        fn move_direction_is_bounded(
            cx in coordinate(), tx in coordinate(),
            skill in 0.0f32..=1.0,
            seed in any::<u64>(),
        ) {
            let evaluator = TacticalEvaluator::default();
            let mut rng = SeededRandom::from_seed(seed);
            let (current, target) = (Vec2::new(cx, 0.0), Vec2::new(tx, 0.0));
            let axis = evaluator.move_direction(current, target, skill, &mut rng);
            prop_assert!((-1.0..=1.0).contains(&axis));
        }
    }
}
