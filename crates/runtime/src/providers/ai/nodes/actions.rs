//! Action nodes for soccer AI behavior trees.
//!
//! Actions queue [`AiCommand`]s on the blackboard; the player agent applies
//! them once the tree has finished its tick.

use behavior_tree::{Behavior, Status};
use game_core::PowerUpKind;
use game_core::math::sign;

use crate::providers::ai::{AiBlackboard, AiCommand};

/// Where a [`Move`] node takes its axis from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveSource {
    Fixed(f32),
    /// Full speed toward the ball's x coordinate.
    TowardBall,
    /// Whatever the input driver resolved this tick.
    CurrentInput,
    /// Axis toward the tactical optimal position.
    Tactical,
}

/// Moves along the surface. Fails while airborne or when its source has
/// nothing to offer.
pub struct Move {
    pub source: MoveSource,
}

impl Move {
    pub fn new(source: MoveSource) -> Self {
        Self { source }
    }

    fn axis(&self, ctx: &AiBlackboard) -> Option<f32> {
        match self.source {
            MoveSource::Fixed(axis) => Some(axis),
            MoveSource::TowardBall => ctx
                .sensors
                .ball
                .map(|ball| sign(ball.position.x - ctx.sensors.position.x)),
            MoveSource::CurrentInput => Some(ctx.sensors.input.move_axis),
            MoveSource::Tactical => ctx.tactics.map(|view| view.move_axis),
        }
    }
}

impl Behavior<AiBlackboard> for Move {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        if !ctx.is_grounded() {
            return Status::Failure;
        }
        let Some(axis) = self.axis(ctx) else {
            return Status::Failure;
        };

        ctx.push(AiCommand::Move(axis.clamp(-1.0, 1.0)));
        Status::Success
    }
}

pub struct Jump;

impl Behavior<AiBlackboard> for Jump {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        if !ctx.is_grounded() {
            return Status::Failure;
        }
        ctx.push(AiCommand::Jump);
        Status::Success
    }
}

/// Succeeds when the ball is within kicking range.
///
/// The kick itself happens on contact through the state machine; this node
/// only signals that the player is in position.
pub struct KickBall {
    pub range: f32,
}

impl KickBall {
    pub const DEFAULT_RANGE: f32 = 2.0;
}

impl Default for KickBall {
    fn default() -> Self {
        Self {
            range: Self::DEFAULT_RANGE,
        }
    }
}

impl Behavior<AiBlackboard> for KickBall {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        match ctx.ball_distance() {
            Some(distance) if distance <= self.range => {
                ctx.push(AiCommand::Kick);
                Status::Success
            }
            _ => Status::Failure,
        }
    }
}

/// Activates a power-up unless one is already running.
pub struct ApplyPowerUp {
    pub kind: PowerUpKind,
}

impl Behavior<AiBlackboard> for ApplyPowerUp {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        if ctx.sensors.power_up.is_some() {
            return Status::Failure;
        }
        ctx.sensors.power_up = Some(self.kind);
        ctx.push(AiCommand::ApplyPowerUp(self.kind));
        Status::Success
    }
}

/// Does nothing, forever.
pub struct Idle;

impl Behavior<AiBlackboard> for Idle {
    fn evaluate(&mut self, _ctx: &mut AiBlackboard) -> Status {
        Status::Running
    }
}

#[cfg(test)]
mod tests {
    use game_core::{InputState, PlayerNumber, TacticalSnapshot};
    use glam::Vec2;

    use super::*;
    use crate::providers::ai::{BallSnapshot, Sensors, TacticalView};

    fn grounded_with_ball(ball: Vec2) -> AiBlackboard {
        let mut blackboard = AiBlackboard::new(PlayerNumber::One);
        blackboard.refresh(
            Sensors {
                grounded: true,
                ball: Some(BallSnapshot {
                    position: ball,
                    velocity: Vec2::ZERO,
                }),
                ..Sensors::default()
            },
            0.0,
        );
        blackboard
    }

    #[test]
    fn move_toward_ball_uses_sign_of_offset() {
        let mut ctx = grounded_with_ball(Vec2::new(-3.0, 1.0));
        let mut node = Move::new(MoveSource::TowardBall);
        assert_eq!(node.evaluate(&mut ctx), Status::Success);
        assert_eq!(ctx.commands(), &[AiCommand::Move(-1.0)]);
    }

    #[test]
    fn move_fails_in_air_or_without_source() {
        let mut ctx = grounded_with_ball(Vec2::ONE);
        ctx.sensors.grounded = false;
        let mut fixed = Move::new(MoveSource::Fixed(1.0));
        assert_eq!(fixed.evaluate(&mut ctx), Status::Failure);

        ctx.sensors.grounded = true;
        let mut tactical = Move::new(MoveSource::Tactical);
        assert_eq!(tactical.evaluate(&mut ctx), Status::Failure);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn move_reads_input_and_tactics() {
        let mut ctx = grounded_with_ball(Vec2::ONE);
        ctx.sensors.input = InputState {
            move_axis: 0.4,
            ..InputState::default()
        };
        ctx.tactics = Some(TacticalView {
            snapshot: TacticalSnapshot {
                predicted_ball: Vec2::ONE,
                optimal_position: Vec2::ONE,
                tactical_state: 0.5,
            },
            chase_aggressively: false,
            defend: false,
            move_axis: -0.25,
        });

        Move::new(MoveSource::CurrentInput).evaluate(&mut ctx);
        Move::new(MoveSource::Tactical).evaluate(&mut ctx);
        let expected = [AiCommand::Move(0.4), AiCommand::Move(-0.25)];
        assert_eq!(ctx.commands(), &expected);
    }

    #[test]
    fn kick_ball_within_range_only() {
        let mut near = grounded_with_ball(Vec2::new(0.0, 2.0));
        assert_eq!(KickBall::default().evaluate(&mut near), Status::Success);
        assert_eq!(near.commands(), &[AiCommand::Kick]);

        let mut far = grounded_with_ball(Vec2::new(0.0, 2.5));
        assert_eq!(KickBall::default().evaluate(&mut far), Status::Failure);
    }

    #[test]
    fn apply_power_up_refuses_when_active() {
        let mut ctx = grounded_with_ball(Vec2::ONE);
        let mut node = ApplyPowerUp {
            kind: PowerUpKind::PowerfulKick,
        };

        assert_eq!(node.evaluate(&mut ctx), Status::Success);
        assert_eq!(node.evaluate(&mut ctx), Status::Failure);
        let applied = AiCommand::ApplyPowerUp(PowerUpKind::PowerfulKick);
        assert_eq!(ctx.commands(), &[applied]);
    }

    #[test]
    fn jump_and_idle() {
        let mut ctx = grounded_with_ball(Vec2::ONE);
        assert_eq!(Jump.evaluate(&mut ctx), Status::Success);
        assert_eq!(Idle.evaluate(&mut ctx), Status::Running);
        assert_eq!(ctx.commands(), &[AiCommand::Jump]);
    }
}
