//! Condition nodes for soccer AI behavior trees.
//!
//! Condition nodes read the blackboard and return Success or Failure. They
//! never queue commands.

use behavior_tree::{Behavior, Status};
use game_core::PowerUpKind;

use crate::providers::ai::AiBlackboard;

/// Standing on the planet surface.
pub struct IsGrounded;

impl Behavior<AiBlackboard> for IsGrounded {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.is_grounded())
    }
}

pub struct IsInAir;

impl Behavior<AiBlackboard> for IsInAir {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(!ctx.is_grounded())
    }
}

/// Movement input above the dead zone.
pub struct IsMoving;

impl Behavior<AiBlackboard> for IsMoving {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.is_moving())
    }
}

pub struct JumpPressed;

impl Behavior<AiBlackboard> for JumpPressed {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.sensors.input.jump_pressed)
    }
}

/// Grounded with a fresh jump press.
pub struct CanJump;

impl Behavior<AiBlackboard> for CanJump {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.is_grounded() && ctx.sensors.input.jump_pressed)
    }
}

pub struct HasPowerUp;

impl Behavior<AiBlackboard> for HasPowerUp {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.sensors.power_up.is_some())
    }
}

/// Ball within `radius` of the player. Fails when there is no ball.
///
/// # Example
///
/// ```rust,ignore
/// // Kick when the ball is close
/// builder::sequence("Kick", vec![
///     Node::new("BallNearby", BallNearby { radius: 2.0 }),
///     Node::new("KickBall", KickBall::default()),
/// ])
/// ```
pub struct BallNearby {
    pub radius: f32,
}

impl Behavior<AiBlackboard> for BallNearby {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        match ctx.ball_distance() {
            Some(distance) => status(distance <= self.radius),
            None => Status::Failure,
        }
    }
}

/// A power-up of `kind` is lying on the field.
pub struct PowerUpAvailable {
    pub kind: PowerUpKind,
}

impl Behavior<AiBlackboard> for PowerUpAvailable {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.available_power_ups.contains(&self.kind))
    }
}

/// Tactical state above the offensive threshold. Fails without a tactical
/// analysis for this tick.
pub struct ShouldChaseAggressively;

impl Behavior<AiBlackboard> for ShouldChaseAggressively {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.tactics.is_some_and(|view| view.chase_aggressively))
    }
}

pub struct ShouldDefend;

impl Behavior<AiBlackboard> for ShouldDefend {
    fn evaluate(&mut self, ctx: &mut AiBlackboard) -> Status {
        status(ctx.tactics.is_some_and(|view| view.defend))
    }
}

#[inline]
fn status(condition: bool) -> Status {
    if condition { Status::Success } else { Status::Failure }
}
