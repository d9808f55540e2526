use super::state::{StateContext, StateHooks, Transition};
use crate::env::{BallContact, SoundCue, VisualEffect};
use crate::physics::KickImpulse;

/// Brief state after touching the ball.
///
/// The kick is applied once on entry. Further ball contacts are ignored until
/// the kick duration has elapsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KickingState {
    contact: BallContact,
    elapsed: f32,
    kicked: bool,
}

impl KickingState {
    pub fn new(contact: BallContact) -> Self {
        Self {
            contact,
            elapsed: 0.0,
            kicked: false,
        }
    }

    pub fn contact(&self) -> &BallContact {
        &self.contact
    }

    /// Whether the kick impulse reached the ball.
    pub fn kicked(&self) -> bool {
        self.kicked
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl StateHooks for KickingState {
    fn enter(&mut self, ctx: &mut StateContext<'_>) {
        self.elapsed = 0.0;

        let Some(ball) = ctx.ball.as_deref_mut() else {
            tracing::debug!(player = %ctx.actor.number(), "kick without a ball body");
            return;
        };

        let kick = KickImpulse::compute(
            &self.contact,
            ctx.body.velocity(),
            ball.velocity(),
            &ctx.actor.config().kick,
            ctx.actor.power_ups.kick_multiplier(),
        );
        ball.add_impulse(kick.impulse());
        self.kicked = true;

        tracing::debug!(
            player = %ctx.actor.number(),
            strength = kick.strength,
            direction = ?kick.direction,
            "ball kicked"
        );

        ctx.actor.audio().play(SoundCue::Kick);
        let effects = ctx.actor.effects();
        effects.play(VisualEffect::Kick {
            point: self.contact.point,
            direction: kick.direction,
        });
        effects.play(VisualEffect::BallTrail);
    }

    fn update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        self.elapsed += ctx.dt;
        if self.elapsed >= ctx.actor.config().kick.duration {
            Transition::Change(ctx.derive_base_state())
        } else {
            Transition::Stay
        }
    }

    fn fixed_update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        ctx.physics_step();
        Transition::Stay
    }

    fn on_ball_collision(
        &mut self,
        _ctx: &mut StateContext<'_>,
        _contact: BallContact,
    ) -> Transition {
        Transition::Stay
    }
}
