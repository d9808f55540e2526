use super::state::{StateContext, StateHooks, Transition};
use super::{MovingState, PlayerState};
use crate::env::SoundCue;
use crate::physics;

/// Airborne, either from a jump or from leaving the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JumpingState {
    launched: bool,
}

impl JumpingState {
    /// Whether this state applied a jump impulse on entry.
    pub fn launched(&self) -> bool {
        self.launched
    }
}

impl StateHooks for JumpingState {
    fn enter(&mut self, ctx: &mut StateContext<'_>) {
        if !self.launched && ctx.actor.input.jump_pressed() && ctx.is_grounded() {
            let multiplier = ctx.actor.power_ups.jump_multiplier();
            let movement = &ctx.actor.config().movement;
            physics::jump(ctx.body, ctx.planet, movement, multiplier);
            ctx.actor.audio().play(SoundCue::Jump);
            self.launched = true;
        }
    }

    fn update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        if ctx.is_moving() {
            let grounded = ctx.is_grounded();
            ctx.move_with_input(grounded);
        }
        Transition::Stay
    }

    fn fixed_update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        let grounded = ctx.physics_step();
        if !grounded || physics::radial_speed(&*ctx.body, ctx.planet) > 0.0 {
            return Transition::Stay;
        }

        ctx.actor.audio().play(SoundCue::Land);
        if ctx.is_moving() {
            Transition::Change(PlayerState::Moving(MovingState::default()))
        } else {
            Transition::Change(PlayerState::idle())
        }
    }

    fn exit(&mut self, _ctx: &mut StateContext<'_>) {
        self.launched = false;
    }
}
