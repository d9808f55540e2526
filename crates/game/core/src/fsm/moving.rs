use super::state::{StateContext, StateHooks, Transition};
use super::{JumpingState, PlayerState};

/// Running around the planet. Owns the footstep loop while active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovingState {
    footsteps: bool,
}

impl StateHooks for MovingState {
    fn enter(&mut self, ctx: &mut StateContext<'_>) {
        ctx.actor.audio().set_footsteps(true);
        self.footsteps = true;
    }

    fn update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        let grounded = ctx.is_grounded();
        if !ctx.is_moving() {
            return Transition::Change(PlayerState::idle());
        }
        if grounded {
            ctx.move_with_input(true);
        }
        if ctx.actor.input.jump_pressed() && grounded {
            return Transition::Change(PlayerState::Jumping(JumpingState::default()));
        }
        Transition::Stay
    }

    fn fixed_update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        if ctx.physics_step() {
            Transition::Stay
        } else {
            Transition::Change(PlayerState::Jumping(JumpingState::default()))
        }
    }

    fn exit(&mut self, ctx: &mut StateContext<'_>) {
        if self.footsteps {
            ctx.actor.audio().set_footsteps(false);
            self.footsteps = false;
        }
    }
}
