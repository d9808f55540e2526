use super::state::{StateContext, StateHooks, Transition};
use super::{JumpingState, MovingState, PlayerState};

/// Standing still on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdleState;

impl StateHooks for IdleState {
    fn update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        let grounded = ctx.is_grounded();
        if ctx.is_moving() && grounded {
            return Transition::Change(PlayerState::Moving(MovingState::default()));
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
}
