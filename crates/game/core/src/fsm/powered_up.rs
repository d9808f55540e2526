use super::PlayerState;
use super::state::{StateContext, StateHooks, Transition};
use crate::power_up::PowerUpKind;

/// Wraps another state while a power-up is active.
///
/// Lifecycle calls are forwarded to the wrapped state. Transitions the
/// wrapped state asks for are performed inside the wrapper, so the power-up
/// persists across them. The wrapper unwraps once the power-up expires, and
/// touching the ball leaves it for a plain kicking state.
#[derive(Debug)]
pub struct PoweredUpState {
    inner: Box<PlayerState>,
    kind: PowerUpKind,
}

impl PoweredUpState {
    pub fn new(inner: PlayerState, kind: PowerUpKind) -> Self {
        Self {
            inner: Box::new(inner),
            kind,
        }
    }

    pub fn inner(&self) -> &PlayerState {
        &self.inner
    }

    pub fn kind(&self) -> PowerUpKind {
        self.kind
    }

    fn rewrap(&mut self, ctx: &mut StateContext<'_>, transition: Transition) {
        if let Transition::Change(next) = transition {
            self.inner.exit(ctx);
            *self.inner = next;
            self.inner.enter(ctx);
        }
    }
}

impl StateHooks for PoweredUpState {
    fn enter(&mut self, ctx: &mut StateContext<'_>) {
        ctx.actor.power_ups.apply(self.kind);
        self.inner.enter(ctx);
    }

    fn update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        if !ctx.actor.power_ups.has_active() {
            return Transition::Change(ctx.derive_base_state());
        }
        let transition = self.inner.update(ctx);
        self.rewrap(ctx, transition);
        Transition::Stay
    }

    fn fixed_update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        let transition = self.inner.fixed_update(ctx);
        self.rewrap(ctx, transition);
        Transition::Stay
    }

    fn exit(&mut self, ctx: &mut StateContext<'_>) {
        self.inner.exit(ctx);
    }
}
