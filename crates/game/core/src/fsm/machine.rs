use super::{PlayerState, PoweredUpState, StateContext, StateKind, Transition};
use crate::env::BallContact;
use crate::power_up::PowerUpKind;

/// Owns the active state of one player and performs transitions.
///
/// The machine starts empty; call [`PlayerStateMachine::start`] to enter the
/// idle state.
#[derive(Debug, Default)]
pub struct PlayerStateMachine {
    current: Option<PlayerState>,
}

impl PlayerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the idle state.
    pub fn start(&mut self, ctx: &mut StateContext<'_>) {
        self.change_state(ctx, PlayerState::idle());
    }

    /// Exits the current state and enters `next`.
    pub fn change_state(&mut self, ctx: &mut StateContext<'_>, mut next: PlayerState) {
        if let Some(mut previous) = self.current.take() {
            previous.exit(ctx);
            tracing::debug!(
                player = %ctx.actor.number(),
                from = %previous.name(),
                to = %next.name(),
                "state changed"
            );
        }
        next.enter(ctx);
        self.current = Some(next);
    }

    /// Per-frame update. Advances power-up timers before the state runs.
    pub fn update(&mut self, ctx: &mut StateContext<'_>) {
        ctx.actor.power_ups.advance(ctx.dt);
        let Some(state) = self.current.as_mut() else {
            return;
        };
        let transition = state.update(ctx);
        self.apply(ctx, transition);
    }

    /// Fixed-step physics update.
    pub fn fixed_update(&mut self, ctx: &mut StateContext<'_>) {
        let Some(state) = self.current.as_mut() else {
            return;
        };
        let transition = state.fixed_update(ctx);
        self.apply(ctx, transition);
    }

    /// Forwards a ball contact. `ctx.ball` should carry the ball body.
    ///
    /// Returns `true` when the contact started a kick that reached the ball.
    pub fn on_ball_collision(&mut self, ctx: &mut StateContext<'_>, contact: BallContact) -> bool {
        let Some(state) = self.current.as_mut() else {
            return false;
        };
        let transition = state.on_ball_collision(ctx, contact);
        let changed = matches!(transition, Transition::Change(_));
        self.apply(ctx, transition);
        let kicked = match &self.current {
            Some(PlayerState::Kicking(kick)) => kick.kicked(),
            _ => false,
        };
        changed && kicked
    }

    /// Wraps the base state matching the current situation in a power-up.
    pub fn apply_power_up(&mut self, ctx: &mut StateContext<'_>, kind: PowerUpKind) {
        let base = ctx.derive_base_state();
        self.change_state(ctx, PlayerState::PoweredUp(PoweredUpState::new(base, kind)));
    }

    pub fn current(&self) -> Option<&PlayerState> {
        self.current.as_ref()
    }

    pub fn kind(&self) -> Option<StateKind> {
        self.current.as_ref().map(PlayerState::kind)
    }

    pub fn is_in(&self, kind: StateKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Name of the active state, `None` before [`PlayerStateMachine::start`].
    pub fn state_name(&self) -> String {
        self.current
            .as_ref()
            .map_or_else(|| "None".to_owned(), PlayerState::name)
    }

    fn apply(&mut self, ctx: &mut StateContext<'_>, transition: Transition) {
        if let Transition::Change(next) = transition {
            self.change_state(ctx, next);
        }
    }
}
