//! State representation and the hooks every state implements.

use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::{Actor, IdleState, JumpingState, KickingState, MovingState, PoweredUpState};
use crate::Planet;
use crate::env::{BallContact, RigidBody2D};
use crate::physics;
use crate::power_up::PowerUpKind;

/// Discriminant of [`PlayerState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
pub enum StateKind {
    Idle,
    Moving,
    Jumping,
    Kicking,
    PoweredUp,
}

/// Everything a state hook may touch during one call.
pub struct StateContext<'a> {
    pub actor: &'a mut Actor,
    pub body: &'a mut dyn RigidBody2D,
    /// Present only while handling a ball collision.
    pub ball: Option<&'a mut dyn RigidBody2D>,
    pub planet: &'a Planet,
    /// Elapsed time for this call (frame delta or fixed delta).
    pub dt: f32,
}

impl<'a> StateContext<'a> {
    pub fn new(
        actor: &'a mut Actor,
        body: &'a mut dyn RigidBody2D,
        planet: &'a Planet,
        dt: f32,
    ) -> Self {
        Self {
            actor,
            body,
            ball: None,
            planet,
            dt,
        }
    }

    pub fn with_ball(mut self, ball: &'a mut dyn RigidBody2D) -> Self {
        self.ball = Some(ball);
        self
    }

    pub fn is_grounded(&self) -> bool {
        self.actor.is_grounded(&*self.body, self.planet)
    }

    pub fn is_moving(&self) -> bool {
        self.actor.input.is_moving()
    }

    /// Gravity, surface alignment and the grounded check, shared by every
    /// state's fixed update. Returns the grounded flag.
    pub(crate) fn physics_step(&mut self) -> bool {
        let config = self.actor.config();
        physics::apply_planet_gravity(self.body, self.planet, &config.physics);
        let grounded = self.is_grounded();
        physics::orient_to_planet(self.body, self.planet, &config.physics, grounded, self.dt);
        self.actor.check_grounded(self.body, self.planet)
    }

    /// Drives the body with the current movement axis.
    pub(crate) fn move_with_input(&mut self, grounded: bool) {
        let axis = self.actor.input.move_axis();
        physics::move_around_planet(
            self.body,
            self.planet,
            self.actor.number(),
            axis,
            grounded,
            &self.actor.config().movement,
        );
        self.actor.face(axis);
    }

    /// Base state matching the current grounded and input state.
    pub(crate) fn derive_base_state(&self) -> PlayerState {
        if !self.is_grounded() {
            PlayerState::Jumping(JumpingState::default())
        } else if self.is_moving() {
            PlayerState::Moving(MovingState::default())
        } else {
            PlayerState::Idle(IdleState)
        }
    }
}

/// Outcome of a state hook.
#[derive(Debug)]
pub enum Transition {
    Stay,
    Change(PlayerState),
}

/// Per-state lifecycle hooks.
///
/// Hooks never switch states themselves; they return a [`Transition`] and the
/// machine performs exit-then-enter.
pub(crate) trait StateHooks {
    fn enter(&mut self, _ctx: &mut StateContext<'_>) {}

    fn update(&mut self, _ctx: &mut StateContext<'_>) -> Transition {
        Transition::Stay
    }

    fn fixed_update(&mut self, _ctx: &mut StateContext<'_>) -> Transition {
        Transition::Stay
    }

    fn exit(&mut self, _ctx: &mut StateContext<'_>) {}

    /// Any state reacts to touching the ball by kicking it.
    fn on_ball_collision(
        &mut self,
        _ctx: &mut StateContext<'_>,
        contact: BallContact,
    ) -> Transition {
        Transition::Change(PlayerState::Kicking(KickingState::new(contact)))
    }
}

/// The active state of a player.
#[derive(Debug)]
pub enum PlayerState {
    Idle(IdleState),
    Moving(MovingState),
    Jumping(JumpingState),
    Kicking(KickingState),
    PoweredUp(PoweredUpState),
}

impl PlayerState {
    pub fn idle() -> Self {
        Self::Idle(IdleState)
    }

    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle(_) => StateKind::Idle,
            Self::Moving(_) => StateKind::Moving,
            Self::Jumping(_) => StateKind::Jumping,
            Self::Kicking(_) => StateKind::Kicking,
            Self::PoweredUp(_) => StateKind::PoweredUp,
        }
    }

    /// Kind of the innermost state, looking through power-up wrappers.
    pub fn base_kind(&self) -> StateKind {
        match self {
            Self::PoweredUp(state) => state.inner().base_kind(),
            other => other.kind(),
        }
    }

    /// Power-up carried by a wrapper state.
    pub fn power_up(&self) -> Option<PowerUpKind> {
        match self {
            Self::PoweredUp(state) => Some(state.kind()),
            _ => None,
        }
    }

    /// Display name, e.g. `Moving` or `PoweredUp(HigherJump: Jumping)`.
    pub fn name(&self) -> String {
        match self {
            Self::PoweredUp(state) => {
                format!("PoweredUp({}: {})", state.kind(), state.inner().name())
            }
            other => other.kind().to_string(),
        }
    }

    fn hooks(&mut self) -> &mut dyn StateHooks {
        match self {
            Self::Idle(state) => state,
            Self::Moving(state) => state,
            Self::Jumping(state) => state,
            Self::Kicking(state) => state,
            Self::PoweredUp(state) => state,
        }
    }

    pub(crate) fn enter(&mut self, ctx: &mut StateContext<'_>) {
        tracing::debug!(player = %ctx.actor.number(), state = %self.name(), "entering state");
        self.hooks().enter(ctx);
    }

    pub(crate) fn update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        self.hooks().update(ctx)
    }

    pub(crate) fn fixed_update(&mut self, ctx: &mut StateContext<'_>) -> Transition {
        self.hooks().fixed_update(ctx)
    }

    pub(crate) fn exit(&mut self, ctx: &mut StateContext<'_>) {
        self.hooks().exit(ctx);
    }

    pub(crate) fn on_ball_collision(
        &mut self,
        ctx: &mut StateContext<'_>,
        contact: BallContact,
    ) -> Transition {
        self.hooks().on_ball_collision(ctx, contact)
    }
}
