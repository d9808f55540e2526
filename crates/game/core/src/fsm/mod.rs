//! Player finite-state machine.
//!
//! One [`PlayerState`] is active per player. States react to input, physics
//! ticks and ball contacts through [`StateContext`], and request transitions
//! by returning a [`Transition`]; [`PlayerStateMachine`] performs them so the
//! old state's exit always precedes the new state's enter.
mod actor;
mod idle;
mod jumping;
mod kicking;
mod machine;
mod moving;
mod powered_up;
mod state;

pub use actor::Actor;
pub use idle::IdleState;
pub use jumping::JumpingState;
pub use kicking::KickingState;
pub use machine::PlayerStateMachine;
pub use moving::MovingState;
pub use powered_up::PoweredUpState;
pub use state::{PlayerState, StateContext, StateKind, Transition};
