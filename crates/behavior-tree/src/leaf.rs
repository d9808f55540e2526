//! Leaf adapters built from closures.
//!
//! Most game-specific leaves are small structs implementing [`Behavior`]
//! directly. For one-off predicates and actions these adapters avoid the
//! boilerplate.

use crate::{Behavior, Status};

/// Succeeds when the predicate holds, fails otherwise. Never `Running`.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    /// Wraps a predicate over the context.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    fn evaluate(&mut self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

/// Runs a closure that may mutate the context and reports its status.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    /// Wraps a closure run on every tick.
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> Status + Send + Sync,
{
    fn evaluate(&mut self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}
