//! Decorator behavior nodes.
//!
//! Decorators wrap a single child node and modify its result or execution.
//! This module provides [`Inverter`] (NOT logic), [`Repeater`] (bounded or
//! endless repetition) and [`Cooldown`] (rate limiting on game time).

use crate::{Behavior, GameClock, Node, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: [Node<C>; 1],
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child node.
    pub fn new(child: Node<C>) -> Self {
        Self { child: [child] }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn evaluate(&mut self, ctx: &mut C) -> Status {
        self.child[0].update(ctx).invert()
    }

    fn children(&self) -> &[Node<C>] {
        &self.child
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.child
    }
}

/// Repeats its child a fixed number of times, or forever.
///
/// # Semantics
///
/// Every terminal result of the child (success *or* failure) counts as one
/// repetition. While repetitions remain the repeater reports `Running` and
/// restarts the child; once the budget is spent it reports `Success`.
/// The counter resets whenever the repeater itself starts a new cycle.
pub struct Repeater<C> {
    child: [Node<C>; 1],
    max_repeats: Option<u32>,
    repeats: u32,
}

impl<C> Repeater<C> {
    /// Creates a repeater. A negative `max_repeats` repeats forever.
    pub fn new(child: Node<C>, max_repeats: i32) -> Self {
        Self {
            child: [child],
            max_repeats: u32::try_from(max_repeats).ok(),
            repeats: 0,
        }
    }

    /// Creates a repeater that never finishes on its own.
    pub fn forever(child: Node<C>) -> Self {
        Self::new(child, -1)
    }

    /// Completed repetitions in the current cycle.
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    fn exhausted(&self) -> bool {
        self.max_repeats.is_some_and(|max| self.repeats >= max)
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn on_start(&mut self, _ctx: &mut C) {
        self.repeats = 0;
    }

    fn evaluate(&mut self, ctx: &mut C) -> Status {
        if self.exhausted() {
            return Status::Success;
        }

        match self.child[0].update(ctx) {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => {
                self.repeats += 1;
                if self.exhausted() {
                    return Status::Success;
                }
                self.child[0].reset();
                Status::Running
            }
        }
    }

    fn children(&self) -> &[Node<C>] {
        &self.child
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.child
    }
}

/// Refuses to run its child until a cooldown has elapsed.
///
/// # Semantics
///
/// - While `now - last_executed < cooldown` the child is not evaluated and
///   the cooldown reports `Failure`
/// - Otherwise the child is ticked and its result returned; a terminal result
///   stamps `last_executed = now`
///
/// The first evaluation always runs the child.
pub struct Cooldown<C> {
    child: [Node<C>; 1],
    cooldown: f32,
    last_executed: f32,
}

impl<C> Cooldown<C> {
    /// Creates a cooldown of `cooldown` seconds around the given child.
    pub fn new(child: Node<C>, cooldown: f32) -> Self {
        Self {
            child: [child],
            cooldown,
            last_executed: -cooldown,
        }
    }

    /// Cooldown length in seconds.
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Seconds until the child may run again, zero if ready.
    pub fn remaining(&self, now: f32) -> f32 {
        (self.cooldown - (now - self.last_executed)).max(0.0)
    }
}

impl<C: GameClock> Behavior<C> for Cooldown<C> {
    fn evaluate(&mut self, ctx: &mut C) -> Status {
        let now = ctx.now();
        if now - self.last_executed < self.cooldown {
            return Status::Failure;
        }

        let status = self.child[0].update(ctx);
        if status.is_terminal() {
            self.last_executed = now;
        }
        status
    }

    fn children(&self) -> &[Node<C>] {
        &self.child
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.child
    }
}
