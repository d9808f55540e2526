//! Node lifecycle wrapper.
//!
//! [`Node`] pairs a [`Behavior`] with its identity and execution bookkeeping.
//! Parents always tick children through [`Node::update`], which is what makes
//! the start/stop hooks and the resumable `Running` protocol uniform across
//! every node kind.

use std::borrow::Cow;
use std::fmt;

use crate::{Behavior, Status};

/// A named behavior plus its execution state.
///
/// A node is built once when the tree is assembled and reused on every tick.
/// Its execution state is "not started" until the first [`Node::update`],
/// then either `Running` (started flag kept, resumable on the next tick) or
/// terminal (started flag cleared, the next update begins a new cycle).
pub struct Node<C> {
    name: Cow<'static, str>,
    behavior: Box<dyn Behavior<C>>,
    status: Option<Status>,
    started: bool,
}

impl<C> Node<C> {
    /// Wraps a behavior under the given display name.
    pub fn new<B>(name: impl Into<Cow<'static, str>>, behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        Self::from_boxed(name, Box::new(behavior))
    }

    /// Wraps an already boxed behavior.
    pub fn from_boxed(name: impl Into<Cow<'static, str>>, behavior: Box<dyn Behavior<C>>) -> Self {
        Self {
            name: name.into(),
            behavior,
            status: None,
            started: false,
        }
    }

    /// Display name of this node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Result of the most recent update or abort, `None` if never evaluated.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Whether an execution cycle is in progress.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Child nodes in evaluation order.
    pub fn children(&self) -> &[Node<C>] {
        self.behavior.children()
    }

    /// Ticks this node once.
    ///
    /// Calls `on_start` when a new execution cycle begins, evaluates the
    /// behavior, and on a terminal result calls `on_stop` and clears the
    /// started flag so the next update re-enters from scratch.
    pub fn update(&mut self, ctx: &mut C) -> Status {
        if !self.started {
            tracing::trace!(node = %self.name, "node started");
            self.behavior.on_start(ctx);
            self.started = true;
        }

        let status = self.behavior.evaluate(ctx);
        self.status = Some(status);

        if status.is_terminal() {
            self.behavior.on_stop(ctx);
            self.started = false;
            tracing::trace!(node = %self.name, ?status, "node stopped");
        }

        status
    }

    /// Terminates this node immediately.
    ///
    /// Children are aborted first, then `on_stop` runs and the node reports
    /// `Failure`. Aborting an idle node is allowed and still reports `Failure`.
    pub fn abort(&mut self, ctx: &mut C) {
        for child in self.behavior.children_mut() {
            child.abort(ctx);
        }
        self.behavior.on_stop(ctx);
        self.started = false;
        self.status = Some(Status::Failure);
        tracing::trace!(node = %self.name, "node aborted");
    }

    /// Forces the next update to begin a fresh execution cycle.
    ///
    /// Unlike [`Node::abort`] this does not run `on_stop`; it only clears the
    /// started flag.
    pub fn reset(&mut self) {
        self.started = false;
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("status", &self.status)
            .field("started", &self.started)
            .field("children", &self.children().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Trace {
        starts: u32,
        stops: u32,
        evaluations: u32,
    }

    /// Returns Running for `running_ticks` evaluations, then Success.
    struct Countdown {
        running_ticks: u32,
        remaining: u32,
    }

    impl Behavior<Trace> for Countdown {
        fn on_start(&mut self, ctx: &mut Trace) {
            ctx.starts += 1;
            self.remaining = self.running_ticks;
        }

        fn evaluate(&mut self, ctx: &mut Trace) -> Status {
            ctx.evaluations += 1;
            if self.remaining == 0 {
                Status::Success
            } else {
                self.remaining -= 1;
                Status::Running
            }
        }

        fn on_stop(&mut self, ctx: &mut Trace) {
            ctx.stops += 1;
        }
    }

    fn countdown(running_ticks: u32) -> Node<Trace> {
        Node::new(
            "Countdown",
            Countdown {
                running_ticks,
                remaining: 0,
            },
        )
    }

    #[test]
    fn running_keeps_node_started() {
        let mut node = countdown(2);
        let mut ctx = Trace::default();

        assert_eq!(node.update(&mut ctx), Status::Running);
        assert!(node.is_started());
        assert_eq!(node.update(&mut ctx), Status::Running);
        assert_eq!(node.update(&mut ctx), Status::Success);
        assert!(!node.is_started());

        assert_eq!(ctx.starts, 1);
        assert_eq!(ctx.stops, 1);
        assert_eq!(ctx.evaluations, 3);
    }

    #[test]
    fn terminal_result_restarts_next_cycle() {
        let mut node = countdown(0);
        let mut ctx = Trace::default();

        assert_eq!(node.update(&mut ctx), Status::Success);
        assert_eq!(node.update(&mut ctx), Status::Success);
        assert_eq!(ctx.starts, 2);
        assert_eq!(ctx.stops, 2);
    }

    #[test]
    fn abort_forces_failure_and_stop() {
        let mut node = countdown(5);
        let mut ctx = Trace::default();

        assert_eq!(node.update(&mut ctx), Status::Running);
        node.abort(&mut ctx);

        assert_eq!(node.status(), Some(Status::Failure));
        assert!(!node.is_started());
        assert_eq!(ctx.stops, 1);

        // Next update begins a new cycle
        assert_eq!(node.update(&mut ctx), Status::Running);
        assert_eq!(ctx.starts, 2);
    }

    #[test]
    fn status_is_none_before_first_update() {
        let node = countdown(1);
        assert_eq!(node.status(), None);
        assert_eq!(node.name(), "Countdown");
    }
}
