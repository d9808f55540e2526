//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which every node kind
//! implements. The trait is generic over a context type `C`, allowing nodes to
//! read the blackboard and write their outputs into it. Lifecycle bookkeeping
//! (started flag, last status, start/stop hooks) lives in [`crate::Node`], so
//! implementors only describe what happens on a single evaluation.

use crate::{Node, Status};

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   game state and modify it (e.g., to publish a movement command).
    ///
    /// # Returns
    ///
    /// - `Status::Running` if the behavior needs more ticks
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    fn evaluate(&mut self, ctx: &mut C) -> Status;

    /// Called once before the first evaluation of an execution cycle.
    fn on_start(&mut self, _ctx: &mut C) {}

    /// Called whenever an execution cycle ends (terminal result or abort).
    fn on_stop(&mut self, _ctx: &mut C) {}

    /// Read-only view of owned child nodes, in evaluation order.
    fn children(&self) -> &[Node<C>] {
        &[]
    }

    /// Mutable view of owned child nodes. Used to propagate aborts.
    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut []
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn evaluate(&mut self, ctx: &mut C) -> Status {
        (**self).evaluate(ctx)
    }

    #[inline]
    fn on_start(&mut self, ctx: &mut C) {
        (**self).on_start(ctx)
    }

    #[inline]
    fn on_stop(&mut self, ctx: &mut C) {
        (**self).on_stop(ctx)
    }

    #[inline]
    fn children(&self) -> &[Node<C>] {
        (**self).children()
    }

    #[inline]
    fn children_mut(&mut self) -> &mut [Node<C>] {
        (**self).children_mut()
    }
}
