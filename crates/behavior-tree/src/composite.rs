//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic), [`Selector`] (OR logic) and
//! [`Parallel`] (tick everything, aggregate).
//!
//! [`Sequence`] and [`Selector`] remember which child was running and resume
//! there on the next tick instead of rescanning from the first child. The
//! cursor only rewinds when the composite starts a new execution cycle.

use crate::{Behavior, Node, Status};

/// Child list management shared by every composite.
macro_rules! composite_children {
    ($ty:ident) => {
        impl<C> $ty<C> {
            /// Appends a child and returns the composite (builder style).
            #[must_use]
            pub fn with_child(mut self, child: Node<C>) -> Self {
                self.children.push(child);
                self
            }

            /// Appends a child.
            pub fn add_child(&mut self, child: Node<C>) {
                self.children.push(child);
            }

            /// Removes and returns the child at `index`, if any.
            pub fn remove_child(&mut self, index: usize) -> Option<Node<C>> {
                (index < self.children.len()).then(|| self.children.remove(index))
            }

            /// Removes every child.
            pub fn clear_children(&mut self) {
                self.children.clear();
            }

            /// Number of children.
            pub fn len(&self) -> usize {
                self.children.len()
            }

            /// Returns `true` if there are no children.
            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }
        }
    };
}

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   at that child on the next tick
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child nodes.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            current: 0,
        }
    }
}

composite_children!(Sequence);

impl<C> Behavior<C> for Sequence<C> {
    fn on_start(&mut self, _ctx: &mut C) {
        self.current = 0;
    }

    fn evaluate(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.update(ctx) {
                Status::Running => return Status::Running,
                Status::Failure => return Status::Failure, // Short-circuit
                Status::Success => self.current += 1,      // Move to next child
            }
        }
        // All children succeeded
        Status::Success
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector returns `Running` and resumes
///   at that child on the next tick
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child nodes.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            current: 0,
        }
    }
}

composite_children!(Selector);

impl<C> Behavior<C> for Selector<C> {
    fn on_start(&mut self, _ctx: &mut C) {
        self.current = 0;
    }

    fn evaluate(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.update(ctx) {
                Status::Running => return Status::Running,
                Status::Success => return Status::Success, // Short-circuit
                Status::Failure => self.current += 1,      // Try next child
            }
        }
        // All children failed
        Status::Failure
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }
}

/// Ticks every child on every evaluation.
///
/// # Semantics
///
/// - Any child `Running` → `Running`
/// - Otherwise any child `Failure` → `Failure`
/// - Otherwise `Success`
///
/// Siblings are never cancelled; a failing child does not stop the others
/// from being ticked in the same frame.
pub struct Parallel<C> {
    children: Vec<Node<C>>,
}

impl<C> Parallel<C> {
    /// Creates a new parallel node with the given child nodes.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }
}

composite_children!(Parallel);

impl<C> Behavior<C> for Parallel<C> {
    fn evaluate(&mut self, ctx: &mut C) -> Status {
        let mut any_running = false;
        let mut any_failed = false;

        for child in &mut self.children {
            match child.update(ctx) {
                Status::Running => any_running = true,
                Status::Failure => any_failed = true,
                Status::Success => {}
            }
        }

        if any_running {
            Status::Running
        } else if any_failed {
            Status::Failure
        } else {
            Status::Success
        }
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records which leaves were evaluated, in order.
    #[derive(Default)]
    struct TestContext {
        log: Vec<&'static str>,
    }

    /// Replays a fixed script of results, repeating the last one.
    struct Scripted {
        label: &'static str,
        script: Vec<Status>,
        cursor: usize,
    }

    impl Behavior<TestContext> for Scripted {
        fn evaluate(&mut self, ctx: &mut TestContext) -> Status {
            ctx.log.push(self.label);
            let status = self.script[self.cursor.min(self.script.len() - 1)];
            self.cursor += 1;
            status
        }
    }

    fn leaf(label: &'static str, script: &[Status]) -> Node<TestContext> {
        Node::new(
            label,
            Scripted {
                label,
                script: script.to_vec(),
                cursor: 0,
            },
        )
    }

    use Status::{Failure, Running, Success};

    #[test]
    fn selector_stops_at_first_success() {
        let mut sel = Node::new(
            "Selector",
            Selector::new(vec![
                leaf("a", &[Failure]),
                leaf("b", &[Failure]),
                leaf("c", &[Success]),
                leaf("d", &[Success]), // Should not execute
            ]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.update(&mut ctx), Success);
        assert_eq!(ctx.log, vec!["a", "b", "c"]);
    }

    #[test]
    fn selector_rescans_from_first_child_after_terminal_result() {
        let mut sel = Node::new(
            "Selector",
            Selector::new(vec![
                leaf("a", &[Failure]),
                leaf("b", &[Failure]),
                leaf("c", &[Success]),
            ]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.update(&mut ctx), Success);
        ctx.log.clear();

        assert_eq!(sel.update(&mut ctx), Success);
        assert_eq!(ctx.log, vec!["a", "b", "c"]);
    }

    #[test]
    fn selector_resumes_running_child_without_rescanning() {
        let mut sel = Node::new(
            "Selector",
            Selector::new(vec![
                leaf("a", &[Failure, Success]),
                leaf("b", &[Running, Running, Success]),
            ]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.update(&mut ctx), Running);
        assert_eq!(sel.update(&mut ctx), Running);
        assert_eq!(sel.update(&mut ctx), Success);

        // "a" was only evaluated once: the selector stayed on "b" while it ran
        assert_eq!(ctx.log, vec!["a", "b", "b", "b"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Node::new(
            "Selector",
            Selector::new(vec![leaf("a", &[Failure]), leaf("b", &[Failure])]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.update(&mut ctx), Failure);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Node::new(
            "Sequence",
            Sequence::new(vec![
                leaf("a", &[Success]),
                leaf("b", &[Failure]),
                leaf("c", &[Success]), // Should not execute
            ]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(seq.update(&mut ctx), Failure);
        assert_eq!(ctx.log, vec!["a", "b"]);
    }

    #[test]
    fn sequence_resumes_running_child() {
        let mut seq = Node::new(
            "Sequence",
            Sequence::new(vec![leaf("a", &[Success]), leaf("b", &[Running, Success])]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(seq.update(&mut ctx), Running);
        assert_eq!(seq.update(&mut ctx), Success);
        assert_eq!(ctx.log, vec!["a", "b", "b"]);
    }

    #[test]
    fn parallel_running_dominates_failure() {
        let mut par = Node::new(
            "Parallel",
            Parallel::new(vec![
                leaf("a", &[Failure]),
                leaf("b", &[Running, Success]),
                leaf("c", &[Success]),
            ]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(par.update(&mut ctx), Running);
        assert_eq!(ctx.log, vec!["a", "b", "c"]);

        // Every child ticked again, b now done, a still failing
        assert_eq!(par.update(&mut ctx), Failure);
        assert_eq!(ctx.log.len(), 6);
    }

    #[test]
    fn parallel_succeeds_when_all_succeed() {
        let mut par = Node::new(
            "Parallel",
            Parallel::new(vec![leaf("a", &[Success]), leaf("b", &[Success])]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(par.update(&mut ctx), Success);
    }

    #[test]
    fn empty_composites() {
        let mut ctx = TestContext::default();
        let mut sel: Node<TestContext> = Node::new("Selector", Selector::new(vec![]));
        let mut seq: Node<TestContext> = Node::new("Sequence", Sequence::new(vec![]));
        let mut par: Node<TestContext> = Node::new("Parallel", Parallel::new(vec![]));

        assert_eq!(sel.update(&mut ctx), Failure);
        assert_eq!(seq.update(&mut ctx), Success);
        assert_eq!(par.update(&mut ctx), Success);
    }

    #[test]
    fn child_list_management() {
        let mut sel = Selector::new(vec![leaf("a", &[Failure])]).with_child(leaf("b", &[Success]));
        assert_eq!(sel.len(), 2);

        let removed = sel.remove_child(0).map(|node| node.name().to_owned());
        assert_eq!(removed.as_deref(), Some("a"));
        assert!(sel.remove_child(5).is_none());

        sel.clear_children();
        assert!(sel.is_empty());
    }

    #[test]
    fn abort_propagates_to_running_children() {
        let mut seq = Node::new(
            "Sequence",
            Sequence::new(vec![leaf("a", &[Success]), leaf("b", &[Running])]),
        );

        let mut ctx = TestContext::default();
        assert_eq!(seq.update(&mut ctx), Running);
        assert!(seq.children()[1].is_started());

        seq.abort(&mut ctx);
        assert!(!seq.is_started());
        assert!(seq.children().iter().all(|child| !child.is_started()));
        assert_eq!(seq.children()[1].status(), Some(Failure));
    }
}
