//! Per-actor tree runner.

use crate::{Node, Status};

/// Owns the root of a behavior tree and ticks it once per frame.
///
/// A runner without a root is valid: ticking it is a no-op that returns
/// `None`. Swapping roots does not abort the previous tree; call
/// [`BehaviorTreeRunner::abort`] first if the old tree may be mid-execution.
pub struct BehaviorTreeRunner<C> {
    root: Option<Node<C>>,
    ticks: u64,
}

impl<C> Default for BehaviorTreeRunner<C> {
    fn default() -> Self {
        Self {
            root: None,
            ticks: 0,
        }
    }
}

impl<C> BehaviorTreeRunner<C> {
    /// Creates a runner that owns `root`.
    pub fn new(root: Node<C>) -> Self {
        Self {
            root: Some(root),
            ticks: 0,
        }
    }

    /// Replaces the root, returning the previous one.
    pub fn set_root(&mut self, root: Option<Node<C>>) -> Option<Node<C>> {
        std::mem::replace(&mut self.root, root)
    }

    /// Removes the root.
    pub fn clear_root(&mut self) -> Option<Node<C>> {
        self.root.take()
    }

    pub fn root(&self) -> Option<&Node<C>> {
        self.root.as_ref()
    }

    /// Number of ticks that reached a root.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks the root once. Returns `None` when there is no root.
    pub fn tick(&mut self, ctx: &mut C) -> Option<Status> {
        let root = self.root.as_mut()?;
        self.ticks += 1;
        Some(root.update(ctx))
    }

    /// Aborts the whole tree if it is mid-execution.
    pub fn abort(&mut self, ctx: &mut C) {
        if let Some(root) = self.root.as_mut()
            && root.is_started()
        {
            root.abort(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{action, condition, sequence};

    #[test]
    fn empty_runner_is_noop() {
        let mut runner: BehaviorTreeRunner<i32> = BehaviorTreeRunner::default();
        assert_eq!(runner.tick(&mut 0), None);
        assert_eq!(runner.ticks(), 0);
    }

    #[test]
    fn runner_ticks_root() {
        let root = sequence(
            "Root",
            vec![
                condition("IsPositive", |v: &i32| *v > 0),
                action("Double", |v: &mut i32| {
                    *v *= 2;
                    Status::Success
                }),
            ],
        );
        let mut runner = BehaviorTreeRunner::new(root);

        let mut value = 3;
        assert_eq!(runner.tick(&mut value), Some(Status::Success));
        assert_eq!(value, 6);

        let mut negative = -1;
        assert_eq!(runner.tick(&mut negative), Some(Status::Failure));
        assert_eq!(runner.ticks(), 2);
    }

    #[test]
    fn abort_resets_running_tree() {
        let root = sequence("Root", vec![action("Wait", |_: &mut i32| Status::Running)]);
        let mut runner = BehaviorTreeRunner::new(root);

        assert_eq!(runner.tick(&mut 0), Some(Status::Running));
        runner.abort(&mut 0);

        let root = runner.root().expect("root");
        assert!(!root.is_started());
        assert_eq!(root.status(), Some(Status::Failure));
    }
}
