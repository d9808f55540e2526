//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Node::new("Root", Sequence::new(vec![...]))`, you can use shorter functions
//! like `sequence("Root", vec![...])`.

use std::borrow::Cow;

use crate::{
    Action, Condition, Cooldown, GameClock, Inverter, Node, Parallel, Repeater, Selector, Sequence,
    Status,
};

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(name: impl Into<Cow<'static, str>>, children: Vec<Node<C>>) -> Node<C> {
    Node::new(name, Sequence::new(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(name: impl Into<Cow<'static, str>>, children: Vec<Node<C>>) -> Node<C> {
    Node::new(name, Selector::new(children))
}

/// Creates a parallel node.
#[inline]
pub fn parallel<C: 'static>(name: impl Into<Cow<'static, str>>, children: Vec<Node<C>>) -> Node<C> {
    Node::new(name, Parallel::new(children))
}

/// Creates an inverter node named after its child.
#[inline]
pub fn inverter<C: 'static>(child: Node<C>) -> Node<C> {
    let name = format!("Not({})", child.name());
    Node::new(name, Inverter::new(child))
}

/// Creates a repeater node. A negative `max_repeats` repeats forever.
#[inline]
pub fn repeater<C: 'static>(
    name: impl Into<Cow<'static, str>>,
    max_repeats: i32,
    child: Node<C>,
) -> Node<C> {
    Node::new(name, Repeater::new(child, max_repeats))
}

/// Creates a cooldown node.
#[inline]
pub fn cooldown<C: GameClock + 'static>(
    name: impl Into<Cow<'static, str>>,
    seconds: f32,
    child: Node<C>,
) -> Node<C> {
    Node::new(name, Cooldown::new(child, seconds))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<C: 'static, F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Node<C>
where
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Node::new(name, Condition::new(predicate))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<C: 'static, F>(name: impl Into<Cow<'static, str>>, run: F) -> Node<C>
where
    F: FnMut(&mut C) -> Status + Send + Sync + 'static,
{
    Node::new(name, Action::new(run))
}
