//! Stateful behavior tree library for real-time game AI.
//!
//! Trees are built once and ticked every frame. Nodes keep their execution
//! state between ticks, so a `Running` branch resumes where it left off
//! instead of re-evaluating from the first child.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all node kinds
//! - [`Node`]: Lifecycle wrapper (name, last status, start/stop hooks)
//! - [`Status`]: Running, Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`]
//! - Decorator nodes: [`Inverter`], [`Repeater`], [`Cooldown`]
//! - Leaf adapters: [`Condition`], [`Action`]
//! - [`BehaviorTreeRunner`]: Owns a root and ticks it
//!
//! Time-dependent nodes read the clock through [`GameClock`], implemented by
//! the context type.

pub mod behavior;
pub mod builder;
pub mod clock;
pub mod composite;
pub mod debug;
pub mod decorator;
pub mod leaf;
pub mod node;
pub mod runner;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use clock::GameClock;
pub use composite::{Parallel, Selector, Sequence};
pub use debug::{NodeInfo, render_tree};
pub use decorator::{Cooldown, Inverter, Repeater};
pub use leaf::{Action, Condition};
pub use node::Node;
pub use runner::BehaviorTreeRunner;
pub use status::Status;
