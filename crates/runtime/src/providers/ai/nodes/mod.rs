//! Soccer behavior tree nodes.
//!
//! - `conditions`: read the blackboard, return Success/Failure
//! - `actions`: queue commands for the player agent

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
