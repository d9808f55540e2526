//! Game clock seam for time-aware nodes.

/// Supplies the current game time to nodes that need it (e.g. [`crate::Cooldown`]).
///
/// Implemented by the blackboard/context type the tree is ticked with. Time is
/// expressed in seconds since an arbitrary epoch and must not decrease.
pub trait GameClock {
    /// Current game time in seconds.
    fn now(&self) -> f32;
}
