//! Game-stage gate.

/// Reports whether gameplay is running (not paused, not game-over).
pub trait StageGate {
    fn is_gameplay_active(&self) -> bool;
}

/// Gate that is always open.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysActive;

impl StageGate for AlwaysActive {
    fn is_gameplay_active(&self) -> bool {
        true
    }
}
