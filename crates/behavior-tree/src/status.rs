//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Frame-ticked Semantics
///
/// A node that needs more than one frame to finish returns `Running` and is
/// evaluated again on the next tick with its internal progress intact.
/// `Success` and `Failure` are *terminal*: they end the node's current
/// execution cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior has not finished yet and wants to be ticked again.
    Running,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed (e.g., actor airborne).
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Inverts a terminal status: Success becomes Failure and vice versa.
    ///
    /// `Running` passes through unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Running => Status::Running,
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }

    /// Converts a boolean predicate into a terminal status.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
