//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// Evaluation is synchronous; a node that needs more than one tick to
/// finish returns [`Status::Running`] and is polled again on a later tick.
/// `Running` is a polling signal, not a suspension primitive: the engine
/// performs no scheduling of its own between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed (e.g., no valid target).
    Failure,

    /// The behavior has not resolved this tick and must be ticked again.
    Running,
}

impl Status {
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

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` is a fixed point: an unresolved child is still unresolved
    /// after negation.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}
