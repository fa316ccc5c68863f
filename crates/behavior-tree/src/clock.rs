//! Time source for time-aware decorators.

use std::time::Duration;

/// Supplies the current simulation time to time-aware nodes.
///
/// Implemented by the tree's context type so that time flows through the
/// same channel as the rest of the game state rather than an ambient
/// global. The value must be monotonic across ticks; its zero point is
/// arbitrary (time since level start, time since process start, etc.).
pub trait Clock {
    /// Current simulation time.
    fn now(&self) -> Duration;
}
