//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or its
//! invocation policy. This module provides [`Inverter`] (NOT logic),
//! [`AlwaysSucceed`] (failure suppression), and [`Cooldown`] (rate limiting).

use std::time::Duration;

use crate::{Behavior, Clock, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Masks the child's failure, returning `Success` instead.
///
/// # Semantics
///
/// - `Success` and `Failure` both map to `Success`
/// - `Running` passes through unchanged
///
/// Useful for optional steps inside a [`Sequence`](crate::Sequence): the
/// wrapped child is attempted every tick, but its refusal never aborts the
/// surrounding sequence (e.g., "use the skill if it is off cooldown, then
/// keep advancing either way").
pub struct AlwaysSucceed<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => Status::Success,
        }
    }
}

/// Rate-limits its child's invocation without changing the child's logic.
///
/// # Semantics
///
/// The gate is either ready or on cooldown, judged against the context's
/// [`Clock`]:
///
/// - **Ready** (never triggered, or at least `duration` elapsed since the
///   last trigger): the child is ticked. If it returns `Success` or
///   `Running`, the cooldown window restarts from now. The child's result
///   is returned unchanged either way.
/// - **On cooldown**: the child is **not ticked at all** this tick and the
///   gate returns `Failure`.
///
/// A ready child returning `Failure` does not restart the window, so the
/// next tick retries immediately; failed attempts consume no cooldown.
pub struct Cooldown<C> {
    child: Box<dyn Behavior<C>>,
    duration: Duration,
    last_trigger: Option<Duration>,
}

impl<C> Cooldown<C> {
    /// Creates a cooldown gate around `child` with the given window.
    ///
    /// The gate starts ready: the first tick always reaches the child.
    pub fn new(child: Box<dyn Behavior<C>>, duration: Duration) -> Self {
        Self {
            child,
            duration,
            last_trigger: None,
        }
    }

    fn is_ready(&self, now: Duration) -> bool {
        match self.last_trigger {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.duration,
        }
    }
}

impl<C: Clock> Behavior<C> for Cooldown<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let now = ctx.now();
        if !self.is_ready(now) {
            return Status::Failure;
        }

        let status = self.child.tick(ctx);
        if matches!(status, Status::Success | Status::Running) {
            self.last_trigger = Some(now);
        }
        status
    }
}
