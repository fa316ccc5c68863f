//! Core behavior trait and the leaf node wrapping external evaluators.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to access game state and make decisions.

use crate::Status;

/// A behavior tree node that can be ticked against a context.
///
/// Ticking takes `&mut self` because some nodes persist state across ticks:
/// a [`Cooldown`](crate::Cooldown) keeps its last-trigger timestamp, and a
/// leaf evaluator may track progress through a multi-tick maneuver. Nodes
/// that need no state simply ignore the mutability.
pub trait Behavior<C>: Send {
    /// Evaluate this behavior node against the given context.
    ///
    /// Evaluation is synchronous and must not block; a node that cannot
    /// resolve within this tick returns [`Status::Running`] and is polled
    /// again on a later tick.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   game state and modify it (e.g., to store intermediate results).
    fn tick(&mut self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Leaf node wrapping an externally supplied evaluator.
///
/// The evaluator implements the actual domain logic (movement, combat,
/// perception) outside this crate; the engine only requires it to return a
/// valid [`Status`] synchronously. Its side effects are not inspected or
/// constrained here, and it may keep private state across ticks through the
/// `FnMut` capture (e.g., an in-progress multi-tick maneuver).
pub struct Action<C> {
    evaluator: Box<dyn FnMut(&mut C) -> Status + Send>,
}

impl<C> Action<C> {
    /// Creates a leaf that delegates every tick to `evaluator`.
    pub fn new(evaluator: impl FnMut(&mut C) -> Status + Send + 'static) -> Self {
        Self {
            evaluator: Box::new(evaluator),
        }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.evaluator)(ctx)
    }
}
