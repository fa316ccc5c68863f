//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).

use crate::{Behavior, Status};

/// Executes child behaviors in sequence until one fails or is still running.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and
///   returns `Failure`: later children are not ticked and produce no side
///   effects this tick
/// - If a child returns `Running`, the sequence **stops immediately** and
///   returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success` (including the zero-children case),
///   the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
/// Child order is fixed at construction and is a semantic guarantee.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// An empty child list is well-formed: such a sequence vacuously
    /// succeeds every tick.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        // Execute children in order until one fails or stays running
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Success => continue,               // Move to next child
                Status::Failure => return Status::Failure, // Short-circuit
                Status::Running => return Status::Running, // Short-circuit
            }
        }
        // All children succeeded
        Status::Success
    }
}

/// Executes child behaviors in sequence until one succeeds or is still running.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops
///   immediately** and returns that result; no later children are ticked
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure` (including the zero-children case),
///   the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation and
/// expresses priority-ordered fallback: try the highest-priority option
/// first, and only fall through on refusal.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// An empty child list is well-formed: such a selector fails every tick.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        // Try children in order until one succeeds or stays running
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Success => return Status::Success, // Short-circuit
                Status::Running => return Status::Running, // Short-circuit
                Status::Failure => continue,               // Try next child
            }
        }
        // All children failed
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    struct TestContext {
        value: i32,
    }

    fn increment() -> Box<dyn Behavior<TestContext>> {
        Box::new(Action::new(|ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Success
        }))
    }

    fn fail_always() -> Box<dyn Behavior<TestContext>> {
        Box::new(Action::new(|_: &mut TestContext| Status::Failure))
    }

    fn run_always() -> Box<dyn Behavior<TestContext>> {
        Box::new(Action::new(|_: &mut TestContext| Status::Running))
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![increment(), increment()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            increment(),
            fail_always(),
            increment(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
    }

    #[test]
    fn sequence_stops_on_running() {
        let mut seq = Sequence::new(vec![
            increment(),
            run_always(),
            increment(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut seq: Sequence<TestContext> = Sequence::new(vec![]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(vec![
            fail_always(),
            increment(),
            increment(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1); // Only one increment executed
    }

    #[test]
    fn selector_stops_on_running() {
        let mut sel = Selector::new(vec![
            fail_always(),
            run_always(),
            increment(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![fail_always(), fail_always()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn empty_selector_fails() {
        let mut sel: Selector<TestContext> = Selector::new(vec![]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }
}
