//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use std::time::Duration;

use crate::{
    Action, AlwaysSucceed, Behavior, Clock, Cooldown, Inverter, Selector, Sequence, Status,
    Tactic, UtilitySelector, WeightTable,
};

/// Creates an action leaf from an evaluator closure.
///
/// Shorthand for `Box::new(Action::new(evaluator))`.
#[inline]
pub fn action<C: 'static>(
    evaluator: impl FnMut(&mut C) -> Status + Send + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(evaluator))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}

/// Creates a cooldown gate around `child`.
///
/// Shorthand for `Box::new(Cooldown::new(child, duration))`.
#[inline]
pub fn cooldown<C: Clock + 'static>(
    child: Box<dyn Behavior<C>>,
    duration: Duration,
) -> Box<dyn Behavior<C>> {
    Box::new(Cooldown::new(child, duration))
}

/// Creates a utility selector over `tactics` scored against `weights`.
///
/// Shorthand for `Box::new(UtilitySelector::new(tactics, weights))`.
#[inline]
pub fn utility_selector<C: 'static>(
    tactics: Vec<Tactic<C>>,
    weights: WeightTable,
) -> Box<dyn Behavior<C>> {
    Box::new(UtilitySelector::new(tactics, weights))
}
