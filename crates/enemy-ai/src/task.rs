//! Shareable leaf evaluators.

use std::sync::{Arc, Mutex, PoisonError};

use behavior_tree::{Behavior, Status};

/// A cloneable handle to one external evaluator.
///
/// Archetype trees reference some evaluators from several positions at once
/// (the skill action sits inside three different battle tactics), and the
/// evaluator may carry private cross-tick state that those positions must
/// share. Cloning the handle clones the reference, not the evaluator, so
/// every tree position polls the same underlying state.
///
/// Within one tick only a single tree position is ever reached, so the
/// mutex is uncontended; it exists to keep the handle `Send` for agents
/// living on worker threads.
pub struct Task<C> {
    evaluator: Arc<Mutex<dyn FnMut(&mut C) -> Status + Send>>,
}

impl<C> Task<C> {
    /// Wraps an external evaluator into a shareable tree leaf.
    pub fn new(evaluator: impl FnMut(&mut C) -> Status + Send + 'static) -> Self {
        Self {
            evaluator: Arc::new(Mutex::new(evaluator)),
        }
    }

    /// Boxes a clone of this handle as a tree node.
    pub fn node(&self) -> Box<dyn Behavior<C>>
    where
        C: 'static,
    {
        Box::new(self.clone())
    }
}

impl<C> Clone for Task<C> {
    fn clone(&self) -> Self {
        Self {
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<C> Behavior<C> for Task<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let mut evaluator = self
            .evaluator
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        evaluator(ctx)
    }
}
