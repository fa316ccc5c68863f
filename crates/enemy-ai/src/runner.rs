//! Per-frame tick driver for a built archetype tree.

use std::collections::HashMap;

use behavior_tree::{Behavior, Status, WeightTable};

/// Owns one agent's decision tree for the agent's lifetime.
///
/// Built once at agent initialization by an archetype builder in
/// [`trees`](crate::trees) and ticked once per simulation frame by the
/// agent's update routine. Also holds the weight-table handle the in-tree
/// utility selector scores against, so the difficulty system can be given
/// write access without reaching into the tree.
pub struct TreeRunner<C> {
    root: Box<dyn Behavior<C>>,
    weights: WeightTable,
}

impl<C> TreeRunner<C> {
    /// Wraps a built tree and the weight table its tactics read.
    pub fn new(root: Box<dyn Behavior<C>>, weights: WeightTable) -> Self {
        Self { root, weights }
    }

    /// Evaluates the whole tree once, from the root.
    ///
    /// Synchronous and non-blocking; call again next frame. A `Running`
    /// result means some leaf is mid-maneuver and wants to be polled again.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.root.tick(ctx);
        tracing::trace!(?status, "ticked decision tree");
        status
    }

    /// Cloneable handle for the difficulty system. Every clone observes the
    /// same table, so the collaborator can rewrite weights at any moment,
    /// tick-aligned or not.
    pub fn weights(&self) -> WeightTable {
        self.weights.clone()
    }

    /// Replaces the entire difficulty weight mapping at once.
    ///
    /// Convenience for collaborators holding the runner itself rather than
    /// a [`WeightTable`] clone. Tactics omitted from `weights` revert to
    /// neutral.
    pub fn update_weights(&self, weights: HashMap<String, f32>) {
        tracing::debug!(entries = weights.len(), "received new difficulty weights");
        self.weights.replace(weights);
    }
}
