//! Utility-based tactic selection driven by external difficulty weights.
//!
//! A [`UtilitySelector`] holds a fixed set of named [`Tactic`]s and, each
//! tick, executes exactly the one whose score is highest. Scores combine a
//! static per-tactic base utility with a multiplicative weight read from a
//! shared [`WeightTable`] that an external difficulty-adjustment system
//! rewrites at runtime. This is what lets the same tree play differently as
//! the difficulty system reacts to the player.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::{Behavior, Status};

/// Neutral multiplicative weight applied to tactics absent from the table.
const NEUTRAL_WEIGHT: f32 = 1.0;

/// Shared name→weight mapping owned by the difficulty-adjustment collaborator.
///
/// The table is replaced wholesale, never merged: a replacement that omits a
/// previously present tactic silently reverts that tactic to the neutral
/// weight 1.0. Unknown names are never an error. Cloning the handle is cheap
/// and every clone observes the same underlying table, so one clone can live
/// inside a [`UtilitySelector`] while another is handed to the difficulty
/// system on a different thread.
#[derive(Clone, Default)]
pub struct WeightTable {
    inner: Arc<RwLock<HashMap<String, f32>>>,
}

impl WeightTable {
    /// Creates an empty table: every tactic scores at its base utility.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire mapping at once.
    ///
    /// Entries missing from `weights` fall back to the neutral weight on the
    /// next read; prior values are not carried over.
    pub fn replace(&self, weights: HashMap<String, f32>) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = weights;
    }

    /// Looks up the weight for `name`, defaulting to 1.0 when absent.
    pub fn weight(&self, name: &str) -> f32 {
        self.read().get(name).copied().unwrap_or(NEUTRAL_WEIGHT)
    }

    /// Read guard over the whole table, letting a scoring pass observe one
    /// consistent snapshot even while the difficulty system is replacing it
    /// from another thread.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, f32>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A named behavior competing for selection inside a [`UtilitySelector`].
///
/// The triple (name, base utility, subtree) is fixed at construction; only
/// the external weight associated with `name` changes afterwards.
pub struct Tactic<C> {
    name: String,
    base_utility: f32,
    child: Box<dyn Behavior<C>>,
}

impl<C> Tactic<C> {
    /// Creates a tactic scoring at `base_utility` before weighting.
    pub fn new(
        name: impl Into<String>,
        base_utility: f32,
        child: Box<dyn Behavior<C>>,
    ) -> Self {
        Self {
            name: name.into(),
            base_utility,
            child,
        }
    }

    /// The name this tactic is weighted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The static utility before external weighting.
    pub fn base_utility(&self) -> f32 {
        self.base_utility
    }
}

/// Composite that executes only the highest-scoring tactic each tick.
///
/// # Semantics
///
/// Per tick, in construction order, every tactic is scored as
/// `base_utility * weight(name)` against the current [`WeightTable`]. The
/// running maximum is tracked with a **strict greater-than** comparison, so
/// when several tactics tie for the top score the earliest-declared one
/// wins. Exactly the winner's subtree is ticked and its result returned;
/// with no tactics at all the selector returns `Failure`.
///
/// # State of losing tactics
///
/// Non-winners are not ticked, full stop. Whatever internal state their
/// subtrees hold (cooldown timestamps, multi-tick leaf progress) freezes in
/// place and resumes unchanged the next time they win. There is no
/// cancellation or interruption notification.
pub struct UtilitySelector<C> {
    tactics: Vec<Tactic<C>>,
    weights: WeightTable,
}

impl<C> UtilitySelector<C> {
    /// Creates a selector over `tactics`, reading weights from `weights`.
    ///
    /// The caller keeps (or clones) the `WeightTable` handle to feed the
    /// difficulty system; this selector only ever reads it.
    pub fn new(tactics: Vec<Tactic<C>>, weights: WeightTable) -> Self {
        Self { tactics, weights }
    }

    /// The weight-table handle this selector scores against.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Index of the best tactic under one consistent table snapshot.
    fn select(&self) -> Option<usize> {
        let table = self.weights.read();

        let mut best: Option<usize> = None;
        let mut best_score = f32::NEG_INFINITY;

        for (index, tactic) in self.tactics.iter().enumerate() {
            let weight = table
                .get(&tactic.name)
                .copied()
                .unwrap_or(NEUTRAL_WEIGHT);
            let score = tactic.base_utility * weight;

            tracing::debug!(
                tactic = %tactic.name,
                score,
                base = tactic.base_utility,
                weight,
                "scored tactic"
            );

            // Strict comparison: ties keep the earlier tactic.
            if score > best_score {
                best_score = score;
                best = Some(index);
            }
        }

        if let Some(index) = best {
            tracing::debug!(
                tactic = %self.tactics[index].name,
                score = best_score,
                "selected tactic"
            );
        }

        best
    }
}

impl<C> Behavior<C> for UtilitySelector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.select() {
            Some(index) => self.tactics[index].child.tick(ctx),
            None => Status::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    struct TestContext {
        ticked: Vec<&'static str>,
    }

    fn recorder(label: &'static str) -> Box<dyn Behavior<TestContext>> {
        Box::new(Action::new(move |ctx: &mut TestContext| {
            ctx.ticked.push(label);
            Status::Success
        }))
    }

    fn battle_tactics(weights: &WeightTable) -> UtilitySelector<TestContext> {
        UtilitySelector::new(
            vec![
                Tactic::new("Aggressive", 1.8, recorder("aggressive")),
                Tactic::new("KeepDistance", 0.3, recorder("keep_distance")),
                Tactic::new("SkillOriented", 1.0, recorder("skill")),
                Tactic::new("Evading", 1.4, recorder("evade")),
            ],
            weights.clone(),
        )
    }

    #[test]
    fn highest_base_utility_wins_under_neutral_weights() {
        let weights = WeightTable::new();
        let mut selector = battle_tactics(&weights);

        let mut ctx = TestContext { ticked: vec![] };
        assert_eq!(selector.tick(&mut ctx), Status::Success);
        // Only the winner is ticked; the other three stay untouched.
        assert_eq!(ctx.ticked, vec!["aggressive"]);
    }

    #[test]
    fn replaced_table_changes_the_winner() {
        let weights = WeightTable::new();
        let mut selector = battle_tactics(&weights);

        weights.replace(HashMap::from([("SkillOriented".to_string(), 2.0)]));

        let mut ctx = TestContext { ticked: vec![] };
        assert_eq!(selector.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticked, vec!["skill"]);
    }

    #[test]
    fn ties_keep_the_earlier_tactic() {
        let weights = WeightTable::new();
        let mut selector = UtilitySelector::new(
            vec![
                Tactic::new("Feint", 1.5, recorder("feint")),
                Tactic::new("Lunge", 0.75, recorder("lunge")),
            ],
            weights.clone(),
        );

        // Lunge: 0.75 * 2.0 == 1.5, exactly tying Feint.
        weights.replace(HashMap::from([("Lunge".to_string(), 2.0)]));

        let mut ctx = TestContext { ticked: vec![] };
        assert_eq!(selector.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticked, vec!["feint"]);
    }

    #[test]
    fn missing_entries_match_explicit_neutral_weight() {
        let implicit = WeightTable::new();
        let mut with_implicit = battle_tactics(&implicit);

        let explicit = WeightTable::new();
        explicit.replace(HashMap::from([
            ("Aggressive".to_string(), 1.0),
            ("KeepDistance".to_string(), 1.0),
            ("SkillOriented".to_string(), 1.0),
            ("Evading".to_string(), 1.0),
        ]));
        let mut with_explicit = battle_tactics(&explicit);

        let mut ctx_a = TestContext { ticked: vec![] };
        let mut ctx_b = TestContext { ticked: vec![] };
        assert_eq!(
            with_implicit.tick(&mut ctx_a),
            with_explicit.tick(&mut ctx_b)
        );
        assert_eq!(ctx_a.ticked, ctx_b.ticked);
    }

    #[test]
    fn replacement_reverts_omitted_entries_to_neutral() {
        let weights = WeightTable::new();
        weights.replace(HashMap::from([("SkillOriented".to_string(), 5.0)]));
        // A later wholesale replacement drops the boost entirely.
        weights.replace(HashMap::from([("KeepDistance".to_string(), 0.5)]));

        assert_eq!(weights.weight("SkillOriented"), 1.0);
        assert_eq!(weights.weight("KeepDistance"), 0.5);
    }

    #[test]
    fn empty_selector_fails_without_ticking() {
        let mut selector: UtilitySelector<TestContext> =
            UtilitySelector::new(vec![], WeightTable::new());

        let mut ctx = TestContext { ticked: vec![] };
        assert_eq!(selector.tick(&mut ctx), Status::Failure);
        assert!(ctx.ticked.is_empty());
    }

    #[test]
    fn winner_result_is_returned_verbatim() {
        let weights = WeightTable::new();
        let mut selector = UtilitySelector::new(
            vec![
                Tactic::new(
                    "Busy",
                    2.0,
                    Box::new(Action::new(|_: &mut TestContext| Status::Running)),
                ),
                Tactic::new("Idle", 1.0, recorder("idle")),
            ],
            weights,
        );

        let mut ctx = TestContext { ticked: vec![] };
        assert_eq!(selector.tick(&mut ctx), Status::Running);
        assert!(ctx.ticked.is_empty());
    }

    #[test]
    fn losing_tactic_state_freezes_until_reselected() {
        // The loser needs two ticks to finish; it must resume exactly where
        // it stopped when it wins again, not restart.
        let weights = WeightTable::new();
        let mut progress = 0;
        let mut selector = UtilitySelector::new(
            vec![
                Tactic::new("Fast", 1.0, recorder("fast")),
                Tactic::new(
                    "Slow",
                    0.5,
                    Box::new(Action::new(move |ctx: &mut TestContext| {
                        progress += 1;
                        ctx.ticked.push(if progress < 2 { "slow_step" } else { "slow_done" });
                        if progress < 2 {
                            Status::Running
                        } else {
                            Status::Success
                        }
                    })),
                ),
            ],
            weights.clone(),
        );

        let mut ctx = TestContext { ticked: vec![] };

        // Slow wins, takes its first step.
        weights.replace(HashMap::from([("Slow".to_string(), 4.0)]));
        assert_eq!(selector.tick(&mut ctx), Status::Running);

        // Fast takes over; Slow is simply not ticked.
        weights.replace(HashMap::new());
        assert_eq!(selector.tick(&mut ctx), Status::Success);

        // Slow wins again and finishes from its second step.
        weights.replace(HashMap::from([("Slow".to_string(), 4.0)]));
        assert_eq!(selector.tick(&mut ctx), Status::Success);

        assert_eq!(ctx.ticked, vec!["slow_step", "fast", "slow_done"]);
    }

    #[test]
    fn consecutive_ticks_with_unchanged_inputs_agree() {
        let weights = WeightTable::new();
        let mut selector = battle_tactics(&weights);

        let mut ctx = TestContext { ticked: vec![] };
        let first = selector.tick(&mut ctx);
        let second = selector.tick(&mut ctx);
        assert_eq!(first, second);
        assert_eq!(ctx.ticked, vec!["aggressive", "aggressive"]);
    }
}
