//! Enemy decision trees assembled from externally supplied evaluators.
//!
//! This crate wires the generic `behavior-tree` runtime into concrete
//! per-archetype decision trees and drives them once per simulation frame.
//! The actual movement, combat, and perception logic stays outside: the
//! game hands in opaque [`Task`] evaluators, this crate decides which of
//! them runs on a given tick.
//!
//! Modules are organized by responsibility:
//! - [`task`] adapts external evaluators into shareable tree leaves
//! - [`tasks`] names the evaluator set each archetype is wired from
//! - [`config`] loads per-archetype tuning (cooldowns, base utilities)
//! - [`trees`] assembles the archetype trees
//! - [`runner`] owns a built tree and exposes the per-frame tick entry point
//!   plus the weight-table handle consumed by the difficulty system

pub mod config;
pub mod runner;
pub mod task;
pub mod tasks;
pub mod trees;

pub use config::{ArchetypeConfig, BaseUtilities, ConfigError};
pub use runner::TreeRunner;
pub use task::Task;
pub use tasks::{BrawlerTasks, SwarmerTasks};
pub use trees::{
    TACTIC_AGGRESSIVE, TACTIC_EVADING, TACTIC_KEEP_DISTANCE, TACTIC_SKILL_ORIENTED, brawler,
    swarmer_boss,
};
