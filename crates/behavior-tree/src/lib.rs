//! Tick-driven behavior tree runtime for real-time agents.
//!
//! This library provides a small, deterministic behavior tree interpreter
//! re-evaluated once per simulation tick, plus a utility-based selection
//! layer for choosing among competing high-level tactics at runtime.
//!
//! - **Tri-state results**: nodes resolve to Success, Failure, or Running
//! - **Per-tick re-evaluation**: every tick restarts from the root; `Running`
//!   is a polling contract, not a suspension point
//! - **Stateful nodes**: cooldown gates and leaf evaluators carry private
//!   state across ticks; everything else is a pure function of its children
//! - **External weighting**: a [`UtilitySelector`] scores named tactics
//!   against a [`WeightTable`] replaced wholesale by an outside collaborator
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes, generic over a context `C`
//! - [`Status`]: Success, Failure, or Running
//! - Leaf node: [`Action`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`UtilitySelector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`], [`Cooldown`]

pub mod behavior;
pub mod builder;
pub mod clock;
pub mod composite;
pub mod decorator;
pub mod status;
pub mod utility;

// Re-export core types for ergonomic API
pub use behavior::{Action, Behavior};
pub use clock::Clock;
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Cooldown, Inverter};
pub use status::Status;
pub use utility::{Tactic, UtilitySelector, WeightTable};
