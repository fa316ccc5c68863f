//! The evaluator sets archetype trees are wired from.
//!
//! Each struct names every external collaborator leaf one archetype needs.
//! The engine defines none of their logic: conditions report on the world,
//! actions move and fight in it, and both may keep private cross-tick state
//! (a patrol route index, an in-progress dash). The tree only decides which
//! of them is polled on a given tick.

use crate::Task;

/// Evaluators for the standard enemy archetype.
///
/// Conditions return Success/Failure; actions may also return Running while
/// a multi-tick maneuver is in progress.
pub struct BrawlerTasks<C> {
    /// Can the agent currently see the player? The collaborator is expected
    /// to record the last known player position as a side effect of a
    /// successful check; the search branch relies on that memory.
    pub is_player_in_sight: Task<C>,
    /// Is the player within melee reach?
    pub is_player_in_melee_range: Task<C>,
    /// Is the player currently aiming at or locked onto this agent?
    pub is_targeted_by_player: Task<C>,
    /// Is the agent's health below its flee threshold?
    pub is_critically_wounded: Task<C>,
    /// Is this agent the tank variant of the archetype?
    pub is_tank_variant: Task<C>,
    /// Has the agent seen the player at some earlier tick?
    pub has_seen_player: Task<C>,
    /// Strike the player in melee.
    pub attack_melee: Task<C>,
    /// Fire the agent's special skill.
    pub use_skill: Task<C>,
    /// Close distance toward the player.
    pub chase: Task<C>,
    /// Back off to preferred engagement range.
    pub keep_distance: Task<C>,
    /// Dodge away from incoming player attention.
    pub evade: Task<C>,
    /// Run from the player outright.
    pub flee: Task<C>,
    /// Walk the patrol route; also expected to clear the seen-player memory
    /// so a fresh sighting restarts the engage/search cycle.
    pub patrol: Task<C>,
    /// Head to where the player was last seen.
    pub move_to_last_known_position: Task<C>,
}

/// Evaluators for the swarmer boss archetype.
///
/// The boss runs a far simpler loop: burst toward the player and rest,
/// or patrol when nobody is visible.
pub struct SwarmerTasks<C> {
    /// Can the boss currently see the player?
    pub is_player_in_sight: Task<C>,
    /// Alternate between charging the player and recovering.
    pub chase_and_rest: Task<C>,
    /// Walk the patrol route.
    pub patrol: Task<C>,
}
