//! Archetype tree assembly.
//!
//! One builder per enemy archetype. Wiring only: every node semantics lives
//! in the `behavior-tree` crate and every leaf belongs to the collaborator
//! evaluators, so correctness here is about branch order and decorator
//! placement, both of which are load-bearing (priority is child order).

use behavior_tree::builder::{always_succeed, cooldown, inverter, selector, sequence};
use behavior_tree::{Behavior, Clock, Tactic, UtilitySelector, WeightTable};

use crate::config::ArchetypeConfig;
use crate::runner::TreeRunner;
use crate::tasks::{BrawlerTasks, SwarmerTasks};

/// Weight-table key for the aggressive battle tactic.
pub const TACTIC_AGGRESSIVE: &str = "Aggressive";
/// Weight-table key for the keep-distance battle tactic.
pub const TACTIC_KEEP_DISTANCE: &str = "KeepDistance";
/// Weight-table key for the skill-oriented battle tactic.
pub const TACTIC_SKILL_ORIENTED: &str = "SkillOriented";
/// Weight-table key for the evading battle tactic.
pub const TACTIC_EVADING: &str = "Evading";

/// Builds the standard enemy tree.
///
/// Priority order, top to bottom:
///
/// 1. **Flee** when critically wounded
/// 2. **Engage** while the player is in sight: tank variants run a fixed
///    aggressive branch, everyone else picks a battle tactic through the
///    difficulty-weighted utility selector
/// 3. **Search** the last known player position once sight is lost
/// 4. **Patrol** as the final fallback
///
/// The returned runner owns the weight table the battle tactics are scored
/// against; hand [`TreeRunner::weights`] to the difficulty system.
pub fn brawler<C: Clock + 'static>(
    tasks: &BrawlerTasks<C>,
    config: &ArchetypeConfig,
) -> TreeRunner<C> {
    let weights = WeightTable::new();

    // Tank variants skip the utility layer: pure pressure, no retreat.
    let tank_aggression = selector(vec![
        sequence(vec![
            tasks.is_player_in_melee_range.node(),
            tasks.attack_melee.node(),
        ]),
        cooldown(tasks.use_skill.node(), config.skill_cooldown()),
        tasks.chase.node(),
    ]);

    let battle_tactics: Box<dyn Behavior<C>> = Box::new(UtilitySelector::new(
        vec![
            // Attack in melee when possible, otherwise open with the skill
            // (when off cooldown) and run the player down.
            Tactic::new(
                TACTIC_AGGRESSIVE,
                config.base_utilities.aggressive,
                selector(vec![
                    sequence(vec![
                        tasks.is_player_in_melee_range.node(),
                        tasks.attack_melee.node(),
                    ]),
                    sequence(vec![
                        always_succeed(cooldown(tasks.use_skill.node(), config.skill_cooldown())),
                        tasks.chase.node(),
                    ]),
                ]),
            ),
            // Poke with the skill while holding the preferred range.
            Tactic::new(
                TACTIC_KEEP_DISTANCE,
                config.base_utilities.keep_distance,
                sequence(vec![
                    always_succeed(cooldown(tasks.use_skill.node(), config.skill_cooldown())),
                    tasks.keep_distance.node(),
                ]),
            ),
            // Nothing but the skill; refuses entirely while it recharges.
            Tactic::new(
                TACTIC_SKILL_ORIENTED,
                config.base_utilities.skill_oriented,
                cooldown(tasks.use_skill.node(), config.skill_cooldown()),
            ),
            // Dash away when the player is aiming at us.
            Tactic::new(
                TACTIC_EVADING,
                config.base_utilities.evading,
                sequence(vec![
                    tasks.is_targeted_by_player.node(),
                    cooldown(tasks.evade.node(), config.evade_cooldown()),
                ]),
            ),
        ],
        weights.clone(),
    ));

    let root = selector(vec![
        sequence(vec![tasks.is_critically_wounded.node(), tasks.flee.node()]),
        sequence(vec![
            tasks.is_player_in_sight.node(),
            selector(vec![
                sequence(vec![tasks.is_tank_variant.node(), tank_aggression]),
                battle_tactics,
            ]),
        ]),
        sequence(vec![
            tasks.has_seen_player.node(),
            inverter(tasks.is_player_in_sight.node()),
            tasks.move_to_last_known_position.node(),
        ]),
        tasks.patrol.node(),
    ]);

    TreeRunner::new(root, weights)
}

/// Builds the swarmer boss tree: burst-chase the visible player, otherwise
/// patrol. The boss carries no battle tactics, so its weight table stays
/// all-neutral; it exists so the runner surface is uniform across
/// archetypes.
pub fn swarmer_boss<C: Clock + 'static>(
    tasks: &SwarmerTasks<C>,
    _config: &ArchetypeConfig,
) -> TreeRunner<C> {
    let weights = WeightTable::new();

    let root = selector(vec![
        sequence(vec![
            tasks.is_player_in_sight.node(),
            tasks.chase_and_rest.node(),
        ]),
        tasks.patrol.node(),
    ]);

    TreeRunner::new(root, weights)
}
