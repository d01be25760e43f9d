//! Impact derivation: what each action actually caused
//!
//! An action's impact is reconstructed from the effect events that
//! trailed it in the log. HP deltas come from consecutive reports for
//! the same pokemon; the first report for a pokemon is measured against
//! its report maximum for damage, and against itself for healing, so a
//! lone report never produces a phantom delta.

use std::collections::HashMap;

use battleforge_protocol::{BattleEvent, HpStatus, SideId};

use crate::types::{ActionResult, Effectiveness, Impact, SpeedControl, StatChange, normalize_id};

/// Speed control inherent to a move, by exact normalized id
pub fn speed_control_for_move(id: &str) -> Option<SpeedControl> {
    match id {
        "fakeout" => Some(SpeedControl::Flinch),
        "protect" | "detect" | "banefulbunker" | "kingsshield" => Some(SpeedControl::Protect),
        "trickroom" => Some(SpeedControl::TrickRoom),
        "tailwind" => Some(SpeedControl::Tailwind),
        "icywind" | "electroweb" | "bulldoze" => Some(SpeedControl::SpeedDrop),
        "thunderwave" | "glare" | "nuzzle" => Some(SpeedControl::Paralysis),
        _ => None,
    }
}

/// Last seen HP per pokemon, keyed by side and name
///
/// Carried across actions so consecutive reports measure real deltas.
pub type HpLedger = HashMap<(SideId, String), u32>;

/// Derive the impact of one action from its trailing effect events
pub fn derive_impact(
    action_side: SideId,
    move_id: Option<&str>,
    events: &[BattleEvent],
    hp_seen: &mut HpLedger,
) -> Impact {
    let mut impact = Impact {
        speed_control: move_id.and_then(speed_control_for_move),
        ..Default::default()
    };

    for event in events {
        match event {
            BattleEvent::Damage { target, hp: Some(hp) } => {
                let before = baseline_for_damage(hp_seen, target.side, &target.name, *hp);
                let after = hp.current.min(hp.max_or_default());
                if target.side != action_side && before > after {
                    impact.damage_dealt += before - after;
                }
                hp_seen.insert((target.side, target.name.clone()), after);
            }
            BattleEvent::Heal { target, hp: Some(hp) } => {
                let after = hp.current.min(hp.max_or_default());
                let before = *hp_seen
                    .get(&(target.side, target.name.clone()))
                    .unwrap_or(&after);
                if target.side == action_side && after > before {
                    impact.healing_done += after - before;
                }
                hp_seen.insert((target.side, target.name.clone()), after);
            }
            BattleEvent::Status { target: _, status } => {
                impact.status_inflicted = Some(status.clone());
            }
            BattleEvent::Faint(pokemon) => {
                impact.fainted.push(pokemon.name.clone());
            }
            BattleEvent::Crit(_) => impact.critical_hit = true,
            BattleEvent::SuperEffective(_) => impact.effectiveness = Effectiveness::SuperEffective,
            BattleEvent::Resisted(_) => impact.effectiveness = Effectiveness::NotVeryEffective,
            BattleEvent::Immune(_) => impact.effectiveness = Effectiveness::Immune,
            BattleEvent::Miss { .. } => impact.missed = true,
            BattleEvent::Weather { condition } => {
                if normalize_id(condition) != "none" {
                    impact.weather_set = Some(condition.clone());
                }
            }
            BattleEvent::FieldStart { condition } => {
                let id = normalize_id(condition);
                if id.contains("terrain") {
                    impact.field_set = Some(condition.clone());
                } else if id.contains("trickroom") {
                    impact.speed_control = Some(SpeedControl::TrickRoom);
                } else if id.contains("tailwind") {
                    impact.speed_control = Some(SpeedControl::Tailwind);
                }
            }
            BattleEvent::Boost {
                target,
                stat,
                amount,
            } => impact.stat_changes.push(StatChange {
                pokemon: target.name.clone(),
                stat: *stat,
                stages: *amount,
            }),
            BattleEvent::Unboost {
                target,
                stat,
                amount,
            } => impact.stat_changes.push(StatChange {
                pokemon: target.name.clone(),
                stat: *stat,
                stages: -amount,
            }),
            _ => {}
        }
    }

    impact
}

/// Resolve the action's result from its impact
///
/// The most recent quality marker wins; without one the cascade is
/// miss, then faint, then success only when damage actually landed.
/// A zero-damage, marker-less action has no result.
pub fn resolve_result(impact: &Impact, events: &[BattleEvent]) -> Option<ActionResult> {
    let mut result = None;
    for event in events {
        match event {
            BattleEvent::Crit(_) => result = Some(ActionResult::CriticalHit),
            BattleEvent::SuperEffective(_) => result = Some(ActionResult::SuperEffective),
            BattleEvent::Resisted(_) => result = Some(ActionResult::NotVeryEffective),
            BattleEvent::Immune(_) => result = Some(ActionResult::Immune),
            BattleEvent::Miss { .. } => result = Some(ActionResult::Miss),
            _ => {}
        }
    }

    if result.is_some() {
        result
    } else if impact.missed {
        Some(ActionResult::Miss)
    } else if !impact.fainted.is_empty() {
        Some(ActionResult::Faint)
    } else if impact.damage_dealt > 0 {
        Some(ActionResult::Success)
    } else {
        None
    }
}

/// Build the human-readable outcome summary
pub fn build_details(impact: &Impact) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if impact.critical_hit {
        clauses.push("Critical Hit".to_string());
    }

    match impact.effectiveness {
        Effectiveness::SuperEffective => clauses.push("It's super effective".to_string()),
        Effectiveness::NotVeryEffective => clauses.push("It's not very effective".to_string()),
        Effectiveness::Immune => clauses.push("It doesn't affect the target".to_string()),
        Effectiveness::Normal => {}
    }

    match impact.speed_control {
        Some(SpeedControl::Flinch) => clauses.push("Target flinched".to_string()),
        Some(SpeedControl::TrickRoom) => clauses.push("Dimensions twisted".to_string()),
        Some(SpeedControl::Tailwind) => clauses.push("Tailwind blew".to_string()),
        Some(SpeedControl::Paralysis) => clauses.push("Target was paralyzed".to_string()),
        _ => {}
    }

    for pokemon in &impact.fainted {
        clauses.push(format!("{pokemon} fainted"));
    }

    if impact.missed {
        clauses.push("But it missed".to_string());
    }

    clauses.join(", ")
}

fn baseline_for_damage(
    hp_seen: &HashMap<(SideId, String), u32>,
    side: SideId,
    name: &str,
    hp: HpStatus,
) -> u32 {
    match hp_seen.get(&(side, name.to_string())) {
        Some(before) => *before,
        None => hp.max_or_default(),
    }
}
