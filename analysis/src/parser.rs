//! Transcript parsing pipeline
//!
//! Two entry points share one pipeline: [`parse_log`] produces the
//! structured record with per-turn accumulators, [`parse_log_detailed`]
//! additionally attaches full impact annotations to every action.
//!
//! Both passes over the event stream are tolerant: a transcript with no
//! parseable lines still yields a well-formed record with empty turns.

use battleforge_protocol::{BattleEvent, SideId, tokenize};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::assembler::TurnAssembler;
use crate::classify::classify_team;
use crate::scoring::detect_turning_points;
use crate::tracker::{SideState, StateTracker};
use crate::types::{
    Action, ActionKind, BattleStats, EffectivenessStats, KeyMoment, KeyMomentKind, MoveRef,
    PerSide, PlayerSummary, Summary, Turn, normalize_id,
};

/// Parse a transcript into a structured battle record
pub fn parse_log(log: &str) -> Summary {
    parse_with(log, false)
}

/// Parse a transcript with full per-action impact annotation
pub fn parse_log_detailed(log: &str) -> Summary {
    parse_with(log, true)
}

fn parse_with(log: &str, detailed: bool) -> Summary {
    let events = tokenize(log);
    debug!(events = events.len(), detailed, "parsing transcript");

    let mut tracker = StateTracker::new();
    let mut format = String::new();
    let mut generation: Option<u32> = None;
    let mut win_name: Option<String> = None;

    // First pass: metadata and both rosters, so later events always
    // resolve against a complete team
    for event in &events {
        match event {
            BattleEvent::Tier(tier) => format = tier.clone(),
            BattleEvent::Gen(number) => generation = Some(*number),
            BattleEvent::Player { side, name, rating } => {
                tracker.set_player(*side, name, *rating);
            }
            BattleEvent::TeamSize { side, size } => tracker.set_team_size(*side, *size),
            BattleEvent::Poke { side, details } => tracker.add_to_roster(*side, details),
            BattleEvent::Switch { actor, details, .. } => {
                // Mid-battle reveals merge into the preview roster
                tracker.reveal(actor.side, details);
            }
            BattleEvent::Win { name } => win_name = Some(name.clone()),
            _ => {}
        }
    }

    // Tier-less transcripts still carry a |gen| line
    if format.is_empty() {
        if let Some(generation) = generation {
            format = format!("Gen {generation}");
        }
    }

    // Second pass: replay the battle
    let mut assembler = TurnAssembler::new(detailed);
    let mut key_moments: Vec<KeyMoment> = Vec::new();
    let mut tally = EffectivenessTally::default();

    for event in events {
        match &event {
            BattleEvent::Turn(number) => assembler.begin_turn(*number, &tracker),
            BattleEvent::Move {
                actor,
                move_name,
                target,
            } => {
                tracker.record_move(actor.side, move_name);
                assembler.push_primary(Action {
                    side: actor.side,
                    kind: ActionKind::Move,
                    actor: actor.name.clone(),
                    move_used: Some(MoveRef {
                        id: normalize_id(move_name),
                        name: move_name.clone(),
                    }),
                    switch_to: None,
                    target: target.as_ref().map(|t| t.name.clone()),
                    result: None,
                    details: String::new(),
                    impact: None,
                    order_in_turn: 0,
                });
            }
            BattleEvent::Switch { actor, details, hp } => {
                tracker.activate(actor.side, &details.species, *hp);
                assembler.push_primary(Action {
                    side: actor.side,
                    kind: ActionKind::Switch,
                    actor: actor.name.clone(),
                    move_used: None,
                    switch_to: Some(details.species.clone()),
                    target: None,
                    result: None,
                    details: String::new(),
                    impact: None,
                    order_in_turn: 0,
                });
            }
            BattleEvent::Faint(pokemon) => {
                tracker.mark_fainted(pokemon.side, &pokemon.name);
                key_moments.push(KeyMoment {
                    turn_number: assembler.current_turn_number(),
                    kind: KeyMomentKind::Ko,
                    description: format!("{} fainted", pokemon.name),
                    significance: 8,
                });
                assembler.push_effect(event);
            }
            BattleEvent::Damage { target, hp } => {
                if let Some(hp) = hp {
                    tracker.update_hp(target.side, &target.name, *hp);
                }
                assembler.push_effect(event);
            }
            BattleEvent::Heal { target, hp } => {
                if let Some(hp) = hp {
                    tracker.update_hp(target.side, &target.name, *hp);
                }
                assembler.push_effect(event);
            }
            BattleEvent::Status { target, status } => {
                tracker.set_status(target.side, status);
                assembler.push_effect(event);
            }
            BattleEvent::Crit(target) => {
                tally.record_crit(target.as_ref().map(|t| t.side));
                assembler.push_effect(event);
            }
            BattleEvent::SuperEffective(target) => {
                tally.record_super(target.as_ref().map(|t| t.side));
                assembler.push_effect(event);
            }
            BattleEvent::Resisted(target) => {
                tally.record_resisted(target.as_ref().map(|t| t.side));
                assembler.push_effect(event);
            }
            BattleEvent::Immune(target) => {
                tally.record_immune(target.as_ref().map(|t| t.side));
                assembler.push_effect(event);
            }
            BattleEvent::Miss { .. } => assembler.push_effect(event),
            BattleEvent::Weather { .. } => assembler.push_effect(event),
            BattleEvent::FieldStart { condition } => {
                // Whole-field conditions apply to both sides
                tracker.record_field_effect(SideId::One, condition);
                tracker.record_field_effect(SideId::Two, condition);
                assembler.push_effect(event);
            }
            BattleEvent::Boost {
                target,
                stat,
                amount,
            } => {
                tracker.record_stat_stage(target.side, *stat, *amount);
                assembler.push_effect(event);
            }
            BattleEvent::Unboost {
                target,
                stat,
                amount,
            } => {
                tracker.record_stat_stage(target.side, *stat, -amount);
                assembler.push_effect(event);
            }
            BattleEvent::Terastallize { target, tera_type } => {
                tracker.set_tera(target.side, tera_type);
            }
            BattleEvent::SideStart { side, condition } => {
                tracker.record_field_effect(*side, condition);
            }
            BattleEvent::SideEnd { side, condition } => {
                tracker.remove_field_effect(*side, condition);
            }
            _ => {}
        }
    }

    let winner = win_name.as_deref().map(|name| tracker.resolve_winner(name));
    let turns = assembler.finish(&tracker);

    let [side_one, side_two] = tracker.into_sides();
    let names = PerSide::new(side_one.name.clone(), side_two.name.clone());

    let (mut turning_points, shift_moments) = detect_turning_points(&turns, &names);
    key_moments.extend(shift_moments);
    key_moments.sort_by_key(|m| m.turn_number);
    // Turns replay in arrival order, so a backwards-numbered transcript
    // can detect points out of order
    turning_points.sort_by_key(|p| p.turn_number);

    let mut stats = compute_stats(&turns, &tally);
    stats.turning_points = turning_points;

    Summary {
        id: Uuid::new_v4().to_string(),
        format,
        timestamp: Utc::now(),
        players: PerSide::new(player_summary(side_one), player_summary(side_two)),
        winner,
        turns,
        stats,
        key_moments,
    }
}

fn player_summary(side: SideState) -> PlayerSummary {
    let classification = classify_team(&side.roster);
    PlayerSummary {
        name: side.name,
        rating: side.rating,
        roster: side.roster,
        team_size: side.team_size,
        losses: side.losses,
        classification: Some(classification),
    }
}

fn compute_stats(turns: &[Turn], tally: &EffectivenessTally) -> BattleStats {
    let mut stats = BattleStats {
        total_turns: turns.len() as u32,
        critical_hits: tally.crits,
        super_effective: tally.supers,
        not_very_effective: tally.resisted,
        ..Default::default()
    };

    let mut total_damage: u64 = 0;
    let mut total_healing: u64 = 0;

    for turn in turns {
        for side in [SideId::One, SideId::Two] {
            total_damage += u64::from(turn.damage_dealt[side]);
            total_healing += u64::from(turn.healing_done[side]);
            stats.player_stats[side].damage_dealt += turn.damage_dealt[side];
            stats.player_stats[side].healing_done += turn.healing_done[side];
        }

        for action in &turn.actions {
            match action.kind {
                ActionKind::Move => {
                    stats.player_stats[action.side].moves_used += 1;
                    if let Some(m) = &action.move_used {
                        *stats.move_frequency.entry(m.id.clone()).or_insert(0) += 1;
                    }
                }
                ActionKind::Switch => {
                    stats.switches += 1;
                    stats.player_stats[action.side].switches += 1;
                }
                ActionKind::Item => {}
            }
        }
    }

    if !turns.is_empty() {
        stats.avg_damage_per_turn = total_damage as f64 / turns.len() as f64;
        stats.avg_heal_per_turn = total_healing as f64 / turns.len() as f64;
    }

    stats.player_stats.one.effectiveness = tally.per_side.one;
    stats.player_stats.two.effectiveness = tally.per_side.two;

    stats
}

/// Hit-quality tallies counted from the raw event stream
///
/// An effectiveness marker names the pokemon that was hit, so the
/// credit goes to the opposing side. Markers with no target attach to
/// neither side but still count globally.
#[derive(Debug, Default)]
struct EffectivenessTally {
    crits: u32,
    supers: u32,
    resisted: u32,
    per_side: PerSide<EffectivenessStats>,
}

impl EffectivenessTally {
    fn record_crit(&mut self, _target: Option<SideId>) {
        self.crits += 1;
    }

    fn record_super(&mut self, target: Option<SideId>) {
        self.supers += 1;
        if let Some(side) = target {
            self.per_side[side.opponent()].super_effective += 1;
        }
    }

    fn record_resisted(&mut self, target: Option<SideId>) {
        self.resisted += 1;
        if let Some(side) = target {
            self.per_side[side.opponent()].not_very_effective += 1;
        }
    }

    fn record_immune(&mut self, target: Option<SideId>) {
        if let Some(side) = target {
            self.per_side[side.opponent()].immune += 1;
        }
    }
}
