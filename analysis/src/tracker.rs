//! Battle state reconstruction from the event stream
//!
//! [`StateTracker`] maintains both players' revealed state while events
//! replay. Events that reference unknown pokemon are tolerated: they log
//! at debug level and leave state unchanged, so one malformed line never
//! poisons the rest of a parse.

use std::collections::HashMap;

use battleforge_protocol::{HpStatus, PokemonDetails, SideId, Stat};
use tracing::debug;

use crate::types::{Momentum, PositionScore, RosterEntry, normalize_id};

/// Weight of the active pokemon's HP in the position score
const ACTIVE_HP_WEIGHT: f64 = 0.6;
/// Weight of team preservation in the position score
const TEAM_WEIGHT: f64 = 0.4;
/// Score gap below which momentum is considered neutral
const MOMENTUM_BAND: f64 = 5.0;

/// One player's tracked state
#[derive(Debug, Clone, Default)]
pub struct SideState {
    pub name: String,
    pub rating: Option<u32>,
    /// Declared team size, zero when never declared
    pub team_size: u32,
    /// Revealed pokemon in reveal order
    pub roster: Vec<RosterEntry>,
    /// Index into roster of the active pokemon
    pub active: Option<usize>,
    pub losses: u32,
    /// Stat stages on the active slot, last write wins
    pub stat_stages: HashMap<Stat, i8>,
    /// Conditions active on this side, in the order they started
    pub field_effects: Vec<String>,
}

impl SideState {
    /// Find a roster entry by display name
    pub fn find(&self, name: &str) -> Option<usize> {
        let id = normalize_id(name);
        self.roster.iter().position(|e| e.id == id)
    }

    pub fn active_entry(&self) -> Option<&RosterEntry> {
        self.active.and_then(|idx| self.roster.get(idx))
    }

    /// Fraction of the team still standing, in [0, 1]
    ///
    /// Uses the declared team size when available so unrevealed pokemon
    /// count as standing. Falls back to the revealed roster otherwise.
    pub fn team_fraction(&self) -> f64 {
        if self.team_size > 0 {
            let remaining = self.team_size.saturating_sub(self.losses);
            return f64::from(remaining) / f64::from(self.team_size);
        }

        let revealed = self.roster.len();
        if revealed == 0 {
            return 0.0;
        }
        let standing = self.roster.iter().filter(|e| !e.fainted).count();
        standing as f64 / revealed as f64
    }

    /// The active entry, mutably
    ///
    /// Damage, heal, status, faint, and move reports all land here:
    /// bench state is not modeled, and the reported name may be a
    /// nickname anyway.
    fn active_mut(&mut self) -> Option<&mut RosterEntry> {
        self.active.and_then(|idx| self.roster.get_mut(idx))
    }
}

/// Tracks both sides of a battle as events replay
#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    sides: [SideState; 2],
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: SideId) -> &SideState {
        &self.sides[side.index()]
    }

    pub fn side_mut(&mut self, side: SideId) -> &mut SideState {
        &mut self.sides[side.index()]
    }

    pub fn set_player(&mut self, side: SideId, name: &str, rating: Option<u32>) {
        let state = self.side_mut(side);
        state.name = name.to_string();
        state.rating = rating;
    }

    pub fn set_team_size(&mut self, side: SideId, size: u32) {
        self.side_mut(side).team_size = size;
    }

    /// Append a pokemon to a side's roster, in arrival order
    ///
    /// Appends unconditionally: name collisions in team preview are
    /// legal and simply add a second entry.
    pub fn add_to_roster(&mut self, side: SideId, details: &PokemonDetails) {
        if details.species.is_empty() {
            return;
        }

        let mut entry = RosterEntry::new(details.species.clone());
        entry.level = details.level;
        entry.gender = details.gender;
        entry.tera_type = details.tera_type.clone();
        self.side_mut(side).roster.push(entry);
    }

    /// Record a pokemon revealed mid-battle, unless team preview
    /// already listed it
    pub fn reveal(&mut self, side: SideId, details: &PokemonDetails) {
        if self.side(side).find(&details.species).is_some() {
            return;
        }
        self.add_to_roster(side, details);
    }

    /// Bring a pokemon into the active slot, updating its HP report
    pub fn activate(&mut self, side: SideId, species: &str, hp: Option<HpStatus>) {
        let state = self.side_mut(side);
        let Some(idx) = state.find(species) else {
            debug!(side = side.as_str(), species, "switch to unknown pokemon ignored");
            return;
        };

        state.active = Some(idx);
        state.stat_stages.clear();
        if let Some(hp) = hp {
            apply_hp(&mut state.roster[idx], hp);
        }
    }

    /// Apply an HP report to the side's active pokemon
    ///
    /// Only the active entry is tracked; bench HP is restored from the
    /// HP field on the next switch-in.
    pub fn update_hp(&mut self, side: SideId, name: &str, hp: HpStatus) {
        let state = self.side_mut(side);
        let Some(entry) = state.active_mut() else {
            debug!(side = side.as_str(), name, "hp report with nothing active ignored");
            return;
        };
        apply_hp(entry, hp);
    }

    pub fn mark_fainted(&mut self, side: SideId, name: &str) {
        let state = self.side_mut(side);
        let Some(entry) = state.active_mut() else {
            debug!(side = side.as_str(), name, "faint with nothing active ignored");
            return;
        };
        if entry.fainted {
            return;
        }
        entry.hp_current = 0;
        entry.fainted = true;
        state.losses += 1;
    }

    pub fn set_status(&mut self, side: SideId, status: &str) {
        if let Some(entry) = self.side_mut(side).active_mut() {
            entry.status = Some(status.to_string());
        }
    }

    pub fn set_tera(&mut self, side: SideId, tera_type: &str) {
        if let Some(entry) = self.side_mut(side).active_mut() {
            entry.tera_type = Some(tera_type.to_string());
        }
    }

    pub fn record_move(&mut self, side: SideId, move_name: &str) {
        if let Some(entry) = self.side_mut(side).active_mut() {
            entry.record_move(move_name);
        }
    }

    pub fn record_stat_stage(&mut self, side: SideId, stat: Stat, stages: i8) {
        self.side_mut(side).stat_stages.insert(stat, stages);
    }

    /// Record a condition starting on one side, once
    pub fn record_field_effect(&mut self, side: SideId, effect: &str) {
        let effects = &mut self.side_mut(side).field_effects;
        if !effects.iter().any(|e| e == effect) {
            effects.push(effect.to_string());
        }
    }

    pub fn remove_field_effect(&mut self, side: SideId, effect: &str) {
        self.side_mut(side).field_effects.retain(|e| e != effect);
    }

    pub fn field_active(&self, side: SideId, effect: &str) -> bool {
        self.side(side).field_effects.iter().any(|e| e == effect)
    }

    /// Map a winner's username to a side
    ///
    /// Unknown names resolve to side two: a mangled win line most often
    /// drops the second player's name.
    pub fn resolve_winner(&self, name: &str) -> SideId {
        if self.sides[0].name == name && !name.is_empty() {
            SideId::One
        } else {
            SideId::Two
        }
    }

    /// Evaluate the current position for both sides
    ///
    /// Each side scores `60% active HP + 40% team preservation` on a
    /// 0-100 scale. Missing state contributes zero rather than failing.
    pub fn position_score(&self) -> PositionScore {
        let side_one = self.score_side(SideId::One);
        let side_two = self.score_side(SideId::Two);

        let diff = side_one - side_two;
        let momentum = if diff > MOMENTUM_BAND {
            Momentum::SideOne
        } else if diff < -MOMENTUM_BAND {
            Momentum::SideTwo
        } else {
            Momentum::Neutral
        };

        PositionScore {
            side_one,
            side_two,
            momentum,
        }
    }

    fn score_side(&self, side: SideId) -> f64 {
        let state = self.side(side);
        let active_hp = state.active_entry().map_or(0.0, RosterEntry::hp_fraction);
        let score = (ACTIVE_HP_WEIGHT * active_hp + TEAM_WEIGHT * state.team_fraction()) * 100.0;
        score.clamp(0.0, 100.0)
    }

    /// Consume the tracker, yielding both sides' final state
    pub fn into_sides(self) -> [SideState; 2] {
        self.sides
    }
}

/// Apply an HP report: adopt a reported maximum, clamp current into range
fn apply_hp(entry: &mut RosterEntry, hp: HpStatus) {
    if let Some(max) = hp.max {
        entry.hp_max = Some(max);
    }
    entry.hp_current = hp.current.min(entry.hp_max_or_default());
    if hp.fainted {
        entry.hp_current = 0;
    }
}
