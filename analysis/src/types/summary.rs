//! Top-level battle record

use std::collections::BTreeMap;

use battleforge_protocol::SideId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::score::TurningPoint;
use super::turn::Turn;
use super::{PerSide, RosterEntry};
use crate::classify::TeamClassification;

/// The complete structured record produced from one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Fresh unique id for this parse
    pub id: String,
    /// Format/tier name from the transcript
    pub format: String,
    /// When this record was produced
    pub timestamp: DateTime<Utc>,
    pub players: PerSide<PlayerSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<SideId>,
    pub turns: Vec<Turn>,
    pub stats: BattleStats,
    pub key_moments: Vec<KeyMoment>,
}

/// One player's record: identity, revealed team, and outcome
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    pub roster: Vec<RosterEntry>,
    /// Declared team size, zero when never declared
    pub team_size: u32,
    /// Pokemon this player lost
    pub losses: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<TeamClassification>,
}

/// Aggregate statistics over the whole battle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleStats {
    pub total_turns: u32,
    /// Times each move was used, keyed by normalized move id
    pub move_frequency: BTreeMap<String, u32>,
    pub switches: u32,
    pub critical_hits: u32,
    pub super_effective: u32,
    pub not_very_effective: u32,
    pub avg_damage_per_turn: f64,
    pub avg_heal_per_turn: f64,
    pub turning_points: Vec<TurningPoint>,
    pub player_stats: PerSide<PlayerStats>,
}

/// Per-player aggregates
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub moves_used: u32,
    pub switches: u32,
    pub damage_dealt: u32,
    pub healing_done: u32,
    pub effectiveness: EffectivenessStats,
}

/// How often a player's moves hit into each effectiveness bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivenessStats {
    pub super_effective: u32,
    pub not_very_effective: u32,
    pub immune: u32,
}

/// What kind of key moment occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyMomentKind {
    #[serde(rename = "KO")]
    Ko,
    #[serde(rename = "turning_point")]
    TurningPoint,
}

/// A notable moment worth surfacing in a timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMoment {
    pub turn_number: u32,
    pub kind: KeyMomentKind,
    pub description: String,
    /// 1-10 importance
    pub significance: u8,
}
