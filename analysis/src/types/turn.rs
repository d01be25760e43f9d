//! Turn and action records

use battleforge_protocol::{SideId, Stat};
use serde::{Deserialize, Serialize};

use super::score::PositionScore;
use super::{MoveRef, PerSide};

/// What kind of action a player took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Move,
    Switch,
    Item,
}

/// Outcome of an action, later hit-quality markers win
///
/// Absent entirely for actions that dealt no damage and drew no marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionResult {
    Success,
    CriticalHit,
    SuperEffective,
    NotVeryEffective,
    Immune,
    #[serde(rename = "miss")]
    Miss,
    #[serde(rename = "faint")]
    Faint,
}

/// Type effectiveness of a damaging move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Effectiveness {
    #[default]
    Normal,
    SuperEffective,
    NotVeryEffective,
    Immune,
}

/// How an action manipulated turn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedControl {
    Flinch,
    Protect,
    TrickRoom,
    Tailwind,
    SpeedDrop,
    Paralysis,
}

/// A single stat stage change attributed to an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatChange {
    /// Name of the pokemon whose stat changed
    pub pokemon: String,
    pub stat: Stat,
    /// Positive for boosts, negative for drops
    pub stages: i8,
}

/// Everything an action caused, derived from its trailing effect events
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    /// Total HP removed from opposing pokemon
    pub damage_dealt: u32,
    /// Total HP restored to the acting side
    pub healing_done: u32,
    /// Pokemon that fainted as a consequence of this action
    pub fainted: Vec<String>,
    pub critical_hit: bool,
    pub effectiveness: Effectiveness,
    pub missed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_inflicted: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub stat_changes: Vec<StatChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_control: Option<SpeedControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_set: Option<String>,
}

/// One player action inside a turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub side: SideId,
    pub kind: ActionKind,
    /// Name of the acting pokemon
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_used: Option<MoveRef>,
    /// Species switched in, for switch actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<ActionResult>,
    /// Human-readable outcome summary ("Critical Hit, It's super effective")
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
    /// Zero-based position within the turn
    pub order_in_turn: u32,
}

/// One numbered turn of the battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub number: u32,
    pub actions: Vec<Action>,
    /// HP dealt by each side this turn
    pub damage_dealt: PerSide<u32>,
    /// HP restored by each side this turn
    pub healing_done: PerSide<u32>,
    /// Position evaluation at end of turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<PositionScore>,
}

impl Turn {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            actions: Vec::new(),
            damage_dealt: PerSide::default(),
            healing_done: PerSide::default(),
            score: None,
        }
    }
}
