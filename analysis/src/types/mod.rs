//! Structured battle record types
//!
//! Everything in this module serializes into the JSON battle record
//! that analysis consumers read.

mod roster;
mod score;
mod summary;
mod turn;

pub use roster::{MoveRef, RosterEntry, normalize_id};
pub use score::{Momentum, PositionScore, TurningPoint};
pub use summary::{
    BattleStats, EffectivenessStats, KeyMoment, KeyMomentKind, PlayerStats, PlayerSummary, Summary,
};
pub use turn::{
    Action, ActionKind, ActionResult, Effectiveness, Impact, SpeedControl, StatChange, Turn,
};

use std::ops::{Index, IndexMut};

use battleforge_protocol::SideId;
use serde::{Deserialize, Serialize};

/// A pair of values keyed by battle side
///
/// Serializes as an object with `player1`/`player2` fields so side-keyed
/// data reads the same everywhere in the record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerSide<T> {
    #[serde(rename = "player1")]
    pub one: T,
    #[serde(rename = "player2")]
    pub two: T,
}

impl<T> PerSide<T> {
    pub fn new(one: T, two: T) -> Self {
        Self { one, two }
    }

    pub fn get(&self, side: SideId) -> &T {
        match side {
            SideId::One => &self.one,
            SideId::Two => &self.two,
        }
    }

    pub fn get_mut(&mut self, side: SideId) -> &mut T {
        match side {
            SideId::One => &mut self.one,
            SideId::Two => &mut self.two,
        }
    }
}

impl<T> Index<SideId> for PerSide<T> {
    type Output = T;

    fn index(&self, side: SideId) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<SideId> for PerSide<T> {
    fn index_mut(&mut self, side: SideId) -> &mut T {
        self.get_mut(side)
    }
}
