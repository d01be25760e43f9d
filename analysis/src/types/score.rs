//! Position evaluation types

use serde::{Deserialize, Serialize};

/// Which side the battle currently favors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Momentum {
    #[serde(rename = "player1")]
    SideOne,
    #[serde(rename = "player2")]
    SideTwo,
    #[serde(rename = "neutral")]
    Neutral,
}

/// End-of-turn position evaluation for both sides
///
/// Scores live on a 0-100 scale. Momentum is neutral while the scores
/// are within five points of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionScore {
    pub side_one: f64,
    pub side_two: f64,
    pub momentum: Momentum,
}

/// A turn where the position swung sharply toward one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurningPoint {
    pub turn_number: u32,
    /// Side one's score on the previous scored turn
    pub side_one_before: f64,
    pub side_one_after: f64,
    /// Side two's score on the previous scored turn
    pub side_two_before: f64,
    pub side_two_after: f64,
    /// Score swing relative to side one, positive favors side one
    pub momentum_shift: f64,
    /// Name of the player the swing favored
    pub favoring: String,
    pub description: String,
    /// 1-10, proportional to the size of the swing
    pub significance: u8,
}
