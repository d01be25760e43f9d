//! Metadata and team-preview event parsers
//!
//! These events appear before the first turn and declare the format,
//! the players, and their rosters.

use super::BattleEvent;
use super::types::{parse_details, parse_side};
use anyhow::Result;

/// Parse |tier|FORMATNAME
pub fn parse_tier(parts: &[&str]) -> Result<BattleEvent> {
    // Format names can contain | (e.g. bracketed rulesets), so keep the rest
    let format = parts[2..].join("|").trim().to_string();
    Ok(BattleEvent::Tier(format))
}

/// Parse |gen|NUMBER
pub fn parse_gen(parts: &[&str]) -> Result<BattleEvent> {
    let number = parts.get(2).and_then(|s| s.trim().parse().ok()).unwrap_or(0);
    Ok(BattleEvent::Gen(number))
}

/// Parse |player|SIDE|USERNAME|AVATAR|RATING
pub fn parse_player(parts: &[&str]) -> Result<BattleEvent> {
    let side = parse_side(parts, 2)?;
    let name = parts.get(3).unwrap_or(&"").trim().to_string();
    let rating = parts.get(5).and_then(|s| s.parse().ok());

    Ok(BattleEvent::Player { side, name, rating })
}

/// Parse |teamsize|SIDE|NUMBER
pub fn parse_teamsize(parts: &[&str]) -> Result<BattleEvent> {
    let side = parse_side(parts, 2)?;
    let size = parts.get(3).and_then(|s| s.trim().parse().ok()).unwrap_or(0);

    Ok(BattleEvent::TeamSize { side, size })
}

/// Parse |poke|SIDE|DETAILS|ITEM
pub fn parse_poke(parts: &[&str]) -> Result<BattleEvent> {
    let side = parse_side(parts, 2)?;
    let details = parse_details(parts, 3);

    Ok(BattleEvent::Poke { side, details })
}

/// Parse |win|USERNAME
pub fn parse_win(parts: &[&str]) -> Result<BattleEvent> {
    let name = parts.get(2).unwrap_or(&"").trim().to_string();
    Ok(BattleEvent::Win { name })
}
