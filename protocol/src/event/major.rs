//! Primary battle action event parsers
//!
//! Moves and switches are the actions that trailing effect events
//! are attributed to.

use super::BattleEvent;
use super::types::{PokemonRef, parse_details, parse_hp_status, parse_pokemon};
use anyhow::Result;

/// Parse |turn|NUMBER
pub fn parse_turn(parts: &[&str]) -> Result<BattleEvent> {
    let number = parts.get(2).and_then(|s| s.trim().parse().ok()).unwrap_or(0);
    Ok(BattleEvent::Turn(number))
}

/// Parse |move|POKEMON|MOVE|TARGET
pub fn parse_move(parts: &[&str]) -> Result<BattleEvent> {
    let actor = parse_pokemon(parts, 2)?;
    let move_name = parts.get(3).unwrap_or(&"").trim().to_string();
    let target = parts.get(4).and_then(|s| PokemonRef::parse(s));

    Ok(BattleEvent::Move {
        actor,
        move_name,
        target,
    })
}

/// Parse |switch|POKEMON|DETAILS|HP STATUS (also |drag|)
pub fn parse_switch(parts: &[&str]) -> Result<BattleEvent> {
    let actor = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp = parse_hp_status(parts, 4);

    Ok(BattleEvent::Switch { actor, details, hp })
}

/// Parse |faint|POKEMON
pub fn parse_faint(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(BattleEvent::Faint(pokemon))
}
