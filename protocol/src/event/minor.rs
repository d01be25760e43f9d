//! Effect event parsers
//!
//! These are the consequences of a primary action: damage, healing,
//! status, stat stages, field conditions, and hit-quality markers.

use super::BattleEvent;
use super::types::{PokemonRef, Stat, parse_hp_status, parse_pokemon, parse_side};
use crate::ParseError;
use anyhow::Result;

/// Parse |-damage|POKEMON|HP STATUS
pub fn parse_damage(parts: &[&str]) -> Result<BattleEvent> {
    let target = parse_pokemon(parts, 2)?;
    let hp = parse_hp_status(parts, 3);

    Ok(BattleEvent::Damage { target, hp })
}

/// Parse |-heal|POKEMON|HP STATUS
pub fn parse_heal(parts: &[&str]) -> Result<BattleEvent> {
    let target = parse_pokemon(parts, 2)?;
    let hp = parse_hp_status(parts, 3);

    Ok(BattleEvent::Heal { target, hp })
}

/// Parse |-status|POKEMON|STATUS
pub fn parse_status(parts: &[&str]) -> Result<BattleEvent> {
    let target = parse_pokemon(parts, 2)?;
    let status = parts.get(3).unwrap_or(&"").trim().to_string();

    Ok(BattleEvent::Status { target, status })
}

/// Parse |-crit|POKEMON
pub fn parse_crit(parts: &[&str]) -> Result<BattleEvent> {
    let target = parts.get(2).and_then(|s| PokemonRef::parse(s));
    Ok(BattleEvent::Crit(target))
}

/// Parse |-supereffective|POKEMON
pub fn parse_supereffective(parts: &[&str]) -> Result<BattleEvent> {
    let target = parts.get(2).and_then(|s| PokemonRef::parse(s));
    Ok(BattleEvent::SuperEffective(target))
}

/// Parse |-resisted|POKEMON
pub fn parse_resisted(parts: &[&str]) -> Result<BattleEvent> {
    let target = parts.get(2).and_then(|s| PokemonRef::parse(s));
    Ok(BattleEvent::Resisted(target))
}

/// Parse |-immune|POKEMON
pub fn parse_immune(parts: &[&str]) -> Result<BattleEvent> {
    let target = parts.get(2).and_then(|s| PokemonRef::parse(s));
    Ok(BattleEvent::Immune(target))
}

/// Parse |-miss|SOURCE|TARGET
pub fn parse_miss(parts: &[&str]) -> Result<BattleEvent> {
    let source = parse_pokemon(parts, 2)?;
    let target = parts.get(3).and_then(|s| PokemonRef::parse(s));

    Ok(BattleEvent::Miss { source, target })
}

/// Parse |-weather|WEATHER
pub fn parse_weather(parts: &[&str]) -> Result<BattleEvent> {
    let condition = parts.get(2).unwrap_or(&"none").trim().to_string();
    Ok(BattleEvent::Weather { condition })
}

/// Parse |-fieldstart|CONDITION
pub fn parse_fieldstart(parts: &[&str]) -> Result<BattleEvent> {
    let condition = parts.get(2).unwrap_or(&"").trim().to_string();
    Ok(BattleEvent::FieldStart { condition })
}

/// Parse |-boost|POKEMON|STAT|AMOUNT
pub fn parse_boost(parts: &[&str]) -> Result<BattleEvent> {
    let target = parse_pokemon(parts, 2)?;
    let stat_field = parts
        .get(3)
        .ok_or_else(|| ParseError::MissingField("stat".to_string()))?;
    let stat = Stat::parse(stat_field)
        .ok_or_else(|| ParseError::InvalidFormat(format!("unknown stat: {stat_field}")))?;
    let amount = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);

    Ok(BattleEvent::Boost {
        target,
        stat,
        amount,
    })
}

/// Parse |-unboost|POKEMON|STAT|AMOUNT
pub fn parse_unboost(parts: &[&str]) -> Result<BattleEvent> {
    let target = parse_pokemon(parts, 2)?;
    let stat_field = parts
        .get(3)
        .ok_or_else(|| ParseError::MissingField("stat".to_string()))?;
    let stat = Stat::parse(stat_field)
        .ok_or_else(|| ParseError::InvalidFormat(format!("unknown stat: {stat_field}")))?;
    let amount = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);

    Ok(BattleEvent::Unboost {
        target,
        stat,
        amount,
    })
}

/// Parse |-terastallize|POKEMON|TYPE
pub fn parse_terastallize(parts: &[&str]) -> Result<BattleEvent> {
    let target = parse_pokemon(parts, 2)?;
    let tera_type = parts.get(3).unwrap_or(&"").trim().to_string();

    Ok(BattleEvent::Terastallize { target, tera_type })
}

/// Parse |-sidestart|SIDE|CONDITION
pub fn parse_sidestart(parts: &[&str]) -> Result<BattleEvent> {
    let side = parse_side(parts, 2)?;
    let condition = parts.get(3).unwrap_or(&"").trim().to_string();

    Ok(BattleEvent::SideStart { side, condition })
}

/// Parse |-sideend|SIDE|CONDITION
pub fn parse_sideend(parts: &[&str]) -> Result<BattleEvent> {
    let side = parse_side(parts, 2)?;
    let condition = parts.get(3).unwrap_or(&"").trim().to_string();

    Ok(BattleEvent::SideEnd { side, condition })
}
