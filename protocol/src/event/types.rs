//! Shared types for battle log events

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Default maximum HP assumed when a transcript never reports one.
///
/// Showdown logs report opponent HP as a percentage out of 100, so this
/// default keeps percentage-style and absolute-style reports comparable.
pub const DEFAULT_MAX_HP: u32 = 100;

/// One of the two competing sides in a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideId {
    #[serde(rename = "player1")]
    One,
    #[serde(rename = "player2")]
    Two,
}

impl SideId {
    /// Parse a side from a position prefix like "p1", "p2a", or "p1: Pikachu"
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with("p1") {
            Some(SideId::One)
        } else if s.starts_with("p2") {
            Some(SideId::Two)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideId::One => "p1",
            SideId::Two => "p2",
        }
    }

    pub fn opponent(&self) -> SideId {
        match self {
            SideId::One => SideId::Two,
            SideId::Two => SideId::One,
        }
    }

    /// Array index for side-keyed storage
    pub fn index(&self) -> usize {
        match self {
            SideId::One => 0,
            SideId::Two => 1,
        }
    }
}

/// Pokemon reference in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRef {
    /// Side that owns this pokemon
    pub side: SideId,
    /// Position letter (a, b for active slots, or None if unspecified)
    pub position: Option<char>,
    /// Pokemon's name/nickname
    pub name: String,
}

impl PokemonRef {
    /// Parse a pokemon reference like "p1a: Pikachu" or "p2: Dragapult"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(':')?;
        let side = SideId::parse(pos_part)?;
        let position = pos_part.chars().nth(2);

        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Some(PokemonRef {
            side,
            position,
            name: name.to_string(),
        })
    }
}

/// Pokemon details string (species, level, gender, shiny, tera)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub shiny: bool,
    pub tera_type: Option<String>,
}

impl PokemonDetails {
    /// Parse a details string like "Typhlosion-Hisui, L50, M" or "Pikachu, shiny"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();

        if let Some(species) = parts.first() {
            details.species = species.to_string();
        }

        for part in parts.iter().skip(1) {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if *part == "M" {
                details.gender = Some('M');
            } else if *part == "F" {
                details.gender = Some('F');
            } else if *part == "shiny" {
                details.shiny = true;
            } else if let Some(tera) = part.strip_prefix("tera:") {
                details.tera_type = Some(tera.to_string());
            }
        }

        details
    }
}

/// HP field as carried on switch/damage/heal events
///
/// Accepted shapes: "CUR/MAX", "CUR fnt", or a bare integer. Anything else
/// fails to parse and the caller drops the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpStatus {
    /// Current HP
    pub current: u32,
    /// Maximum HP when the report carried one
    pub max: Option<u32>,
    /// Whether the report declared the pokemon fainted
    pub fainted: bool,
}

impl HpStatus {
    /// Parse an HP string like "65/100", "0 fnt", or "75"
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let hp_part = parts.first()?;
        let fainted = parts.get(1).is_some_and(|s| *s == "fnt");

        if let Some((current_str, max_str)) = hp_part.split_once('/') {
            Some(HpStatus {
                current: current_str.parse().ok()?,
                max: Some(max_str.parse().ok()?),
                fainted,
            })
        } else {
            Some(HpStatus {
                current: hp_part.parse().ok()?,
                max: None,
                fainted,
            })
        }
    }

    /// Maximum HP, defaulting to 100 when the report carried none
    pub fn max_or_default(&self) -> u32 {
        self.max.unwrap_or(DEFAULT_MAX_HP)
    }
}

/// Stat abbreviation used by boost/unboost events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

/// Helper to parse a SideId from event parts
pub(crate) fn parse_side(parts: &[&str], index: usize) -> Result<SideId, anyhow::Error> {
    parts
        .get(index)
        .and_then(|s| SideId::parse(s))
        .ok_or_else(|| ParseError::MissingField("side".to_string()).into())
}

/// Helper to parse a PokemonRef from event parts
pub(crate) fn parse_pokemon(parts: &[&str], index: usize) -> Result<PokemonRef, anyhow::Error> {
    parts
        .get(index)
        .and_then(|s| PokemonRef::parse(s))
        .ok_or_else(|| ParseError::MissingField("pokemon".to_string()).into())
}

/// Helper to parse PokemonDetails from event parts
pub(crate) fn parse_details(parts: &[&str], index: usize) -> PokemonDetails {
    parts
        .get(index)
        .map(|s| PokemonDetails::parse(s))
        .unwrap_or_default()
}

/// Helper to parse HpStatus from event parts
pub(crate) fn parse_hp_status(parts: &[&str], index: usize) -> Option<HpStatus> {
    parts.get(index).and_then(|s| HpStatus::parse(s))
}
