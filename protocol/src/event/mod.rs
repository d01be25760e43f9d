//! Battle log event model and line parsing
//!
//! A transcript is a sequence of pipe-delimited lines. Each line that
//! starts with `|` and carries a command field is a candidate event;
//! everything else is discarded by [`tokenize`].

mod init;
mod major;
mod minor;
mod tests;
mod types;

pub use types::{DEFAULT_MAX_HP, HpStatus, PokemonDetails, PokemonRef, SideId, Stat};

use crate::ParseError;
use anyhow::Result;

/// A single parsed battle log event
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // === Metadata / team preview ===
    /// |tier|FORMATNAME
    Tier(String),
    /// |gen|NUMBER
    Gen(u32),
    /// |player|SIDE|USERNAME|AVATAR|RATING
    Player {
        side: SideId,
        name: String,
        rating: Option<u32>,
    },
    /// |teamsize|SIDE|NUMBER
    TeamSize { side: SideId, size: u32 },
    /// |poke|SIDE|DETAILS|ITEM
    Poke {
        side: SideId,
        details: PokemonDetails,
    },
    /// |win|USERNAME
    Win { name: String },

    // === Primary actions ===
    /// |turn|NUMBER
    Turn(u32),
    /// |move|POKEMON|MOVE|TARGET
    Move {
        actor: PokemonRef,
        move_name: String,
        target: Option<PokemonRef>,
    },
    /// |switch|POKEMON|DETAILS|HP STATUS (also |drag|)
    Switch {
        actor: PokemonRef,
        details: PokemonDetails,
        hp: Option<HpStatus>,
    },
    /// |faint|POKEMON
    Faint(PokemonRef),

    // === Effects ===
    /// |-damage|POKEMON|HP STATUS
    Damage {
        target: PokemonRef,
        hp: Option<HpStatus>,
    },
    /// |-heal|POKEMON|HP STATUS
    Heal {
        target: PokemonRef,
        hp: Option<HpStatus>,
    },
    /// |-status|POKEMON|STATUS
    Status { target: PokemonRef, status: String },
    /// |-crit|POKEMON
    Crit(Option<PokemonRef>),
    /// |-supereffective|POKEMON
    SuperEffective(Option<PokemonRef>),
    /// |-resisted|POKEMON
    Resisted(Option<PokemonRef>),
    /// |-immune|POKEMON
    Immune(Option<PokemonRef>),
    /// |-miss|SOURCE|TARGET
    Miss {
        source: PokemonRef,
        target: Option<PokemonRef>,
    },
    /// |-weather|WEATHER
    Weather { condition: String },
    /// |-fieldstart|CONDITION
    FieldStart { condition: String },
    /// |-boost|POKEMON|STAT|AMOUNT
    Boost {
        target: PokemonRef,
        stat: Stat,
        amount: i8,
    },
    /// |-unboost|POKEMON|STAT|AMOUNT
    Unboost {
        target: PokemonRef,
        stat: Stat,
        amount: i8,
    },
    /// |-terastallize|POKEMON|TYPE
    Terastallize {
        target: PokemonRef,
        tera_type: String,
    },
    /// |-sidestart|SIDE|CONDITION
    SideStart { side: SideId, condition: String },
    /// |-sideend|SIDE|CONDITION
    SideEnd { side: SideId, condition: String },

    /// Well-formed line with a command this crate does not model
    /// (|start, |upkeep, |rule, chat messages, ...)
    Other { command: String },
}

impl BattleEvent {
    /// Whether this event is an effect attributable to a preceding
    /// primary action
    pub fn is_effect(&self) -> bool {
        matches!(
            self,
            BattleEvent::Damage { .. }
                | BattleEvent::Heal { .. }
                | BattleEvent::Status { .. }
                | BattleEvent::Faint(_)
                | BattleEvent::Crit(_)
                | BattleEvent::SuperEffective(_)
                | BattleEvent::Resisted(_)
                | BattleEvent::Immune(_)
                | BattleEvent::Miss { .. }
                | BattleEvent::Weather { .. }
                | BattleEvent::FieldStart { .. }
                | BattleEvent::Boost { .. }
                | BattleEvent::Unboost { .. }
        )
    }
}

/// Parse a single transcript line into a BattleEvent
///
/// Fails for lines that are not delimiter-prefixed events or that are
/// missing required fields. Stream-level callers drop failures silently.
pub fn parse_event(line: &str) -> Result<BattleEvent> {
    let line = line.trim_end();

    if !line.starts_with('|') {
        return Err(ParseError::NotAnEvent.into());
    }

    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return Err(ParseError::NotAnEvent.into());
    }

    match parts[1] {
        "tier" => init::parse_tier(&parts),
        "gen" => init::parse_gen(&parts),
        "player" => init::parse_player(&parts),
        "teamsize" => init::parse_teamsize(&parts),
        "poke" => init::parse_poke(&parts),
        "win" => init::parse_win(&parts),
        "turn" => major::parse_turn(&parts),
        "move" => major::parse_move(&parts),
        "switch" | "drag" => major::parse_switch(&parts),
        "faint" => major::parse_faint(&parts),
        "-damage" => minor::parse_damage(&parts),
        "-heal" => minor::parse_heal(&parts),
        "-status" => minor::parse_status(&parts),
        "-crit" => minor::parse_crit(&parts),
        "-supereffective" => minor::parse_supereffective(&parts),
        "-resisted" => minor::parse_resisted(&parts),
        "-immune" => minor::parse_immune(&parts),
        "-miss" => minor::parse_miss(&parts),
        "-weather" => minor::parse_weather(&parts),
        "-fieldstart" => minor::parse_fieldstart(&parts),
        "-boost" => minor::parse_boost(&parts),
        "-unboost" => minor::parse_unboost(&parts),
        "-terastallize" => minor::parse_terastallize(&parts),
        "-sidestart" => minor::parse_sidestart(&parts),
        "-sideend" => minor::parse_sideend(&parts),
        other => Ok(BattleEvent::Other {
            command: other.to_string(),
        }),
    }
}

/// Tokenize a whole transcript into its parseable events, in order
///
/// Never fails: blank lines, lines without the delimiter prefix, and
/// lines missing required fields are dropped. An input with no valid
/// lines yields an empty event sequence.
pub fn tokenize(log: &str) -> Vec<BattleEvent> {
    log.lines().filter_map(|line| parse_event(line).ok()).collect()
}
