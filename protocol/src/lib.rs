use thiserror::Error;

pub mod event;

pub use event::{
    BattleEvent, DEFAULT_MAX_HP, HpStatus, PokemonDetails, PokemonRef, SideId, Stat, parse_event,
    tokenize,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid event format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Line is not a battle event")]
    NotAnEvent,
}
