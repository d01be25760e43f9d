//! Battle transcript analysis for Pokemon Showdown.
//!
//! This crate turns raw battle transcripts into structured records:
//! turns, actions, impact annotations, position scores, turning points,
//! and team archetype classifications.
//!
//! # Overview
//!
//! `battleforge-analysis` sits on top of `battleforge-protocol`:
//!
//! ```text
//! battleforge-protocol (transcript events)
//!        │
//!        ▼
//! battleforge-analysis (state tracking + records) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Records
//! - [`Summary`] - The complete structured record for one battle
//! - [`Turn`], [`Action`], [`Impact`] - Turn-by-turn detail
//! - [`PositionScore`], [`TurningPoint`] - Position evaluation
//! - [`TeamClassification`] - VGC archetype classification
//!
//! ## Engine
//! - [`StateTracker`] - Revealed battle state as events replay
//! - [`TurnAssembler`] - Groups actions and attributes trailing effects
//!
//! # Example Usage
//!
//! ```ignore
//! use battleforge_analysis::parse_log_detailed;
//!
//! let summary = parse_log_detailed(&transcript);
//! println!("{} vs {}", summary.players.one.name, summary.players.two.name);
//! for moment in &summary.key_moments {
//!     println!("turn {}: {}", moment.turn_number, moment.description);
//! }
//! ```

pub mod assembler;
pub mod classify;
pub mod impact;
pub mod parser;
pub mod scoring;
pub mod tracker;
pub mod types;

// Re-export the main surface at crate root for convenience
pub use assembler::TurnAssembler;
pub use classify::{Archetype, TeamClassification, WeatherKind, classify_team};
pub use parser::{parse_log, parse_log_detailed};
pub use scoring::detect_turning_points;
pub use tracker::{SideState, StateTracker};
pub use types::{
    Action, ActionKind, ActionResult, BattleStats, Effectiveness, EffectivenessStats, Impact,
    KeyMoment, KeyMomentKind, Momentum, MoveRef, PerSide, PlayerStats, PlayerSummary,
    PositionScore, RosterEntry, SpeedControl, StatChange, Summary, Turn, TurningPoint,
};

// Re-export commonly used protocol types
pub use battleforge_protocol::{BattleEvent, HpStatus, PokemonDetails, PokemonRef, SideId, Stat};
