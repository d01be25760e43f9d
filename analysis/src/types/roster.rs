//! Revealed roster state for one pokemon

use battleforge_protocol::DEFAULT_MAX_HP;
use serde::{Deserialize, Serialize};

/// Normalize a display name into a lookup id
///
/// Lowercases and strips everything that is not ASCII alphanumeric, so
/// "Trick Room", "trick-room", and "Trick  Room" all map to "trickroom".
pub fn normalize_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A move revealed during battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRef {
    /// Normalized id for lookups ("trickroom")
    pub id: String,
    /// Display name as it appeared in the log ("Trick Room")
    pub name: String,
}

/// Everything revealed about one pokemon over the course of a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    /// Normalized species id
    pub id: String,
    /// Species display name
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<char>,
    /// Revealed ability, empty until seen
    pub ability: String,
    /// Revealed held item, empty until seen
    pub item: String,
    /// Moves in order of first use
    pub moves: Vec<MoveRef>,
    pub hp_current: u32,
    /// Maximum HP once a report has carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tera_type: Option<String>,
    pub fainted: bool,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: normalize_id(&name),
            name,
            level: None,
            gender: None,
            ability: String::new(),
            item: String::new(),
            moves: Vec::new(),
            hp_current: DEFAULT_MAX_HP,
            hp_max: None,
            status: None,
            tera_type: None,
            fainted: false,
        }
    }

    /// Record a revealed move, keeping first-use order and skipping repeats
    pub fn record_move(&mut self, name: &str) {
        let id = normalize_id(name);
        if !self.moves.iter().any(|m| m.id == id) {
            self.moves.push(MoveRef {
                id,
                name: name.to_string(),
            });
        }
    }

    /// Whether this entry knows a move by normalized id
    pub fn knows_move(&self, id: &str) -> bool {
        self.moves.iter().any(|m| m.id == id)
    }

    /// Maximum HP, defaulting when no report has carried one yet
    pub fn hp_max_or_default(&self) -> u32 {
        self.hp_max.unwrap_or(DEFAULT_MAX_HP)
    }

    /// Current HP as a fraction of maximum, in [0, 1]
    pub fn hp_fraction(&self) -> f64 {
        let max = self.hp_max_or_default();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.hp_current) / f64::from(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id("Trick Room"), "trickroom");
        assert_eq!(normalize_id("trick-room"), "trickroom");
        assert_eq!(normalize_id("Flutter Mane"), "fluttermane");
        assert_eq!(normalize_id("U-turn"), "uturn");
        assert_eq!(normalize_id(""), "");
    }

    #[test]
    fn test_record_move_dedup() {
        let mut entry = RosterEntry::new("Torkoal");
        entry.record_move("Eruption");
        entry.record_move("Protect");
        entry.record_move("Eruption");

        assert_eq!(entry.moves.len(), 2);
        assert_eq!(entry.moves[0].name, "Eruption");
        assert!(entry.knows_move("protect"));
        assert!(!entry.knows_move("overheat"));
    }

    #[test]
    fn test_hp_fraction_defaults() {
        let mut entry = RosterEntry::new("Pikachu");
        assert_eq!(entry.hp_fraction(), 1.0);

        entry.hp_current = 50;
        assert_eq!(entry.hp_fraction(), 0.5);

        entry.hp_max = Some(200);
        assert_eq!(entry.hp_fraction(), 0.25);
    }
}
