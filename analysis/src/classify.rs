//! Team archetype classification
//!
//! Classifies a revealed team into a VGC archetype from its abilities,
//! items, and move pool. Rules are checked in priority order, so a team
//! that is both a sun team and a Tailwind team reads as Sun Offense.

use serde::{Deserialize, Serialize};

use crate::types::RosterEntry;

/// Weather a team is built to set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Sun,
    Rain,
    Sand,
    Snow,
}

/// Team archetype, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Hard Trick Room")]
    HardTrickRoom,
    #[serde(rename = "TailRoom")]
    TailRoom,
    #[serde(rename = "Sun Offense")]
    SunOffense,
    #[serde(rename = "Rain Offense")]
    RainOffense,
    #[serde(rename = "Balance Bros")]
    BalanceBros,
    #[serde(rename = "Psy-Spam")]
    PsySpam,
    #[serde(rename = "Tailwind Hyper Offense")]
    TailwindHyperOffense,
    #[serde(rename = "Tailwind")]
    Tailwind,
    #[serde(rename = "Trick Room")]
    TrickRoom,
    #[serde(rename = "Sun")]
    Sun,
    #[serde(rename = "Rain")]
    Rain,
    #[serde(rename = "Sand")]
    Sand,
    #[serde(rename = "Snow")]
    Snow,
    #[serde(rename = "Unclassified")]
    Unclassified,
}

impl Archetype {
    pub fn description(&self) -> &'static str {
        match self {
            Archetype::HardTrickRoom => {
                "A team built around Trick Room with multiple setters for reliability"
            }
            Archetype::TailRoom => {
                "A flexible team that can operate under both Tailwind and Trick Room"
            }
            Archetype::SunOffense => {
                "An offensive team utilizing sun weather to power up Fire-type attacks"
            }
            Archetype::RainOffense => {
                "An offensive team utilizing rain weather to power up Water-type attacks"
            }
            Archetype::BalanceBros => {
                "A balanced team featuring Incineroar and Rillaboom for defensive synergy"
            }
            Archetype::PsySpam => {
                "A team focused on Psychic Terrain with Expanding Force for massive spread damage"
            }
            Archetype::TailwindHyperOffense => {
                "An aggressive team using Tailwind and Choice items for overwhelming speed and power"
            }
            Archetype::Tailwind => "A speed-based team utilizing Tailwind for speed control",
            Archetype::TrickRoom => "A team utilizing Trick Room for speed control",
            Archetype::Sun => "A team utilizing sun weather",
            Archetype::Rain => "A team utilizing rain weather",
            Archetype::Sand => "A team utilizing sandstorm weather",
            Archetype::Snow => "A team utilizing snow weather",
            Archetype::Unclassified => "A team that doesn't fit standard VGC archetypes",
        }
    }
}

/// What the classifier found in a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamClassification {
    pub archetype: Archetype,
    pub description: String,
    pub trick_room_users: Vec<String>,
    pub tailwind_users: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherKind>,
    pub weather_setters: Vec<String>,
    pub psy_terrain_users: Vec<String>,
    pub choice_users: Vec<String>,
    pub has_balance_core: bool,
}

/// Classify a revealed team into its archetype
pub fn classify_team(roster: &[RosterEntry]) -> TeamClassification {
    let mut trick_room_users = Vec::new();
    let mut tailwind_users = Vec::new();
    let mut weather: Option<WeatherKind> = None;
    let mut weather_setters = Vec::new();
    let mut psy_terrain_users = Vec::new();
    let mut expanding_force_users: Vec<String> = Vec::new();
    let mut choice_users = Vec::new();
    let mut has_incineroar = false;
    let mut has_rillaboom = false;

    for entry in roster {
        match entry.id.as_str() {
            "incineroar" => has_incineroar = true,
            "rillaboom" => has_rillaboom = true,
            _ => {}
        }

        // Ability setters take precedence over move setters for weather
        if let Some(kind) = weather_from_ability(&entry.ability) {
            weather = Some(kind);
            weather_setters.push(entry.name.clone());
        }

        if is_choice_item(&entry.item) {
            choice_users.push(entry.name.clone());
        }

        for m in &entry.moves {
            match m.id.as_str() {
                "trickroom" => trick_room_users.push(entry.name.clone()),
                "tailwind" => tailwind_users.push(entry.name.clone()),
                "sunnyday" => {
                    weather.get_or_insert(WeatherKind::Sun);
                    weather_setters.push(entry.name.clone());
                }
                "raindance" => {
                    weather.get_or_insert(WeatherKind::Rain);
                    weather_setters.push(entry.name.clone());
                }
                "psychicterrain" => psy_terrain_users.push(entry.name.clone()),
                "expandingforce" => expanding_force_users.push(entry.name.clone()),
                _ => {}
            }
        }
    }

    let has_balance_core = has_incineroar && has_rillaboom;

    let archetype = determine_archetype(
        &trick_room_users,
        &tailwind_users,
        weather,
        &psy_terrain_users,
        &expanding_force_users,
        &choice_users,
        has_balance_core,
    );

    TeamClassification {
        archetype,
        description: archetype.description().to_string(),
        trick_room_users,
        tailwind_users,
        weather,
        weather_setters,
        psy_terrain_users,
        choice_users,
        has_balance_core,
    }
}

fn determine_archetype(
    trick_room_users: &[String],
    tailwind_users: &[String],
    weather: Option<WeatherKind>,
    psy_terrain_users: &[String],
    expanding_force_users: &[String],
    choice_users: &[String],
    has_balance_core: bool,
) -> Archetype {
    let has_trick_room = !trick_room_users.is_empty();
    let has_tailwind = !tailwind_users.is_empty();

    if trick_room_users.len() >= 2 {
        return Archetype::HardTrickRoom;
    }
    if has_tailwind && has_trick_room {
        return Archetype::TailRoom;
    }
    if weather == Some(WeatherKind::Sun) {
        return Archetype::SunOffense;
    }
    if weather == Some(WeatherKind::Rain) {
        return Archetype::RainOffense;
    }
    if has_balance_core {
        return Archetype::BalanceBros;
    }
    if !psy_terrain_users.is_empty() && !expanding_force_users.is_empty() {
        return Archetype::PsySpam;
    }
    if has_tailwind && !choice_users.is_empty() {
        return Archetype::TailwindHyperOffense;
    }
    if has_tailwind {
        return Archetype::Tailwind;
    }
    if has_trick_room {
        return Archetype::TrickRoom;
    }
    match weather {
        Some(WeatherKind::Sand) => Archetype::Sand,
        Some(WeatherKind::Snow) => Archetype::Snow,
        // Sun and rain were claimed by the offense rules above
        _ => Archetype::Unclassified,
    }
}

fn weather_from_ability(ability: &str) -> Option<WeatherKind> {
    match ability.to_ascii_lowercase().as_str() {
        "drought" => Some(WeatherKind::Sun),
        "drizzle" => Some(WeatherKind::Rain),
        "sand stream" => Some(WeatherKind::Sand),
        "snow warning" => Some(WeatherKind::Snow),
        _ => None,
    }
}

fn is_choice_item(item: &str) -> bool {
    matches!(
        item.to_ascii_lowercase().as_str(),
        "choice specs" | "choice band" | "choice scarf"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> RosterEntry {
        RosterEntry::new(name)
    }

    fn member_with_moves(name: &str, moves: &[&str]) -> RosterEntry {
        let mut entry = RosterEntry::new(name);
        for m in moves {
            entry.record_move(m);
        }
        entry
    }

    #[test]
    fn test_hard_trick_room_needs_two_setters() {
        let team = vec![
            member_with_moves("Hatterene", &["Trick Room", "Dazzling Gleam"]),
            member_with_moves("Indeedee", &["Trick Room", "Follow Me"]),
            member("Torkoal"),
        ];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::HardTrickRoom);
        assert_eq!(c.trick_room_users.len(), 2);
    }

    #[test]
    fn test_single_setter_is_generic_trick_room() {
        let team = vec![member_with_moves("Hatterene", &["Trick Room"])];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::TrickRoom);
    }

    #[test]
    fn test_tailroom() {
        let team = vec![
            member_with_moves("Whimsicott", &["Tailwind"]),
            member_with_moves("Hatterene", &["Trick Room"]),
        ];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::TailRoom);
    }

    #[test]
    fn test_sun_offense_from_drought() {
        let mut torkoal = member("Torkoal");
        torkoal.ability = "Drought".to_string();
        let team = vec![torkoal, member("Flutter Mane")];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::SunOffense);
        assert_eq!(c.weather, Some(WeatherKind::Sun));
        assert_eq!(c.weather_setters, vec!["Torkoal"]);
    }

    #[test]
    fn test_rain_offense_from_rain_dance() {
        let team = vec![member_with_moves("Politoed", &["Rain Dance"])];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::RainOffense);
        assert_eq!(c.weather, Some(WeatherKind::Rain));
    }

    #[test]
    fn test_sun_outranks_tailwind() {
        let mut torkoal = member("Torkoal");
        torkoal.ability = "Drought".to_string();
        let team = vec![torkoal, member_with_moves("Whimsicott", &["Tailwind"])];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::SunOffense);
    }

    #[test]
    fn test_balance_bros() {
        let team = vec![member("Incineroar"), member("Rillaboom"), member("Amoonguss")];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::BalanceBros);
        assert!(c.has_balance_core);
    }

    #[test]
    fn test_psy_spam_needs_both_pieces() {
        let team = vec![
            member_with_moves("Indeedee", &["Psychic Terrain"]),
            member_with_moves("Armarouge", &["Expanding Force"]),
        ];
        assert_eq!(classify_team(&team).archetype, Archetype::PsySpam);

        let terrain_only = vec![member_with_moves("Indeedee", &["Psychic Terrain"])];
        assert_eq!(classify_team(&terrain_only).archetype, Archetype::Unclassified);
    }

    #[test]
    fn test_tailwind_hyper_offense() {
        let mut chien_pao = member("Chien-Pao");
        chien_pao.item = "Choice Band".to_string();
        let mut dragapult = member("Dragapult");
        dragapult.item = "Choice Specs".to_string();
        let team = vec![
            member_with_moves("Tornadus", &["Tailwind"]),
            chien_pao,
            dragapult,
        ];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::TailwindHyperOffense);
        assert_eq!(c.choice_users.len(), 2);
    }

    #[test]
    fn test_choice_items_alone_do_not_classify() {
        let mut chien_pao = member("Chien-Pao");
        chien_pao.item = "Choice Band".to_string();
        let mut dragapult = member("Dragapult");
        dragapult.item = "Choice Specs".to_string();
        let c = classify_team(&[chien_pao, dragapult]);

        assert_eq!(c.archetype, Archetype::Unclassified);
        assert_eq!(c.choice_users.len(), 2);
    }

    #[test]
    fn test_generic_tailwind_without_choice() {
        let team = vec![member_with_moves("Tornadus", &["Tailwind"])];
        assert_eq!(classify_team(&team).archetype, Archetype::Tailwind);
    }

    #[test]
    fn test_sand_and_snow_generic_weather() {
        let mut tyranitar = member("Tyranitar");
        tyranitar.ability = "Sand Stream".to_string();
        assert_eq!(classify_team(&[tyranitar]).archetype, Archetype::Sand);

        let mut abomasnow = member("Abomasnow");
        abomasnow.ability = "Snow Warning".to_string();
        assert_eq!(classify_team(&[abomasnow]).archetype, Archetype::Snow);
    }

    #[test]
    fn test_unclassified_team() {
        let team = vec![
            member_with_moves("Garchomp", &["Earthquake", "Dragon Claw"]),
            member("Arcanine"),
        ];
        let c = classify_team(&team);

        assert_eq!(c.archetype, Archetype::Unclassified);
        assert_eq!(c.description, "A team that doesn't fit standard VGC archetypes");
    }

    #[test]
    fn test_empty_team() {
        let c = classify_team(&[]);
        assert_eq!(c.archetype, Archetype::Unclassified);
    }

    #[test]
    fn test_ability_weather_outranks_move_weather() {
        let mut pelipper = member("Pelipper");
        pelipper.ability = "Drizzle".to_string();
        let team = vec![member_with_moves("Torkoal", &["Sunny Day"]), pelipper];
        let c = classify_team(&team);

        assert_eq!(c.weather, Some(WeatherKind::Rain));
        assert_eq!(c.archetype, Archetype::RainOffense);
    }
}
