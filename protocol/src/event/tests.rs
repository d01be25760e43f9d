#[cfg(test)]
mod tests {
    use crate::{BattleEvent, HpStatus, PokemonDetails, PokemonRef, SideId, Stat, parse_event, tokenize};

    #[test]
    fn test_parse_hp_fraction() {
        let hp = HpStatus::parse("65/100").unwrap();

        assert_eq!(hp.current, 65);
        assert_eq!(hp.max, Some(100));
        assert!(!hp.fainted);
    }

    #[test]
    fn test_parse_hp_fainted() {
        let hp = HpStatus::parse("0 fnt").unwrap();

        assert_eq!(hp.current, 0);
        assert_eq!(hp.max, None);
        assert!(hp.fainted);
        assert_eq!(hp.max_or_default(), 100);
    }

    #[test]
    fn test_parse_hp_bare_number() {
        let hp = HpStatus::parse("75").unwrap();

        assert_eq!(hp.current, 75);
        assert_eq!(hp.max, None);
        assert!(!hp.fainted);
    }

    #[test]
    fn test_parse_hp_invalid() {
        assert!(HpStatus::parse("abc").is_none());
        assert!(HpStatus::parse("-50/100").is_none());
        assert!(HpStatus::parse("50/abc").is_none());
        assert!(HpStatus::parse("").is_none());
    }

    #[test]
    fn test_parse_pokemon_ref() {
        let p = PokemonRef::parse("p1a: Pikachu").unwrap();

        assert_eq!(p.side, SideId::One);
        assert_eq!(p.position, Some('a'));
        assert_eq!(p.name, "Pikachu");
    }

    #[test]
    fn test_parse_pokemon_ref_no_position() {
        let p = PokemonRef::parse("p2: Dragapult").unwrap();

        assert_eq!(p.side, SideId::Two);
        assert_eq!(p.position, None);
        assert_eq!(p.name, "Dragapult");
    }

    #[test]
    fn test_parse_pokemon_ref_invalid() {
        assert!(PokemonRef::parse("Pikachu").is_none());
        assert!(PokemonRef::parse("p3a: Pikachu").is_none());
        assert!(PokemonRef::parse("p1a:   ").is_none());
    }

    #[test]
    fn test_parse_details() {
        let d = PokemonDetails::parse("Typhlosion-Hisui, L50, M");

        assert_eq!(d.species, "Typhlosion-Hisui");
        assert_eq!(d.level, Some(50));
        assert_eq!(d.gender, Some('M'));
        assert!(!d.shiny);
    }

    #[test]
    fn test_parse_details_species_only() {
        let d = PokemonDetails::parse("Garchomp");

        assert_eq!(d.species, "Garchomp");
        assert_eq!(d.level, None);
        assert_eq!(d.gender, None);
    }

    #[test]
    fn test_parse_details_shiny_and_tera() {
        let d = PokemonDetails::parse("Pikachu, L82, F, shiny, tera:Flying");

        assert!(d.shiny);
        assert_eq!(d.tera_type, Some("Flying".to_string()));
    }

    #[test]
    fn test_parse_move() {
        let event = parse_event("|move|p1a: Pikachu|Thunderbolt|p2a: Gyarados").unwrap();

        match event {
            BattleEvent::Move {
                actor,
                move_name,
                target,
            } => {
                assert_eq!(actor.name, "Pikachu");
                assert_eq!(move_name, "Thunderbolt");
                assert_eq!(target.unwrap().name, "Gyarados");
            }
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_move_without_target() {
        let event = parse_event("|move|p1a: Torkoal|Protect|").unwrap();

        match event {
            BattleEvent::Move { target, .. } => assert!(target.is_none()),
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_switch() {
        let event = parse_event("|switch|p2a: Incineroar|Incineroar, L50, M|100/100").unwrap();

        match event {
            BattleEvent::Switch { actor, details, hp } => {
                assert_eq!(actor.side, SideId::Two);
                assert_eq!(details.species, "Incineroar");
                assert_eq!(hp.unwrap().current, 100);
            }
            other => panic!("expected Switch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_drag_as_switch() {
        let event = parse_event("|drag|p1a: Landorus|Landorus, M|80/100").unwrap();

        assert!(matches!(event, BattleEvent::Switch { .. }));
    }

    #[test]
    fn test_parse_player_with_rating() {
        let event = parse_event("|player|p1|Alice|kimono-girl|1540").unwrap();

        assert_eq!(
            event,
            BattleEvent::Player {
                side: SideId::One,
                name: "Alice".to_string(),
                rating: Some(1540),
            }
        );
    }

    #[test]
    fn test_parse_player_without_rating() {
        let event = parse_event("|player|p2|Bob").unwrap();

        assert_eq!(
            event,
            BattleEvent::Player {
                side: SideId::Two,
                name: "Bob".to_string(),
                rating: None,
            }
        );
    }

    #[test]
    fn test_parse_teamsize() {
        let event = parse_event("|teamsize|p1|6").unwrap();

        assert_eq!(
            event,
            BattleEvent::TeamSize {
                side: SideId::One,
                size: 6,
            }
        );
    }

    #[test]
    fn test_parse_boost() {
        let event = parse_event("|-boost|p1a: Dragonite|atk|1").unwrap();

        match event {
            BattleEvent::Boost {
                target,
                stat,
                amount,
            } => {
                assert_eq!(target.name, "Dragonite");
                assert_eq!(stat, Stat::Atk);
                assert_eq!(amount, 1);
            }
            other => panic!("expected Boost, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unboost() {
        let event = parse_event("|-unboost|p2a: Gholdengo|spe|1").unwrap();

        assert!(matches!(
            event,
            BattleEvent::Unboost {
                stat: Stat::Spe,
                amount: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_win() {
        let event = parse_event("|win|Alice").unwrap();

        assert_eq!(
            event,
            BattleEvent::Win {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let event = parse_event("|upkeep").unwrap();

        assert_eq!(
            event,
            BattleEvent::Other {
                command: "upkeep".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rule_as_other() {
        let event = parse_event("|rule|Species Clause: Limit one of each Pokemon").unwrap();

        assert!(matches!(event, BattleEvent::Other { command } if command == "rule"));
    }

    #[test]
    fn test_parse_not_an_event() {
        assert!(parse_event("random chat text").is_err());
        assert!(parse_event("").is_err());
    }

    #[test]
    fn test_parse_missing_pokemon_field() {
        assert!(parse_event("|move|not-a-pokemon|Tackle").is_err());
        assert!(parse_event("|faint|").is_err());
    }

    #[test]
    fn test_tokenize_drops_garbage() {
        let log = "|player|p1|Alice||\n\
                   this line is not an event\n\
                   |move|broken\n\
                   |turn|1\n\
                   \n\
                   |move|p1a: Pikachu|Thunderbolt|p2a: Gyarados";
        let events = tokenize(log);

        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], BattleEvent::Player { .. }));
        assert!(matches!(events[1], BattleEvent::Turn(1)));
        assert!(matches!(events[2], BattleEvent::Move { .. }));
    }

    #[test]
    fn test_tokenize_empty_log() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("no events here\nat all").is_empty());
    }

    #[test]
    fn test_parse_tier_with_embedded_pipe() {
        let event = parse_event("|tier|[Gen 9] VGC 2024 Reg H").unwrap();

        assert_eq!(event, BattleEvent::Tier("[Gen 9] VGC 2024 Reg H".to_string()));
    }

    #[test]
    fn test_parse_gen() {
        assert_eq!(parse_event("|gen|9").unwrap(), BattleEvent::Gen(9));
        assert_eq!(parse_event("|gen|bogus").unwrap(), BattleEvent::Gen(0));
    }

    #[test]
    fn test_is_effect() {
        let damage = parse_event("|-damage|p1a: Pikachu|50/100").unwrap();
        let turn = parse_event("|turn|3").unwrap();

        assert!(damage.is_effect());
        assert!(!turn.is_effect());
    }
}
