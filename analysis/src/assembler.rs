//! Turn assembly: grouping actions and attributing effects
//!
//! Effect events trail the primary action that caused them, so the
//! assembler buffers effects until the next primary action (or turn
//! boundary) and then folds them into the action they followed.

use battleforge_protocol::BattleEvent;

use crate::impact;
use crate::tracker::StateTracker;
use crate::types::{Action, Turn};

/// Builds the turn list as events replay in arrival order
#[derive(Debug, Default)]
pub struct TurnAssembler {
    finished: Vec<Turn>,
    current: Option<Turn>,
    pending: Vec<BattleEvent>,
    order: u32,
    /// Last seen HP per pokemon, so deltas measure against real values
    hp_seen: impact::HpLedger,
    /// Whether flushed actions get full impact annotation attached
    annotate: bool,
}

impl TurnAssembler {
    pub fn new(annotate: bool) -> Self {
        Self {
            annotate,
            ..Default::default()
        }
    }

    /// Start a new turn, sealing the previous one
    ///
    /// Turns are kept in arrival order even when numbering repeats or
    /// goes backwards; the number is recorded as reported.
    pub fn begin_turn(&mut self, number: u32, tracker: &StateTracker) {
        self.seal(tracker);
        self.current = Some(Turn::new(number));
        self.order = 0;
    }

    /// Record a primary action in the current turn
    ///
    /// Pending effects are attributed to the previous action first.
    /// Actions before the first turn marker update tracked state but
    /// produce no record.
    pub fn push_primary(&mut self, mut action: Action) {
        self.flush();

        let Some(turn) = self.current.as_mut() else {
            return;
        };
        action.order_in_turn = self.order;
        self.order += 1;
        turn.actions.push(action);
    }

    /// Buffer an effect event for the most recent action
    pub fn push_effect(&mut self, event: BattleEvent) {
        if self.current.is_some() {
            self.pending.push(event);
        }
    }

    /// Number of the turn currently being assembled, zero before the first
    pub fn current_turn_number(&self) -> u32 {
        self.current.as_ref().map_or(0, |t| t.number)
    }

    /// Seal the last turn and return the full list
    pub fn finish(mut self, tracker: &StateTracker) -> Vec<Turn> {
        self.seal(tracker);
        self.finished
    }

    fn seal(&mut self, tracker: &StateTracker) {
        self.flush();
        if let Some(mut turn) = self.current.take() {
            turn.score = Some(tracker.position_score());
            self.finished.push(turn);
        }
    }

    /// Attribute buffered effects to the last recorded action
    fn flush(&mut self) {
        let events = std::mem::take(&mut self.pending);
        if events.is_empty() {
            return;
        }

        let Some(turn) = self.current.as_mut() else {
            return;
        };
        let Some(action) = turn.actions.last_mut() else {
            // Effects with no preceding action have nothing to attach to
            return;
        };

        let move_id = action.move_used.as_ref().map(|m| m.id.clone());
        let derived =
            impact::derive_impact(action.side, move_id.as_deref(), &events, &mut self.hp_seen);

        turn.damage_dealt[action.side] += derived.damage_dealt;
        turn.healing_done[action.side] += derived.healing_done;

        if self.annotate {
            action.result = impact::resolve_result(&derived, &events);
            action.details = impact::build_details(&derived);
            action.impact = Some(derived);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActionKind, ActionResult, MoveRef};
    use battleforge_protocol::{SideId, parse_event};

    fn move_action(side: SideId, actor: &str, move_name: &str) -> Action {
        Action {
            side,
            kind: ActionKind::Move,
            actor: actor.to_string(),
            move_used: Some(MoveRef {
                id: crate::types::normalize_id(move_name),
                name: move_name.to_string(),
            }),
            switch_to: None,
            target: None,
            result: None,
            details: String::new(),
            impact: None,
            order_in_turn: 0,
        }
    }

    #[test]
    fn test_effects_attach_to_preceding_action() {
        let tracker = StateTracker::new();
        let mut assembler = TurnAssembler::new(true);

        assembler.begin_turn(1, &tracker);
        assembler.push_primary(move_action(SideId::One, "Pikachu", "Thunderbolt"));
        assembler.push_effect(parse_event("|-damage|p2a: Gyarados|30/100").unwrap());
        assembler.push_effect(parse_event("|-supereffective|p2a: Gyarados").unwrap());
        assembler.push_primary(move_action(SideId::Two, "Gyarados", "Waterfall"));
        assembler.push_effect(parse_event("|-damage|p1a: Pikachu|40/100").unwrap());

        let turns = assembler.finish(&tracker);
        assert_eq!(turns.len(), 1);

        let turn = &turns[0];
        assert_eq!(turn.actions.len(), 2);
        assert_eq!(turn.actions[0].result, Some(ActionResult::SuperEffective));
        assert_eq!(turn.actions[0].impact.as_ref().unwrap().damage_dealt, 70);
        assert_eq!(turn.actions[1].impact.as_ref().unwrap().damage_dealt, 60);
        assert_eq!(turn.damage_dealt[SideId::One], 70);
        assert_eq!(turn.damage_dealt[SideId::Two], 60);
    }

    #[test]
    fn test_trailing_effects_flushed_at_turn_boundary() {
        let tracker = StateTracker::new();
        let mut assembler = TurnAssembler::new(true);

        assembler.begin_turn(1, &tracker);
        assembler.push_primary(move_action(SideId::One, "Pikachu", "Thunderbolt"));
        assembler.push_effect(parse_event("|-damage|p2a: Gyarados|0 fnt").unwrap());
        assembler.push_effect(parse_event("|faint|p2a: Gyarados").unwrap());
        assembler.begin_turn(2, &tracker);

        let turns = assembler.finish(&tracker);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].actions[0].result, Some(ActionResult::Faint));
        assert!(turns[0].score.is_some());
    }

    #[test]
    fn test_actions_before_first_turn_dropped() {
        let tracker = StateTracker::new();
        let mut assembler = TurnAssembler::new(false);

        assembler.push_primary(move_action(SideId::One, "Pikachu", "Thunderbolt"));
        assembler.begin_turn(1, &tracker);
        assembler.push_primary(move_action(SideId::Two, "Gyarados", "Waterfall"));

        let turns = assembler.finish(&tracker);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].actions.len(), 1);
        assert_eq!(turns[0].actions[0].actor, "Gyarados");
    }

    #[test]
    fn test_order_in_turn_resets_each_turn() {
        let tracker = StateTracker::new();
        let mut assembler = TurnAssembler::new(false);

        assembler.begin_turn(1, &tracker);
        assembler.push_primary(move_action(SideId::One, "A", "Protect"));
        assembler.push_primary(move_action(SideId::Two, "B", "Tackle"));
        assembler.begin_turn(2, &tracker);
        assembler.push_primary(move_action(SideId::Two, "B", "Tackle"));

        let turns = assembler.finish(&tracker);
        assert_eq!(turns[0].actions[0].order_in_turn, 0);
        assert_eq!(turns[0].actions[1].order_in_turn, 1);
        assert_eq!(turns[1].actions[0].order_in_turn, 0);
    }

    #[test]
    fn test_basic_mode_accumulates_without_annotation() {
        let tracker = StateTracker::new();
        let mut assembler = TurnAssembler::new(false);

        assembler.begin_turn(1, &tracker);
        assembler.push_primary(move_action(SideId::One, "Pikachu", "Thunderbolt"));
        assembler.push_effect(parse_event("|-damage|p2a: Gyarados|55/100").unwrap());

        let turns = assembler.finish(&tracker);
        let turn = &turns[0];
        assert_eq!(turn.damage_dealt[SideId::One], 45);
        assert!(turn.actions[0].impact.is_none());
        assert!(turn.actions[0].details.is_empty());
    }

    #[test]
    fn test_duplicate_turn_numbers_kept_in_arrival_order() {
        let tracker = StateTracker::new();
        let mut assembler = TurnAssembler::new(false);

        assembler.begin_turn(3, &tracker);
        assembler.begin_turn(1, &tracker);
        assembler.begin_turn(3, &tracker);

        let numbers: Vec<u32> = assembler
            .finish(&tracker)
            .iter()
            .map(|t| t.number)
            .collect();
        assert_eq!(numbers, vec![3, 1, 3]);
    }
}
