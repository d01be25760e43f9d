//! Turning point detection over per-turn position scores

use crate::types::{KeyMoment, KeyMomentKind, PerSide, Turn, TurningPoint};

/// Minimum score swing that counts as a turning point
const SHIFT_THRESHOLD: f64 = 15.0;

/// Find the turns where the position swung sharply
///
/// The swing for a turn is the change in the score gap relative to the
/// previous scored turn: positive favors side one. Each turning point
/// also yields a key moment for the battle timeline.
pub fn detect_turning_points(
    turns: &[Turn],
    names: &PerSide<String>,
) -> (Vec<TurningPoint>, Vec<KeyMoment>) {
    let mut points = Vec::new();
    let mut moments = Vec::new();

    let mut previous: Option<(f64, f64)> = None;
    for turn in turns {
        let Some(score) = turn.score else {
            continue;
        };

        if let Some((prev_one, prev_two)) = previous {
            let shift = (score.side_one - prev_one) - (score.side_two - prev_two);
            if shift.abs() >= SHIFT_THRESHOLD {
                let favoring = if shift > 0.0 {
                    names.one.clone()
                } else {
                    names.two.clone()
                };
                let significance = significance_for_shift(shift);
                let description = format!("Momentum shifted toward {favoring}");

                points.push(TurningPoint {
                    turn_number: turn.number,
                    side_one_before: prev_one,
                    side_one_after: score.side_one,
                    side_two_before: prev_two,
                    side_two_after: score.side_two,
                    momentum_shift: shift,
                    favoring,
                    description: description.clone(),
                    significance,
                });
                moments.push(KeyMoment {
                    turn_number: turn.number,
                    kind: KeyMomentKind::TurningPoint,
                    description,
                    significance,
                });
            }
        }
        previous = Some((score.side_one, score.side_two));
    }

    (points, moments)
}

/// Map a score swing to a 1-10 significance
fn significance_for_shift(shift: f64) -> u8 {
    let magnitude = (shift.abs() / 10.0) as u8;
    magnitude.clamp(1, 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Momentum, PositionScore};

    fn names() -> PerSide<String> {
        PerSide::new("Alice".to_string(), "Bob".to_string())
    }

    fn scored_turn(number: u32, side_one: f64, side_two: f64) -> Turn {
        let mut turn = Turn::new(number);
        turn.score = Some(PositionScore {
            side_one,
            side_two,
            momentum: Momentum::Neutral,
        });
        turn
    }

    #[test]
    fn test_small_swings_ignored() {
        let turns = vec![scored_turn(1, 100.0, 100.0), scored_turn(2, 95.0, 100.0)];
        let (points, moments) = detect_turning_points(&turns, &names());

        assert!(points.is_empty());
        assert!(moments.is_empty());
    }

    #[test]
    fn test_swing_at_threshold_detected() {
        let turns = vec![scored_turn(1, 100.0, 100.0), scored_turn(2, 100.0, 85.0)];
        let (points, moments) = detect_turning_points(&turns, &names());

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].turn_number, 2);
        assert_eq!(points[0].momentum_shift, 15.0);
        assert_eq!(points[0].side_one_before, 100.0);
        assert_eq!(points[0].side_one_after, 100.0);
        assert_eq!(points[0].side_two_before, 100.0);
        assert_eq!(points[0].side_two_after, 85.0);
        assert_eq!(points[0].favoring, "Alice");
        assert_eq!(points[0].significance, 1);
        assert_eq!(moments[0].kind, KeyMomentKind::TurningPoint);
    }

    #[test]
    fn test_negative_swing_favors_side_two() {
        let turns = vec![scored_turn(1, 100.0, 100.0), scored_turn(2, 60.0, 100.0)];
        let (points, _) = detect_turning_points(&turns, &names());

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].momentum_shift, -40.0);
        assert_eq!(points[0].favoring, "Bob");
        assert_eq!(points[0].significance, 4);
    }

    #[test]
    fn test_significance_clamped() {
        let turns = vec![scored_turn(1, 100.0, 100.0), scored_turn(2, 100.0, 0.0)];
        let (points, _) = detect_turning_points(&turns, &names());

        assert_eq!(points[0].significance, 10);
    }

    #[test]
    fn test_unscored_turns_skipped() {
        let turns = vec![
            scored_turn(1, 100.0, 100.0),
            Turn::new(2),
            scored_turn(3, 100.0, 70.0),
        ];
        let (points, _) = detect_turning_points(&turns, &names());

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].turn_number, 3);
    }

    #[test]
    fn test_first_scored_turn_is_baseline_only() {
        let turns = vec![scored_turn(1, 100.0, 20.0)];
        let (points, _) = detect_turning_points(&turns, &names());

        assert!(points.is_empty());
    }
}
