//! Candidate scoring
//!
//! An additive score: a fixed baseline, bonuses for ergonomic frets, and
//! terms for how far the hand moves from the previous note. Higher is better.
//! The movement term jumps from a small reward to a penalty once the stretch
//! exceeds the comfortable limit; the function need not be continuous there.

pub const BASE_SCORE: i32 = 100;
pub const OPEN_STRING_BONUS: i32 = 20;

/// Low-position frets favoured by the "sweet spot" bonus
pub const SWEET_SPOT: std::ops::RangeInclusive<i32> = 3..=7;
pub const SWEET_SPOT_BONUS: i32 = 15;

/// Frets above this cost `HIGH_FRET_PENALTY` each
pub const HIGH_FRET_THRESHOLD: i32 = 12;
pub const HIGH_FRET_PENALTY: i32 = 2;

/// Staying on the same fret
pub const STAY_BONUS: i32 = 25;

/// Comfortable moves earn `STRETCH_REWARD - STRETCH_COST * movement`
pub const STRETCH_REWARD: i32 = 20;
pub const STRETCH_COST: i32 = 3;

/// Moves beyond the comfortable stretch cost this much per fret
pub const LEAP_PENALTY: i32 = 5;

/// Cost per string crossed
pub const STRING_CHANGE_PENALTY: i32 = 2;

/// Score one candidate position.
///
/// `movement` is `|fret - previous_fret|` and `string_delta` is
/// `|string - previous_string|`; each is `None` when there is no previous
/// note to compare against.
pub fn score_candidate(
    fret: i32,
    movement: Option<i32>,
    string_delta: Option<i32>,
    max_comfortable_stretch: i32,
) -> i32 {
    let mut score = BASE_SCORE + position_bonus(fret);

    if let Some(movement) = movement {
        score += movement_term(movement, max_comfortable_stretch);
    }

    if let Some(delta) = string_delta {
        score -= STRING_CHANGE_PENALTY * delta;
    }

    score
}

/// Terms that depend only on the fret itself
pub fn position_bonus(fret: i32) -> i32 {
    let mut bonus = 0;
    if fret == 0 {
        bonus += OPEN_STRING_BONUS;
    }
    if SWEET_SPOT.contains(&fret) {
        bonus += SWEET_SPOT_BONUS;
    }
    if fret > HIGH_FRET_THRESHOLD {
        bonus -= HIGH_FRET_PENALTY * (fret - HIGH_FRET_THRESHOLD);
    }
    bonus
}

/// Reward or penalty for moving `movement` frets
pub fn movement_term(movement: i32, max_comfortable_stretch: i32) -> i32 {
    if movement == 0 {
        STAY_BONUS
    } else if movement <= max_comfortable_stretch {
        STRETCH_REWARD - STRETCH_COST * movement
    } else {
        -LEAP_PENALTY * movement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bonus() {
        assert_eq!(position_bonus(0), 20);
        assert_eq!(position_bonus(1), 0);
        assert_eq!(position_bonus(3), 15);
        assert_eq!(position_bonus(7), 15);
        assert_eq!(position_bonus(8), 0);
        assert_eq!(position_bonus(12), 0);
        assert_eq!(position_bonus(13), -2);
        assert_eq!(position_bonus(19), -14);
    }

    #[test]
    fn test_movement_term() {
        assert_eq!(movement_term(0, 4), 25);
        assert_eq!(movement_term(1, 4), 17);
        assert_eq!(movement_term(4, 4), 8);
        // Past the comfortable stretch the term turns into a penalty
        assert_eq!(movement_term(5, 4), -25);
        assert_eq!(movement_term(6, 4), -30);
    }

    #[test]
    fn test_unanchored_score() {
        assert_eq!(score_candidate(0, None, None, 4), 120);
        assert_eq!(score_candidate(5, None, None, 4), 115);
        assert_eq!(score_candidate(15, None, None, 4), 94);
    }

    #[test]
    fn test_anchored_score() {
        // fret 2, previous fret 5, string change of 1
        assert_eq!(score_candidate(2, Some(3), Some(1), 4), 100 + 11 - 2);
        // same fret, same string
        assert_eq!(score_candidate(5, Some(0), Some(0), 4), 100 + 15 + 25);
    }

    #[test]
    fn test_leap_penalty_strictly_decreasing() {
        let scores: Vec<i32> = (5..=19).map(|m| movement_term(m, 4)).collect();
        assert!(scores.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_stay_beats_any_move() {
        for stretch in 0..=12 {
            for movement in 1..=24 {
                assert!(movement_term(0, stretch) > movement_term(movement, stretch));
            }
        }
    }
}
