//! Comparing a play against the board.
//!
//! ## Rulesets
//!
//! - `Classic`: a play beats the board iff it has the same number of cards
//!   and a strictly higher top card. Shapes are not compared.
//! - `Chops`: same shape, same length and a higher top card, or a chop:
//!
//! | Board                          | Chopped by                        |
//! |--------------------------------|-----------------------------------|
//! | single 2                       | 3+ consecutive pairs, quad        |
//! | pair of 2s                     | quad, 4+ consecutive pairs        |
//! | quad                           | 4+ consecutive pairs              |
//! | n consecutive pairs            | more than n consecutive pairs     |

use serde::{Deserialize, Serialize};

use super::combination::{classify, Combination};
use crate::cards::{max_power, Card};

/// How plays are compared against the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// Same length, higher top card.
    #[default]
    Classic,
    /// Same shape and higher top card, plus bomb chops.
    Chops,
}

/// Does `candidate` beat `previous` on length and top card alone?
///
/// Both sets are assumed legal; shapes are not re-checked.
///
/// ```
/// use tien_len::cards::Card;
/// use tien_len::rules::can_beat;
///
/// assert!(can_beat(&[Card::new(3, 0)], &[Card::new(4, 0)]));
/// assert!(!can_beat(&[Card::new(3, 0), Card::new(3, 1)], &[Card::new(9, 1)]));
/// ```
#[must_use]
pub fn can_beat(previous: &[Card], candidate: &[Card]) -> bool {
    if previous.len() != candidate.len() {
        return false;
    }
    match (max_power(previous), max_power(candidate)) {
        (Some(prev), Some(cand)) => cand > prev,
        _ => false,
    }
}

/// Does `candidate` beat `previous` under `ruleset`?
#[must_use]
pub fn beats(previous: &[Card], candidate: &[Card], ruleset: Ruleset) -> bool {
    match ruleset {
        Ruleset::Classic => can_beat(previous, candidate),
        Ruleset::Chops => match (classify(previous), classify(candidate)) {
            (Some(prev), Some(cand)) => {
                (prev == cand && can_beat(previous, candidate))
                    || chops(prev, previous, cand)
            }
            _ => false,
        },
    }
}

fn chops(prev: Combination, previous: &[Card], cand: Combination) -> bool {
    if !cand.is_bomb() {
        return false;
    }
    let twos = previous.iter().all(|c| c.is_two());
    match (prev, cand) {
        (Combination::Single, Combination::ConsecutivePairs { .. }) => twos,
        (Combination::Single | Combination::Pair, Combination::Quad) => twos,
        (Combination::Pair, Combination::ConsecutivePairs { pairs }) => twos && pairs >= 4,
        (Combination::Quad, Combination::ConsecutivePairs { pairs }) => pairs >= 4,
        (Combination::ConsecutivePairs { pairs: p }, Combination::ConsecutivePairs { pairs: q }) => {
            q > p
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(pairs: &[(u8, u8)]) -> Vec<Card> {
        pairs.iter().map(|&(r, s)| Card::new(r, s)).collect()
    }

    #[test]
    fn test_can_beat_singles() {
        let prev = cards(&[(3, 0)]);
        assert!(can_beat(&prev, &cards(&[(4, 0)])));
        assert!(can_beat(&prev, &cards(&[(3, 1)])));
        assert!(!can_beat(&prev, &cards(&[(2, 3)])));
        assert!(!can_beat(&prev, &prev));
    }

    #[test]
    fn test_can_beat_pairs_and_length_mismatch() {
        let prev_pair = cards(&[(6, 0), (6, 1)]);
        assert!(can_beat(&prev_pair, &cards(&[(7, 2), (7, 3)])));
        // Same rank, higher suit on top
        assert!(can_beat(&prev_pair, &cards(&[(6, 2), (6, 0)])));
        assert!(!can_beat(&prev_pair, &cards(&[(9, 1)])));
        assert!(!can_beat(&[], &[]));
    }

    #[test]
    fn test_classic_ignores_shape() {
        // A straight and a triple of equal length compare on top card only.
        let triple = cards(&[(4, 0), (4, 1), (4, 2)]);
        let run = cards(&[(3, 0), (4, 3), (5, 0)]);
        assert!(beats(&triple, &run, Ruleset::Classic));
        assert!(!beats(&triple, &run, Ruleset::Chops));
    }

    #[test]
    fn test_chops_same_shape() {
        let low = cards(&[(0, 0), (1, 0), (2, 0)]);
        let high = cards(&[(1, 1), (2, 1), (3, 0)]);
        assert!(beats(&low, &high, Ruleset::Chops));
        assert!(!beats(&high, &low, Ruleset::Chops));
    }

    #[test]
    fn test_bombs_chop_twos() {
        let single_two = cards(&[(12, 3)]);
        let pair_twos = cards(&[(12, 0), (12, 1)]);
        let quad = cards(&[(5, 0), (5, 1), (5, 2), (5, 3)]);
        let three_pairs = cards(&[(3, 0), (3, 1), (4, 0), (4, 1), (5, 0), (5, 1)]);
        let four_pairs = cards(&[(6, 0), (6, 1), (7, 0), (7, 1), (8, 0), (8, 1), (9, 0), (9, 1)]);

        assert!(beats(&single_two, &three_pairs, Ruleset::Chops));
        assert!(beats(&single_two, &quad, Ruleset::Chops));
        assert!(beats(&pair_twos, &quad, Ruleset::Chops));
        assert!(!beats(&pair_twos, &three_pairs, Ruleset::Chops));
        assert!(beats(&pair_twos, &four_pairs, Ruleset::Chops));
        assert!(beats(&quad, &four_pairs, Ruleset::Chops));
        assert!(beats(&three_pairs, &four_pairs, Ruleset::Chops));
        assert!(!beats(&four_pairs, &three_pairs, Ruleset::Chops));

        // None of these cross-length plays are allowed without chops.
        assert!(!beats(&single_two, &quad, Ruleset::Classic));
        assert!(!beats(&pair_twos, &quad, Ruleset::Classic));
    }

    #[test]
    fn test_bombs_do_not_chop_ordinary_cards() {
        let single_ace = cards(&[(11, 3)]);
        let pair_aces = cards(&[(11, 0), (11, 1)]);
        let quad = cards(&[(5, 0), (5, 1), (5, 2), (5, 3)]);
        let three_pairs = cards(&[(3, 0), (3, 1), (4, 0), (4, 1), (5, 0), (5, 1)]);

        assert!(!beats(&single_ace, &three_pairs, Ruleset::Chops));
        assert!(!beats(&pair_aces, &quad, Ruleset::Chops));

        // Only bombs chop: a long straight or a triple never takes a 2.
        let single_two = cards(&[(12, 0)]);
        let straight = cards(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
        let triple = cards(&[(7, 0), (7, 1), (7, 2)]);
        assert!(!beats(&single_two, &straight, Ruleset::Chops));
        assert!(!beats(&single_two, &triple, Ruleset::Chops));
    }

    #[test]
    fn test_ruleset_serialization() {
        assert_eq!(serde_json::to_string(&Ruleset::Chops).unwrap(), "\"chops\"");
        assert_eq!(Ruleset::default(), Ruleset::Classic);
    }
}
