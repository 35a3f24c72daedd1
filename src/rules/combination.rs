//! Combination shapes.
//!
//! A play is legal when it is exactly one of:
//! - a single card;
//! - a pair, triple or quad of one rank;
//! - a straight of three or more consecutive ranks, no "2";
//! - three or more consecutive pairs ("đôi thông"), no "2".

use serde::{Deserialize, Serialize};

use crate::cards::{Card, TWO};

/// The shape of a legal play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Combination {
    Single,
    Pair,
    Triple,
    Quad,
    /// Consecutive ranks, `len` >= 3.
    Straight { len: usize },
    /// Consecutive pairs, `pairs` >= 3.
    ConsecutivePairs { pairs: usize },
}

impl Combination {
    /// Quads and runs of consecutive pairs.
    #[must_use]
    pub fn is_bomb(self) -> bool {
        matches!(self, Combination::Quad | Combination::ConsecutivePairs { .. })
    }
}

/// Classify a set of cards, or `None` if it is not a legal play.
///
/// Input order does not matter.
///
/// ```
/// use tien_len::cards::Card;
/// use tien_len::rules::{classify, Combination};
///
/// let run = [Card::new(0, 0), Card::new(1, 1), Card::new(2, 2)];
/// assert_eq!(classify(&run), Some(Combination::Straight { len: 3 }));
///
/// let with_two = [Card::new(12, 0), Card::new(0, 0), Card::new(1, 0)];
/// assert_eq!(classify(&with_two), None);
/// ```
#[must_use]
pub fn classify(cards: &[Card]) -> Option<Combination> {
    if cards.is_empty() {
        return None;
    }
    if cards.len() == 1 {
        return Some(Combination::Single);
    }

    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();

    if ranks.iter().all(|&r| r == ranks[0]) {
        return match ranks.len() {
            2 => Some(Combination::Pair),
            3 => Some(Combination::Triple),
            4 => Some(Combination::Quad),
            _ => None,
        };
    }

    if is_straight(&ranks) {
        return Some(Combination::Straight { len: ranks.len() });
    }

    if is_consecutive_pairs(&ranks) {
        return Some(Combination::ConsecutivePairs { pairs: ranks.len() / 2 });
    }

    None
}

/// Is `cards` a legal play?
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    classify(cards).is_some()
}

// `ranks` must be sorted.
fn is_straight(ranks: &[u8]) -> bool {
    ranks.len() >= 3
        && ranks.iter().all(|&r| r != TWO)
        && ranks.windows(2).all(|w| w[1] == w[0] + 1)
}

// `ranks` must be sorted.
fn is_consecutive_pairs(ranks: &[u8]) -> bool {
    if ranks.len() < 6 || ranks.len() % 2 != 0 || ranks.iter().any(|&r| r == TWO) {
        return false;
    }
    let pairs: Vec<&[u8]> = ranks.chunks_exact(2).collect();
    pairs.iter().all(|p| p[0] == p[1]) && pairs.windows(2).all(|w| w[1][0] == w[0][0] + 1)
}
