//! Card value type and power ordering.
//!
//! Ranks run from 0 ("3") to 12 ("2"), the highest card in Tiến Lên.
//! Suits run ♠ < ♣ < ♦ < ♥ and only ever break ties between equal ranks.
//!
//! `power = rank * 4 + suit` gives a strict total order over the 52 cards.

use serde::{Deserialize, Serialize};

/// Number of distinct ranks.
pub const RANK_COUNT: u8 = 13;

/// Number of suits.
pub const SUIT_COUNT: u8 = 4;

/// Rank of the "2", the highest rank. It may never appear in a straight
/// or a run of consecutive pairs.
pub const TWO: u8 = 12;

const RANK_NAMES: [&str; RANK_COUNT as usize] =
    ["3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A", "2"];

const SUIT_SYMBOLS: [char; SUIT_COUNT as usize] = ['♠', '♣', '♦', '♥'];

/// A playing card.
///
/// Field order makes the derived `Ord` identical to ordering by `power()`.
///
/// ```
/// use tien_len::cards::Card;
///
/// let three_spades = Card::new(0, 0);
/// let two_hearts = Card::new(12, 3);
///
/// assert_eq!(three_spades.power(), 0);
/// assert_eq!(two_hearts.power(), 51);
/// assert!(three_spades < two_hearts);
/// assert_eq!(two_hearts.to_string(), "2♥");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    /// 0 ("3") through 12 ("2").
    pub rank: u8,
    /// 0 (♠) through 3 (♥).
    pub suit: u8,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `rank` or `suit` is out of range; use `try_new` for
    /// untrusted input.
    #[must_use]
    pub const fn new(rank: u8, suit: u8) -> Self {
        assert!(rank < RANK_COUNT, "Rank must be 0-12");
        assert!(suit < SUIT_COUNT, "Suit must be 0-3");
        Self { rank, suit }
    }

    /// Create a card, returning `None` for out-of-range values.
    #[must_use]
    pub const fn try_new(rank: u8, suit: u8) -> Option<Self> {
        if rank < RANK_COUNT && suit < SUIT_COUNT {
            Some(Self { rank, suit })
        } else {
            None
        }
    }

    /// The card's comparison power: `rank * 4 + suit`.
    #[must_use]
    pub const fn power(self) -> u8 {
        self.rank * SUIT_COUNT + self.suit
    }

    /// Is this a "2"?
    #[must_use]
    pub const fn is_two(self) -> bool {
        self.rank == TWO
    }
}

// Wire form, range-checked on the way in.
#[derive(Deserialize)]
struct RawCard {
    rank: u8,
    suit: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = String;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::try_new(raw.rank, raw.suit)
            .ok_or_else(|| format!("card out of range: rank {}, suit {}", raw.rank, raw.suit))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = RANK_NAMES.get(self.rank as usize).copied().unwrap_or("?");
        let suit = SUIT_SYMBOLS.get(self.suit as usize).copied().unwrap_or('?');
        write!(f, "{}{}", rank, suit)
    }
}

/// Highest power among `cards`, or `None` when empty.
#[must_use]
pub fn max_power(cards: &[Card]) -> Option<u8> {
    cards.iter().map(|c| c.power()).max()
}

/// Format a set of cards for logs: `[3♠ 3♥ 4♦]`.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", inner.join(" "))
}
