//! Deck construction, shuffling and hand sorting.

use super::card::{Card, RANK_COUNT, SUIT_COUNT};
use crate::core::GameRng;

/// Cards in a full deck.
pub const DECK_SIZE: usize = (RANK_COUNT as usize) * (SUIT_COUNT as usize);

/// Build the full 52-card deck in power order (rank outer, suit inner).
#[must_use]
pub fn new_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in 0..RANK_COUNT {
        for suit in 0..SUIT_COUNT {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Return a uniformly random permutation of `deck`.
///
/// The input is left untouched; call this fresh for every deal.
#[must_use]
pub fn shuffle(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut out = deck.to_vec();
    rng.shuffle(&mut out);
    out
}

/// Sort a hand ascending by power.
pub fn sort_hand(cards: &mut [Card]) {
    cards.sort_unstable_by_key(|c| c.power());
}

/// Lowest-power card in a hand.
#[must_use]
pub fn lowest_card(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min_by_key(|c| c.power())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_is_complete_and_ordered() {
        let deck = new_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), 52);

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.power() as usize, i);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let deck = new_deck();
        let mut rng = GameRng::new(42);
        let shuffled = shuffle(&deck, &mut rng);

        assert_eq!(shuffled.len(), 52);
        assert_ne!(shuffled, deck);

        let mut sorted = shuffled.clone();
        sort_hand(&mut sorted);
        assert_eq!(sorted, deck);
    }

    #[test]
    fn test_shuffle_deterministic_per_seed() {
        let deck = new_deck();
        let a = shuffle(&deck, &mut GameRng::new(9));
        let b = shuffle(&deck, &mut GameRng::new(9));
        let c = shuffle(&deck, &mut GameRng::new(10));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_successive_shuffles_differ() {
        let deck = new_deck();
        let mut rng = GameRng::new(3);
        let first = shuffle(&deck, &mut rng);
        let second = shuffle(&deck, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_sort_hand() {
        let mut hand = vec![Card::new(12, 0), Card::new(0, 3), Card::new(0, 1), Card::new(5, 2)];
        sort_hand(&mut hand);
        assert_eq!(
            hand,
            vec![Card::new(0, 1), Card::new(0, 3), Card::new(5, 2), Card::new(12, 0)]
        );
    }

    #[test]
    fn test_lowest_card() {
        assert_eq!(lowest_card(&[]), None);
        let hand = [Card::new(4, 0), Card::new(1, 3), Card::new(1, 2)];
        assert_eq!(lowest_card(&hand), Some(Card::new(1, 2)));
    }
}
