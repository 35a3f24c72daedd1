//! Combination and comparison tests through the public API.

use tien_len::cards::{new_deck, Card};
use tien_len::rules::{beats, can_beat, classify, has_valid_move, is_valid_set, legal_plays, Combination, Ruleset};

fn cards(pairs: &[(u8, u8)]) -> Vec<Card> {
    pairs.iter().map(|&(r, s)| Card::new(r, s)).collect()
}

/// 3-4-5 is a straight; a run touching the 2 is not.
#[test]
fn test_straight_scenarios() {
    assert!(is_valid_set(&cards(&[(0, 0), (1, 1), (2, 2)])));
    assert!(!is_valid_set(&cards(&[(12, 0), (0, 1), (1, 2)])));
    assert!(!is_valid_set(&cards(&[(10, 0), (11, 1), (12, 2)])));
}

/// Single vs single, and a length mismatch.
#[test]
fn test_can_beat_scenarios() {
    assert!(can_beat(&cards(&[(3, 0)]), &cards(&[(4, 0)])));
    assert!(!can_beat(&cards(&[(3, 0), (3, 1)]), &cards(&[(9, 1)])));
}

/// The longest possible straight runs 3 through A.
#[test]
fn test_longest_straight() {
    let run: Vec<Card> = (0..12).map(|r| Card::new(r, r % 4)).collect();
    assert_eq!(classify(&run), Some(Combination::Straight { len: 12 }));
}

/// Every single card of the deck is a legal play and the 2♥ beats them all.
#[test]
fn test_singles_over_whole_deck() {
    let top = [Card::new(12, 3)];
    for card in new_deck() {
        assert!(is_valid_set(&[card]));
        if card != top[0] {
            assert!(can_beat(&[card], &top));
            assert!(!can_beat(&top, &[card]));
        }
    }
}

/// Order of the input cards does not change the verdict.
#[test]
fn test_classification_is_order_independent() {
    let pine = cards(&[(5, 1), (3, 0), (4, 3), (5, 0), (3, 2), (4, 1)]);
    assert_eq!(classify(&pine), Some(Combination::ConsecutivePairs { pairs: 3 }));

    let mut reversed = pine.clone();
    reversed.reverse();
    assert_eq!(classify(&reversed), classify(&pine));
}

/// Under `Classic`, the 2 can only be beaten by a higher 2.
#[test]
fn test_classic_two_is_unchoppable() {
    let two = cards(&[(12, 1)]);
    let quad = cards(&[(8, 0), (8, 1), (8, 2), (8, 3)]);
    let hand = {
        let mut h = quad.clone();
        h.push(Card::new(12, 0));
        h
    };

    assert!(!beats(&two, &quad, Ruleset::Classic));
    assert!(beats(&two, &quad, Ruleset::Chops));
    assert!(beats(&two, &cards(&[(12, 2)]), Ruleset::Classic));

    assert!(!has_valid_move(&hand, &two, Ruleset::Classic));
    assert!(has_valid_move(&hand, &two, Ruleset::Chops));
}

/// Hints list only plays the game itself would accept.
#[test]
fn test_legal_plays_all_beat_board() {
    let hand = cards(&[(0, 0), (1, 0), (2, 0), (2, 1), (3, 0), (3, 3), (7, 1), (7, 2), (12, 0)]);
    let board = cards(&[(1, 1), (2, 2), (3, 1)]);

    let plays = legal_plays(&hand, &board, Ruleset::Classic);
    assert!(!plays.is_empty());
    for sel in &plays {
        let picked: Vec<Card> = sel.iter().map(|&i| hand[i]).collect();
        assert!(is_valid_set(&picked));
        assert!(can_beat(&board, &picked));
    }
}
