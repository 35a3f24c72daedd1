//! Move hints: which selections of a hand are playable right now.
//!
//! Runs (straights and consecutive pairs) that differ only in the suits of
//! their lower ranks compare identically against any board, so for those
//! shapes only the lowest filler cards are listed, once per possible top.
//! Singles and same-rank groups are listed exhaustively.

use smallvec::{smallvec, SmallVec};

use super::compare::{beats, Ruleset};
use crate::cards::{Card, RANK_COUNT, TWO};
use crate::core::Selection;

/// Every distinct-strength legal play in `hand`, as ascending index lists.
///
/// `hand` must be sorted by power.
#[must_use]
pub fn candidate_plays(hand: &[Card]) -> Vec<Selection> {
    let by_rank = indices_by_rank(hand);
    let mut out: Vec<Selection> = (0..hand.len()).map(|i| smallvec![i]).collect();

    for group in &by_rank {
        for size in 2..=group.len() {
            out.extend(combinations(group, size));
        }
    }

    let top_rank = TWO as usize;

    // Straights: ranks start..=end, every rank below `end` filled by its lowest card.
    for start in 0..top_rank {
        for end in (start + 2)..top_rank {
            if by_rank[start..=end].iter().any(|g| g.is_empty()) {
                break;
            }
            let filler: Selection = (start..end).map(|r| by_rank[r][0]).collect();
            for &top in &by_rank[end] {
                let mut sel = filler.clone();
                sel.push(top);
                out.push(sel);
            }
        }
    }

    // Consecutive pairs, same idea with the two lowest cards of each rank.
    for start in 0..top_rank {
        for end in (start + 2)..top_rank {
            if by_rank[start..=end].iter().any(|g| g.len() < 2) {
                break;
            }
            let filler: Selection = (start..end)
                .flat_map(|r| by_rank[r][..2].iter().copied())
                .collect();
            for top_pair in combinations(&by_rank[end], 2) {
                let mut sel = filler.clone();
                sel.extend(top_pair);
                out.push(sel);
            }
        }
    }

    out
}

/// Plays from `hand` that may be made on `board`.
///
/// An empty board accepts any legal play.
#[must_use]
pub fn legal_plays(hand: &[Card], board: &[Card], ruleset: Ruleset) -> Vec<Selection> {
    candidate_plays(hand)
        .into_iter()
        .filter(|sel| board.is_empty() || beats(board, &pick(hand, sel), ruleset))
        .collect()
}

/// Can the holder of `hand` do anything other than pass?
#[must_use]
pub fn has_valid_move(hand: &[Card], board: &[Card], ruleset: Ruleset) -> bool {
    if board.is_empty() {
        return !hand.is_empty();
    }
    candidate_plays(hand)
        .iter()
        .any(|sel| beats(board, &pick(hand, sel), ruleset))
}

/// Cards at the selected positions.
pub(crate) fn pick(hand: &[Card], selection: &[usize]) -> Vec<Card> {
    selection.iter().map(|&i| hand[i]).collect()
}

fn indices_by_rank(hand: &[Card]) -> Vec<SmallVec<[usize; 4]>> {
    let mut by_rank = vec![SmallVec::new(); RANK_COUNT as usize];
    for (i, card) in hand.iter().enumerate() {
        by_rank[card.rank as usize].push(i);
    }
    by_rank
}

fn combinations(items: &[usize], k: usize) -> Vec<Selection> {
    if k == 0 {
        return vec![Selection::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let mut out = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        for rest in combinations(&items[i + 1..], k - 1) {
            let mut sel: Selection = smallvec![first];
            sel.extend(rest);
            out.push(sel);
        }
    }
    out
}
