//! Turn rotation and round resolution.
//!
//! After every successful play or pass the turn moves forward through the
//! seat order, skipping finished players and players who passed this round.
//! When the scan comes back around to the board's owner and everyone else
//! still in the game has passed, the round ends: the board clears and the
//! owner leads. If the owner has since finished, the lead goes to the next
//! seat still holding cards.

use log::{debug, warn};

use super::event::GameEvent;
use super::state::Game;
use crate::core::PlayerId;

impl Game {
    pub(super) fn advance_turn(&mut self) -> Vec<GameEvent> {
        let count = self.turn_order.len();
        if count == 0 {
            return Vec::new();
        }
        let origin = self.current_idx;

        for step in 1..=count {
            let idx = (origin + step) % count;
            let seat = &self.turn_order[idx];

            // Checked before the finished skip: the owner may have gone out
            // on their winning play.
            if self.last_actor.as_ref() == Some(seat) && self.all_others_skipped(seat) {
                return self.end_round(idx);
            }

            if self.finished.contains(seat) || self.round_skippers.contains(seat) {
                continue;
            }

            self.current_idx = idx;
            return vec![self.turn_changed()];
        }

        warn!(
            "No seat can act after {}; turn stays put",
            self.turn_order[self.current_idx]
        );
        vec![self.turn_changed()]
    }

    /// Has every unfinished seat other than `player_id` passed this round?
    pub(super) fn all_others_skipped(&self, player_id: &PlayerId) -> bool {
        self.turn_order
            .iter()
            .filter(|id| *id != player_id && !self.finished.contains(*id))
            .all(|id| self.round_skippers.contains(id))
    }

    fn end_round(&mut self, idx: usize) -> Vec<GameEvent> {
        let count = self.turn_order.len();
        let winner_id = self.turn_order[idx].clone();

        self.board.clear();
        self.round_skippers.clear();
        self.last_actor = None;

        self.current_idx = idx;
        for _ in 0..count {
            if !self.finished.contains(&self.turn_order[self.current_idx]) {
                break;
            }
            self.current_idx = (self.current_idx + 1) % count;
        }

        debug!(
            "Round won by {}; {} leads",
            winner_id, self.turn_order[self.current_idx]
        );

        vec![GameEvent::RoundEnded { winner_id }, self.turn_changed()]
    }
}
