//! Point-in-time view of a game for late joiners and spectators.
//!
//! A snapshot holds only public information: hand sizes, never hand contents.
//! Players resynchronize their own cards with `Game::hand_of`.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// Public game state. Owned copy; mutating it does not touch the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub is_playing: bool,

    /// Owner passed to the last `start`.
    pub owner_id: Option<PlayerId>,

    /// Combination to beat (empty when the active player leads).
    pub board: Vec<Card>,

    /// Who played `board`. `Some` iff `board` is non-empty.
    pub board_owner_id: Option<PlayerId>,

    /// Seat to act. `None` before the first game.
    pub active_player_id: Option<PlayerId>,

    /// Seat order for this game.
    pub turn_order: Vec<PlayerId>,

    /// Finishers in order; `winners[0]` took first place.
    pub winners: Vec<PlayerId>,

    pub finished_players: FxHashSet<PlayerId>,

    /// Cards left in each hand.
    pub hand_counts: FxHashMap<PlayerId, usize>,
}

impl Snapshot {
    /// Has `player` finished this game?
    #[must_use]
    pub fn is_finished(&self, player: &PlayerId) -> bool {
        self.finished_players.contains(player)
    }
}
