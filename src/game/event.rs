//! Domain events.
//!
//! Every mutating call on `Game` returns the events it produced, in order.
//! The match layer turns them into outbound messages; the enum is closed so
//! that dispatch is an exhaustive `match`.
//!
//! `GameStarted` and `HandUpdated` carry private hands. Use
//! `GameEvent::redacted_for` before sending an event to a particular client.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Cards were dealt. Carries every hand.
    GameStarted {
        hands: FxHashMap<PlayerId, Vec<Card>>,
        turn_order: Vec<PlayerId>,
        owner_id: PlayerId,
    },

    /// A new player is to act against `board` (empty when leading).
    TurnChanged {
        active_player_id: PlayerId,
        board: Vec<Card>,
    },

    /// A player's hand shrank after a play.
    HandUpdated { player_id: PlayerId, hand: Vec<Card> },

    /// Everyone else passed; `winner_id` cleared the board.
    RoundEnded { winner_id: PlayerId },

    /// A player emptied their hand. `rank` is 1 for first place.
    PlayerFinished { player_id: PlayerId, rank: usize },

    /// The game is over. `winner_id` finished first.
    GameOver { winner_id: PlayerId },
}

impl GameEvent {
    /// The copy of this event that `viewer` may see, or `None` if it
    /// concerns only another player's private hand.
    ///
    /// `GameStarted` keeps only the viewer's own hand; `HandUpdated` is
    /// dropped for everyone but its owner. Other events are public.
    #[must_use]
    pub fn redacted_for(&self, viewer: &PlayerId) -> Option<GameEvent> {
        match self {
            GameEvent::GameStarted { hands, turn_order, owner_id } => {
                let own: FxHashMap<PlayerId, Vec<Card>> = hands
                    .iter()
                    .filter(|(id, _)| *id == viewer)
                    .map(|(id, hand)| (id.clone(), hand.clone()))
                    .collect();
                Some(GameEvent::GameStarted {
                    hands: own,
                    turn_order: turn_order.clone(),
                    owner_id: owner_id.clone(),
                })
            }
            GameEvent::HandUpdated { player_id, .. } if player_id != viewer => None,
            other => Some(other.clone()),
        }
    }
}
