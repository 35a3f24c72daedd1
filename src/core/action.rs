//! Player actions.
//!
//! A match loop decodes client requests into `Action`s and feeds them to
//! `Game::apply`. Card selections are positions in the player's current,
//! sorted hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Hand positions selected for a play.
///
/// SmallVec keeps singles through quads (the common case) off the heap.
pub type Selection = SmallVec<[usize; 4]>;

/// A complete player action.
///
/// ```
/// use tien_len::core::Action;
///
/// let play = Action::play(&[0, 1]);
/// assert_eq!(play, Action::Play { indices: [0, 1].into_iter().collect() });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Play the cards at these hand positions.
    Play { indices: Selection },
    /// Decline to beat the board this round.
    Pass,
}

impl Action {
    /// Create a play action from hand positions.
    #[must_use]
    pub fn play(indices: &[usize]) -> Self {
        Action::Play {
            indices: SmallVec::from_slice(indices),
        }
    }
}
