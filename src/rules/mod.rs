//! Combination rules.
//!
//! - `classify` / `is_valid_set`: is a set of cards a legal play?
//! - `can_beat` / `beats`: does a play beat the current board?
//! - `legal_plays` / `has_valid_move`: hints for the player to act
//!
//! Nothing here knows about turns or players; the `game` module calls in.

pub mod combination;
pub mod compare;
pub mod hints;

pub use combination::{classify, is_valid_set, Combination};
pub use compare::{beats, can_beat, Ruleset};
pub use hints::{candidate_plays, has_valid_move, legal_plays};
