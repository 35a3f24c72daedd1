//! # tien-len
//!
//! Rules engine for Tiến Lên, the Vietnamese shedding game for up to four
//! players.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: no I/O, no blocking, no global state. A match loop owns
//!    one `Game` and calls it one action at a time.
//!
//! 2. **Events out**: every mutating call returns the ordered `GameEvent`s it
//!    caused. The transport layer translates them; the core never calls back.
//!
//! 3. **Injected randomness**: seat and deck shuffles draw from a `GameRng`
//!    the caller passes to `Game::start`, so any deal can be replayed from a
//!    seed.
//!
//! ## Example
//!
//! ```
//! use tien_len::{Game, GameEvent, GameRng, PlayerId};
//!
//! let players: Vec<PlayerId> = ["ana", "bao", "chi"].into_iter().map(PlayerId::from).collect();
//! let mut game = Game::new();
//! let events = game.start(&players, players[0].clone(), None, &mut GameRng::new(7)).unwrap();
//!
//! let leader = match &events[1] {
//!     GameEvent::TurnChanged { active_player_id, .. } => active_player_id.clone(),
//!     _ => unreachable!(),
//! };
//! // Lead with the lowest card.
//! let events = game.play_cards(&leader, &[0]).unwrap();
//! assert!(matches!(events[0], GameEvent::HandUpdated { .. }));
//! assert_eq!(game.hand_of(&leader).unwrap().len(), 12);
//! ```
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, actions, errors
//! - `cards`: card values, power ordering, deck
//! - `rules`: combination shapes, beating the board, move hints
//! - `game`: the state machine, events and snapshots

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, GameConfig, GameError, GameRng, GameRngState, IndexProblem, PlayerId, Result,
    Selection,
};

pub use crate::cards::{new_deck, shuffle, sort_hand, Card};

pub use crate::rules::{
    beats, can_beat, classify, has_valid_move, is_valid_set, legal_plays, Combination, Ruleset,
};

pub use crate::game::{Game, GameEvent, Snapshot};
