//! Core engine types: players, RNG, configuration, actions, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_HAND_SIZE};
pub use action::{Action, Selection};
pub use error::{GameError, IndexProblem, Result};
