//! Rejected-action errors.
//!
//! Every error leaves the `Game` exactly as it was before the call.

use thiserror::Error;

use super::player::PlayerId;

/// Why a selected card index was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexProblem {
    /// Index is past the end of the hand.
    OutOfRange,
    /// Index was selected more than once.
    Duplicate,
}

impl std::fmt::Display for IndexProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexProblem::OutOfRange => f.write_str("out of range"),
            IndexProblem::Duplicate => f.write_str("duplicate"),
        }
    }
}

/// Errors returned by the game state machine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not enough cards for {players} players: need {needed}, deck has {available}")]
    InsufficientCards {
        players: usize,
        needed: usize,
        available: usize,
    },

    #[error("match not in progress")]
    NotPlaying,

    #[error("not {player}'s turn")]
    OutOfTurn { player: PlayerId },

    #[error("player {0} has no hand")]
    UnknownPlayer(PlayerId),

    #[error("no cards selected")]
    EmptySelection,

    #[error("card index {index} is {problem}")]
    InvalidIndex { index: usize, problem: IndexProblem },

    #[error("invalid card combination")]
    IllegalCombination,

    #[error("cannot beat current board")]
    CannotBeat,

    #[error("no cards on table to pass")]
    NoActiveBoard,

    #[error("player {0} has already finished")]
    AlreadyFinished(PlayerId),
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::OutOfTurn { player: PlayerId::from("p2") };
        assert_eq!(err.to_string(), "not p2's turn");

        let err = GameError::InvalidIndex { index: 14, problem: IndexProblem::OutOfRange };
        assert_eq!(err.to_string(), "card index 14 is out of range");

        let err = GameError::InsufficientCards { players: 5, needed: 65, available: 52 };
        assert_eq!(err.to_string(), "not enough cards for 5 players: need 65, deck has 52");
    }
}
