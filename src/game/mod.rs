//! The game state machine.
//!
//! - `Game`: hands, seat order, board and finishing order for one match
//! - `GameEvent`: what changed, returned by every mutating call
//! - `Snapshot`: public view for late joiners and spectators
//!
//! Turn rotation and round resolution live in `turn`.

mod event;
mod snapshot;
mod state;
mod turn;

pub use event::GameEvent;
pub use snapshot::Snapshot;
pub use state::Game;
