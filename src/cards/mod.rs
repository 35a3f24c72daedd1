//! Cards, power ordering and the deck.
//!
//! - `Card`: rank/suit value type with `power()` ordering
//! - `new_deck` / `shuffle`: deterministic construction, injected randomness
//! - `sort_hand`: hands are always kept ascending by power

pub mod card;
pub mod deck;

pub use card::{format_cards, max_power, Card, RANK_COUNT, SUIT_COUNT, TWO};
pub use deck::{lowest_card, new_deck, shuffle, sort_hand, DECK_SIZE};
