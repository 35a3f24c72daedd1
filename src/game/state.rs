//! The Tiến Lên state machine.
//!
//! ## Lifecycle
//!
//! `Game::new()` is idle. `start` deals and makes it playing; `play_cards`
//! and `pass` mutate it one action at a time; it goes idle again once all but
//! one player have emptied their hands. The same instance is reused for the
//! next game.
//!
//! ## Validation
//!
//! Every mutator validates fully before writing anything. On `Err` the game
//! is exactly as it was.

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use super::event::GameEvent;
use super::snapshot::Snapshot;
use crate::cards::{deck, format_cards, lowest_card, new_deck, sort_hand, Card};
use crate::core::{Action, GameConfig, GameError, GameRng, IndexProblem, PlayerId, Result, Selection};
use crate::rules::{self, beats, is_valid_set};

/// Per-match game state.
///
/// Not internally synchronized: one owner calls it sequentially.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) hands: FxHashMap<PlayerId, Vec<Card>>,
    pub(super) turn_order: Vec<PlayerId>,
    pub(super) current_idx: usize,
    /// Last legal play; empty when the table is clear.
    pub(super) board: Vec<Card>,
    /// Owner of `board`. `Some` iff `board` is non-empty.
    pub(super) last_actor: Option<PlayerId>,
    /// Passed since `last_actor` claimed the board.
    pub(super) round_skippers: FxHashSet<PlayerId>,
    pub(super) owner_id: Option<PlayerId>,
    pub(super) playing: bool,
    /// Finishing order, first place first.
    pub(super) winners: Vec<PlayerId>,
    pub(super) finished: FxHashSet<PlayerId>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create an idle game with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create an idle game with a custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            hands: FxHashMap::default(),
            turn_order: Vec::new(),
            current_idx: 0,
            board: Vec::new(),
            last_actor: None,
            round_skippers: FxHashSet::default(),
            owner_id: None,
            playing: false,
            winners: Vec::with_capacity(3),
            finished: FxHashSet::default(),
        }
    }

    // === Lifecycle ===

    /// Shuffle seats and deck, deal, and pick who leads.
    ///
    /// `last_winner_id` (the previous game's `GameOver` winner) leads if
    /// seated; otherwise the holder of the lowest card leads.
    pub fn start(
        &mut self,
        players: &[PlayerId],
        owner_id: PlayerId,
        last_winner_id: Option<&PlayerId>,
        rng: &mut GameRng,
    ) -> Result<Vec<GameEvent>> {
        validate_players(players)?;

        let mut turn_order = players.to_vec();
        rng.shuffle(&mut turn_order);
        let cards = deck::shuffle(&new_deck(), rng);

        self.start_with_deck(turn_order, cards, owner_id, last_winner_id)
    }

    /// Start with a fixed seat order and deck, for replays and tests.
    ///
    /// Seat `i` receives `cards[i * hand_size..(i + 1) * hand_size]`; any
    /// surplus cards are left undealt.
    pub fn start_with_deck(
        &mut self,
        turn_order: Vec<PlayerId>,
        cards: Vec<Card>,
        owner_id: PlayerId,
        last_winner_id: Option<&PlayerId>,
    ) -> Result<Vec<GameEvent>> {
        validate_players(&turn_order)?;

        let hand_size = self.config.hand_size;
        if hand_size == 0 {
            return Err(GameError::InvalidArgument("hand size must be at least 1".into()));
        }
        let needed = turn_order.len() * hand_size;
        if cards.len() < needed {
            return Err(GameError::InsufficientCards {
                players: turn_order.len(),
                needed,
                available: cards.len(),
            });
        }
        if let Some(bad) = cards.iter().find(|c| Card::try_new(c.rank, c.suit).is_none()) {
            return Err(GameError::InvalidArgument(format!(
                "card out of range: rank {}, suit {}",
                bad.rank, bad.suit
            )));
        }
        let mut seen = FxHashSet::default();
        if !cards.iter().all(|c| seen.insert(*c)) {
            return Err(GameError::InvalidArgument("deck contains duplicate cards".into()));
        }

        let hands: FxHashMap<PlayerId, Vec<Card>> = turn_order
            .iter()
            .enumerate()
            .map(|(seat, id)| {
                let mut hand = cards[seat * hand_size..(seat + 1) * hand_size].to_vec();
                sort_hand(&mut hand);
                (id.clone(), hand)
            })
            .collect();

        let leader = last_winner_id
            .and_then(|w| turn_order.iter().position(|id| id == w))
            .unwrap_or_else(|| lowest_card_seat(&turn_order, &hands));

        self.hands = hands;
        self.turn_order = turn_order;
        self.current_idx = leader;
        self.board.clear();
        self.last_actor = None;
        self.round_skippers.clear();
        self.owner_id = Some(owner_id.clone());
        self.winners.clear();
        self.finished.clear();
        self.playing = true;

        info!(
            "Game started: {} players, {} leads",
            self.turn_order.len(),
            self.turn_order[leader]
        );

        Ok(vec![
            GameEvent::GameStarted {
                hands: self.hands.clone(),
                turn_order: self.turn_order.clone(),
                owner_id,
            },
            self.turn_changed(),
        ])
    }

    // === Player actions ===

    /// Play the cards at `indices` of the player's sorted hand.
    pub fn play_cards(&mut self, player_id: &PlayerId, indices: &[usize]) -> Result<Vec<GameEvent>> {
        self.ensure_turn(player_id)?;
        let hand = self
            .hands
            .get(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.clone()))?;
        if indices.is_empty() {
            return Err(GameError::EmptySelection);
        }
        validate_indices(indices, hand.len())?;

        let selection: Vec<Card> = indices.iter().map(|&i| hand[i]).collect();
        if !is_valid_set(&selection) {
            return Err(GameError::IllegalCombination);
        }
        if !self.board.is_empty() && !beats(&self.board, &selection, self.config.ruleset) {
            return Err(GameError::CannotBeat);
        }

        let mut remaining: Vec<Card> = hand
            .iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, c)| *c)
            .collect();
        sort_hand(&mut remaining);

        debug!("{} plays {}", player_id, format_cards(&selection));

        self.board = selection;
        self.last_actor = Some(player_id.clone());
        self.round_skippers.clear();
        self.hands.insert(player_id.clone(), remaining.clone());

        let mut events = vec![GameEvent::HandUpdated {
            player_id: player_id.clone(),
            hand: remaining.clone(),
        }];

        if remaining.is_empty() {
            self.winners.push(player_id.clone());
            self.finished.insert(player_id.clone());
            let rank = self.winners.len();
            debug!("{} finished in place {}", player_id, rank);
            events.push(GameEvent::PlayerFinished {
                player_id: player_id.clone(),
                rank,
            });

            if self.is_decided() {
                self.playing = false;
                let winner_id = self.winners[0].clone();
                info!("Game over: {} wins", winner_id);
                events.push(GameEvent::GameOver { winner_id });
                return Ok(events);
            }
        }

        events.extend(self.advance_turn());
        Ok(events)
    }

    /// Decline to beat the board for the rest of this round.
    pub fn pass(&mut self, player_id: &PlayerId) -> Result<Vec<GameEvent>> {
        self.ensure_turn(player_id)?;
        if self.last_actor.is_none() {
            return Err(GameError::NoActiveBoard);
        }
        if self.finished.contains(player_id) {
            return Err(GameError::AlreadyFinished(player_id.clone()));
        }

        debug!("{} passes", player_id);
        self.round_skippers.insert(player_id.clone());
        Ok(self.advance_turn())
    }

    /// Apply a decoded client action.
    pub fn apply(&mut self, player_id: &PlayerId, action: &Action) -> Result<Vec<GameEvent>> {
        match action {
            Action::Play { indices } => self.play_cards(player_id, indices),
            Action::Pass => self.pass(player_id),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Was `player_id` dealt into the current (or last) game?
    #[must_use]
    pub fn has_player(&self, player_id: &PlayerId) -> bool {
        self.hands.contains_key(player_id)
    }

    /// Copy of a player's hand, sorted by power.
    #[must_use]
    pub fn hand_of(&self, player_id: &PlayerId) -> Option<Vec<Card>> {
        self.hands.get(player_id).cloned()
    }

    /// Player to act, if any seats are dealt.
    #[must_use]
    pub fn active_player(&self) -> Option<&PlayerId> {
        self.turn_order.get(self.current_idx)
    }

    /// Combination to beat.
    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Finishing order so far.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// Selections `player_id` could legally play right now.
    ///
    /// Empty when it is not their turn or no game is running.
    #[must_use]
    pub fn legal_plays(&self, player_id: &PlayerId) -> Vec<Selection> {
        if self.ensure_turn(player_id).is_err() {
            return Vec::new();
        }
        match self.hands.get(player_id) {
            Some(hand) => rules::legal_plays(hand, &self.board, self.config.ruleset),
            None => Vec::new(),
        }
    }

    /// Public view of the game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            is_playing: self.playing,
            owner_id: self.owner_id.clone(),
            board: self.board.clone(),
            board_owner_id: self.last_actor.clone(),
            active_player_id: self.active_player().cloned(),
            turn_order: self.turn_order.clone(),
            winners: self.winners.clone(),
            finished_players: self.finished.clone(),
            hand_counts: self
                .hands
                .iter()
                .map(|(id, hand)| (id.clone(), hand.len()))
                .collect(),
        }
    }

    // === Internals ===

    fn ensure_turn(&self, player_id: &PlayerId) -> Result<()> {
        if !self.playing {
            return Err(GameError::NotPlaying);
        }
        if self.active_player() != Some(player_id) {
            return Err(GameError::OutOfTurn {
                player: player_id.clone(),
            });
        }
        Ok(())
    }

    /// All but one seat have finished. A lone seat is decided once it finishes.
    fn is_decided(&self) -> bool {
        let needed = self.turn_order.len().saturating_sub(1).max(1);
        self.winners.len() >= needed
    }

    pub(super) fn turn_changed(&self) -> GameEvent {
        GameEvent::TurnChanged {
            active_player_id: self.turn_order[self.current_idx].clone(),
            board: self.board.clone(),
        }
    }
}

fn validate_players(players: &[PlayerId]) -> Result<()> {
    if players.is_empty() {
        return Err(GameError::InvalidArgument("no players provided".into()));
    }
    let mut seen = FxHashSet::default();
    for id in players {
        if !seen.insert(id) {
            return Err(GameError::InvalidArgument(format!("player {} seated twice", id)));
        }
    }
    Ok(())
}

fn validate_indices(indices: &[usize], hand_size: usize) -> Result<()> {
    let mut seen = FxHashSet::default();
    for &index in indices {
        if index >= hand_size {
            return Err(GameError::InvalidIndex {
                index,
                problem: IndexProblem::OutOfRange,
            });
        }
        if !seen.insert(index) {
            return Err(GameError::InvalidIndex {
                index,
                problem: IndexProblem::Duplicate,
            });
        }
    }
    Ok(())
}

fn lowest_card_seat(turn_order: &[PlayerId], hands: &FxHashMap<PlayerId, Vec<Card>>) -> usize {
    turn_order
        .iter()
        .enumerate()
        .filter_map(|(seat, id)| hands.get(id).and_then(|h| lowest_card(h)).map(|c| (seat, c.power())))
        .min_by_key(|&(_, power)| power)
        .map(|(seat, _)| seat)
        .unwrap_or(0)
}
