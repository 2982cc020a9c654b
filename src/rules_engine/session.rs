//! Caller-owned game state: draw pile, board, selection and score.
//!
//! The rules functions never see this object; the session calls into them
//! with its current board and applies the results.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::{rngs::StdRng, SeedableRng};

use crate::rules_engine::{
    clock::{Clock, SystemClock},
    deck::Deck,
    finder::{count_sets, find_all_sets, has_set},
    hint::get_hint,
    models::*,
    validator::is_valid_set,
};

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    rng: StdRng,
    deck: Deck,
    board: Vec<Card>,
    selected: Vec<Card>,
    hinted: Vec<Card>,
    found_sets: Vec<Triple>,
    score: u32,
    hints_used: u32,
    clock: Arc<dyn Clock>,
    started_at: Instant,
}

fn session_rng(config: &SessionConfig) -> StdRng {
    match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

impl GameSession {
    /// Shuffle a deck and deal the opening board.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Like [`GameSession::new`], timing the game with `clock`.
    pub fn with_clock(config: SessionConfig, clock: Arc<dyn Clock>) -> Self {
        let mut rng = session_rng(&config);
        let deck = Deck::new_shuffled(&mut rng);
        Self::start(config, rng, deck, clock)
    }

    /// Play a prepared deck instead of a freshly shuffled one. Later calls to
    /// [`GameSession::new_game`] shuffle normally.
    pub fn from_deck(config: SessionConfig, deck: Deck, clock: Arc<dyn Clock>) -> Self {
        let rng = session_rng(&config);
        Self::start(config, rng, deck, clock)
    }

    fn start(config: SessionConfig, rng: StdRng, mut deck: Deck, clock: Arc<dyn Clock>) -> Self {
        let board = deck.deal(config.initial_board_size);
        debug!("new game: {} cards on board, {} in deck", board.len(), deck.remaining());
        let started_at = clock.now();

        GameSession {
            config,
            rng,
            deck,
            board,
            selected: Vec::new(),
            hinted: Vec::new(),
            found_sets: Vec::new(),
            score: 0,
            hints_used: 0,
            clock,
            started_at,
        }
    }

    /// Discard everything and start over on the same RNG stream.
    pub fn new_game(&mut self) {
        self.deck = Deck::new_shuffled(&mut self.rng);
        self.board = self.deck.deal(self.config.initial_board_size);
        self.selected.clear();
        self.hinted.clear();
        self.found_sets.clear();
        self.score = 0;
        self.hints_used = 0;
        self.started_at = self.clock.now();
        debug!("game reset: {} cards on board", self.board.len());
    }

    /// Toggle `id` in the selection and resolve it once three cards are chosen.
    ///
    /// Any press hides the current hint, even one on a card not on the board.
    pub fn select(&mut self, id: CardId) -> SelectionOutcome {
        self.hinted.clear();
        let Some(card) = self.board.iter().copied().find(|c| c.id == id) else {
            return SelectionOutcome::NotOnBoard;
        };

        if let Some(pos) = self.selected.iter().position(|c| c.id == id) {
            self.selected.remove(pos);
            return SelectionOutcome::Deselected;
        }

        self.selected.push(card);
        if self.selected.len() < 3 {
            return SelectionOutcome::Selected;
        }

        let triple = [self.selected[0], self.selected[1], self.selected[2]];
        self.selected.clear();

        if is_valid_set(&triple) {
            self.board.retain(|c| !triple.iter().any(|t| t.id == c.id));
            self.refill_after_set();
            self.found_sets.push(triple);
            self.score += self.config.set_reward;
            debug!(
                "set found: {} / {} / {} (score {})",
                triple[0].id, triple[1].id, triple[2].id, self.score
            );
            SelectionOutcome::SetFound(triple)
        } else {
            self.score = self.score.saturating_sub(self.config.mismatch_penalty);
            trace!("not a set: {} / {} / {}", triple[0].id, triple[1].id, triple[2].id);
            SelectionOutcome::NotASet(triple)
        }
    }

    /// Top the board back up after a set left it, then add one extra deal
    /// if what remains has no set.
    fn refill_after_set(&mut self) {
        if self.board.len() < self.config.initial_board_size {
            self.deal_once();
        }
        if !has_set(&self.board) {
            self.deal_once();
        }
    }

    /// Deal exactly `cards_per_deal` cards, or nothing if the deck is short.
    fn deal_once(&mut self) -> DealOutcome {
        let n = self.config.cards_per_deal;
        if n == 0 || self.deck.remaining() < n {
            return DealOutcome::DeckExhausted;
        }
        let dealt = self.deck.deal(n);
        trace!("dealt {} cards, {} left in deck", dealt.len(), self.deck.remaining());
        self.board.extend(dealt);
        DealOutcome::Dealt(n)
    }

    /// Deal one more batch onto the board on the player's request.
    pub fn add_cards(&mut self) -> DealOutcome {
        let outcome = self.deal_once();
        if outcome == DealOutcome::DeckExhausted {
            debug!(
                "deck exhausted: final score {}, {} sets found",
                self.score,
                self.found_sets.len()
            );
        }
        outcome
    }

    /// Show the first available set, or deal more cards if there is none.
    pub fn request_hint(&mut self) -> HintOutcome {
        match get_hint(&self.board) {
            Some(triple) => {
                self.hints_used += 1;
                self.score = self.score.saturating_sub(self.config.hint_penalty);
                self.hinted = triple.to_vec();
                HintOutcome::Shown(triple)
            }
            None => match self.add_cards() {
                DealOutcome::Dealt(_)      => HintOutcome::NoSetDealt,
                DealOutcome::DeckExhausted => HintOutcome::NoSetDeckExhausted,
            },
        }
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    /// Cards of the last hint, cleared by the next selection.
    pub fn hinted(&self) -> &[Card] {
        &self.hinted
    }

    pub fn found_sets(&self) -> &[Triple] {
        &self.found_sets
    }

    pub fn available_sets(&self) -> Vec<Triple> {
        find_all_sets(&self.board)
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Time since the game started or was last reset.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started_at)
    }

    /// No set on the board and the deck cannot supply another deal.
    pub fn is_finished(&self) -> bool {
        self.deck.remaining() < self.config.cards_per_deal.max(1) && !has_set(&self.board)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            sets_found: self.found_sets.len(),
            hints_used: self.hints_used,
            board_size: self.board.len(),
            deck_remaining: self.deck.remaining(),
            available_sets: count_sets(&self.board),
            finished: self.is_finished(),
            elapsed_secs: self.elapsed().as_secs(),
        }
    }
}
