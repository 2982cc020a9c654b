//! # set_engine
//!
//! Rules engine and puzzle search for the card game SET.
//!
//! Every card shows four attributes (shape, color, shading, count), each
//! with three possible values, for 81 distinct cards. Three cards form a
//! *set* when, for every attribute on its own, the values are either all the
//! same or all different.
//!
//! ## How it works
//!
//! 1. [`generate_deck`] (or [`generate_deck_with`] for a seeded RNG) builds
//!    all 81 cards and shuffles them.
//! 2. [`is_valid_set`] checks a proposed triple.
//! 3. [`find_all_sets`] enumerates every set on a board, in board-position
//!    order; [`get_hint`] returns the first one.
//! 4. [`GameSession`] owns a deck and board for one game and applies the
//!    dealing and scoring rules on top of the pure functions.
//!
//! ## Quick start
//!
//! ```rust
//! use set_engine::{find_all_sets, get_hint, GameSession, SelectionOutcome, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::seeded(42));
//! println!("{} sets on the board", find_all_sets(session.board()).len());
//!
//! if let Some(set) = get_hint(session.board()) {
//!     session.select(set[0].id);
//!     session.select(set[1].id);
//!     assert_eq!(session.select(set[2].id), SelectionOutcome::SetFound(set));
//! }
//! ```

pub mod client_view;
pub mod rules_engine;

// Convenience re-exports so callers can use `set_engine::find_all_sets`
// directly without reaching into `rules_engine::`.
pub use rules_engine::{
    count_sets, find_all_sets, generate_deck, generate_deck_with, get_hint, has_set,
    is_valid_set, Card, CardId, Clock, Color, Count, DealOutcome, Deck, GameSession,
    GameSummary, HintOutcome, ManualClock, SelectionOutcome, SessionConfig, Shading, Shape,
    SystemClock, Triple,
};
