//! Core rules engine — deck generation, set checking, set search and hints.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `clock`     | Injectable time source for elapsed game time |
//! | `models`    | All shared types: attributes, cards, session config and outcomes |
//! | `deck`      | 81-card deck with Fisher-Yates shuffle and front dealing |
//! | `validator` | The same-or-different rule for a triple |
//! | `finder`    | Exhaustive enumeration of valid triples on a board |
//! | `hint`      | First valid triple by board position |
//! | `session`   | Caller-owned game state built on the pure functions above |

pub mod clock;
pub mod deck;
pub mod finder;
pub mod hint;
pub mod models;
pub mod session;
pub mod validator;

// Re-export the public API surface so callers can use
// `rules_engine::find_all_sets` without reaching into sub-modules.
pub use clock::{Clock, ManualClock, SystemClock};
pub use deck::{generate_deck, generate_deck_with, Deck};
pub use finder::{count_sets, find_all_sets, has_set};
pub use hint::get_hint;
pub use models::{
    Card, CardId, Color, Count, DealOutcome, GameSummary, HintOutcome, SelectionOutcome,
    SessionConfig, Shading, Shape, Triple,
};
pub use session::GameSession;
pub use validator::is_valid_set;
