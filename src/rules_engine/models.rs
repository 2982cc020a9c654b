use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Oval,
    Squiggle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Oval, Shape::Squiggle];
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Diamond  => write!(f, "diamond"),
            Shape::Oval     => write!(f, "oval"),
            Shape::Squiggle => write!(f, "squiggle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red    => write!(f, "red"),
            Color::Green  => write!(f, "green"),
            Color::Purple => write!(f, "purple"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl Shading {
    pub const ALL: [Shading; 3] = [Shading::Solid, Shading::Striped, Shading::Open];
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shading::Solid   => write!(f, "solid"),
            Shading::Striped => write!(f, "striped"),
            Shading::Open    => write!(f, "open"),
        }
    }
}

/// Number of symbols printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    pub fn value(self) -> u8 {
        match self {
            Count::One   => 1,
            Count::Two   => 2,
            Count::Three => 3,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// Identifier assigned once at deck generation, 0..=80 in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// One immutable SET card.
///
/// `==` compares identity and attributes; use [`Card::same_attributes`] when
/// only the printed face matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub shape: Shape,
    pub color: Color,
    pub shading: Shading,
    pub count: Count,
}

impl Card {
    pub fn new(id: u8, shape: Shape, color: Color, shading: Shading, count: Count) -> Self {
        Card { id: CardId(id), shape, color, shading, count }
    }

    /// True if all four attributes match, regardless of identifier.
    pub fn same_attributes(&self, other: &Card) -> bool {
        self.shape == other.shape
            && self.color == other.color
            && self.shading == other.shading
            && self.count == other.count
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.color, self.shading, self.shape)
    }
}

/// Three cards, either a candidate or an enumerated set.
pub type Triple = [Card; 3];

// ---------------------------------------------------------------------------
// Session configuration / outcomes
// ---------------------------------------------------------------------------

/// Parameters for a [`GameSession`](crate::rules_engine::session::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cards dealt face up at the start of a game; the board is topped up to
    /// this size after each found set while the deck lasts.
    pub initial_board_size: usize,
    pub cards_per_deal: usize,
    pub set_reward: u32,
    pub mismatch_penalty: u32,
    pub hint_penalty: u32,
    /// `Some` makes every shuffle of the session reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            initial_board_size: 12,
            cards_per_deal: 3,
            set_reward: 10,
            mismatch_penalty: 2,
            hint_penalty: 5,
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    /// Default rules with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        SessionConfig { rng_seed: Some(seed), ..SessionConfig::default() }
    }
}

/// Result of selecting one card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// The id is not on the board; nothing changed.
    NotOnBoard,
    Selected,
    Deselected,
    /// The third card completed a valid set, which left the board.
    SetFound(Triple),
    /// The third card did not complete a set; selection was cleared.
    NotASet(Triple),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    Shown(Triple),
    /// No set on the board, so more cards were dealt instead.
    NoSetDealt,
    /// No set on the board and the deck cannot supply another deal.
    NoSetDeckExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOutcome {
    Dealt(usize),
    DeckExhausted,
}

/// Scoreboard snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub sets_found: usize,
    pub hints_used: u32,
    pub board_size: usize,
    pub deck_remaining: usize,
    pub available_sets: usize,
    pub finished: bool,
    pub elapsed_secs: u64,
}
