use rand::{rngs::StdRng, Rng, SeedableRng};
use crate::rules_engine::models::{Card, Color, Count, Shading, Shape};

/// Number of distinct cards in a SET deck (3^4).
pub const DECK_SIZE: usize = 81;

/// The full Cartesian product in generation order, ids 0..=80.
///
/// Shape varies slowest and count fastest.
pub fn ordered_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut id = 0u8;
    for shape in Shape::ALL {
        for color in Color::ALL {
            for shading in Shading::ALL {
                for count in Count::ALL {
                    cards.push(Card::new(id, shape, color, shading, count));
                    id += 1;
                }
            }
        }
    }
    cards
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// All 81 cards in a uniformly random order drawn from `rng`.
pub fn generate_deck_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = ordered_deck();
    shuffle(&mut cards, rng);
    cards
}

/// All 81 cards shuffled with an entropy-seeded RNG.
pub fn generate_deck() -> Vec<Card> {
    let mut rng = StdRng::from_entropy();
    generate_deck_with(&mut rng)
}

/// A shuffled draw pile consumed from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a fresh deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Deck { cards: generate_deck_with(rng), cursor: 0 }
    }

    /// A deck that deals `cards` in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards, cursor: 0 }
    }

    /// Deal up to `n` cards; a short deck yields whatever is left.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let end = self.cursor.saturating_add(n).min(self.cards.len());
        let dealt = self.cards[self.cursor..end].to_vec();
        self.cursor = end;
        dealt
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Undealt cards, next card first.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }
}
