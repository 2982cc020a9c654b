//! The SET rule: for every attribute, the three values are all the same or
//! all different.

use crate::rules_engine::models::Card;

/// True if `a`, `b`, `c` are pairwise equal or pairwise distinct.
fn same_or_distinct<T: PartialEq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && b != c && a != c)
}

/// Whether `cards` form a valid set.
///
/// Anything other than exactly three cards is simply not a set. The result
/// does not depend on the order of the cards.
pub fn is_valid_set(cards: &[Card]) -> bool {
    let [a, b, c] = cards else {
        return false;
    };

    same_or_distinct(a.shape, b.shape, c.shape)
        && same_or_distinct(a.color, b.color, c.color)
        && same_or_distinct(a.shading, b.shading, c.shading)
        && same_or_distinct(a.count, b.count, c.count)
}
