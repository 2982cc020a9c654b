use crate::rules_engine::{
    models::{Card, Triple},
    validator::is_valid_set,
};

/// Every valid set on `board`, each unordered triple exactly once.
///
/// Triples are produced in lexicographic order of board positions
/// `i < j < k`, so the first entry is stable for a given board layout.
pub fn find_all_sets(board: &[Card]) -> Vec<Triple> {
    let n = board.len();
    let mut sets = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let candidate = [board[i], board[j], board[k]];
                if is_valid_set(&candidate) {
                    sets.push(candidate);
                }
            }
        }
    }
    sets
}

/// Number of valid sets on `board`.
pub fn count_sets(board: &[Card]) -> usize {
    find_all_sets(board).len()
}

/// True as soon as any valid set exists on `board`.
pub fn has_set(board: &[Card]) -> bool {
    let n = board.len();
    (0..n).any(|i| {
        ((i + 1)..n).any(|j| {
            ((j + 1)..n).any(|k| is_valid_set(&[board[i], board[j], board[k]]))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules_engine::deck::{generate_deck_with, ordered_deck};
    use crate::rules_engine::models::{Color, Count, Shading, Shape};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn four_card_board() -> Vec<Card> {
        // Cards 0, 1, 3 form the only set (count 1, 2, 3).
        vec![
            Card::new(0, Shape::Oval, Color::Red, Shading::Solid, Count::One),
            Card::new(1, Shape::Oval, Color::Red, Shading::Solid, Count::Two),
            Card::new(2, Shape::Diamond, Color::Green, Shading::Solid, Count::Three),
            Card::new(3, Shape::Oval, Color::Red, Shading::Solid, Count::Three),
        ]
    }

    #[test]
    fn small_boards_have_no_sets() {
        let deck = ordered_deck();
        assert!(find_all_sets(&[]).is_empty());
        assert!(find_all_sets(&deck[..1]).is_empty());
        assert!(find_all_sets(&deck[..2]).is_empty());
        assert!(!has_set(&deck[..2]));
    }

    #[test]
    fn finds_the_single_constructed_set() {
        let board = four_card_board();
        let sets = find_all_sets(&board);
        assert_eq!(sets, vec![[board[0], board[1], board[3]]]);
        assert!(has_set(&board));
        assert_eq!(count_sets(&board), 1);
    }

    #[test]
    fn full_deck_contains_1080_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = generate_deck_with(&mut rng);
        assert_eq!(count_sets(&deck), 1080);
    }

    #[test]
    fn results_are_unique_and_in_position_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let board: Vec<Card> = generate_deck_with(&mut rng).into_iter().take(18).collect();
        let position = |c: &Card| board.iter().position(|b| b.id == c.id).unwrap();

        let sets = find_all_sets(&board);
        let keys: Vec<[usize; 3]> = sets
            .iter()
            .map(|t| [position(&t[0]), position(&t[1]), position(&t[2])])
            .collect();

        for key in &keys {
            assert!(key[0] < key[1] && key[1] < key[2], "positions not ascending: {key:?}");
        }
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.iter().collect::<HashSet<_>>().len(), keys.len());
    }

    #[test]
    fn enumeration_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let board: Vec<Card> = generate_deck_with(&mut rng).into_iter().take(15).collect();
        assert_eq!(find_all_sets(&board), find_all_sets(&board));
    }
}
