use crate::rules_engine::{
    finder::find_all_sets,
    models::{Card, Triple},
};

/// The first valid set on `board` by position order, or `None`.
///
/// Pure: the same board always yields the same hint.
pub fn get_hint(board: &[Card]) -> Option<Triple> {
    find_all_sets(board).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules_engine::models::{Color, Count, Shading, Shape};

    #[test]
    fn empty_board_has_no_hint() {
        assert_eq!(get_hint(&[]), None);
    }

    #[test]
    fn board_without_a_set_has_no_hint() {
        let board = [
            Card::new(0, Shape::Oval, Color::Red, Shading::Solid, Count::One),
            Card::new(1, Shape::Oval, Color::Red, Shading::Solid, Count::Two),
            Card::new(2, Shape::Diamond, Color::Red, Shading::Solid, Count::Three),
        ];
        assert_eq!(get_hint(&board), None);
    }

    #[test]
    fn picks_the_lexicographically_first_set() {
        // Both (0, 1, 2) and (1, 3, 4) are sets; (0, 1, 2) comes first.
        let board = [
            Card::new(0, Shape::Oval, Color::Red, Shading::Solid, Count::One),
            Card::new(1, Shape::Oval, Color::Red, Shading::Solid, Count::Two),
            Card::new(2, Shape::Oval, Color::Red, Shading::Solid, Count::Three),
            Card::new(3, Shape::Oval, Color::Green, Shading::Solid, Count::Two),
            Card::new(4, Shape::Oval, Color::Purple, Shading::Solid, Count::Two),
        ];
        assert_eq!(get_hint(&board), Some([board[0], board[1], board[2]]));

        // Same cards, different layout: the other set now sorts first.
        let mut reordered = board;
        reordered.swap(0, 4);
        let hint = get_hint(&reordered).unwrap();
        assert_eq!(hint, [reordered[0], reordered[1], reordered[3]]);
    }
}
