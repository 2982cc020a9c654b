//! Plays one seeded game of SET to the end using hints.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows the opening board, every set taken, extra deals when the board runs
//! dry, and the final scoreboard as JSON.

use set_engine::{
    client_view::board_view, find_all_sets, GameSession, HintOutcome, SessionConfig,
};

fn print_board(session: &GameSession) {
    for (i, card) in session.board().iter().enumerate() {
        println!("  {:>2}. {:<8} {}", i, card.id.to_string(), card);
    }
    println!("  ({} sets available, {} cards in deck)",
        find_all_sets(session.board()).len(), session.deck_remaining());
}

fn main() {
    let mut session = GameSession::new(SessionConfig::seeded(42));

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Opening board");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    print_board(&session);
    println!();

    while !session.is_finished() {
        match session.request_hint() {
            HintOutcome::Shown(set) => {
                for card in set {
                    session.select(card.id);
                }
                println!("  ✓ {} | {} | {}", set[0], set[1], set[2]);
            }
            HintOutcome::NoSetDealt => {
                println!("  No set on the board — dealt 3 more ({} on board)",
                    session.board().len());
            }
            HintOutcome::NoSetDeckExhausted => break,
        }
    }

    println!();
    println!("  Final board:");
    print_board(&session);
    println!();
    match serde_json::to_string_pretty(&session.summary()) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not serialise summary: {e}"),
    }
    println!("{}", board_view(&session)["stats"]);
}
