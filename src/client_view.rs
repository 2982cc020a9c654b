use serde_json::{json, Value};
use crate::rules_engine::{models::Card, session::GameSession};

/// Build one card entry with its highlight flags.
fn card_entry(c: &Card, selected: bool, hinted: bool) -> Value {
    json!({
        "id": c.id.to_string(),
        "shape": c.shape.to_string(),
        "color": c.color.to_string(),
        "shading": c.shading.to_string(),
        "count": c.count.value(),
        "selected": selected,
        "hinted": hinted
    })
}

/// `m:ss`, minutes unbounded.
fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Build the stats header block.
fn stats(session: &GameSession) -> Value {
    let summary = session.summary();
    json!({
        "score": summary.score,
        "sets_found": summary.sets_found,
        "hints_used": summary.hints_used,
        "deck": summary.deck_remaining,
        "available_sets": summary.available_sets,
        "elapsed_secs": summary.elapsed_secs,
        "time": format_time(summary.elapsed_secs)
    })
}

/// Render the session as the JSON document consumed by the board screen.
pub fn board_view(session: &GameSession) -> Value {
    let contains = |cards: &[Card], c: &Card| cards.iter().any(|x| x.id == c.id);

    let board: Vec<Value> = session
        .board()
        .iter()
        .map(|c| card_entry(c, contains(session.selected(), c), contains(session.hinted(), c)))
        .collect();

    json!({
        "board": board,
        "stats": stats(session),
        "finished": session.is_finished()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules_engine::clock::ManualClock;
    use crate::rules_engine::models::{HintOutcome, SessionConfig};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn time_is_formatted_as_minutes_and_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(3_600), "60:00");
    }

    #[test]
    fn stats_carry_elapsed_time() {
        let clock = ManualClock::new();
        let session = GameSession::with_clock(SessionConfig::seeded(10), Arc::new(clock.clone()));
        clock.advance(Duration::from_secs(75));

        let view = board_view(&session);
        assert_eq!(view["stats"]["elapsed_secs"], 75);
        assert_eq!(view["stats"]["time"], "1:15");
    }

    #[test]
    fn view_lists_every_board_card() {
        let session = GameSession::new(SessionConfig::seeded(10));
        let view = board_view(&session);

        let board = view["board"].as_array().unwrap();
        assert_eq!(board.len(), 12);
        assert_eq!(board[0]["id"], session.board()[0].id.to_string());
        assert!(board[0]["id"].as_str().unwrap().starts_with("card-"));
        assert_eq!(view["stats"]["deck"], 69);
        assert_eq!(view["stats"]["score"], 0);
        assert_eq!(view["finished"], false);
    }

    #[test]
    fn view_flags_selected_and_hinted_cards() {
        let mut session = GameSession::new(SessionConfig::seeded(12));
        while session.available_sets().is_empty() {
            session.add_cards();
        }
        let HintOutcome::Shown(hint) = session.request_hint() else {
            panic!("board has a set");
        };

        let view = board_view(&session);
        let hinted: Vec<&str> = view["board"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|c| c["hinted"] == true)
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        let expected: Vec<String> = hint.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(hinted.len(), 3);
        for id in &expected {
            assert!(hinted.contains(&id.as_str()));
        }

        let first = session.board()[0].id;
        session.select(first);
        let view = board_view(&session);
        assert_eq!(view["board"][0]["selected"], true);
        assert!(view["board"].as_array().unwrap().iter().all(|c| c["hinted"] == false));
    }
}
