//! Integration tests for the text views.

mod common;

use common::{play, room_with_rounds, REGRESSION_SCORES};
use padel_scorecard::render::{leaderboard, render_active_round, render_history, render_room};
use padel_scorecard::{RoomState, Roster};

#[test]
fn leaderboard_keeps_roster_order() {
    let state = room_with_rounds(&[(REGRESSION_SCORES, [0, 0, 1, 0])]);
    let rows = leaderboard(&state, &Roster::default());
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Lau", "Hein", "Lopper", "Hoppe"]);
    assert_eq!(rows[2].stats.rounds_lost, 1);
    assert_eq!(rows[2].stats.faults, 1);
    assert_eq!(rows[3].stats.games_won, 32);
}

#[test]
fn active_round_shows_pairs_and_provisional_loser() {
    let roster = Roster::default();
    let mut state = RoomState::default();
    let text = render_active_round(&state, &roster);
    assert!(text.contains("Lau & Hein"));
    assert!(text.contains("Current loser: N/A"));

    play(&mut state, &REGRESSION_SCORES, [0; 4]);
    let text = render_active_round(&state, &roster);
    assert!(text.contains("Current loser: Lopper"));
}

#[test]
fn history_lists_newest_first() {
    let roster = Roster::default();
    assert!(render_history(&RoomState::default(), &roster).contains("No completed rounds yet."));

    let state = room_with_rounds(&[(REGRESSION_SCORES, [0; 4]), ([(6, 4); 6], [0; 4])]);
    let text = render_history(&state, &roster);
    let second = text.find("Round 2").unwrap();
    let first = text.find("Round 1").unwrap();
    assert!(second < first);
    assert!(text.contains("loser: Lopper"));
}

#[test]
fn room_view_has_all_sections() {
    let state = room_with_rounds(&[(REGRESSION_SCORES, [0; 4])]);
    let text = render_room(&state, &Roster::default());
    assert!(text.contains("Rounds lost"));
    assert!(text.contains("Active round:"));
    assert!(text.contains("Round 1 ["));
}
