//! Helpers shared by the integration tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use padel_scorecard::{
    finish_round, new_round, set_fault, set_score, RoomState, Roster, RoundRecord, Side,
};

/// Scores from the regression vector, in schedule order.
pub const REGRESSION_SCORES: [(u32, u32); 6] = [(6, 4), (2, 6), (6, 2), (1, 6), (6, 3), (4, 6)];

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

/// Fill the active round with the given scores and faults.
pub fn play(state: &mut RoomState, scores: &[(u32, u32)], faults: [u32; 4]) {
    for (i, &(s1, s2)) in scores.iter().enumerate() {
        set_score(state, i, Side::One, s1).unwrap();
        set_score(state, i, Side::Two, s2).unwrap();
    }
    for (p, &f) in faults.iter().enumerate() {
        set_fault(state, p, f).unwrap();
    }
}

/// A room whose history holds one finished round per entry of `rounds`,
/// finished one minute apart.
pub fn room_with_rounds(rounds: &[([(u32, u32); 6], [u32; 4])]) -> RoomState {
    let roster = Roster::default();
    let mut state = RoomState {
        history: Vec::new(),
        current_round: new_round(),
    };
    for (n, (scores, faults)) in rounds.iter().enumerate() {
        play(&mut state, scores, *faults);
        finish_round(&mut state, &roster, at(60 * n as i64));
    }
    state
}

pub fn regression_round() -> RoundRecord {
    room_with_rounds(&[(REGRESSION_SCORES, [0; 4])]).history.remove(0)
}
