//! Round loser: the player ranked worst within a single round.
//!
//! Ranking, worst first:
//! 1. fewest matches won,
//! 2. fewest games won,
//! 3. most faults.
//!
//! A tie on all three goes to the lowest player index. A round without any
//! recorded games has no loser.

use crate::models::{Faults, GameMatch, PlayerIndex, Side, PLAYER_COUNT};
use std::cmp::Reverse;

/// Wins and games for one player within a round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RoundTally {
    pub wins: u32,
    pub games: u32,
}

/// Wins and games per player over one round's matches. Game counts saturate
/// at `u32::MAX`.
pub fn round_tally(matches: &[GameMatch]) -> [RoundTally; PLAYER_COUNT] {
    let mut tally = [RoundTally::default(); PLAYER_COUNT];
    for m in matches {
        let winner = m.winner();
        for side in [Side::One, Side::Two] {
            for p in m.team(side).players() {
                tally[p].games = tally[p].games.saturating_add(m.score(side));
                if winner == Some(side) {
                    tally[p].wins += 1;
                }
            }
        }
    }
    tally
}

/// Index of the round loser, or `None` while no games have been recorded.
/// Without `faults` the fault tie-break is skipped.
pub fn round_loser(matches: &[GameMatch], faults: Option<&Faults>) -> Option<PlayerIndex> {
    if matches.iter().all(|m| m.total_games() == 0) {
        return None;
    }

    let tally = round_tally(matches);
    let no_faults = [0; PLAYER_COUNT];
    let faults = faults.unwrap_or(&no_faults);

    // min_by_key keeps the first of equal elements: lowest index wins ties.
    (0..PLAYER_COUNT).min_by_key(|&p| (tally[p].wins, tally[p].games, Reverse(faults[p])))
}
