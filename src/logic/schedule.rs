//! The fixed round-robin schedule for four players.

use crate::models::{ActiveRound, GameMatch, Pair, PLAYER_COUNT};

/// Six matches: the three possible splits of four players, each played once
/// from either side. Every pair of players appears once as `t1` and once as
/// `t2`.
pub const SCHEDULE: [GameMatch; 6] = [
    GameMatch::new(Pair::fixed(0, 1), Pair::fixed(2, 3)),
    GameMatch::new(Pair::fixed(0, 2), Pair::fixed(1, 3)),
    GameMatch::new(Pair::fixed(0, 3), Pair::fixed(1, 2)),
    GameMatch::new(Pair::fixed(1, 2), Pair::fixed(0, 3)),
    GameMatch::new(Pair::fixed(1, 3), Pair::fixed(0, 2)),
    GameMatch::new(Pair::fixed(2, 3), Pair::fixed(0, 1)),
];

/// Number of matches in a round.
pub const MATCHES_PER_ROUND: usize = SCHEDULE.len();

/// The schedule as unplayed matches.
pub fn schedule() -> Vec<GameMatch> {
    SCHEDULE.to_vec()
}

/// Fresh active round: unplayed schedule, no faults, no id/date.
pub fn new_round() -> ActiveRound {
    ActiveRound {
        matches: schedule(),
        faults: [0; PLAYER_COUNT],
        id: None,
        date: None,
    }
}
