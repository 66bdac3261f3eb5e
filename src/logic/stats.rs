//! Per-player statistics over the round history.

use crate::models::{GameMatch, PlayerStats, RoundRecord, Side, PLAYER_COUNT};

/// Aggregate stats for all four players. Plain sum over rounds, so the order of
/// `history` does not matter.
pub fn player_stats(history: &[RoundRecord]) -> [PlayerStats; PLAYER_COUNT] {
    let mut stats = [PlayerStats::default(); PLAYER_COUNT];

    for round in history {
        for (s, &count) in stats.iter_mut().zip(round.faults.iter()) {
            s.faults = s.faults.saturating_add(count);
        }
        if let Some(s) = round.loser_index.and_then(|i| stats.get_mut(i)) {
            s.rounds_lost += 1;
        }
        for m in &round.matches {
            apply_match(&mut stats, m);
        }
    }

    stats
}

/// Add one match's games and win/loss to its four players. A tie counts for
/// neither side.
fn apply_match(stats: &mut [PlayerStats; PLAYER_COUNT], m: &GameMatch) {
    let winner = m.winner();
    for side in [Side::One, Side::Two] {
        for p in m.team(side).players() {
            let s = &mut stats[p];
            s.games_won = s.games_won.saturating_add(m.score(side));
            match winner {
                Some(w) if w == side => s.add_win(),
                Some(_) => s.add_loss(),
                None => {}
            }
        }
    }
}
