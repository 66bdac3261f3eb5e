//! Plain-text views of a room: leaderboard, active round and history.

use std::fmt::Write;

use crate::logic::{player_stats, round_loser};
use crate::models::{GameMatch, Pair, PlayerStats, RoomState, Roster, PLAYER_COUNT};

/// One leaderboard line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaderboardRow {
    pub name: String,
    pub stats: PlayerStats,
}

/// Leaderboard rows in roster order, matching the input layout.
pub fn leaderboard(state: &RoomState, roster: &Roster) -> Vec<LeaderboardRow> {
    let stats = player_stats(&state.history);
    roster
        .names()
        .iter()
        .zip(stats)
        .map(|(name, stats)| LeaderboardRow {
            name: name.clone(),
            stats,
        })
        .collect()
}

fn pair_names(pair: Pair, roster: &Roster) -> String {
    let [a, b] = pair.players();
    format!(
        "{} & {}",
        roster.name(a).unwrap_or("?"),
        roster.name(b).unwrap_or("?")
    )
}

fn match_line(index: usize, m: &GameMatch, roster: &Roster) -> String {
    format!(
        "  {}. {:<20} {:>2} - {:<2} {}",
        index + 1,
        pair_names(m.t1, roster),
        m.score1,
        m.score2,
        pair_names(m.t2, roster)
    )
}

/// Leaderboard table.
pub fn render_leaderboard(state: &RoomState, roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>11} {:>5} {:>6} {:>6} {:>6}",
        "Player", "Rounds lost", "Wins", "Losses", "Games", "Faults"
    );
    for row in leaderboard(state, roster) {
        let s = row.stats;
        let _ = writeln!(
            out,
            "{:<12} {:>11} {:>5} {:>6} {:>6} {:>6}",
            row.name, s.rounds_lost, s.wins, s.losses, s.games_won, s.faults
        );
    }
    out
}

/// The round being played, with the loser it would currently produce.
pub fn render_active_round(state: &RoomState, roster: &Roster) -> String {
    let round = &state.current_round;
    let mut out = String::new();
    match round.id {
        Some(id) => {
            let _ = writeln!(out, "Active round (editing {}):", id);
        }
        None => {
            let _ = writeln!(out, "Active round:");
        }
    }
    for (i, m) in round.matches.iter().enumerate() {
        let _ = writeln!(out, "{}", match_line(i, m, roster));
    }
    let faults: Vec<String> = (0..PLAYER_COUNT)
        .map(|p| format!("{} {}", roster.initials(p), round.faults[p]))
        .collect();
    let _ = writeln!(out, "  Faults: {}", faults.join(", "));
    let loser = round_loser(&round.matches, Some(&round.faults));
    let _ = writeln!(out, "  Current loser: {}", roster.loser_name(loser));
    out
}

/// Completed rounds, newest first.
pub fn render_history(state: &RoomState, roster: &Roster) -> String {
    let mut out = String::new();
    if state.history.is_empty() {
        out.push_str("No completed rounds yet.\n");
        return out;
    }
    for (n, round) in state.history.iter().enumerate().rev() {
        let _ = writeln!(
            out,
            "Round {} [{}] {} - loser: {}",
            n + 1,
            round.id,
            round.date.format("%Y-%m-%d %H:%M"),
            round.loser_name
        );
        for (i, m) in round.matches.iter().enumerate() {
            let _ = writeln!(out, "{}", match_line(i, m, roster));
        }
        let faults: Vec<String> = (0..PLAYER_COUNT)
            .filter(|&p| round.faults[p] > 0)
            .map(|p| format!("{} {}", roster.initials(p), round.faults[p]))
            .collect();
        if !faults.is_empty() {
            let _ = writeln!(out, "  Faults: {}", faults.join(", "));
        }
    }
    out
}

/// Everything, in display order.
pub fn render_room(state: &RoomState, roster: &Roster) -> String {
    format!(
        "{}\n{}\n{}",
        render_leaderboard(state, roster),
        render_active_round(state, roster),
        render_history(state, roster)
    )
}
