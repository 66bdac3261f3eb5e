//! Scorecard logic: schedule, stats, round loser and round commands.

mod loser;
mod schedule;
mod session;
mod stats;

pub use loser::{round_loser, round_tally, RoundTally};
pub use schedule::{new_round, schedule, MATCHES_PER_ROUND, SCHEDULE};
pub use session::{
    apply, edit_round, fill_random, finish_round, reset_round, set_fault, set_score, Command,
    Outcome, SessionError,
};
pub use stats::player_stats;
