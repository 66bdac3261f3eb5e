//! Data structures for a scorecard room: roster, matches, rounds, room state.

mod game;
pub mod lenient;
mod player;
mod room;
mod round;

pub use game::{GameMatch, MatchPatch, Pair, Score, Side};
pub use player::{
    PlayerIndex, PlayerStats, Roster, RosterError, DEFAULT_PLAYERS, NO_RESULT, PLAYER_COUNT,
};
pub use room::RoomState;
pub use round::{ActiveRound, Faults, RoundId, RoundRecord};
