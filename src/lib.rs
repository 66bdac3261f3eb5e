//! Padel scorecard: library with models, round logic, room storage and the HTTP API.

pub mod api;
pub mod client;
pub mod config;
pub mod logic;
pub mod models;
pub mod render;
pub mod rooms;
pub mod store;

pub use logic::{
    apply, edit_round, fill_random, finish_round, new_round, player_stats, reset_round,
    round_loser, round_tally, schedule, set_fault, set_score, Command, Outcome, RoundTally,
    SessionError, MATCHES_PER_ROUND, SCHEDULE,
};
pub use models::{
    ActiveRound, Faults, GameMatch, MatchPatch, Pair, PlayerIndex, PlayerStats, RoomState, Roster,
    RosterError, RoundId, RoundRecord, Score, Side, DEFAULT_PLAYERS, NO_RESULT, PLAYER_COUNT,
};
pub use rooms::{PatchRequest, RoomError};
pub use store::{FileStore, MemoryStore, RoomStore, StoreError};
