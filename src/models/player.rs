//! Roster and PlayerStats data structures.

use serde::{Deserialize, Serialize};

/// A session is always played by exactly four players.
pub const PLAYER_COUNT: usize = 4;

/// Index of a player in the roster (0..4).
pub type PlayerIndex = usize;

/// Names used when nothing else is configured.
pub const DEFAULT_PLAYERS: [&str; PLAYER_COUNT] = ["Lau", "Hein", "Lopper", "Hoppe"];

/// Shown instead of a loser name when a round has no result.
pub const NO_RESULT: &str = "N/A";

/// Errors building a roster.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("Roster needs exactly 4 players (got {0})")]
    WrongSize(usize),
    #[error("Player names must not be empty")]
    EmptyName,
    #[error("Duplicate player name: {0}")]
    DuplicateName(String),
}

/// The ordered list of player names; indices in matches point into it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    names: [String; PLAYER_COUNT],
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            names: DEFAULT_PLAYERS.map(str::to_string),
        }
    }
}

impl Roster {
    /// Build a roster from four names. Names are trimmed; they must be non-empty
    /// and unique (case-insensitive).
    pub fn new<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();
        if names.iter().any(String::is_empty) {
            return Err(RosterError::EmptyName);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].iter().any(|n| n.eq_ignore_ascii_case(name)) {
                return Err(RosterError::DuplicateName(name.clone()));
            }
        }
        let len = names.len();
        let names: [String; PLAYER_COUNT] =
            names.try_into().map_err(|_| RosterError::WrongSize(len))?;
        Ok(Self { names })
    }

    /// Parse a comma-separated list, e.g. `"Lau,Hein,Lopper,Hoppe"`.
    pub fn parse(list: &str) -> Result<Self, RosterError> {
        Self::new(list.split(','))
    }

    pub fn names(&self) -> &[String; PLAYER_COUNT] {
        &self.names
    }

    /// Name for a player index, if it is in range.
    pub fn name(&self, index: PlayerIndex) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Name for an optional loser, `N/A` when there is none.
    pub fn loser_name(&self, loser: Option<PlayerIndex>) -> String {
        loser
            .and_then(|i| self.name(i))
            .unwrap_or(NO_RESULT)
            .to_string()
    }

    /// Two-letter initials used in compact views.
    pub fn initials(&self, index: PlayerIndex) -> String {
        self.name(index)
            .map(|n| n.chars().take(2).collect::<String>().to_uppercase())
            .unwrap_or_default()
    }
}

/// Aggregated statistics for one player across all completed rounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub wins: u32,
    pub losses: u32,
    pub games_won: u32,
    pub faults: u32,
    pub rounds_lost: u32,
}

impl PlayerStats {
    /// Record a won match.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Record a lost match.
    pub fn add_loss(&mut self) {
        self.losses += 1;
    }
}
