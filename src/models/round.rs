//! Active round and completed round records.

use crate::logic::MATCHES_PER_ROUND;
use crate::models::game::GameMatch;
use crate::models::lenient;
use crate::models::player::{PlayerIndex, PLAYER_COUNT};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fault count per player for one round.
pub type Faults = [u32; PLAYER_COUNT];

/// Identifier of a completed round: generation time in epoch milliseconds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(pub i64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RoundId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RoundId)
    }
}

/// Every stored round holds the complete schedule.
fn full_round<'de, D>(deserializer: D) -> Result<Vec<GameMatch>, D::Error>
where
    D: Deserializer<'de>,
{
    let matches = Vec::<GameMatch>::deserialize(deserializer)?;
    if matches.len() != MATCHES_PER_ROUND {
        return Err(de::Error::invalid_length(
            matches.len(),
            &"the six scheduled matches",
        ));
    }
    Ok(matches)
}

/// The round being played. `id`/`date` are only set when a completed round
/// was loaded back for editing, so finishing it again keeps its place.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRound {
    #[serde(deserialize_with = "full_round")]
    pub matches: Vec<GameMatch>,
    #[serde(default, deserialize_with = "lenient::faults")]
    pub faults: Faults,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoundId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl ActiveRound {
    /// True once any score has been entered.
    pub fn is_dirty(&self) -> bool {
        self.matches.iter().any(GameMatch::has_score)
    }
}

/// A finished round as stored in history. The loser is a snapshot taken when
/// the round was completed (or last patched).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub id: RoundId,
    pub date: DateTime<Utc>,
    #[serde(deserialize_with = "full_round")]
    pub matches: Vec<GameMatch>,
    #[serde(default, deserialize_with = "lenient::faults")]
    pub faults: Faults,
    #[serde(default, with = "lenient::loser_index")]
    pub loser_index: Option<PlayerIndex>,
    #[serde(default)]
    pub loser_name: String,
}

impl RoundRecord {
    /// Reopen this round as the active round, keeping id and date.
    pub fn reopen(self) -> ActiveRound {
        ActiveRound {
            matches: self.matches,
            faults: self.faults,
            id: Some(self.id),
            date: Some(self.date),
        }
    }
}

impl Default for ActiveRound {
    fn default() -> Self {
        crate::logic::new_round()
    }
}
