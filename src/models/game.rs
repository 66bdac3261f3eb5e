//! Match (game), Pair, and Side for the 2v2 round robin.

use crate::models::lenient;
use crate::models::player::{PlayerIndex, PLAYER_COUNT};
use serde::{Deserialize, Serialize};

/// Games scored by one side in a match.
pub type Score = u32;

/// Which side of a match: `t1`/`score1` or `t2`/`score2`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// Two distinct players playing on the same side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Pair([PlayerIndex; 2]);

impl Pair {
    /// Panics on invalid input; only used for the fixed schedule.
    pub(crate) const fn fixed(a: PlayerIndex, b: PlayerIndex) -> Self {
        assert!(a < PLAYER_COUNT && b < PLAYER_COUNT && a != b);
        Self([a, b])
    }

    pub fn players(&self) -> [PlayerIndex; 2] {
        self.0
    }

    pub fn contains(&self, player: PlayerIndex) -> bool {
        self.0.contains(&player)
    }

    /// The pair as an unordered key (lower index first).
    pub fn sorted(&self) -> [PlayerIndex; 2] {
        let [a, b] = self.0;
        [a.min(b), a.max(b)]
    }
}

impl TryFrom<[usize; 2]> for Pair {
    type Error = String;

    fn try_from(value: [usize; 2]) -> Result<Self, Self::Error> {
        let [a, b] = value;
        if a >= PLAYER_COUNT || b >= PLAYER_COUNT {
            return Err(format!("player index out of range in team {value:?}"));
        }
        if a == b {
            return Err(format!("team {value:?} lists the same player twice"));
        }
        Ok(Self(value))
    }
}

impl From<Pair> for [usize; 2] {
    fn from(pair: Pair) -> Self {
        pair.0
    }
}

/// A single 2v2 match and its score.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatchRecord")]
pub struct GameMatch {
    pub t1: Pair,
    pub t2: Pair,
    pub score1: Score,
    pub score2: Score,
}

/// Wire shape of a match before the team invariant is checked.
#[derive(Deserialize)]
struct MatchRecord {
    t1: Pair,
    t2: Pair,
    #[serde(default, deserialize_with = "lenient::count")]
    score1: Score,
    #[serde(default, deserialize_with = "lenient::count")]
    score2: Score,
}

impl TryFrom<MatchRecord> for GameMatch {
    type Error = String;

    fn try_from(m: MatchRecord) -> Result<Self, Self::Error> {
        if m.t1.players().iter().any(|p| m.t2.contains(*p)) {
            return Err(format!(
                "teams {:?} and {:?} share a player",
                m.t1.players(),
                m.t2.players()
            ));
        }
        Ok(Self {
            t1: m.t1,
            t2: m.t2,
            score1: m.score1,
            score2: m.score2,
        })
    }
}

impl GameMatch {
    /// Unplayed match between two pairs.
    pub const fn new(t1: Pair, t2: Pair) -> Self {
        Self {
            t1,
            t2,
            score1: 0,
            score2: 0,
        }
    }

    pub fn team(&self, side: Side) -> Pair {
        match side {
            Side::One => self.t1,
            Side::Two => self.t2,
        }
    }

    pub fn score(&self, side: Side) -> Score {
        match side {
            Side::One => self.score1,
            Side::Two => self.score2,
        }
    }

    pub fn set_score(&mut self, side: Side, score: Score) {
        match side {
            Side::One => self.score1 = score,
            Side::Two => self.score2 = score,
        }
    }

    /// Side with the strictly higher score; `None` for a tie (including 0-0).
    pub fn winner(&self) -> Option<Side> {
        match self.score1.cmp(&self.score2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Any games recorded at all.
    pub fn has_score(&self) -> bool {
        self.score1 > 0 || self.score2 > 0
    }

    pub fn total_games(&self) -> u32 {
        self.score1.saturating_add(self.score2)
    }

    /// Merge the fields present in a partial update.
    pub fn apply(&mut self, patch: &MatchPatch) {
        if let Some(s) = patch.score1 {
            self.score1 = s;
        }
        if let Some(s) = patch.score2 {
            self.score2 = s;
        }
    }
}

/// Partial update of a match: only the supplied scores change.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_option"
    )]
    pub score1: Option<Score>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_option"
    )]
    pub score2: Option<Score>,
}

impl MatchPatch {
    pub fn is_empty(&self) -> bool {
        self.score1.is_none() && self.score2.is_none()
    }
}

/// A present field is coerced like any other score; `null` counts as absent.
fn lenient_option<'de, D>(deserializer: D) -> Result<Option<Score>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(|v| lenient::coerce_count(&v)))
}
