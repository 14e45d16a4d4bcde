use crate::model::{Course, MatchFormat, MatchOutcome, RoundSummary, Strokes};
use crate::score::TeamTotals;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A round as handed over by the score store: course, cards and pairings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Scorecard {
    pub course: Course,
    #[serde(default)]
    pub played_on: Option<NaiveDate>,
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerEntry {
    pub name: String,
    #[serde(default)]
    pub handicap: f64,
    #[serde(default)]
    pub strokes: Vec<Strokes>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchEntry {
    pub format: MatchFormat,
    #[serde(default = "default_session")]
    pub session: String,
    pub side_a: Vec<String>,
    pub side_b: Vec<String>,
    /// Foursomes only: the side's single ball. Defaults to the first player's card.
    #[serde(default)]
    pub strokes_a: Option<Vec<Strokes>>,
    #[serde(default)]
    pub strokes_b: Option<Vec<Strokes>>,
    /// Four-ball only: compare net instead of gross scores.
    #[serde(default)]
    pub net: bool,
}

fn default_session() -> String {
    "Matches".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerResult {
    pub name: String,
    pub position: usize,
    pub summary: RoundSummary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchView {
    pub session: String,
    pub format: MatchFormat,
    pub side_a: Vec<String>,
    pub side_b: Vec<String>,
    pub outcome: MatchOutcome,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoredRound {
    pub course_name: String,
    pub played_on: Option<NaiveDate>,
    pub holes: u32,
    /// Ordered by Stableford points, best first.
    pub players: Vec<PlayerResult>,
    pub matches: Vec<MatchView>,
    pub team: TeamTotals,
}
