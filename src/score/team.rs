use crate::error::ScoringError;
use crate::model::{
    HoleResult, MatchFormat, MatchOutcome, MatchState, Side, Strokes, TeamPoints, played,
};
use crate::score::handicap::net_strokes;
use crate::score::match_play::{compare_nets, entered_prefix, match_play_status};
use crate::score::notation::{Notation, parse_notation};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const RYDER_CUP_HOLES: u32 = 18;

fn best_ball(scores: impl IntoIterator<Item = Option<i64>>) -> Option<i64> {
    scores.into_iter().flatten().min()
}

/// Better-ball hole: each side's lowest gross score counts.
///
/// Undecided until both sides have at least one score on the hole.
#[must_use]
pub fn four_ball_result(team_a: &[Strokes], team_b: &[Strokes]) -> HoleResult {
    let gross = |s: &Strokes| played(*s).map(i64::from);
    match (
        best_ball(team_a.iter().map(gross)),
        best_ball(team_b.iter().map(gross)),
    ) {
        (Some(a), Some(b)) => compare_nets(a, b),
        _ => HoleResult::Halved,
    }
}

/// Better-ball hole on net scores; each entry is a player's strokes and handicap.
#[must_use]
pub fn four_ball_net_result(
    team_a: &[(Strokes, f64)],
    team_b: &[(Strokes, f64)],
    stroke_index: u32,
) -> HoleResult {
    let net = |(s, h): &(Strokes, f64)| played(*s).map(|g| net_strokes(g, stroke_index, *h));
    match (
        best_ball(team_a.iter().map(net)),
        best_ball(team_b.iter().map(net)),
    ) {
        (Some(a), Some(b)) => compare_nets(a, b),
        _ => HoleResult::Halved,
    }
}

/// Alternate-shot hole: one ball, one score per side.
#[must_use]
pub fn foursomes_result(score_a: Strokes, score_b: Strokes) -> HoleResult {
    match (played(score_a), played(score_b)) {
        (Some(a), Some(b)) => compare_nets(i64::from(a), i64::from(b)),
        _ => HoleResult::Halved,
    }
}

/// Hole-by-hole better-ball results over the holes entered so far.
#[must_use]
pub fn four_ball_hole_results(side_a: &[&[Strokes]], side_b: &[&[Strokes]]) -> Vec<HoleResult> {
    let holes = side_a
        .iter()
        .chain(side_b)
        .map(|card| card.len())
        .max()
        .unwrap_or(0);
    let hole_scores = |side: &[&[Strokes]], i: usize| -> Vec<Strokes> {
        side.iter().map(|card| card.get(i).copied().flatten()).collect()
    };
    let has_score = |side: &[&[Strokes]], i: usize| {
        side.iter()
            .any(|card| played(card.get(i).copied().flatten()).is_some())
    };
    let entered = entered_prefix((0..holes).map(|i| has_score(side_a, i) && has_score(side_b, i)));
    (0..entered)
        .map(|i| four_ball_result(&hole_scores(side_a, i), &hole_scores(side_b, i)))
        .collect()
}

/// Hole-by-hole alternate-shot results over the holes entered so far.
#[must_use]
pub fn foursomes_hole_results(side_a: &[Strokes], side_b: &[Strokes]) -> Vec<HoleResult> {
    let entered = entered_prefix(
        side_a
            .iter()
            .zip(side_b)
            .map(|(a, b)| played(*a).is_some() && played(*b).is_some()),
    );
    side_a
        .iter()
        .zip(side_b)
        .take(entered)
        .map(|(a, b)| foursomes_result(*a, *b))
        .collect()
}

/// Points for one 18-hole team match.
///
/// A match only scores once it is settled: decided early, or halved after
/// all 18 holes. A live match is worth nothing to either side yet.
#[must_use]
pub fn ryder_cup_points(results: &[HoleResult], holes_played: u32) -> TeamPoints {
    let remaining = RYDER_CUP_HOLES.saturating_sub(holes_played);
    let status = match_play_status(results);
    match status.leader() {
        Some(leader) if status.difference > remaining => TeamPoints::for_winner(leader),
        None if holes_played >= RYDER_CUP_HOLES => TeamPoints::HALVED,
        _ => TeamPoints::NONE,
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordedResult {
    Won(Side),
    Halved,
    Live,
}

impl RecordedResult {
    #[must_use]
    pub fn from_outcome(outcome: &MatchOutcome) -> Self {
        match (outcome.state, outcome.winner()) {
            (MatchState::Decided, Some(side)) => Self::Won(side),
            (MatchState::AllSquareFinal, _) => Self::Halved,
            _ => Self::Live,
        }
    }

    /// Rebuilds a result from a stored notation.
    ///
    /// Notations do not say which side is ahead, so `leader` must be given for
    /// anything but all square. `finished` tells a final `"1 UP"` from a live one.
    ///
    /// # Errors
    /// Returns an error if the notation cannot be parsed or a leader is missing.
    pub fn from_notation(
        notation: &str,
        leader: Option<Side>,
        finished: bool,
    ) -> Result<Self, ScoringError> {
        let parsed = parse_notation(notation)?;
        if parsed == Notation::AllSquare {
            return Ok(if finished { Self::Halved } else { Self::Live });
        }
        let leader = leader.ok_or_else(|| {
            ScoringError::NotFound(format!("leading side for notation '{parsed}'"))
        })?;
        if parsed.is_terminal() || finished {
            Ok(Self::Won(leader))
        } else {
            Ok(Self::Live)
        }
    }

    #[must_use]
    pub fn points(&self) -> TeamPoints {
        match self {
            Self::Won(side) => TeamPoints::for_winner(*side),
            Self::Halved => TeamPoints::HALVED,
            Self::Live => TeamPoints::NONE,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchRecord {
    pub session: String,
    pub format: MatchFormat,
    pub side_a: Vec<String>,
    pub side_b: Vec<String>,
    pub result: RecordedResult,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionTotals {
    pub session: String,
    pub points: TeamPoints,
    pub matches_finished: usize,
    pub matches_live: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TeamTotals {
    pub overall: TeamPoints,
    /// In order of first appearance.
    pub sessions: Vec<SessionTotals>,
}

/// Sums team points over every recorded match.
#[must_use]
pub fn team_points(records: &[MatchRecord]) -> TeamTotals {
    let mut session_index: HashMap<&str, usize, RandomState> = HashMap::default();
    let mut totals = TeamTotals::default();

    for record in records {
        let idx = *session_index
            .entry(record.session.as_str())
            .or_insert_with(|| {
                totals.sessions.push(SessionTotals {
                    session: record.session.clone(),
                    points: TeamPoints::NONE,
                    matches_finished: 0,
                    matches_live: 0,
                });
                totals.sessions.len() - 1
            });
        let points = record.result.points();
        let session = &mut totals.sessions[idx];
        session.points += points;
        match record.result {
            RecordedResult::Live => session.matches_live += 1,
            _ => session.matches_finished += 1,
        }
        totals.overall += points;
    }

    log::trace!(
        "team points over {} matches: {} - {}",
        records.len(),
        totals.overall.side_a,
        totals.overall.side_b
    );
    totals
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PlayerRecord {
    pub won: u32,
    pub halved: u32,
    pub lost: u32,
}

/// Won-halved-lost per player; in pairs formats both partners share the result.
#[must_use]
pub fn player_records(records: &[MatchRecord]) -> HashMap<String, PlayerRecord, RandomState> {
    let mut by_player: HashMap<String, PlayerRecord, RandomState> = HashMap::default();
    for record in records {
        for (side, players) in [(Side::A, &record.side_a), (Side::B, &record.side_b)] {
            for player in players {
                let entry = by_player.entry(player.clone()).or_default();
                match record.result {
                    RecordedResult::Won(winner) if winner == side => entry.won += 1,
                    RecordedResult::Won(_) => entry.lost += 1,
                    RecordedResult::Halved => entry.halved += 1,
                    RecordedResult::Live => {}
                }
            }
        }
    }
    by_player
}
