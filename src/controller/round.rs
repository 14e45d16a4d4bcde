use crate::error::ScoringError;
use crate::model::{
    HoleResult, MatchEntry, MatchFormat, MatchView, PlayerEntry, PlayerResult, ScoredRound,
    Scorecard, Strokes,
};
use crate::score::{
    MatchRecord, RecordedResult, determine_match_result, four_ball_hole_results,
    four_ball_net_result, foursomes_hole_results, singles_hole_results, stroke_index_at,
    summarize_round, team_points,
};
use ahash::RandomState;
use std::collections::HashMap;
use std::path::Path;

/// Reads and parses a scorecard document.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid scorecard.
pub fn load_scorecard(path: &Path) -> Result<Scorecard, ScoringError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ScoringError::Io(format!("{}: {e}", path.display())))?;
    let card: Scorecard = serde_json::from_str(&contents)?;
    log::debug!(
        "loaded scorecard for {} with {} players and {} matches",
        card.course.name,
        card.players.len(),
        card.matches.len()
    );
    Ok(card)
}

type PlayerLookup<'a> = HashMap<&'a str, &'a PlayerEntry, RandomState>;

fn lookup<'a>(players: &PlayerLookup<'a>, name: &str) -> Result<&'a PlayerEntry, ScoringError> {
    players
        .get(name)
        .copied()
        .ok_or_else(|| ScoringError::NotFound(format!("player '{name}' is not on the card")))
}

fn side_players<'a>(
    players: &PlayerLookup<'a>,
    names: &[String],
) -> Result<Vec<&'a PlayerEntry>, ScoringError> {
    names.iter().map(|n| lookup(players, n)).collect()
}

fn single<'a>(
    side: &[&'a PlayerEntry],
    entry: &MatchEntry,
) -> Result<&'a PlayerEntry, ScoringError> {
    match side {
        [player] => Ok(*player),
        _ => Err(ScoringError::Other(format!(
            "{} match needs exactly one player per side, got {}",
            entry.format,
            side.len()
        ))),
    }
}

fn team_ball(
    explicit: Option<&Vec<Strokes>>,
    side: &[&PlayerEntry],
) -> Result<Vec<Strokes>, ScoringError> {
    match (explicit, side.first()) {
        (Some(strokes), _) => Ok(strokes.clone()),
        (None, Some(player)) => Ok(player.strokes.clone()),
        (None, None) => Err(ScoringError::Other("foursomes side has no players".into())),
    }
}

fn net_four_ball_results(
    side_a: &[&PlayerEntry],
    side_b: &[&PlayerEntry],
    stroke_indices: &[u32],
) -> Vec<HoleResult> {
    let gross_a: Vec<&[Strokes]> = side_a.iter().map(|p| p.strokes.as_slice()).collect();
    let gross_b: Vec<&[Strokes]> = side_b.iter().map(|p| p.strokes.as_slice()).collect();
    // gross results fix how many holes have been entered
    let entered = four_ball_hole_results(&gross_a, &gross_b).len();
    let hole = |side: &[&PlayerEntry], i: usize| -> Vec<(Strokes, f64)> {
        side.iter()
            .map(|p| (p.strokes.get(i).copied().flatten(), p.handicap))
            .collect()
    };
    (0..entered)
        .map(|i| {
            four_ball_net_result(
                &hole(side_a, i),
                &hole(side_b, i),
                stroke_index_at(stroke_indices, i),
            )
        })
        .collect()
}

/// Hole results for one pairing on the card.
///
/// Strokes entered past the last hole of the course are ignored.
///
/// # Errors
/// Returns an error if a named player is missing or the sides do not fit the format.
pub fn match_hole_results(
    card: &Scorecard,
    entry: &MatchEntry,
) -> Result<Vec<HoleResult>, ScoringError> {
    let players: PlayerLookup = card.players.iter().map(|p| (p.name.as_str(), p)).collect();
    let side_a = side_players(&players, &entry.side_a)?;
    let side_b = side_players(&players, &entry.side_b)?;
    let stroke_indices = card.course.stroke_indices();

    let mut results = match entry.format {
        MatchFormat::Singles => {
            let a = single(&side_a, entry)?;
            let b = single(&side_b, entry)?;
            singles_hole_results(&a.strokes, &b.strokes, &stroke_indices, a.handicap, b.handicap)
        }
        MatchFormat::Foursomes => foursomes_hole_results(
            &team_ball(entry.strokes_a.as_ref(), &side_a)?,
            &team_ball(entry.strokes_b.as_ref(), &side_b)?,
        ),
        MatchFormat::FourBall if entry.net => {
            net_four_ball_results(&side_a, &side_b, &stroke_indices)
        }
        MatchFormat::FourBall => {
            let a: Vec<&[Strokes]> = side_a.iter().map(|p| p.strokes.as_slice()).collect();
            let b: Vec<&[Strokes]> = side_b.iter().map(|p| p.strokes.as_slice()).collect();
            four_ball_hole_results(&a, &b)
        }
    };
    results.truncate(card.course.hole_count());
    Ok(results)
}

/// Scores every player and every pairing on the card.
///
/// # Errors
/// Returns an error if any pairing refers to a player who is not on the card.
pub fn score_round(card: &Scorecard) -> Result<ScoredRound, ScoringError> {
    let mut players: Vec<PlayerResult> = card
        .players
        .iter()
        .map(|p| PlayerResult {
            name: p.name.clone(),
            position: 0,
            summary: summarize_round(&card.course, &p.strokes, p.handicap),
        })
        .collect();

    players.sort_by(|a, b| {
        b.summary
            .stableford
            .cmp(&a.summary.stableford)
            .then_with(|| a.summary.net.cmp(&b.summary.net))
            .then_with(|| a.name.cmp(&b.name))
    });
    for (i, player) in players.iter_mut().enumerate() {
        player.position = i + 1;
    }

    let total_holes = card.course.hole_count() as u32;
    let mut matches = Vec::with_capacity(card.matches.len());
    let mut records = Vec::with_capacity(card.matches.len());
    for entry in &card.matches {
        let results = match_hole_results(card, entry)?;
        let outcome = determine_match_result(&results, total_holes);
        records.push(MatchRecord {
            session: entry.session.clone(),
            format: entry.format,
            side_a: entry.side_a.clone(),
            side_b: entry.side_b.clone(),
            result: RecordedResult::from_outcome(&outcome),
        });
        matches.push(MatchView {
            session: entry.session.clone(),
            format: entry.format,
            side_a: entry.side_a.clone(),
            side_b: entry.side_b.clone(),
            outcome,
        });
    }

    Ok(ScoredRound {
        course_name: card.course.name.clone(),
        played_on: card.played_on,
        holes: total_holes,
        players,
        matches,
        team: team_points(&records),
    })
}
