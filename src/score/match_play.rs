use crate::model::{HoleResult, MatchOutcome, MatchState, MatchStatus, StatusState, Strokes, played};
use crate::score::handicap::net_strokes;

/// Compares one hole between two players, lower net score wins.
///
/// Par plays no part: both nets are measured against each other, not against
/// the card. A missing score on either side leaves the hole undecided.
#[must_use]
pub fn match_play_result(
    score_a: Strokes,
    score_b: Strokes,
    stroke_index: u32,
    handicap_a: f64,
    handicap_b: f64,
) -> HoleResult {
    let (Some(a), Some(b)) = (played(score_a), played(score_b)) else {
        return HoleResult::Halved;
    };
    let net_a = net_strokes(a, stroke_index, handicap_a);
    let net_b = net_strokes(b, stroke_index, handicap_b);
    compare_nets(net_a, net_b)
}

pub(crate) fn compare_nets(net_a: i64, net_b: i64) -> HoleResult {
    match net_a.cmp(&net_b) {
        std::cmp::Ordering::Less => HoleResult::SideA,
        std::cmp::Ordering::Greater => HoleResult::SideB,
        std::cmp::Ordering::Equal => HoleResult::Halved,
    }
}

fn running_total(results: &[HoleResult]) -> i32 {
    results.iter().map(|r| r.value()).sum()
}

#[must_use]
pub fn match_play_status(results: &[HoleResult]) -> MatchStatus {
    status_from_total(running_total(results))
}

fn status_from_total(total: i32) -> MatchStatus {
    let state = match total.signum() {
        1 => StatusState::Up,
        -1 => StatusState::Down,
        _ => StatusState::AllSquare,
    };
    MatchStatus {
        state,
        difference: total.unsigned_abs(),
    }
}

/// Standard match notation: `"3&2"` while holes remain, `"2 UP"` on the last.
#[must_use]
pub fn format_match_play_result(difference: u32, holes_remaining: u32) -> String {
    if holes_remaining == 0 {
        format!("{difference} UP")
    } else {
        format!("{difference}&{holes_remaining}")
    }
}

#[must_use]
pub fn format_live_status(status: &MatchStatus) -> String {
    match status.state {
        StatusState::Up => format!("{} UP", status.difference),
        StatusState::Down => format!("{} DOWN", status.difference),
        StatusState::AllSquare => "AS".to_string(),
    }
}

/// Finds the first hole at which the lead exceeded the holes then left.
///
/// Returns the hole number (1-based) and the status at that moment.
fn decision_point(results: &[HoleResult], total_holes: u32) -> Option<(u32, MatchStatus)> {
    let mut total = 0;
    for (i, result) in results.iter().enumerate() {
        total += result.value();
        let hole = i as u32 + 1;
        let remaining = total_holes.saturating_sub(hole);
        if total.unsigned_abs() > remaining {
            return Some((hole, status_from_total(total)));
        }
    }
    None
}

/// Works out whether the match is over and how to describe it.
///
/// `results` is the full prefix of hole results entered so far. Once a side
/// leads by more than the holes left the match is decided on that hole, and
/// the notation uses the lead at that moment even if more holes were entered
/// afterwards.
#[must_use]
pub fn determine_match_result(results: &[HoleResult], total_holes: u32) -> MatchOutcome {
    let played_count = results.len() as u32;
    let holes_remaining = total_holes.saturating_sub(played_count);

    if let Some((hole, status)) = decision_point(results, total_holes) {
        let remaining_then = total_holes.saturating_sub(hole);
        log::debug!(
            "match decided on hole {hole}: {} {} with {remaining_then} to play",
            status.state,
            status.difference
        );
        return MatchOutcome {
            state: MatchState::Decided,
            is_over: true,
            leader: status.leader(),
            difference: status.difference,
            holes_remaining: remaining_then,
            notation: format_match_play_result(status.difference, remaining_then),
            ended_on_hole: hole,
            dormie: false,
        };
    }

    let status = match_play_status(results);
    if holes_remaining == 0 && played_count > 0 {
        // a lead on the final hole is always caught above, so this is level
        return MatchOutcome {
            state: MatchState::AllSquareFinal,
            is_over: true,
            leader: None,
            difference: 0,
            holes_remaining: 0,
            notation: "AS".to_string(),
            ended_on_hole: total_holes,
            dormie: false,
        };
    }

    MatchOutcome {
        state: MatchState::InProgress,
        is_over: false,
        leader: status.leader(),
        difference: status.difference,
        holes_remaining,
        notation: format_live_status(&status),
        ended_on_hole: 0,
        dormie: status.difference > 0 && status.difference == holes_remaining,
    }
}

/// Hole results for a singles match played off full handicaps.
///
/// The returned prefix ends at the last hole both players have scored, so its
/// length is the number of holes entered so far.
#[must_use]
pub fn singles_hole_results(
    strokes_a: &[Strokes],
    strokes_b: &[Strokes],
    stroke_indices: &[u32],
    handicap_a: f64,
    handicap_b: f64,
) -> Vec<HoleResult> {
    let entered = entered_prefix(strokes_a.iter().zip(strokes_b).map(|(a, b)| {
        played(*a).is_some() && played(*b).is_some()
    }));
    strokes_a
        .iter()
        .zip(strokes_b)
        .take(entered)
        .enumerate()
        .map(|(i, (a, b))| {
            let si = crate::score::handicap::stroke_index_at(stroke_indices, i);
            match_play_result(*a, *b, si, handicap_a, handicap_b)
        })
        .collect()
}

/// Length of the prefix ending at the last hole flagged as scored.
pub(crate) fn entered_prefix(scored: impl Iterator<Item = bool>) -> usize {
    scored
        .enumerate()
        .filter(|(_, s)| *s)
        .map(|(i, _)| i + 1)
        .last()
        .unwrap_or(0)
}
