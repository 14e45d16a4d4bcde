use crate::model::{Course, HoleLine, RoundSummary, ScoreDisplay, Strokes, played};
use crate::score::handicap::{stroke_difference, stroke_index_at, strokes_received};
use crate::score::stableford::points_for_net;

const FRONT_NINE: u32 = 9;

/// Scores a player's card against the course.
///
/// Holes beyond the end of `strokes` are listed as unplayed; strokes beyond
/// the last hole of the course are ignored.
#[must_use]
pub fn summarize_round(course: &Course, strokes: &[Strokes], handicap: f64) -> RoundSummary {
    let stroke_indices = course.stroke_indices();
    let mut summary = RoundSummary {
        handicap,
        holes_played: 0,
        gross: 0,
        net: 0,
        to_par: 0,
        stableford: 0,
        out_gross: 0,
        in_gross: 0,
        lines: Vec::with_capacity(course.hole_count()),
    };

    for (i, hole) in course.holes.iter().enumerate() {
        let stroke_index = stroke_index_at(&stroke_indices, i);
        let received = strokes_received(handicap, stroke_index);
        let gross = played(strokes.get(i).copied().flatten());

        let line = match gross {
            Some(gross) => {
                let net = stroke_difference(gross, received);
                let to_par = stroke_difference(gross, hole.par);
                let points = points_for_net(net, hole.par);
                summary.holes_played += 1;
                summary.gross = summary.gross.saturating_add(gross);
                summary.net = summary.net.saturating_add(net);
                summary.to_par = summary.to_par.saturating_add(to_par);
                summary.stableford += points;
                if hole.number <= FRONT_NINE {
                    summary.out_gross = summary.out_gross.saturating_add(gross);
                } else {
                    summary.in_gross = summary.in_gross.saturating_add(gross);
                }
                HoleLine {
                    hole: hole.number,
                    par: hole.par,
                    stroke_index,
                    gross: Some(gross),
                    strokes_received: received,
                    net: Some(net),
                    points,
                    score_display: Some(ScoreDisplay::from_to_par(to_par)),
                }
            }
            None => HoleLine {
                hole: hole.number,
                par: hole.par,
                stroke_index,
                gross: None,
                strokes_received: received,
                net: None,
                points: 0,
                score_display: None,
            },
        };
        summary.lines.push(line);
    }

    summary
}
