use crate::model::{DEFAULT_PAR, Strokes, played};
use crate::score::handicap::{net_strokes, stroke_index_at};

/// Stableford points for one hole.
///
/// An unplayed hole scores nothing. Anything two or more under par net is
/// capped at 4 points.
#[must_use]
pub fn stableford_points(gross: Strokes, par: u32, stroke_index: u32, handicap: f64) -> u32 {
    let Some(gross) = played(gross) else {
        return 0;
    };
    points_against_par(net_strokes(gross, stroke_index, handicap) - i64::from(par))
}

#[must_use]
pub fn points_for_net(net: i32, par: u32) -> u32 {
    points_against_par(i64::from(net) - i64::from(par))
}

fn points_against_par(net_to_par: i64) -> u32 {
    match net_to_par {
        i64::MIN..=-2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Sums Stableford points over a round.
///
/// Iterates over `scores`; holes past the end of `pars` count as par 4 and
/// holes past the end of `stroke_indices` use their position as the index.
#[must_use]
pub fn total_stableford_points(
    scores: &[Strokes],
    pars: &[u32],
    stroke_indices: &[u32],
    handicap: f64,
) -> u32 {
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| played(**s).is_some())
        .map(|(i, s)| {
            let par = pars.get(i).copied().unwrap_or(DEFAULT_PAR);
            stableford_points(*s, par, stroke_index_at(stroke_indices, i), handicap)
        })
        .sum()
}
