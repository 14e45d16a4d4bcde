//! Handicap stroke allocation.
//!
//! A handicap is spread over the holes in stroke-index order, one tier of 18 at
//! a time: the first tier gives a stroke on every hole whose stroke index is at
//! most the handicap, the second tier (handicap above 18) gives another stroke
//! where the index is at most `handicap - 18`, and so on for 36 and beyond.

pub const HOLES_PER_TIER: f64 = 18.0;

/// Strokes a player with `handicap` receives on a hole with `stroke_index`.
///
/// Plus handicaps (zero or below) receive nothing. Fractional handicaps are
/// compared as-is, which amounts to truncation for any non-negative value.
/// A stroke index of 0 is treated as 1.
#[must_use]
pub fn strokes_received(handicap: f64, stroke_index: u32) -> u32 {
    if !handicap.is_finite() || handicap <= 0.0 {
        return 0;
    }
    let index = f64::from(stroke_index.max(1));
    if handicap < index {
        return 0;
    }
    // one stroke per tier t in {0, 18, 36, ..} with handicap - t >= index
    let tiers = ((handicap - index) / HOLES_PER_TIER).floor();
    tiers.min(f64::from(u32::MAX - 1)) as u32 + 1
}

/// `a - b` for two stroke counts, saturating at the bounds of `i32`.
#[must_use]
pub fn stroke_difference(a: u32, b: u32) -> i32 {
    saturate(i64::from(a) - i64::from(b))
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Exact net strokes, used where two nets are compared.
pub(crate) fn net_strokes(gross: u32, stroke_index: u32, handicap: f64) -> i64 {
    i64::from(gross) - i64::from(strokes_received(handicap, stroke_index))
}

/// Gross strokes less the strokes received on the hole.
#[must_use]
pub fn net_score(gross: u32, stroke_index: u32, handicap: f64) -> i32 {
    saturate(net_strokes(gross, stroke_index, handicap))
}

/// Stroke index for hole position `i`, falling back to `i + 1` when the
/// index array is missing or too short.
#[must_use]
pub fn stroke_index_at(stroke_indices: &[u32], i: usize) -> u32 {
    stroke_indices
        .get(i)
        .copied()
        .filter(|si| *si > 0)
        .unwrap_or(i as u32 + 1)
}
