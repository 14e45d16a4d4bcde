use serde::{Deserialize, Serialize};

/// Label for a played hole relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    /// Four or more over par.
    Other,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_to_par(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::Other,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_to_par(value)
    }
}

/// One row of a scored card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleLine {
    pub hole: u32,
    pub par: u32,
    pub stroke_index: u32,
    pub gross: Option<u32>,
    pub strokes_received: u32,
    pub net: Option<i32>,
    pub points: u32,
    pub score_display: Option<ScoreDisplay>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub handicap: f64,
    pub holes_played: u32,
    pub gross: u32,
    pub net: i32,
    /// Gross strokes against the par of the holes actually played.
    pub to_par: i32,
    pub stableford: u32,
    pub out_gross: u32,
    pub in_gross: u32,
    pub lines: Vec<HoleLine>,
}
