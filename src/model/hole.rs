use serde::{Deserialize, Serialize};

pub const DEFAULT_PAR: u32 = 4;

/// Gross strokes for one hole. `None` or `Some(0)` means the hole is not played yet.
pub type Strokes = Option<u32>;

/// Returns the gross strokes if the hole has actually been played.
#[must_use]
pub fn played(strokes: Strokes) -> Option<u32> {
    strokes.filter(|s| *s > 0)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleSpec {
    pub number: u32,
    #[serde(default = "default_par")]
    pub par: u32,
    pub stroke_index: u32,
    #[serde(default)]
    pub distance: u32,
}

fn default_par() -> u32 {
    DEFAULT_PAR
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub holes: Vec<HoleSpec>,
}

impl Course {
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    #[must_use]
    pub fn pars(&self) -> Vec<u32> {
        self.holes.iter().map(|h| h.par).collect()
    }

    #[must_use]
    pub fn stroke_indices(&self) -> Vec<u32> {
        self.holes.iter().map(|h| h.stroke_index).collect()
    }

    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| h.par).sum()
    }
}
