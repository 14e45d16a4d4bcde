use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

impl Side {
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Outcome of a single hole from side A's point of view.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HoleResult {
    SideA,
    SideB,
    /// Halved, or not decided yet because a score is missing.
    #[default]
    Halved,
}

impl HoleResult {
    /// The integer code used by callers: +1, -1 or 0.
    #[must_use]
    pub fn value(self) -> i32 {
        match self {
            Self::SideA => 1,
            Self::SideB => -1,
            Self::Halved => 0,
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::SideA => Some(Side::A),
            Self::SideB => Some(Side::B),
            Self::Halved => None,
        }
    }
}

impl From<i32> for HoleResult {
    fn from(value: i32) -> Self {
        match value.signum() {
            1 => Self::SideA,
            -1 => Self::SideB,
            _ => Self::Halved,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusState {
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
    #[serde(rename = "ALL SQUARE")]
    AllSquare,
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusState::Up => "UP",
            StatusState::Down => "DOWN",
            StatusState::AllSquare => "ALL SQUARE",
        };
        write!(f, "{s}")
    }
}

/// Running match status, always from side A's point of view.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchStatus {
    pub state: StatusState,
    pub difference: u32,
}

impl MatchStatus {
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.state {
            StatusState::Up => Some(Side::A),
            StatusState::Down => Some(Side::B),
            StatusState::AllSquare => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    InProgress,
    Decided,
    AllSquareFinal,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub state: MatchState,
    pub is_over: bool,
    pub leader: Option<Side>,
    pub difference: u32,
    pub holes_remaining: u32,
    pub notation: String,
    /// Hole on which the match was decided, 0 while it is still live.
    pub ended_on_hole: u32,
    pub dormie: bool,
}

impl MatchOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Decided => self.leader,
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct TeamPoints {
    pub side_a: f64,
    pub side_b: f64,
}

impl TeamPoints {
    pub const WIN_A: Self = Self {
        side_a: 1.0,
        side_b: 0.0,
    };
    pub const WIN_B: Self = Self {
        side_a: 0.0,
        side_b: 1.0,
    };
    pub const HALVED: Self = Self {
        side_a: 0.5,
        side_b: 0.5,
    };
    pub const NONE: Self = Self {
        side_a: 0.0,
        side_b: 0.0,
    };

    #[must_use]
    pub fn for_winner(winner: Side) -> Self {
        match winner {
            Side::A => Self::WIN_A,
            Side::B => Self::WIN_B,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.side_a + self.side_b
    }
}

impl std::ops::AddAssign for TeamPoints {
    fn add_assign(&mut self, rhs: Self) {
        self.side_a += rhs.side_a;
        self.side_b += rhs.side_b;
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    Singles,
    Foursomes,
    #[serde(alias = "fourball", alias = "better_ball")]
    FourBall,
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchFormat::Singles => "singles",
            MatchFormat::Foursomes => "foursomes",
            MatchFormat::FourBall => "four-ball",
        };
        f.pad(s)
    }
}
