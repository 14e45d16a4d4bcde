use crate::error::ScoringError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A match notation as written on a card or stored with a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `"3&2"`: won by 3 with 2 to play.
    Decided { lead: u32, remaining: u32 },
    /// `"2 UP"`
    Up(u32),
    /// `"2 DOWN"`
    Down(u32),
    /// `"AS"`
    AllSquare,
}

impl Notation {
    #[must_use]
    pub fn difference(&self) -> u32 {
        match self {
            Notation::Decided { lead, .. } => *lead,
            Notation::Up(d) | Notation::Down(d) => *d,
            Notation::AllSquare => 0,
        }
    }

    /// True when the notation alone says the match is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Notation::Decided { .. })
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Decided { lead, remaining } => write!(f, "{lead}&{remaining}"),
            Notation::Up(d) => write!(f, "{d} UP"),
            Notation::Down(d) => write!(f, "{d} DOWN"),
            Notation::AllSquare => write!(f, "AS"),
        }
    }
}

fn notation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*(?:(?P<lead>\d+)\s*&\s*(?P<rem>\d+)|(?P<diff>\d+)\s*(?P<dir>UP|DOWN|DN)|(?P<as>AS|A/S|ALL\s+SQUARE|HALVED))\s*$",
        )
        .expect("Invalid regex pattern - this is a programming error")
    })
}

/// Parses `"3&2"`, `"2 UP"`, `"1 DOWN"` or `"AS"` (case-insensitive).
///
/// # Errors
/// Returns `ScoringError::Parse` if the text is not a match notation or a
/// number does not fit.
pub fn parse_notation(input: &str) -> Result<Notation, ScoringError> {
    let caps = notation_regex()
        .captures(input)
        .ok_or_else(|| ScoringError::Parse(format!("not a match notation: '{input}'")))?;

    let number = |name: &str| -> Result<u32, ScoringError> {
        caps.name(name)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .parse()
            .map_err(|e| ScoringError::Parse(format!("bad number in '{input}': {e}")))
    };

    if caps.name("as").is_some() {
        return Ok(Notation::AllSquare);
    }
    if caps.name("lead").is_some() {
        return Ok(Notation::Decided {
            lead: number("lead")?,
            remaining: number("rem")?,
        });
    }
    let diff = number("diff")?;
    if diff == 0 {
        return Ok(Notation::AllSquare);
    }
    match caps.name("dir").map(|m| m.as_str().to_ascii_uppercase()) {
        Some(dir) if dir == "UP" => Ok(Notation::Up(diff)),
        _ => Ok(Notation::Down(diff)),
    }
}
