pub mod handicap;
pub mod match_play;
pub mod notation;
pub mod scorecard;
pub mod stableford;
pub mod team;

pub use handicap::*;
pub use match_play::*;
pub use notation::*;
pub use scorecard::*;
pub use stableford::*;
pub use team::*;
