pub mod args;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod score;
pub mod controller {
    pub mod round;
}
pub mod view {
    pub mod round;
}

pub use error::ScoringError;
