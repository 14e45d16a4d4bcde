pub mod hole;
pub mod round;
pub mod score;
pub mod types;

pub use hole::*;
pub use round::*;
pub use score::*;
pub use types::*;
