pub mod game;
pub mod player;
pub mod round;
pub mod score;
pub mod scorecard;

pub use game::*;
pub use player::*;
pub use round::*;
pub use score::*;
pub use scorecard::*;
