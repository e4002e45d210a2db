pub mod handicap;
pub mod merge;

pub use handicap::*;
pub use merge::*;
