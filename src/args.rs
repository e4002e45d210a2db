pub mod resolve;
pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
