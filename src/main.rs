use anyhow::{Context, Result};
use rusty_golf_games::args;
use rusty_golf_games::runner::execute;

fn main() -> Result<()> {
    let args = args::args_checks();
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let clean = args.validate().context("invalid arguments")?;
    let report = execute(&clean).with_context(|| format!("run mode {:?}", clean.mode))?;

    let out = if clean.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");
    Ok(())
}
