// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use nba_match_finder::{cli, config::Settings, log};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    let settings = Settings::load().wrap_err("failed to load settings")?;
    let _log_guard = log::init(&settings, args.verbose).wrap_err("failed to set up logging")?;

    cli::run(&args, &settings).wrap_err("match finder failed")?;
    Ok(())
}
