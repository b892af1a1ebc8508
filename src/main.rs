use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use namzd::{cli, copy, logging, Finder};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<()> {
    args.validate().context("Invalid arguments")?;

    if let Some(destination) = &args.destination {
        copy::check_destination(destination).context("Invalid destination")?;
    }

    let color = !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal();
    if color {
        colored::control::set_override(true);
    }

    let finder = Finder::new(args.config(color), &args.pattern)?;
    let count = finder
        .walk_all(&mut io::stdout(), &args.paths)
        .context("Search failed")?;
    info!(count, "search complete");
    Ok(())
}
