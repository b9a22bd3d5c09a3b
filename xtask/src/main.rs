mod config;
mod glob;
mod isrs;
mod logging;
mod size;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use xshell::Shell;

#[derive(clap::Subcommand)]
#[command(rename_all = "snake_case")]
enum Command {
    /// Generates the i686 ISR stub declarations, gate table, and stub macro include.
    Isrs(isrs::Options),

    /// Converts size strings such as `1.44M` to byte counts.
    Size(size::Options),

    /// Lists entries matching a wildcard pattern anywhere beneath a directory.
    Glob(glob::Options),
}

#[derive(Parser)]
#[command(rename_all = "snake_case")]
struct Arguments {
    #[command(subcommand)]
    command: Command,

    /// Increases logging verbosity; may be repeated.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file to use instead of `xtask.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();

    logging::init(logging::level_filter(arguments.verbose, arguments.quiet))
        .with_context(|| "failed to install logger")?;

    let sh = Shell::new()?;
    run(&sh, arguments)
}

fn run(sh: &Shell, arguments: Arguments) -> Result<()> {
    match arguments.command {
        Command::Isrs(options) => {
            let config = config::load(sh, arguments.config.as_deref())?;
            isrs::isrs(&config.isrs, options)?;
        }

        Command::Size(options) => {
            size::size(options)?;
        }

        Command::Glob(options) => {
            glob::glob(options)?;
        }
    }

    Ok(())
}
