//! docvet CLI entry point.
//!
//! Parses arguments, runs the selected subcommand, and turns setup failures
//! into a colored error line with exit code 1. Vetting failures never reach
//! this layer: they are printed as error-status JSON reports by the
//! subcommands themselves.

use clap::Parser;
use colored::Colorize;
use docvet::cli::Cli;

fn main() {
    let cli = Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(err) = cli.execute() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
