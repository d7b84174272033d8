mod cli;
mod commands;
mod config;
mod logger;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logger::init(cli.verbose, cli.quiet);

    if let Err(err) = cli.run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
