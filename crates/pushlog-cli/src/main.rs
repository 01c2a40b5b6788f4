//! pushlog CLI - find commits pushed to GitHub that are missing from history.

use clap::Parser;

mod commands;
mod env;
mod logging;
mod output;
mod prompt;
mod services;
mod settings;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Completions { shell }) => commands::completions::run(shell),
        None => commands::scan::run(&cli.scan),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
