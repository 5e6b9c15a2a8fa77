use std::io;
use std::process::ExitCode;

use blackjack_console::{play, Cli};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let summary = match play(cli.game_config(), io::stdin().lock(), io::stdout()) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Game failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json_summary {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Could not serialize session summary: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
