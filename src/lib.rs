use std::io::{BufRead, Write};

pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod outcome;
pub mod session;

pub use config::{Cli, GameConfig};
pub use console::Console;
pub use deck::{Card, Deck};
pub use error::{GameError, Result};
pub use game::BlackjackGame;
pub use hand::{hand_value, Hand};
pub use outcome::Outcome;
pub use session::{RoundResult, SessionSummary};

/// Runs a full session against the given input and output.
pub fn play<R: BufRead, W: Write>(config: GameConfig, input: R, output: W) -> Result<SessionSummary> {
    let mut console = Console::new(input, output);
    let mut game = BlackjackGame::from_config(config);
    log::debug!(
        "starting session (seed {:?}, reshuffle after {}, dealer stands on {})",
        game.config.seed,
        game.deck.reshuffle_threshold(),
        game.config.dealer_stands_on
    );
    game.run(&mut console)
}
