use clap::Parser;

use crate::deck::DEFAULT_RESHUFFLE_THRESHOLD;

pub const DEFAULT_DEALER_STANDS_ON: u8 = 17;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub reshuffle_threshold: usize,
    pub dealer_stands_on: u8,
    pub max_rounds: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
            max_rounds: None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "blackjack", about = "Play single-player Blackjack against the dealer")]
pub struct Cli {
    /// Seed for the deck's random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reshuffle at the start of a round once more than this many cards are dealt
    #[arg(long, default_value_t = DEFAULT_RESHUFFLE_THRESHOLD as u8, value_parser = clap::value_parser!(u8).range(0..=26))]
    pub reshuffle_at: u8,

    /// Dealer stops drawing at this total or higher
    #[arg(long, default_value_t = DEFAULT_DEALER_STANDS_ON, value_parser = clap::value_parser!(u8).range(12..=21))]
    pub dealer_stands_on: u8,

    /// Stop after this many rounds
    #[arg(long)]
    pub max_rounds: Option<u32>,

    /// Print the session tally as JSON on exit
    #[arg(long)]
    pub json_summary: bool,

    /// Log draws, reshuffles and settlements to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            reshuffle_threshold: usize::from(self.reshuffle_at),
            dealer_stands_on: self.dealer_stands_on,
            max_rounds: self.max_rounds,
        }
    }
}
