use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Deck exhausted: all {0} cards have been dealt")]
    DeckExhausted(usize),
    #[error("Hand full: a hand cannot hold more than {0} cards")]
    HandFull(usize),
    #[error("Invalid card index: {0}")]
    InvalidCard(usize),
}

pub type Result<T> = std::result::Result<T, GameError>;
