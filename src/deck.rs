use std::collections::VecDeque;
use std::fmt;

use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Serialize;

use crate::error::{GameError, Result};

pub const NUM_CARDS: usize = 52;

/// Reshuffle once more than half the deck has been dealt.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = NUM_CARDS / 2;

const SUITS: [&str; 4] = ["Clubs", "Diamonds", "Hearts", "Spades"];

const RANKS: [(&str, u8); 13] = [
    ("Ace", 11),
    ("King", 10),
    ("Queen", 10),
    ("Jack", 10),
    ("Ten", 10),
    ("Nine", 9),
    ("Eight", 8),
    ("Seven", 7),
    ("Six", 6),
    ("Five", 5),
    ("Four", 4),
    ("Three", 3),
    ("Two", 2),
];

/// One of the 52 cards. Index order runs suit by suit (Clubs, Diamonds,
/// Hearts, Spades) and, inside a suit, from Ace down to Two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    index: u8,
    rank: &'static str,
    suit: &'static str,
    value: u8,
}

impl Card {
    pub fn new(index: usize) -> Result<Self> {
        if index >= NUM_CARDS {
            return Err(GameError::InvalidCard(index));
        }
        Ok(Card::at(index))
    }

    // Caller guarantees index < NUM_CARDS.
    fn at(index: usize) -> Self {
        let (rank, value) = RANKS[index % RANKS.len()];
        Card {
            index: index as u8,
            rank,
            suit: SUITS[index / RANKS.len()],
            value,
        }
    }

    /// Looks a card up by rank and suit name, e.g. `("Ace", "Spades")`.
    pub fn find(rank: &str, suit: &str) -> Option<Self> {
        let r = RANKS.iter().position(|(name, _)| name.eq_ignore_ascii_case(rank))?;
        let s = SUITS.iter().position(|name| name.eq_ignore_ascii_case(suit))?;
        Card::new(s * RANKS.len() + r).ok()
    }

    pub fn index(&self) -> usize {
        self.index as usize
    }

    pub fn rank(&self) -> &'static str {
        self.rank
    }

    pub fn suit(&self) -> &'static str {
        self.suit
    }

    /// Point value with aces counted as 11.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_ace(&self) -> bool {
        self.value == 11
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

pub struct Deck {
    cards: Vec<Card>,
    dealt: [bool; NUM_CARDS],
    undealt: Vec<usize>,
    stacked: VecDeque<usize>,
    reshuffle_threshold: usize,
    rng: SmallRng,
}

impl Deck {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: SmallRng) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(NUM_CARDS),
            dealt: [false; NUM_CARDS],
            undealt: Vec::with_capacity(NUM_CARDS),
            stacked: VecDeque::new(),
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            rng,
        };
        deck.initialize();
        deck.shuffle();
        deck
    }

    fn initialize(&mut self) {
        self.cards.clear();
        self.cards.extend((0..NUM_CARDS).map(Card::at));
    }

    pub fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold.min(DEFAULT_RESHUFFLE_THRESHOLD);
        self
    }

    /// Returns every card to the undealt pool. Card identities and values
    /// are untouched, and so is any stacked draw order.
    pub fn shuffle(&mut self) {
        self.dealt = [false; NUM_CARDS];
        self.undealt.clear();
        self.undealt.extend(0..NUM_CARDS);
        debug!("deck shuffled");
    }

    /// Arranges the next draws. Stacked cards that are already dealt when
    /// their turn comes are skipped.
    pub fn stack<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.stacked.extend(cards.into_iter().map(|card| card.index()));
    }

    pub fn draw_card(&mut self) -> Result<Card> {
        while let Some(index) = self.stacked.pop_front() {
            if let Some(pos) = self.undealt.iter().position(|&i| i == index) {
                return Ok(self.take(pos));
            }
        }

        if self.undealt.is_empty() {
            return Err(GameError::DeckExhausted(NUM_CARDS));
        }
        let pos = self.rng.gen_range(0..self.undealt.len());
        Ok(self.take(pos))
    }

    fn take(&mut self, pos: usize) -> Card {
        let index = self.undealt.swap_remove(pos);
        self.dealt[index] = true;
        let card = self.cards[index];
        debug!("drew {card} ({} left)", self.undealt.len());
        card
    }

    pub fn cards_dealt(&self) -> usize {
        self.dealt.iter().filter(|&&dealt| dealt).count()
    }

    pub fn remaining(&self) -> usize {
        self.undealt.len()
    }

    pub fn needs_reshuffle(&self) -> bool {
        self.cards_dealt() > self.reshuffle_threshold
    }

    pub fn reshuffle_threshold(&self) -> usize {
        self.reshuffle_threshold
    }

    pub fn is_dealt(&self, index: usize) -> bool {
        self.dealt.get(index).copied().unwrap_or(false)
    }

    pub fn card(&self, index: usize) -> Result<Card> {
        self.cards
            .get(index)
            .copied()
            .ok_or(GameError::InvalidCard(index))
    }
}
