use std::fmt;

use serde::Serialize;

use crate::deck::{Card, NUM_CARDS};
use crate::error::{GameError, Result};

/// No hand can hold more than a suit's worth of cards before busting.
pub const MAX_HAND_CARDS: usize = NUM_CARDS / 4;

/// Best total for the hand and whether an ace is still counted as 11.
pub fn hand_total(hand: &[Card]) -> (u8, bool) {
    let mut total: u32 = 0;
    let mut aces = 0;

    for card in hand {
        total += u32::from(card.value());
        if card.is_ace() {
            aces += 1;
        }
    }

    // Downgrade one ace at a time from 11 to 1
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (u8::try_from(total).unwrap_or(u8::MAX), aces > 0)
}

pub fn hand_value(hand: &[Card]) -> u8 {
    hand_total(hand).0
}

pub fn is_soft(hand: &[Card]) -> bool {
    hand_total(hand).1
}

pub fn is_bust(hand: &[Card]) -> bool {
    hand_value(hand) > 21
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(MAX_HAND_CARDS),
        }
    }

    pub fn push(&mut self, card: Card) -> Result<()> {
        if self.cards.len() >= MAX_HAND_CARDS {
            return Err(GameError::HandFull(MAX_HAND_CARDS));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn cards(names: &[(&str, &str)]) -> Vec<Card> {
        names
            .iter()
            .map(|(rank, suit)| Card::find(rank, suit).unwrap())
            .collect()
    }

    #[test]
    fn test_two_aces() {
        let hand = cards(&[("Ace", "Hearts"), ("Ace", "Spades")]);
        assert_eq!(hand_value(&hand), 12);
        assert!(is_soft(&hand));
    }

    #[test]
    fn test_ace_king() {
        let hand = cards(&[("Ace", "Hearts"), ("King", "Spades")]);
        assert_eq!(hand_value(&hand), 21);
    }

    #[test]
    fn test_bust_without_aces() {
        let hand = cards(&[("King", "Hearts"), ("Queen", "Spades"), ("Two", "Clubs")]);
        assert_eq!(hand_value(&hand), 22);
        assert!(is_bust(&hand));
    }

    #[test]
    fn test_hard_ace() {
        let hand = cards(&[("Ace", "Hearts"), ("Six", "Spades"), ("Nine", "Clubs")]);
        assert_eq!(hand_value(&hand), 16);
        assert!(!is_soft(&hand));
    }

    #[test]
    fn test_only_needed_aces_downgraded() {
        let hand = cards(&[("Ace", "Hearts"), ("Ace", "Spades"), ("Nine", "Clubs")]);
        assert_eq!(hand_value(&hand), 21);
    }

    #[test]
    fn test_bust_after_every_ace_downgraded() {
        let hand = cards(&[
            ("Ace", "Hearts"),
            ("King", "Spades"),
            ("Queen", "Clubs"),
            ("Five", "Diamonds"),
        ]);
        assert_eq!(hand_value(&hand), 26);
        assert!(is_bust(&hand));
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(hand_value(&[]), 0);
        assert!(Hand::new().is_empty());
    }

    #[test]
    fn test_hand_rejects_fourteenth_card() {
        let mut hand = Hand::new();
        for index in 0..MAX_HAND_CARDS {
            hand.push(Card::new(index).unwrap()).unwrap();
        }
        let extra = Card::new(MAX_HAND_CARDS).unwrap();
        assert!(matches!(hand.push(extra), Err(GameError::HandFull(13))));
        assert_eq!(hand.len(), MAX_HAND_CARDS);
    }

    #[test]
    fn test_hand_display() {
        let mut hand = Hand::new();
        for card in cards(&[("Ace", "Spades"), ("Seven", "Hearts")]) {
            hand.push(card).unwrap();
        }
        assert_eq!(hand.to_string(), "Ace of Spades, Seven of Hearts");
        assert_eq!(hand.value(), 18);
        assert!(hand.is_soft());
    }

    proptest! {
        #[test]
        fn value_uses_fewest_ace_downgrades(
            indices in proptest::sample::subsequence((0..NUM_CARDS).collect::<Vec<_>>(), 0..=MAX_HAND_CARDS)
        ) {
            let hand: Vec<Card> = indices.into_iter().map(|i| Card::new(i).unwrap()).collect();
            let raw: u32 = hand.iter().map(|c| u32::from(c.value())).sum();
            let aces = hand.iter().filter(|c| c.is_ace()).count() as u32;

            let expected = (0..=aces)
                .map(|downgrades| raw - 10 * downgrades)
                .find(|&total| total <= 21)
                .unwrap_or(raw - 10 * aces);

            prop_assert_eq!(u32::from(hand_value(&hand)), expected);
        }
    }
}
