use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{
    config::GameConfig,
    console::Console,
    deck::{Card, Deck},
    error::Result,
    hand::Hand,
    outcome::Outcome,
    session::{RoundResult, SessionSummary},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    PlayerTurn,
    DealerTurn,
    Settle,
}

#[derive(Default)]
struct Round {
    player: Hand,
    dealer: Hand,
}

pub struct BlackjackGame {
    pub deck: Deck,
    pub config: GameConfig,
    summary: SessionSummary,
}

impl BlackjackGame {
    pub fn new(deck: Deck, config: GameConfig) -> Self {
        BlackjackGame {
            deck,
            config,
            summary: SessionSummary::default(),
        }
    }

    pub fn from_config(config: GameConfig) -> Self {
        let deck = Deck::new(config.seed).with_reshuffle_threshold(config.reshuffle_threshold);
        Self::new(deck, config)
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Plays rounds until the player declines, input runs out, or the
    /// configured round limit is hit.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionSummary> {
        if !console.ask("Would you like to play a hand of Blackjack?")? {
            return Ok(self.summary.clone());
        }

        loop {
            let result = self.play_round(console)?;
            self.summary.record(&result);

            if let Some(max) = self.config.max_rounds {
                if self.summary.rounds_played >= max {
                    info!("round limit of {max} reached");
                    console.say(format!("That's the last of {max} rounds."))?;
                    break;
                }
            }

            if !console.ask("Would you like to play again?")? {
                break;
            }
        }

        info!(
            "session over: {} rounds, {} won ({:.1}%), {} lost, {} pushed",
            self.summary.rounds_played,
            self.summary.wins,
            self.summary.win_rate(),
            self.summary.losses,
            self.summary.pushes
        );
        Ok(self.summary.clone())
    }

    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<RoundResult> {
        let mut round = Round::default();
        let mut phase = Phase::Start;

        loop {
            debug!("round {}: {:?}", self.summary.rounds_played + 1, phase);
            phase = match phase {
                Phase::Start => {
                    self.start(&mut round, console)?;
                    Phase::PlayerTurn
                }
                Phase::PlayerTurn => {
                    self.player_turn(&mut round, console)?;
                    if round.player.is_bust() {
                        Phase::Settle
                    } else {
                        Phase::DealerTurn
                    }
                }
                Phase::DealerTurn => {
                    self.dealer_turn(&mut round, console)?;
                    Phase::Settle
                }
                Phase::Settle => return self.settle(round, console),
            };
        }
    }

    fn draw_into(&mut self, hand: &mut Hand) -> Result<Card> {
        let card = self.deck.draw_card()?;
        hand.push(card)?;
        Ok(card)
    }

    fn start<R: BufRead, W: Write>(
        &mut self,
        round: &mut Round,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        if self.deck.needs_reshuffle() {
            info!("{} cards dealt, reshuffling", self.deck.cards_dealt());
            self.deck.shuffle();
        }

        self.draw_into(&mut round.player)?;
        self.draw_into(&mut round.player)?;
        let up_card = self.draw_into(&mut round.dealer)?;

        console.say("Your hand contains these cards:")?;
        for card in round.player.cards() {
            console.say(format_args!("\t{card}"))?;
        }
        console.say(format_args!("for a total value of: {}.", round.player.value()))?;
        console.say(format_args!("The dealer has drawn the {up_card}"))?;
        Ok(())
    }

    fn player_turn<R: BufRead, W: Write>(
        &mut self,
        round: &mut Round,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let mut question = "Would you like a hit?";
        while console.ask(question)? {
            let card = self.draw_into(&mut round.player)?;
            let total = round.player.value();
            console.say(format_args!("You have drawn the {card}"))?;
            console.say(format_args!("Your hand's value is now {total}"))?;

            if round.player.is_bust() {
                break;
            }
            question = "Would you like another hit?";
        }
        Ok(())
    }

    fn dealer_turn<R: BufRead, W: Write>(
        &mut self,
        round: &mut Round,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        loop {
            let card = self.draw_into(&mut round.dealer)?;
            console.say(format_args!("The dealer draws the {card}"))?;
            console.say(format_args!("Dealer's current total is: {}", round.dealer.value()))?;

            if round.dealer.value() >= self.config.dealer_stands_on {
                break;
            }
        }
        Ok(())
    }

    fn settle<R: BufRead, W: Write>(
        &mut self,
        round: Round,
        console: &mut Console<R, W>,
    ) -> Result<RoundResult> {
        let player_total = round.player.value();
        let dealer_total = round.dealer.value();
        let outcome = Outcome::classify(player_total, dealer_total);
        info!("settled {player_total} vs {dealer_total}: {outcome:?}");
        console.say(outcome)?;

        Ok(RoundResult {
            player_cards: round.player.into_cards(),
            dealer_cards: round.dealer.into_cards(),
            player_total,
            dealer_total,
            outcome,
        })
    }
}
