use serde::Serialize;

use crate::{deck::Card, outcome::Outcome};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_total: u8,
    pub dealer_total: u8,
    pub outcome: Outcome,
}

/// Running tally for one process run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub player_busts: u32,
    pub dealer_busts: u32,
    pub undecided: u32,
}

impl SessionSummary {
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds_played += 1;

        match result.outcome {
            Outcome::PlayerWins => self.wins += 1,
            Outcome::DealerBust => {
                self.wins += 1;
                self.dealer_busts += 1;
            }
            Outcome::DealerWins => self.losses += 1,
            Outcome::PlayerBust => {
                self.losses += 1;
                self.player_busts += 1;
            }
            Outcome::Push => self.pushes += 1,
            Outcome::BothBust => self.undecided += 1,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.rounds_played > 0 {
            (self.wins as f64 / self.rounds_played as f64) * 100.0
        } else {
            0.0
        }
    }
}
