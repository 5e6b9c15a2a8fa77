use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21 while the player stood.
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
    /// Both hands over 21. The round loop never produces this because the
    /// dealer does not play after a player bust.
    BothBust,
}

impl Outcome {
    /// Classifies final totals; anything over 21 is a bust.
    pub fn classify(player: u8, dealer: u8) -> Self {
        match (player > 21, dealer > 21) {
            (true, true) => Outcome::BothBust,
            (true, false) => Outcome::PlayerBust,
            (false, true) => Outcome::DealerBust,
            (false, false) => {
                let player_gap = 21 - player;
                let dealer_gap = 21 - dealer;
                if player_gap > dealer_gap {
                    Outcome::DealerWins
                } else if dealer_gap > player_gap {
                    Outcome::PlayerWins
                } else {
                    Outcome::Push
                }
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBust => "Player busts. You lose",
            Outcome::DealerBust => "Dealer busts. You win",
            Outcome::PlayerWins => "Dealer loses. You win",
            Outcome::DealerWins => "Dealer wins. You lose",
            Outcome::Push => "Push. Nobody wins",
            Outcome::BothBust => "Both hands bust. Nobody wins",
        }
    }

    pub fn player_won(&self) -> bool {
        matches!(self, Outcome::PlayerWins | Outcome::DealerBust)
    }

    pub fn player_lost(&self) -> bool {
        matches!(self, Outcome::DealerWins | Outcome::PlayerBust)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_closer_player_wins() {
        assert_eq!(Outcome::classify(20, 18), Outcome::PlayerWins);
    }

    #[test]
    fn test_closer_dealer_wins() {
        assert_eq!(Outcome::classify(17, 19), Outcome::DealerWins);
    }

    #[test]
    fn test_player_bust() {
        assert_eq!(Outcome::classify(22, 18), Outcome::PlayerBust);
    }

    #[test]
    fn test_dealer_bust() {
        assert_eq!(Outcome::classify(18, 23), Outcome::DealerBust);
    }

    #[test]
    fn test_equal_totals_push() {
        assert_eq!(Outcome::classify(20, 20), Outcome::Push);
        assert_eq!(Outcome::classify(21, 21), Outcome::Push);
    }

    #[test]
    fn test_both_bust() {
        assert_eq!(Outcome::classify(24, 22), Outcome::BothBust);
    }

    #[test]
    fn test_messages_are_distinct() {
        let all = [
            Outcome::PlayerBust,
            Outcome::DealerBust,
            Outcome::PlayerWins,
            Outcome::DealerWins,
            Outcome::Push,
            Outcome::BothBust,
        ];
        let messages: HashSet<_> = all.iter().map(|o| o.message()).collect();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_win_loss_flags() {
        assert!(Outcome::DealerBust.player_won());
        assert!(Outcome::PlayerBust.player_lost());
        assert!(!Outcome::Push.player_won());
        assert!(!Outcome::Push.player_lost());
        assert!(!Outcome::BothBust.player_won());
    }
}
