use crate::turn::{play_turn, Actor, DecisionPolicy, TableObserver, ThresholdPolicy, TurnState};
use crate::{is_natural, Card, Error, Hand, Shoe, TableRules};
use log::info;
use serde::{Deserialize, Serialize};


/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerBusted { player: u32 },
    PlayerBlackjack,
    DealerBusted { dealer: u32 },
    DealerBlackjack,
    PlayerWins { player: u32, dealer: u32 },
    DealerWins { player: u32, dealer: u32 },
    Tie { points: u32 },
}

impl RoundOutcome {
    /// `None` on a tie
    pub fn winner(&self) -> Option<Actor> {
        match self {
            RoundOutcome::PlayerBlackjack
            | RoundOutcome::DealerBusted { .. }
            | RoundOutcome::PlayerWins { .. } => Some(Actor::Player),
            RoundOutcome::PlayerBusted { .. }
            | RoundOutcome::DealerBlackjack
            | RoundOutcome::DealerWins { .. } => Some(Actor::Dealer),
            RoundOutcome::Tie { .. } => None,
        }
    }

    /// True when the dealer never had to play
    pub fn ended_on_player_turn(&self) -> bool {
        matches!(
            self,
            RoundOutcome::PlayerBusted { .. } | RoundOutcome::PlayerBlackjack
        )
    }

    fn compare(player: u32, dealer: u32) -> Self {
        if player > dealer {
            RoundOutcome::PlayerWins { player, dealer }
        } else if player < dealer {
            RoundOutcome::DealerWins { player, dealer }
        } else {
            RoundOutcome::Tie { points: player }
        }
    }
}

/// Serializable summary of a finished (or abandoned) round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub player_points: u32,
    pub dealer_points: u32,
    pub player_natural: bool,
    pub dealer_natural: bool,
    pub outcome: Option<RoundOutcome>,
    pub cards_left: usize,
}

/// Shoe plus both hands for a single round
#[derive(Debug, Clone)]
pub struct Round {
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    rules: TableRules,
    phase: RoundPhase,
    opening_shown: bool,
    player_points: Option<u32>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Builds a shoe for `rules` and deals the opening hands.
    pub fn new(rules: TableRules) -> Result<Self, Error> {
        Self::deal(Shoe::standard(rules.num_decks), rules)
    }

    /// Deals player, player, dealer, dealer from `shoe`.
    pub fn deal(mut shoe: Shoe, rules: TableRules) -> Result<Self, Error> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        player.add_card(shoe.draw()?);
        player.add_card(shoe.draw()?);
        dealer.add_card(shoe.draw()?);
        dealer.add_card(shoe.draw()?);

        Ok(Self {
            shoe,
            player,
            dealer,
            rules,
            phase: RoundPhase::PlayerTurn,
            opening_shown: false,
            player_points: None,
            outcome: None,
        })
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Cards held by both actors
    pub fn cards_in_play(&self) -> usize {
        self.player.len() + self.dealer.len()
    }

    /// Plays the round to completion with the given player policy.
    ///
    /// After an error the round can be played again: it resumes in the phase it
    /// failed in, so a player who already stood is not asked again.
    pub fn play<P, O>(
        &mut self,
        player_policy: &mut P,
        observer: &mut O,
    ) -> Result<RoundOutcome, Error>
    where
        P: DecisionPolicy + ?Sized,
        O: TableObserver + ?Sized,
    {
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }

        let player_points = match self.player_points {
            Some(points) => points,
            None => {
                if !self.opening_shown {
                    if let Some(up_card) = self.dealer.first() {
                        observer.dealt(&self.player, up_card);
                    }
                    self.opening_shown = true;
                }

                let player_turn = play_turn(
                    Actor::Player,
                    &mut self.player,
                    &mut self.shoe,
                    player_policy,
                    observer,
                )?;
                match player_turn.state {
                    TurnState::Busted => {
                        return Ok(self.settle(RoundOutcome::PlayerBusted {
                            player: player_turn.points,
                        }))
                    }
                    TurnState::Blackjack => {
                        return Ok(self.settle(RoundOutcome::PlayerBlackjack))
                    }
                    TurnState::Stood | TurnState::AwaitingDecision => {}
                }

                self.player_points = Some(player_turn.points);
                self.phase = RoundPhase::DealerTurn;
                observer.dealer_revealed(player_turn.points, &self.dealer);
                player_turn.points
            }
        };

        let mut dealer_policy = ThresholdPolicy::for_dealer(&self.rules, player_points);
        let dealer_turn = play_turn(
            Actor::Dealer,
            &mut self.dealer,
            &mut self.shoe,
            &mut dealer_policy,
            observer,
        )?;
        let outcome = match dealer_turn.state {
            TurnState::Busted => RoundOutcome::DealerBusted {
                dealer: dealer_turn.points,
            },
            TurnState::Blackjack => RoundOutcome::DealerBlackjack,
            TurnState::Stood | TurnState::AwaitingDecision => {
                RoundOutcome::compare(player_points, dealer_turn.points)
            }
        };
        Ok(self.settle(outcome))
    }

    fn settle(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        info!(
            "Round settled: {outcome:?} (player {}, dealer {}, {} cards left)",
            self.player.value(),
            self.dealer.value(),
            self.shoe.len()
        );
        self.phase = RoundPhase::Settled;
        self.outcome = Some(outcome);
        outcome
    }

    pub fn report(&self) -> RoundReport {
        RoundReport {
            player: self.player.cards().to_vec(),
            dealer: self.dealer.cards().to_vec(),
            player_points: self.player.value(),
            dealer_points: self.dealer.value(),
            player_natural: is_natural(self.player.cards()),
            dealer_natural: is_natural(self.dealer.cards()),
            outcome: self.outcome,
            cards_left: self.shoe.len(),
        }
    }
}
