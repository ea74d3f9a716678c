use crate::hand::BLACKJACK;
use crate::{Card, Error, Hand, Shoe, TableRules};
use log::debug;
use serde::{Deserialize, Serialize};

/// Who is acting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Dealer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    AwaitingDecision,
    Busted,
    Blackjack,
    Stood,
}

impl TurnState {
    /// State a hand of `points` enters before any decision is asked for
    pub fn evaluate(points: u32) -> Self {
        if points > BLACKJACK {
            TurnState::Busted
        } else if points == BLACKJACK {
            TurnState::Blackjack
        } else {
            TurnState::AwaitingDecision
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnState::AwaitingDecision)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stay,
}

impl Decision {
    /// "h" in any case means hit; every other token means stay.
    /// Only the line ending is stripped, so " h" is a stay.
    pub fn from_token(token: &str) -> Self {
        if token
            .trim_end_matches(['\r', '\n'])
            .eq_ignore_ascii_case("h")
        {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub state: TurnState,
    pub points: u32,
}

/// External supplier of the player's raw answers, one token per request
pub trait DecisionSource {
    fn next_token(&mut self) -> String;
}

impl<F: FnMut() -> String> DecisionSource for F {
    fn next_token(&mut self) -> String {
        self()
    }
}

pub trait DecisionPolicy {
    fn decide(&mut self, hand: &Hand) -> Decision;
}

/// Player policy: asks the source every time
pub struct InteractivePolicy<S> {
    source: S,
}

impl<S: DecisionSource> InteractivePolicy<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: DecisionSource> DecisionPolicy for InteractivePolicy<S> {
    fn decide(&mut self, _hand: &Hand) -> Decision {
        Decision::from_token(&self.source.next_token())
    }
}

/// Dealer policy: hit below the threshold, optionally while trailing the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    pub stand_on: u32,
    pub chase_points: Option<u32>,
}

impl ThresholdPolicy {
    pub fn new(stand_on: u32) -> Self {
        Self {
            stand_on,
            chase_points: None,
        }
    }

    pub fn for_dealer(rules: &TableRules, player_points: u32) -> Self {
        Self {
            stand_on: rules.dealer_stands_on,
            chase_points: rules.dealer_hits_when_trailing.then_some(player_points),
        }
    }

    pub fn should_hit(&self, points: u32) -> bool {
        if points < self.stand_on {
            return true;
        }
        matches!(self.chase_points, Some(target) if points < target)
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(TableRules::default().dealer_stands_on)
    }
}

impl DecisionPolicy for ThresholdPolicy {
    fn decide(&mut self, hand: &Hand) -> Decision {
        if self.should_hit(hand.value()) {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }
}

/// Hooks the shell uses to render the round. Every method defaults to a no-op.
pub trait TableObserver {
    fn dealt(&mut self, _player: &Hand, _dealer_up: &Card) {}

    /// Called at the top of every pass through `actor`'s turn loop, terminal or not
    fn step(&mut self, _actor: Actor, _hand: &Hand) {}

    fn hit(&mut self, _actor: Actor, _hand: &Hand) {}

    fn stayed(&mut self, _actor: Actor, _hand: &Hand) {}

    fn dealer_revealed(&mut self, _player_points: u32, _dealer: &Hand) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl TableObserver for Silent {}

/// Runs one actor's hit/stay loop until a terminal state.
pub fn play_turn<P, O>(
    actor: Actor,
    hand: &mut Hand,
    shoe: &mut Shoe,
    policy: &mut P,
    observer: &mut O,
) -> Result<TurnOutcome, Error>
where
    P: DecisionPolicy + ?Sized,
    O: TableObserver + ?Sized,
{
    loop {
        observer.step(actor, hand);
        let points = hand.value();
        let state = TurnState::evaluate(points);
        if state.is_terminal() {
            debug!("{actor:?} finished with {points} ({state:?})");
            return Ok(TurnOutcome { state, points });
        }

        match policy.decide(hand) {
            Decision::Hit => {
                let card = shoe.draw()?;
                hand.add_card(card);
                debug!("{actor:?} hits: {} -> {}", card.short(), hand.value());
                observer.hit(actor, hand);
            }
            Decision::Stay => {
                debug!("{actor:?} stays on {points}");
                observer.stayed(actor, hand);
                return Ok(TurnOutcome {
                    state: TurnState::Stood,
                    points,
                });
            }
        }
    }
}
