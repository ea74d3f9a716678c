mod card;
mod error;
mod hand;
mod round;
mod rules;
mod shoe;
pub mod turn;

pub use card::{show_card, show_hand, Card, Rank, Suit};
pub use error::Error;
pub use hand::{
    count_aces, hand_value, is_blackjack, is_busted, is_natural, is_soft, rank_value, Hand,
    BLACKJACK,
};
pub use round::{Round, RoundOutcome, RoundPhase, RoundReport};
pub use rules::{TableRules, MAX_DECKS};
pub use shoe::{create_shoe, draw, Shoe};
pub use turn::{
    play_turn, Actor, Decision, DecisionPolicy, DecisionSource, InteractivePolicy, Silent,
    TableObserver, ThresholdPolicy, TurnOutcome, TurnState,
};
