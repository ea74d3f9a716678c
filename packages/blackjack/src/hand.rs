use crate::{Card, Rank};
use serde::{Deserialize, Serialize};

pub const BLACKJACK: u32 = 21;

/// Value of a single rank, with the Ace provisionally worth 11
pub fn rank_value(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 11,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

pub fn count_aces(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.is_ace()).count()
}

/// Calculate the value of a blackjack hand
pub fn hand_value(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|c| rank_value(c.rank)).sum();
    let mut aces = count_aces(cards);

    // One 11 -> 1 reduction per ace
    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Check if a hand is soft (has an ace still counted as 11)
pub fn is_soft(cards: &[Card]) -> bool {
    let hard_total = hand_value(cards);
    let raw: u32 = cards.iter().map(|c| rank_value(c.rank)).sum();
    let all_aces_low = raw - 10 * count_aces(cards) as u32;
    hard_total != all_aces_low
}

pub fn is_busted(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

/// Any 21 ends the turn as a blackjack, regardless of card count.
pub fn is_blackjack(cards: &[Card]) -> bool {
    hand_value(cards) == BLACKJACK
}

/// Two-card 21. Informational only; the table pays every 21 the same.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && is_blackjack(cards)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
