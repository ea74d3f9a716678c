use crate::{Card, Error, Rank, Suit};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Undrawn cards for a round. The last element is the next card out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
    capacity: usize,
}

impl Shoe {
    /// Cross product of `ranks` x `suits`, repeated `decks` times, shuffled with `rng`.
    pub fn build<R: Rng + ?Sized>(ranks: &[Rank], suits: &[Suit], decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * suits.len() * decks as usize);
        for _ in 0..decks {
            for &rank in ranks {
                for &suit in suits {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards.shuffle(rng);
        debug!("Shuffled shoe of {} cards ({} deck(s))", cards.len(), decks);
        Self::from_cards(cards)
    }

    /// Standard shoe of `decks` 52-card decks, shuffled from OS entropy.
    pub fn standard(decks: u8) -> Self {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::build(&Rank::ALL, &Suit::ALL, decks, &mut rng)
    }

    /// Reproducible shoe for tests and replays.
    pub fn seeded(seed: u64, decks: u8) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::build(&Rank::ALL, &Suit::ALL, decks, &mut rng)
    }

    /// Shoe in an explicit order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let capacity = cards.len();
        Self { cards, capacity }
    }

    pub fn draw(&mut self) -> Result<Card, Error> {
        let card = self.cards.pop().ok_or(Error::EmptyShoe)?;
        debug!("Drew {} ({} left)", card.short(), self.cards.len());
        Ok(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards the shoe held when it was built.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Fresh single-deck shoe in a random order.
pub fn create_shoe() -> Shoe {
    Shoe::standard(1)
}

pub fn draw(shoe: &mut Shoe) -> Result<Card, Error> {
    shoe.draw()
}
