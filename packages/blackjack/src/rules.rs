use crate::Error;
use serde::{Deserialize, Serialize};

pub const MAX_DECKS: u8 = 8;

/// Configurable table rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Number of 52-card decks in the shoe
    pub num_decks: u8,

    /// Dealer stays once the hand reaches this value
    pub dealer_stands_on: u32,

    /// Dealer keeps hitting while behind the player's total, even at or above `dealer_stands_on`
    pub dealer_hits_when_trailing: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            num_decks: 1,
            dealer_stands_on: 17,
            dealer_hits_when_trailing: false,
        }
    }
}

impl TableRules {
    pub fn new(
        num_decks: u8,
        dealer_stands_on: u32,
        dealer_hits_when_trailing: bool,
    ) -> Result<Self, Error> {
        if num_decks == 0 || num_decks > MAX_DECKS {
            return Err(Error::InvalidRules(format!(
                "number of decks must be between 1 and {MAX_DECKS}, got {num_decks}"
            )));
        }
        if !(2..=21).contains(&dealer_stands_on) {
            return Err(Error::InvalidRules(format!(
                "dealer must stand on a value between 2 and 21, got {dealer_stands_on}"
            )));
        }
        Ok(Self {
            num_decks,
            dealer_stands_on,
            dealer_hits_when_trailing,
        })
    }

    /// Dealer chases the player's total instead of stopping at the threshold
    pub fn chasing_dealer() -> Self {
        Self {
            dealer_hits_when_trailing: true,
            ..Self::default()
        }
    }

    pub fn shoe_size(&self) -> usize {
        52 * self.num_decks as usize
    }
}
