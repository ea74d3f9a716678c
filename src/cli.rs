use blackjack::{Shoe, TableRules};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "blackjack-table",
    about = "Play one round of blackjack against the dealer"
)]
pub struct Cli {
    /// Seed for a reproducible shoe (random when omitted)
    #[arg(long, env = "BLACKJACK_SEED")]
    pub seed: Option<u64>,

    /// Number of 52-card decks in the shoe
    #[arg(long, env = "BLACKJACK_DECKS", default_value_t = 1)]
    pub decks: u8,

    /// Dealer stays once reaching this value
    #[arg(long, env = "BLACKJACK_DEALER_STANDS_ON", default_value_t = 17)]
    pub dealer_stands_on: u32,

    /// Dealer keeps hitting while behind the player's total
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    pub dealer_hits_when_trailing: bool,

    /// Pause before each dealer decision, in milliseconds
    #[arg(long, env = "BLACKJACK_DEALER_DELAY_MS", default_value_t = 2000)]
    pub dealer_delay_ms: u64,

    /// Print a JSON report of the round after the result
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn rules(&self) -> Result<TableRules, blackjack::Error> {
        TableRules::new(
            self.decks,
            self.dealer_stands_on,
            self.dealer_hits_when_trailing,
        )
    }

    pub fn shoe(&self, rules: &TableRules) -> Shoe {
        match self.seed {
            Some(seed) => Shoe::seeded(seed, rules.num_decks),
            None => Shoe::standard(rules.num_decks),
        }
    }

    pub fn dealer_delay(&self) -> Duration {
        Duration::from_millis(self.dealer_delay_ms)
    }
}
