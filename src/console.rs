use blackjack::{
    show_card, show_hand, Actor, Card, DecisionSource, Hand, RoundOutcome, TableObserver,
};
use std::fmt;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

pub const PROMPT: &str = "Hit or Stay? (h/s)";

/// Reads one line per decision. A closed or broken input counts as "stay".
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> DecisionSource for ConsoleInput<R, W> {
    fn next_token(&mut self) -> String {
        if let Err(e) = writeln!(self.writer, "{PROMPT}").and_then(|_| self.writer.flush()) {
            log::warn!("Failed to write prompt: {e}");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                log::warn!("Input closed, treating as stay");
                String::new()
            }
            Ok(_) => line,
            Err(e) => {
                log::warn!("Failed to read input ({e}), treating as stay");
                String::new()
            }
        }
    }
}

/// Prints the round as it happens and paces the dealer.
pub struct ConsoleObserver<W> {
    out: W,
    dealer_delay: Duration,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, dealer_delay: Duration) -> Self {
        Self { out, dealer_delay }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|_| self.out.write_all(b"\n")) {
            log::warn!("Failed to write to console: {e}");
        }
    }

    /// Final lines of the round
    pub fn announce(&mut self, outcome: &RoundOutcome, dealer: &Hand) {
        // Only a standing dealer gets a points line before the comparison
        if matches!(
            outcome,
            RoundOutcome::PlayerWins { .. }
                | RoundOutcome::DealerWins { .. }
                | RoundOutcome::Tie { .. }
        ) {
            self.line(format_args!("Dealer points: {}.", dealer.value()));
        }
        self.line(format_args!("\n{}", outcome_message(outcome)));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TableObserver for ConsoleObserver<W> {
    fn dealt(&mut self, player: &Hand, dealer_up: &Card) {
        self.line(format_args!("Dealer first card is: {}", show_card(dealer_up)));
        self.line(format_args!("Your cards: {}", show_hand(player.cards())));
    }

    fn step(&mut self, actor: Actor, _hand: &Hand) {
        if actor == Actor::Dealer && !self.dealer_delay.is_zero() {
            thread::sleep(self.dealer_delay);
        }
    }

    fn hit(&mut self, actor: Actor, hand: &Hand) {
        match actor {
            Actor::Player => {
                self.line(format_args!("\n### You chose to hit ###"));
                self.line(format_args!("Your cards: {}", show_hand(hand.cards())));
            }
            Actor::Dealer => {
                self.line(format_args!("\n### Dealer chose to hit ###"));
                self.line(format_args!("Dealer cards: {}", show_hand(hand.cards())));
                self.line(format_args!(">>> current dealer points: {}", hand.value()));
            }
        }
    }

    fn stayed(&mut self, actor: Actor, hand: &Hand) {
        match actor {
            Actor::Player => self.line(format_args!("\n### You chose to stay ###")),
            Actor::Dealer => {
                self.line(format_args!("\n### Dealer chose to stay ###"));
                self.line(format_args!("Dealer cards: {}", show_hand(hand.cards())));
            }
        }
    }

    fn dealer_revealed(&mut self, player_points: u32, dealer: &Hand) {
        self.line(format_args!("Your points: {player_points}."));
        self.line(format_args!("Dealer cards: {}", show_hand(dealer.cards())));
    }
}

pub fn outcome_message(outcome: &RoundOutcome) -> String {
    match outcome {
        RoundOutcome::PlayerBusted { player } => {
            format!("You have {player} points. That is more than 21! Dealer wins.")
        }
        RoundOutcome::PlayerBlackjack => {
            "Wow, you got 21! You made the blackjack and you win!".to_string()
        }
        RoundOutcome::DealerBusted { dealer } => {
            format!("Dealer has {dealer} which is more than 21. You win!")
        }
        RoundOutcome::DealerBlackjack => "Dealer has 21. Dealer wins.".to_string(),
        RoundOutcome::PlayerWins { .. } => {
            "You have more points than the dealer. You win!".to_string()
        }
        RoundOutcome::DealerWins { .. } => "Dealer has more points. Dealer wins.".to_string(),
        RoundOutcome::Tie { .. } => "It's a tie.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{InteractivePolicy, Rank, Round, Shoe, Suit, TableRules};
    use std::io::Cursor;
    use std::time::Instant;

    fn stacked(draw_order: &[(Rank, Suit)]) -> Shoe {
        Shoe::from_cards(
            draw_order
                .iter()
                .rev()
                .map(|(r, s)| Card::new(*r, *s))
                .collect(),
        )
    }

    #[test]
    fn test_console_input_reads_one_line_per_request() {
        let mut prompts = Vec::new();
        let mut input = ConsoleInput::new(Cursor::new("h\nS\n"), &mut prompts);
        assert_eq!(input.next_token(), "h\n");
        assert_eq!(input.next_token(), "S\n");
        assert_eq!(input.next_token(), "");
        drop(input);
        assert_eq!(String::from_utf8(prompts).unwrap().matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            outcome_message(&RoundOutcome::PlayerBusted { player: 24 }),
            "You have 24 points. That is more than 21! Dealer wins."
        );
        assert_eq!(
            outcome_message(&RoundOutcome::DealerBusted { dealer: 23 }),
            "Dealer has 23 which is more than 21. You win!"
        );
        assert_eq!(outcome_message(&RoundOutcome::Tie { points: 18 }), "It's a tie.");
    }

    #[test]
    fn test_full_round_transcript() {
        let shoe = stacked(&[
            (Rank::Seven, Suit::Spades),
            (Rank::Eight, Suit::Diamonds),
            (Rank::Ten, Suit::Clubs),
            (Rank::Six, Suit::Hearts),
            (Rank::Four, Suit::Spades),
        ]);
        let mut round = Round::deal(shoe, TableRules::default()).unwrap();
        let mut policy = InteractivePolicy::new(ConsoleInput::new(Cursor::new("s\n"), Vec::new()));
        let mut observer = ConsoleObserver::new(Vec::new(), Duration::ZERO);

        let outcome = round.play(&mut policy, &mut observer).unwrap();
        observer.announce(&outcome, round.dealer());
        let text = String::from_utf8(observer.into_inner()).unwrap();

        let expected = "\
Dealer first card is: 10 of Clubs
Your cards: 7 of Spades, 8 of Diamonds

### You chose to stay ###
Your points: 15.
Dealer cards: 10 of Clubs, 6 of Hearts

### Dealer chose to hit ###
Dealer cards: 10 of Clubs, 6 of Hearts, 4 of Spades
>>> current dealer points: 20

### Dealer chose to stay ###
Dealer cards: 10 of Clubs, 6 of Hearts, 4 of Spades
Dealer points: 20.

Dealer has more points. Dealer wins.
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_dealer_pauses_before_announcing_twenty_one() {
        let shoe = stacked(&[
            (Rank::Ten, Suit::Spades),
            (Rank::Eight, Suit::Spades),
            (Rank::Ace, Suit::Clubs),
            (Rank::King, Suit::Clubs),
        ]);
        let mut round = Round::deal(shoe, TableRules::default()).unwrap();
        let mut policy = InteractivePolicy::new(ConsoleInput::new(Cursor::new("s\n"), Vec::new()));
        let delay = Duration::from_millis(30);
        let mut observer = ConsoleObserver::new(Vec::new(), delay);

        let started = Instant::now();
        let outcome = round.play(&mut policy, &mut observer).unwrap();

        assert_eq!(outcome, RoundOutcome::DealerBlackjack);
        assert!(started.elapsed() >= delay);
    }

    #[test]
    fn test_player_bust_skips_dealer_lines() {
        let shoe = stacked(&[
            (Rank::Ten, Suit::Clubs),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Two, Suit::Clubs),
            (Rank::Three, Suit::Clubs),
            (Rank::Five, Suit::Hearts),
        ]);
        let mut round = Round::deal(shoe, TableRules::default()).unwrap();
        let mut policy = InteractivePolicy::new(ConsoleInput::new(Cursor::new("H\n"), Vec::new()));
        let mut observer = ConsoleObserver::new(Vec::new(), Duration::ZERO);

        let outcome = round.play(&mut policy, &mut observer).unwrap();
        observer.announce(&outcome, round.dealer());
        let text = String::from_utf8(observer.into_inner()).unwrap();

        assert!(text.contains("### You chose to hit ###"));
        assert!(!text.contains("Dealer cards"));
        assert!(text.ends_with("You have 24 points. That is more than 21! Dealer wins.\n"));
    }
}
