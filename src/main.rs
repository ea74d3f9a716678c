use blackjack::{InteractivePolicy, Round};
use clap::Parser;
use std::error::Error;
use std::io;

mod cli;
use cli::Cli;

mod console;
use console::{ConsoleInput, ConsoleObserver};

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let rules = cli.rules()?;
    log::debug!("Table rules: {rules:?}");

    let mut round = Round::deal(cli.shoe(&rules), rules)?;
    let mut policy = InteractivePolicy::new(ConsoleInput::new(io::stdin().lock(), io::stdout()));
    let mut observer = ConsoleObserver::new(io::stdout(), cli.dealer_delay());

    let outcome = round.play(&mut policy, &mut observer)?;
    observer.announce(&outcome, round.dealer());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&round.report())?);
    }
    Ok(())
}
