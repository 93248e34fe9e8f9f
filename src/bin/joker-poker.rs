use anyhow::{bail, Result};
use clap::Parser;
use joker_poker::cards::parse_cards;
use joker_poker::deck::{Deck, DeckOptions};
use joker_poker::evaluator::{classify, classify_hand};
use log::info;

#[derive(Debug, Parser)]
#[command(version, about = "Deal or classify five-card poker hands")]
struct Cli {
    /// Add the joker to the deck.
    #[clap(long, short)]
    joker: bool,
    /// Seed for a reproducible shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of rounds to deal, each from a fresh deck.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    rounds: u32,
    /// Cards to classify instead of dealing, e.g. `As Ks Qs Js Joker`.
    cards: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .init();

    let cli = Cli::parse();

    if !cli.cards.is_empty() {
        if cli.seed.is_some() || cli.joker {
            bail!("--seed and --joker only apply when dealing");
        }
        let cards = parse_cards(&cli.cards.join(" "))?;
        println!("{}", classify(&cards)?);
        return Ok(());
    }

    info!("dealing {} round(s), joker: {}", cli.rounds, cli.joker);
    for round in 0..cli.rounds {
        let mut options = DeckOptions::default().with_wildcard(cli.joker);
        if let Some(seed) = cli.seed {
            options = options.with_seed(seed.wrapping_add(u64::from(round)));
        }
        let mut deck = Deck::new(options);
        let hand = deck.deal_hand()?;
        println!("{hand}  ->  {}", classify_hand(&hand));
    }
    Ok(())
}
