//! Console blackjack.

use core::time::Duration;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::console::ConsoleIo;
use bjtable::{RoundError, Table, TableOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Play blackjack against the house at a single table.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 2)]
    decks: u8,
    /// Table minimum bet.
    #[arg(long, default_value_t = 2)]
    min_bet: usize,
    /// The dealer draws while below this total.
    #[arg(long, default_value_t = 17)]
    dealer_stop: u8,
    /// Chips bought on each top-up.
    #[arg(long, default_value_t = 100)]
    chips: usize,
    /// Offer a top-up when a balance falls below this amount.
    #[arg(long, default_value_t = 10)]
    top_up_below: usize,
    /// Pause after each dealer card, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pace_ms: u64,
    /// Shuffle seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Player name; repeat for more seats.
    #[arg(long = "player", default_value = "Player")]
    players: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = TableOptions::default()
        .with_decks(args.decks)
        .with_min_bet(args.min_bet)
        .with_dealer_stop(args.dealer_stop);

    let mut table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };
    tracing::info!(seed, "table opened");

    let mut console = ConsoleIo::new(io::stdin().lock(), io::stdout())
        .with_pace(Duration::from_millis(args.pace_ms));

    let Some(ids) = args
        .players
        .iter()
        .map(|name| table.join(name.as_str()))
        .collect::<Option<Vec<u8>>>()
    else {
        eprintln!("error: a table seats at most {} players", usize::from(u8::MAX) + 1);
        std::process::exit(2);
    };
    for player in table.players() {
        console.announce_join(player);
    }

    loop {
        for &id in &ids {
            let Some(player) = table.player(id) else {
                continue;
            };
            if player.balance() >= args.top_up_below {
                continue;
            }
            match console.offer_chips(player) {
                Ok(true) => {
                    table.buy_chips(id, args.chips);
                    if let Some(player) = table.player(id) {
                        console.announce_balance(player);
                    }
                }
                Ok(false) => {}
                Err(_) => return,
            }
        }

        match table.play_round(&mut console) {
            Ok(_) => {}
            Err(RoundError::NoPlayers) => console.say("Not enough players for the game!"),
            Err(RoundError::InputClosed) => return,
            Err(err) => eprintln!("error: {err}"),
        }

        match console.play_again() {
            Ok(true) => {}
            Ok(false) | Err(_) => break,
        }
    }
}
