//! Race A* against Dijkstra on a random maze and print a summary.
//!
//! Run: cargo run --bin duel -- --rows 30 --cols 40 --seed 7
//! Set RUST_LOG=debug (or trace, for every step) to follow the searches.

use clap::Parser;
use log::trace;
use pathduel_demos::{Duel, DuelConfig};

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run(DuelConfig::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: DuelConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut duel = Duel::new(config)?;
    let report = duel.run(|algorithm, ev| {
        trace!("{algorithm} #{} {} g={}", ev.step, ev.cell, ev.g);
    })?;
    println!("{report}");
    Ok(())
}
