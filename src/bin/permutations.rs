//! Permutations Binary
//!
//! Warms the suit permutation table, building and saving it if no valid
//! artifact exists, then answers counts for any hands given as arguments.
//!
//! Usage: permutations [--path FILE] ["As Kd" ...]

use clap::Parser;
use isoperm::cards::Hand;
use isoperm::cards::Isomorphism;
use isoperm::permutations::Config;
use isoperm::permutations::SuitPermutations;
use isoperm::save::Disk;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Location of the persisted permutation table")]
    path: Option<PathBuf>,
    #[arg(help = "Hands to count, e.g. \"As Kd 2c\"")]
    hands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    isoperm::log();
    let args = Args::parse();
    let config = args
        .path
        .map(Config::from)
        .unwrap_or_default();
    log::info!("{:<32}{:<32}", "permutation table", config.path.display());
    let permutations = SuitPermutations::from(config);
    let table = permutations.warm();
    log::info!("{:<32}{:<32}", "canonical classes", table.len());
    for hand in args.hands.iter() {
        let hand = Hand::try_from(hand.as_str())?;
        let count = permutations.count(hand)?;
        println!("{:<24} {:<24} {}", hand, Isomorphism::from(hand), count);
    }
    if !isoperm::permutations::Permutations::done(&permutations.config().path) {
        log::warn!("permutation table was not persisted");
    }
    Ok(())
}
