//! Suit-isomorphism canonicalization and permutation counts.
//!
//! Every Hand of 1 to 7 cards belongs to a class of hands that differ
//! only by a relabeling of suits. This crate canonicalizes hands to a
//! single representative per class and counts, once per deployment,
//! how many raw hands fall into each class.
pub mod cards;
pub mod permutations;
pub mod save;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of raw hands that share a canonical class. Never exceeds 4! = 24.
pub type Count = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Cards in a standard deck.
pub const N_CARDS: usize = 52;
/// Distinct suits, and the width of each rank slot in a Hand.
pub const N_SUITS: usize = 4;
/// Distinct ranks, and the number of rank slots in a Hand.
pub const N_RANKS: usize = 13;
/// Largest hand (2 pocket + 5 public) with a tabulated permutation count.
pub const MAX_CARDS: usize = 7;

// ============================================================================
// PERSISTENCE
// ============================================================================
/// Entity name of the persisted permutation table.
pub const PERMUTATIONS_NAME: &str = "permutations";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// n choose k, exact for every subset size of a 52-card deck.
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut i = 0;
    let mut x = 1;
    while i < k {
        x = x * (n - i) / (i + 1);
        i += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_combinations() {
        assert_eq!(choose(52, 0), 1);
        assert_eq!(choose(52, 1), 52);
        assert_eq!(choose(52, 2), 1326);
        assert_eq!(choose(52, 5), 2598960);
        assert_eq!(choose(52, 7), 133784560);
        assert_eq!(choose(3, 4), 0);
    }
}
