use super::error::PermutationError;
use super::table::Permutations;
use crate::Count;
use crate::cards::hand::Hand;
use crate::cards::isomorphism::Isomorphism;
use crate::save::disk::Disk;
use std::path::PathBuf;
use std::sync::OnceLock;

/// where the permutation table lives, and how large a hand it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub max: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: Permutations::path(),
            max: crate::MAX_CARDS,
        }
    }
}

impl From<PathBuf> for Config {
    fn from(path: PathBuf) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }
}

/// answers "how many raw hands are suit-isomorphic to this one".
///
/// the table is populated lazily on first use: loaded from disk if a
/// valid artifact exists, otherwise enumerated and written back.
/// concurrent first callers block on the same population, which runs
/// exactly once. a population that panics leaves the table empty,
/// so the next caller tries again.
#[derive(Debug)]
pub struct SuitPermutations {
    config: Config,
    table: OnceLock<Permutations>,
}

impl From<Config> for SuitPermutations {
    fn from(config: Config) -> Self {
        assert!(config.max >= 1 && config.max <= crate::MAX_CARDS);
        Self {
            config,
            table: OnceLock::new(),
        }
    }
}

impl Default for SuitPermutations {
    fn default() -> Self {
        Self::from(Config::default())
    }
}

impl SuitPermutations {
    /// number of raw hands in the suit-isomorphism class of `bits`
    pub fn num_suit_permutations(&self, bits: u64) -> Result<Count, PermutationError> {
        if Hand::fits(bits) {
            self.count(Hand::from(bits))
        } else {
            Err(PermutationError::InvalidHand {
                bits,
                reason: format!("bits set outside the {}-card layout", crate::N_CARDS),
            })
        }
    }

    /// number of raw hands in the suit-isomorphism class of `hand`
    pub fn count(&self, hand: Hand) -> Result<Count, PermutationError> {
        let size = hand.size();
        if size < 1 || size > self.config.max {
            return Err(PermutationError::InvalidHand {
                bits: u64::from(hand),
                reason: format!("{} cards, expected 1 to {}", size, self.config.max),
            });
        }
        let canonical = Isomorphism::from(hand);
        self.table()
            .get(&canonical)
            .ok_or(PermutationError::CacheConsistency { hand, canonical })
    }

    /// populate ahead of the first query
    pub fn warm(&self) -> &Permutations {
        self.table()
    }

    pub fn is_warm(&self) -> bool {
        self.table.get().is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// the populated table, populating it if this is the first call
    pub fn table(&self) -> &Permutations {
        self.table.get_or_init(|| self.populate())
    }

    fn populate(&self) -> Permutations {
        match self.load() {
            Some(table) => table,
            None => {
                let table = Permutations::upto(self.config.max);
                self.persist(&table);
                table
            }
        }
    }

    /// a failed write is logged, never raised. the table is still served
    /// from memory and later runs enumerate again.
    fn persist(&self, table: &Permutations) -> Option<PermutationError> {
        let error = table.save(&self.config.path).err()?;
        log::warn!("{}; later runs will enumerate again", error);
        Some(error)
    }

    /// any failure to load is a miss
    fn load(&self) -> Option<Permutations> {
        let ref path = self.config.path;
        if !Permutations::done(path) {
            log::info!("{:<32}{:<32}", "no cached permutations", path.display());
            return None;
        }
        match Permutations::load(path) {
            Ok(table) if table.max() == self.config.max => Some(table),
            Ok(table) => {
                log::warn!(
                    "cached permutations at {} cover {} cards, expected {}; rebuilding",
                    path.display(),
                    table.max(),
                    self.config.max
                );
                None
            }
            Err(e) => {
                log::warn!("{}; rebuilding", e);
                None
            }
        }
    }
}
