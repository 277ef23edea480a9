use crate::cards::hand::Hand;
use crate::cards::isomorphism::Isomorphism;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PermutationError {
    /// bits outside the 52-card layout, or a card count we do not tabulate
    #[error("invalid hand {bits:#015x}: {reason}")]
    InvalidHand { bits: u64, reason: String },
    /// the artifact could not be read or written
    #[error("permutation cache i/o failure at {}: {source}", .path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// the artifact was readable but is not a valid permutation table
    #[error("corrupt permutation cache at {}: {reason}", .path.display())]
    CacheCorrupt { path: PathBuf, reason: String },
    /// a valid hand has no entry after population. enumeration is broken.
    #[error("canonical class [{canonical}] of hand [{hand}] missing from populated cache")]
    CacheConsistency { hand: Hand, canonical: Isomorphism },
}
