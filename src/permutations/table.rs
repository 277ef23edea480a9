use crate::Count;
use crate::cards::isomorphism::Isomorphism;
use std::collections::HashMap;

/// how many raw Hands canonize to each Isomorphism.
///
/// once populated this is read-only. it must always equal what a fresh
/// enumeration would produce, whether it came from memory or from disk,
/// which is what [`Permutations::verify`] checks on the way in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Permutations(HashMap<Isomorphism, Count>);

impl Permutations {
    pub fn get(&self, isomorphism: &Isomorphism) -> Option<Count> {
        self.0.get(isomorphism).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Isomorphism, &Count)> {
        self.0.iter()
    }

    /// largest hand size with a tabulated class
    pub fn max(&self) -> usize {
        self.0.keys().map(Isomorphism::size).max().unwrap_or(0)
    }

    /// raw hands of a given size, summed over their classes
    pub fn total(&self, size: usize) -> usize {
        self.0
            .iter()
            .filter(|(isomorphism, _)| isomorphism.size() == size)
            .map(|(_, count)| *count as usize)
            .sum()
    }

    /// every class is a nonempty hand of at most 7 cards whose count is
    /// exactly its orbit under Suit permutations, and for every size up to
    /// the largest, counts sum to the number of raw hands. orbits are
    /// disjoint, so exact counts summing to C(52, k) leave no room for a
    /// missing class.
    pub fn verify(&self) -> Result<(), String> {
        let mut totals = [0usize; crate::MAX_CARDS + 1];
        for (isomorphism, count) in self.iter() {
            let size = isomorphism.size();
            if size == 0 || size > crate::MAX_CARDS {
                return Err(format!("class [{}] has {} cards", isomorphism, size));
            }
            let orbit = isomorphism.orbit().len();
            if *count as usize != orbit {
                return Err(format!(
                    "class [{}] has count {}, expected {}",
                    isomorphism, count, orbit
                ));
            }
            totals[size] += *count as usize;
        }
        for size in 1..=self.max() {
            let expected = crate::choose(crate::N_CARDS, size);
            if totals[size] != expected {
                return Err(format!(
                    "{}-card classes sum to {}, expected {}",
                    size, totals[size], expected
                ));
            }
        }
        Ok(())
    }
}

impl From<HashMap<Isomorphism, Count>> for Permutations {
    fn from(map: HashMap<Isomorphism, Count>) -> Self {
        Self(map)
    }
}
impl From<Permutations> for HashMap<Isomorphism, Count> {
    fn from(permutations: Permutations) -> Self {
        permutations.0
    }
}

impl FromIterator<(Isomorphism, Count)> for Permutations {
    fn from_iter<I: IntoIterator<Item = (Isomorphism, Count)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
