use super::table::Permutations;
use crate::Count;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::isomorphism::Isomorphism;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::collections::HashMap;

/* enumeration methods
 *
 * every hand of k cards is {top} + (k-1 cards below top).
 * choosing the top card is the unit of parallel work, each
 * worker tallies its own map, and rayon sums the maps
 * pairwise so no two writers ever share one.
 */

impl Permutations {
    /// tally every hand of 1 through `max` cards
    pub fn upto(max: usize) -> Self {
        assert!(max <= crate::MAX_CARDS);
        log::info!("{:<32}{:<32}", "enumerating permutations", format!("1..={}", max));
        let start = std::time::Instant::now();
        let table = (1..=max)
            .map(Self::tally)
            .fold(HashMap::new(), Self::merge);
        log::info!(
            "{:<32}{:<32}",
            "enumerated permutations",
            format!("{} classes in {:.0?}", table.len(), start.elapsed())
        );
        Self::from(table)
    }

    /// tally every hand of exactly `size` cards by canonical class
    pub fn tally(size: usize) -> HashMap<Isomorphism, Count> {
        assert!(size >= 1);
        let start = std::time::Instant::now();
        let table = (0..crate::N_CARDS as u8)
            .into_par_iter()
            .map(Card::from)
            .map(|top| Self::branch(size, top))
            .reduce(HashMap::new, Self::merge);
        log::debug!(
            "{:<32}{:<32}",
            format!("tallied {}-card hands", size),
            format!("{} classes in {:.0?}", table.len(), start.elapsed())
        );
        table
    }

    /// every hand of `size` cards whose highest card is `top`
    fn branch(size: usize, top: Card) -> HashMap<Isomorphism, Count> {
        HandIterator::below(size - 1, top)
            .map(|rest| Hand::add(rest, Hand::from(top)))
            .map(Isomorphism::from)
            .fold(HashMap::new(), |mut table, isomorphism| {
                *table.entry(isomorphism).or_insert(0) += 1;
                table
            })
    }

    /// sum counts per class, draining the smaller map into the larger
    fn merge(
        mut lhs: HashMap<Isomorphism, Count>,
        mut rhs: HashMap<Isomorphism, Count>,
    ) -> HashMap<Isomorphism, Count> {
        if lhs.len() < rhs.len() {
            std::mem::swap(&mut lhs, &mut rhs);
        }
        for (isomorphism, count) in rhs {
            *lhs.entry(isomorphism).or_insert(0) += count;
        }
        lhs
    }
}
