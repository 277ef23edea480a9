use super::hand::Hand;
use super::permutation::Permutation;
use super::suit::Suit;
use std::collections::BTreeSet;

/// many Hands are equivalent up to a relabeling of suits,
/// so we canonize to one representative per class.
///
/// the representative is the image whose suit lanes, read from
/// C to S, hold rank patterns in non-increasing order. among all 24
/// images that is the lexicographically largest lane sequence, and,
/// since stronger patterns sit in lower lanes, the smallest u64.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct Isomorphism(Hand);

impl From<Hand> for Isomorphism {
    fn from(hand: Hand) -> Self {
        Self(Permutation::from(&hand).image(&hand))
    }
}

impl From<Isomorphism> for Hand {
    fn from(isomorphism: Isomorphism) -> Self {
        isomorphism.0
    }
}

/// i64 isomorphism
///
/// the canonical Hand bits, unchanged. good for pgcopy serialization.
impl From<Isomorphism> for i64 {
    fn from(isomorphism: Isomorphism) -> Self {
        u64::from(isomorphism.0) as i64
    }
}

impl Isomorphism {
    /// decode persisted bits. None if they do not form a canonical Hand.
    pub fn decode(bits: i64) -> Option<Self> {
        let bits = bits as u64;
        if Hand::fits(bits) && Self::is_canonical(&Hand::from(bits)) {
            Some(Self(Hand::from(bits)))
        } else {
            None
        }
    }

    pub fn is_canonical(hand: &Hand) -> bool {
        Self::from(*hand).0 == *hand
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// every distinct Hand in this class. the number of raw Hands
    /// that canonize here, counted without enumerating the deck.
    pub fn orbit(&self) -> BTreeSet<Hand> {
        Permutation::exhaust()
            .iter()
            .map(|permutation| permutation.image(&self.0))
            .collect()
    }

    /// rank patterns by lane, C first
    fn patterns(&self) -> [u64; 4] {
        Suit::all().map(|suit| self.0.pattern(&suit))
    }
}

impl std::fmt::Display for Isomorphism {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn idempotent() {
        for _ in 0..1000 {
            let hand = Hand::random();
            let once = Isomorphism::from(hand);
            let twice = Isomorphism::from(Hand::from(once));
            assert!(once == twice);
            assert!(Isomorphism::is_canonical(&Hand::from(once)));
        }
    }

    #[test]
    fn invariant_under_relabeling() {
        for _ in 0..100 {
            let hand = Hand::random();
            let isomorphism = Isomorphism::from(hand);
            for permutation in Permutation::exhaust() {
                assert!(isomorphism == Isomorphism::from(permutation.image(&hand)));
            }
        }
    }

    #[test]
    fn extremal_image() {
        for _ in 0..100 {
            let hand = Hand::random();
            let isomorphism = Isomorphism::from(hand);
            let images = Permutation::exhaust().map(|p| Isomorphism(p.image(&hand)));
            let min = images.iter().map(|i| u64::from(i.0)).min().unwrap();
            let max = images.iter().map(|i| i.patterns()).max().unwrap();
            assert!(u64::from(Hand::from(isomorphism)) == min);
            assert!(isomorphism.patterns() == max);
        }
    }

    #[test]
    fn preserves_ranks() {
        let hand = Hand::random();
        let canonical = Hand::from(Isomorphism::from(hand));
        let ranks = |h: Hand| h.map(|c| c.rank()).collect::<Vec<_>>();
        assert!(canonical.size() == hand.size());
        assert!(ranks(canonical) == ranks(hand));
    }

    #[test]
    fn empty_hand() {
        assert!(u64::from(Hand::from(Isomorphism::from(Hand::empty()))) == 0);
    }

    #[test]
    fn single_deuce_any_suit() {
        let deuces = ["2c", "2d", "2h", "2s"]
            .map(|s| Hand::try_from(s).unwrap())
            .map(Isomorphism::from);
        assert!(deuces.iter().all(|d| *d == deuces[0]));
        assert!(deuces[0].orbit().len() == 4);
        assert!(Hand::from(deuces[0]) == Hand::try_from("2c").unwrap());
    }

    #[test]
    fn suited_vs_offsuit() {
        let suited = Isomorphism::from(Hand::try_from("As Ks").unwrap());
        let offsuit = Isomorphism::from(Hand::try_from("Ah Kd").unwrap());
        let paired = Isomorphism::from(Hand::try_from("Ah Ad").unwrap());
        assert!(suited != offsuit);
        assert!(suited.orbit().len() == 4);
        assert!(offsuit.orbit().len() == 12);
        assert!(paired.orbit().len() == 6);
    }

    #[test]
    fn decode_rejects_noncanonical() {
        let hand = Hand::try_from("2s").unwrap();
        let canonical = Isomorphism::from(hand);
        assert!(Isomorphism::decode(i64::from(canonical)) == Some(canonical));
        assert!(Isomorphism::decode(u64::from(hand) as i64) == None);
        assert!(Isomorphism::decode(-1) == None);
    }
}
