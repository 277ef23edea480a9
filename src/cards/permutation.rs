use super::hand::Hand;
use super::suit::Suit;
use crate::Arbitrary;
use std::cmp::Ordering;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming a "canonical" order of suits (C < D < H < S),
/// we use [Suit; 4] to map C -> P[0], D -> P[1], H -> P[2], S -> P[3].
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Permutation([Suit; 4]);

/// this yields a consistent, though possibly non-unique,
/// Permutation that will map a Hand to its canonical form.
/// suits are sorted by the ranks they hold, strongest pattern first,
/// and the k-th strongest suit is relabeled to the k-th lane.
/// ties are broken by the arbitrary enum impl Ord for Suit, which is
/// harmless: equal patterns land on the same set of lanes either way.
impl From<&Hand> for Permutation {
    fn from(hand: &Hand) -> Self {
        let mut permutation = Suit::all();
        let mut patterns = Suit::all().map(|suit| (suit, hand.pattern(&suit)));
        patterns.sort_by(Self::order);
        patterns
            .into_iter()
            .enumerate()
            .map(|(i, (suit, _))| (suit as usize, Suit::from(i as u8)))
            .for_each(|(index, value)| permutation[index] = value);
        Self(permutation)
    }
}

impl Permutation {
    /// the image of a hand under a permutation
    /// is the union of its shifted sub-Hands
    pub fn image(&self, hand: &Hand) -> Hand {
        Suit::all()
            .iter()
            .map(|suit| self.shift(suit, hand))
            .fold(Hand::empty(), Hand::add)
    }

    /// get the image of a Suit under a Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }

    /// stronger rank pattern first, then Suit order
    fn order(lhs: &(Suit, u64), rhs: &(Suit, u64)) -> Ordering {
        Ordering::Equal
            .then_with(|| rhs.1.cmp(&lhs.1))
            .then_with(|| lhs.0.cmp(&rhs.0))
    }

    /// the hand here gets filtered by the "old" suit
    /// and then we bitshift so that it is in its "new" suit
    /// e.g. Full Hand -> Hearts Hand -> Spades Hand
    fn shift(&self, suit: &Suit, hand: &Hand) -> Hand {
        let old = *suit;
        let new = self.map(suit);
        let shift = new as i8 - old as i8;
        let cards = u64::from(hand.of(suit));
        if shift >= 0 {
            Hand::from(cards << shift as u64)
        } else {
            Hand::from(cards >> shift.unsigned_abs() as u64)
        }
    }

    pub const fn identity() -> Self {
        Self(Suit::all())
    }
    pub const fn exhaust() -> [Self; 24] {
        [
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::C, Suit::D, Suit::S, Suit::H]),
            Self([Suit::C, Suit::H, Suit::D, Suit::S]),
            Self([Suit::C, Suit::H, Suit::S, Suit::D]),
            Self([Suit::C, Suit::S, Suit::D, Suit::H]),
            Self([Suit::C, Suit::S, Suit::H, Suit::D]),
            Self([Suit::D, Suit::C, Suit::H, Suit::S]),
            Self([Suit::D, Suit::C, Suit::S, Suit::H]),
            Self([Suit::D, Suit::H, Suit::C, Suit::S]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
            Self([Suit::D, Suit::S, Suit::C, Suit::H]),
            Self([Suit::D, Suit::S, Suit::H, Suit::C]),
            Self([Suit::H, Suit::C, Suit::D, Suit::S]),
            Self([Suit::H, Suit::C, Suit::S, Suit::D]),
            Self([Suit::H, Suit::D, Suit::C, Suit::S]),
            Self([Suit::H, Suit::D, Suit::S, Suit::C]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::H, Suit::S, Suit::D, Suit::C]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
            Self([Suit::S, Suit::C, Suit::H, Suit::D]),
            Self([Suit::S, Suit::D, Suit::C, Suit::H]),
            Self([Suit::S, Suit::D, Suit::H, Suit::C]),
            Self([Suit::S, Suit::H, Suit::C, Suit::D]),
            Self([Suit::S, Suit::H, Suit::D, Suit::C]),
        ]
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let all = Self::exhaust();
        all[rng.random_range(0..all.len())]
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all().iter() {
            writeln!(f, "{} -> {}", suit, self.map(suit))?;
        }
        Ok(())
    }
}
