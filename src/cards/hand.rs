use super::card::Card;
use super::suit::Suit;
use crate::Arbitrary;

/// Hand represents an unordered set of Cards. a single word for the
/// full Hand independent of size, stored as a u64 but only using the
/// LSB bitstring of 52 bits. each bit is a unique card in the set,
/// laid out as 13 rank slots of 4 suit lanes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// the cards of this hand that belong to one suit, left in place
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    /// the ranks held in one suit, aligned to the lowest lane.
    /// comparing these is comparing suits by rank pattern.
    pub fn pattern(&self, suit: &Suit) -> u64 {
        (self.0 >> *suit as u64) & Suit::lane()
    }

    /// whether these bits fit inside the 52-card layout
    pub const fn fits(bits: u64) -> bool {
        bits & !Self::mask() == 0
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(u64::from)
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// str isomorphism
/// whitespace separated cards, each appearing at most once
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .try_fold(Self::empty(), |hand, card| {
                let card = card?;
                match hand.contains(&card) {
                    true => Err(anyhow::anyhow!("duplicate card: {}", card)),
                    false => Ok(Self::add(hand, Self::from(card))),
                }
            })
    }
}

/// a uniformly sized hand of 1 to 7 distinct cards
impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=crate::MAX_CARDS);
        rand::seq::index::sample(rng, crate::N_CARDS, n)
            .iter()
            .map(|i| Card::from(i as u8))
            .map(Self::from)
            .fold(Self::empty(), Self::add)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = Vec::<Card>::from(*self)
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", cards.join(" "))
    }
}
