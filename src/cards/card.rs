use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This is also the bit a card occupies in a Hand,
/// so cards sort first by rank, then by suit within each rank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// every card in deck order, 2c first and As last
    pub fn all() -> impl Iterator<Item = Self> {
        (0..crate::N_CARDS as u8).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < crate::N_CARDS, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::try_from(r.to_string().as_str())?;
                let suit = Suit::try_from(s.to_string().as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(anyhow::anyhow!("card must be 2 characters: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn bijective_str() {
        for card in Card::all() {
            assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn ten_of_spades() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(u8::from(card), 35);
        assert_eq!(u64::from(card), 1 << 35);
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::S);
    }

    #[test]
    fn malformed() {
        assert!(Card::try_from("T").is_err());
        assert!(Card::try_from("Tsx").is_err());
        assert!(Card::try_from("Xs").is_err());
    }
}
