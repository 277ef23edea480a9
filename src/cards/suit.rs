/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits are interchangeable for counting purposes. Only the pattern of
/// suit matches matters, not which specific suits are involved. This symmetry
/// is what [`Permutation`] and [`Isomorphism`] factor out.
///
/// Each suit owns one bit lane in every rank slot of a [`Hand`],
/// so the discriminant is also the lane offset.
///
/// [`Permutation`]: super::permutation::Permutation
/// [`Isomorphism`]: super::isomorphism::Isomorphism
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in lane order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// every rank of the lowest lane. shift left by a suit to get its lane.
    pub const fn lane() -> u64 {
        0x0001111111111111
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
/// every card of this suit, one bit per rank
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        Suit::lane() << s as u64
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(anyhow::anyhow!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}
