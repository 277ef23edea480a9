use super::card::Card;
use super::hand::Hand;

/// HandIterator lazily visits every Hand of a fixed size,
/// drawn from the cards below some bound.
/// - the size is decided at construction
/// - the bound defaults to the full deck, see [`HandIterator::below`]
///
/// it holds a single u64 and steps to the next bit permutation
/// in increasing numeric order, so every subset is visited exactly once
/// and nothing is ever stored. it is Clone, so a fresh copy restarts
/// the sequence from wherever the copy was taken.
#[derive(Debug, Clone)]
pub struct HandIterator {
    size: usize,
    next: u64,
    bound: u32,
}

impl HandIterator {
    /// every Hand of `size` cards strictly below `card`
    pub fn below(size: usize, card: Card) -> Self {
        Self::new(size, u8::from(card) as u32)
    }

    /// total number of Hands this iterator visits from the start
    pub fn combinations(&self) -> usize {
        crate::choose(self.bound as usize, self.size)
    }

    fn new(size: usize, bound: u32) -> Self {
        assert!(bound as usize <= crate::N_CARDS);
        Self {
            size,
            next: (1u64 << size) - 1,
            bound,
        }
    }

    fn exhausted(&self) -> bool {
        self.next >> self.bound != 0
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn advance(&mut self) {
        // the empty hand has no successor
        if self.next == 0 {
            self.next = 1 << self.bound;
        } else {
            self.next = self.permute();
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.combinations()))
    }
}

/// every Hand of n cards from the full deck
impl From<usize> for HandIterator {
    fn from(n: usize) -> Self {
        Self::new(n, crate::N_CARDS as u32)
    }
}
