pub mod card;
pub use card::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod isomorphism;
pub use isomorphism::*;

pub mod permutation;
pub use permutation::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
