#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// deck-relative rank: 0 is the deck's lowest rank, not necessarily a 2
    pub fn rank(&self) -> u8 {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(u8, Suit)> for Card {
    fn from((rank, suit): (u8, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
///
/// each card is mapped to its deal position in a rank-major sorted deck
/// index == rank * 4 + suit
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + c.rank * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: n / 4,
            suit: Suit::from(n % 4),
        }
    }
}

use super::suit::Suit;
