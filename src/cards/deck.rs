use super::card::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// A parameterized card universe: four suits crossed with the contiguous
/// absolute rank range `lowest..=ACE`. Card rank 0 maps to `lowest`, so the
/// same Card value names a different absolute rank under a different Deck.
///
/// Shrinking the universe by raising `lowest` is how short-deck variants are
/// configured; the ace stays pinned at absolute rank 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    lowest: u8,
}

impl Deck {
    pub const ACE: u8 = 14;
    pub const SUITS: u8 = 4;

    pub fn new(lowest: u8) -> Self {
        assert!(
            2 <= lowest && lowest < Self::ACE,
            "lowest rank out of range: {}",
            lowest
        );
        Self { lowest }
    }

    /// the standard 52-card deck
    pub fn standard() -> Self {
        Self::new(2)
    }

    pub fn lowest(&self) -> u8 {
        self.lowest
    }
    pub fn ranks(&self) -> u8 {
        Self::ACE - self.lowest + 1
    }
    pub fn size(&self) -> u8 {
        Self::SUITS * self.ranks()
    }

    /// deal position -> Card. an out of range index is a caller bug
    pub fn card(&self, index: u8) -> Card {
        assert!(index < self.size(), "deal index out of range: {}", index);
        Card::from(index)
    }

    /// canonical label, rank then suit: "6c", "Td" is spelled "10d", "As"
    pub fn label(&self, card: Card) -> String {
        let rank = match card.rank() + self.lowest {
            14 => "A".to_string(),
            13 => "K".to_string(),
            12 => "Q".to_string(),
            11 => "J".to_string(),
            r => r.to_string(),
        };
        format!("{}{}", rank, card.suit())
    }

    /// one trial's hand: the first five cards of a fresh uniform
    /// permutation of the full deck, drawn without replacement
    pub fn deal<R: Rng>(&self, rng: &mut R) -> [Card; 5] {
        let mut indices = (0..self.size()).collect::<Vec<u8>>();
        indices.shuffle(rng);
        std::array::from_fn(|i| self.card(indices[i]))
    }
}
