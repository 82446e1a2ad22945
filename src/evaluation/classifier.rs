use super::category::Category;
use crate::cards::card::Card;

/// Detects every Category a 5-card hand satisfies.
///
/// This is not a showdown evaluator reducing to a single best ranking: the
/// hand is tagged with all co-occurring categories, including the Small
/// variants found by dropping one card and re-testing the remaining four.
/// Each detection phase sorts its own copy of the hand by the key it needs,
/// so no ordering leaks from one phase into the next and the input is never
/// mutated.
pub struct Classifier([Card; 5]);

impl From<[Card; 5]> for Classifier {
    fn from(cards: [Card; 5]) -> Self {
        Self(cards)
    }
}

impl Classifier {
    /// the full tag set, in detection order
    pub fn labels(&self) -> Vec<Category> {
        let mut labels = vec![self.grouping()];
        labels.extend(self.straights());
        labels.extend(self.flushes());
        labels.extend(self.straight_flushes());
        labels
    }

    /// exactly one of the six grouping categories, by rank multiplicity.
    /// scans maximal equal-rank runs in rank order; the final run is
    /// closed out by letting the scan index walk one past the end
    fn grouping(&self) -> Category {
        let cards = self.by_rank();
        let mut pairs = 0;
        let mut triples = 0;
        let mut quads = 0;
        let mut run = 1;
        for i in 1..=cards.len() {
            if i < cards.len() && cards[i].rank() == cards[i - 1].rank() {
                run += 1;
            } else {
                match run {
                    2 => pairs += 1,
                    3 => triples += 1,
                    4 => quads += 1,
                    _ => {}
                }
                run = 1;
            }
        }
        if quads == 1 {
            Category::FourOfAKind
        } else if triples == 1 && pairs == 1 {
            Category::FullHouse
        } else if triples == 1 {
            Category::ThreeOfAKind
        } else if pairs == 2 {
            Category::TwoPair
        } else if pairs == 1 {
            Category::Pair
        } else {
            Category::NoPair
        }
    }

    /// all five ranks contiguous, or any four after dropping one card.
    /// the full-hand test runs first, so a Straight never also reports
    /// as a SmallStraight
    fn straights(&self) -> Option<Category> {
        let cards = self.by_rank();
        if Self::contiguous(&cards) {
            Some(Category::Straight)
        } else if (0..cards.len()).any(|omit| Self::contiguous(&Self::without(&cards, omit))) {
            Some(Category::SmallStraight)
        } else {
            None
        }
    }

    /// all five suits equal, or four of five. sorted by suit, any four
    /// equal suits must occupy positions 0..4 or 1..5, so only those two
    /// windows need testing
    fn flushes(&self) -> Option<Category> {
        let cards = self.by_suit();
        if Self::suited(&cards) {
            Some(Category::Flush)
        } else if Self::suited(&cards[..4]) || Self::suited(&cards[1..]) {
            Some(Category::SmallFlush)
        } else {
            None
        }
    }

    /// the straight test and the flush test over the same subset: all five
    /// cards, or the same four survivors of a single omission. sorted by
    /// rank so contiguity is positional regardless of deal order
    fn straight_flushes(&self) -> Option<Category> {
        let cards = self.by_rank();
        if Self::suited(&cards) && Self::contiguous(&cards) {
            Some(Category::StraightFlush)
        } else if (0..cards.len()).any(|omit| {
            let four = Self::without(&cards, omit);
            Self::suited(&four) && Self::contiguous(&four)
        }) {
            Some(Category::SmallStraightFlush)
        } else {
            None
        }
    }

    fn by_rank(&self) -> [Card; 5] {
        let mut cards = self.0;
        cards.sort_by_key(|c| c.rank());
        cards
    }
    fn by_suit(&self) -> [Card; 5] {
        let mut cards = self.0;
        cards.sort_by_key(|c| u8::from(c.suit()));
        cards
    }

    fn suited(cards: &[Card]) -> bool {
        cards.iter().all(|c| c.suit() == cards[0].suit())
    }
    fn contiguous(cards: &[Card]) -> bool {
        cards.windows(2).all(|w| w[1].rank() == w[0].rank() + 1)
    }
    fn without(cards: &[Card; 5], omit: usize) -> [Card; 4] {
        let mut four = [cards[0]; 4];
        let mut n = 0;
        for (i, card) in cards.iter().enumerate() {
            if i != omit {
                four[n] = *card;
                n += 1;
            }
        }
        four
    }
}
