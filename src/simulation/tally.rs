use crate::Probability;
use crate::evaluation::category::Category;

/// Per-category trial counters.
///
/// One trial increments several counters when its hand satisfies several
/// categories, so columns do not sum to the trial count. Workers each own a
/// private Tally; `absorb` is the reduction operator that merges them once
/// at the end of a parallel run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    trials: u64,
    counts: [u64; Category::COUNT],
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            trials: 0,
            counts: [0; Category::COUNT],
        }
    }
}

impl Tally {
    pub fn record(&mut self, labels: &[Category]) {
        self.trials += 1;
        for label in labels {
            self.counts[u8::from(*label) as usize] += 1;
        }
    }

    pub fn absorb(mut self, other: Self) -> Self {
        self.trials += other.trials;
        for (count, theirs) in self.counts.iter_mut().zip(other.counts) {
            *count += theirs;
        }
        self
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }
    pub fn count(&self, category: Category) -> u64 {
        self.counts[u8::from(category) as usize]
    }
    pub fn frequency(&self, category: Category) -> Probability {
        match self.trials {
            0 => 0.,
            n => self.count(category) as Probability / n as Probability,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for category in Category::ALL {
            writeln!(
                f,
                "{:<18} {:>10} {:>9.4}%",
                category.to_string(),
                self.count(category),
                self.frequency(category) * 100.,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_every_label() {
        let mut tally = Tally::default();
        tally.record(&[Category::NoPair, Category::Straight]);
        tally.record(&[Category::Pair]);
        assert!(tally.trials() == 2);
        assert!(tally.count(Category::NoPair) == 1);
        assert!(tally.count(Category::Straight) == 1);
        assert!(tally.count(Category::Pair) == 1);
        assert!(tally.count(Category::Flush) == 0);
    }

    #[test]
    fn absorb_merges() {
        let mut a = Tally::default();
        let mut b = Tally::default();
        a.record(&[Category::TwoPair]);
        b.record(&[Category::TwoPair]);
        b.record(&[Category::NoPair, Category::Flush]);
        let merged = a.absorb(b);
        assert!(merged.trials() == 3);
        assert!(merged.count(Category::TwoPair) == 2);
        assert!(merged.count(Category::Flush) == 1);
    }

    #[test]
    fn absorb_associative() {
        let mut a = Tally::default();
        let mut b = Tally::default();
        let mut c = Tally::default();
        a.record(&[Category::NoPair, Category::SmallStraight]);
        b.record(&[Category::Pair]);
        b.record(&[Category::NoPair, Category::Flush]);
        c.record(&[Category::FourOfAKind]);
        let left = a.clone().absorb(b.clone()).absorb(c.clone());
        let right = a.absorb(b.absorb(c));
        assert!(left == right);
    }

    #[test]
    fn absorb_identity() {
        let mut tally = Tally::default();
        tally.record(&[Category::FullHouse]);
        assert!(tally.clone().absorb(Tally::default()) == tally);
        assert!(Tally::default().absorb(tally.clone()) == tally);
    }

    #[test]
    fn empty_frequency() {
        assert!(Tally::default().frequency(Category::NoPair) == 0.);
    }
}
