/// One pattern a 5-card hand can exhibit.
///
/// A classification is a set of these, not a single best value: exactly one
/// of the six grouping variants (NoPair through FourOfAKind by rank
/// multiplicity) is always present, and the straight, flush, and
/// straight-flush families each contribute at most one more. The Small
/// variants are satisfied by only four of the five cards, with the fifth
/// card not participating.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    NoPair = 0,
    Pair = 1,
    TwoPair = 2,
    SmallStraight = 3,
    ThreeOfAKind = 4,
    SmallFlush = 5,
    Straight = 6,
    FullHouse = 7,
    SmallStraightFlush = 8,
    FourOfAKind = 9,
    Flush = 10,
    StraightFlush = 11,
}

impl Category {
    pub const COUNT: usize = 12;
    pub const ALL: [Self; Self::COUNT] = [
        Category::NoPair,
        Category::Pair,
        Category::TwoPair,
        Category::SmallStraight,
        Category::ThreeOfAKind,
        Category::SmallFlush,
        Category::Straight,
        Category::FullHouse,
        Category::SmallStraightFlush,
        Category::FourOfAKind,
        Category::Flush,
        Category::StraightFlush,
    ];

    /// the six mutually exclusive rank-multiplicity categories
    pub fn is_grouping(&self) -> bool {
        matches!(
            self,
            Category::NoPair
                | Category::Pair
                | Category::TwoPair
                | Category::ThreeOfAKind
                | Category::FullHouse
                | Category::FourOfAKind
        )
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}
impl From<u8> for Category {
    fn from(n: u8) -> Category {
        match n {
            0 => Category::NoPair,
            1 => Category::Pair,
            2 => Category::TwoPair,
            3 => Category::SmallStraight,
            4 => Category::ThreeOfAKind,
            5 => Category::SmallFlush,
            6 => Category::Straight,
            7 => Category::FullHouse,
            8 => Category::SmallStraightFlush,
            9 => Category::FourOfAKind,
            10 => Category::Flush,
            11 => Category::StraightFlush,
            _ => panic!("Invalid category u8: {}", n),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::NoPair => "NoPair",
                Category::Pair => "Pair",
                Category::TwoPair => "TwoPair",
                Category::SmallStraight => "SmallStraight",
                Category::ThreeOfAKind => "ThreeOfAKind",
                Category::SmallFlush => "SmallFlush",
                Category::Straight => "Straight",
                Category::FullHouse => "FullHouse",
                Category::SmallStraightFlush => "SmallStraightFlush",
                Category::FourOfAKind => "FourOfAKind",
                Category::Flush => "Flush",
                Category::StraightFlush => "StraightFlush",
            }
        )
    }
}
