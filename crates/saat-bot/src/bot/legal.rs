use indexmap::IndexMap;
use saat_core::model::card::Card;
use saat_core::model::hand::Hand;
use saat_core::model::played::PlayedRanges;
use saat_core::model::rank::Rank;
use saat_core::model::suite::Suite;

/// Legal ranks per suite, in the order they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    by_suite: IndexMap<Suite, Vec<Rank>>,
}

impl LegalMoves {
    fn push(&mut self, suite: Suite, rank: Rank) {
        self.by_suite.entry(suite).or_default().push(rank);
    }

    pub fn ranks(&self, suite: Suite) -> &[Rank] {
        self.by_suite.get(&suite).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suite, &[Rank])> {
        self.by_suite
            .iter()
            .map(|(suite, ranks)| (*suite, ranks.as_slice()))
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.iter().flat_map(|(suite, ranks)| {
            ranks.iter().map(move |&rank| Card::new(rank, suite))
        })
    }

    /// First rank of the first suite discovered.
    pub fn first(&self) -> Option<Card> {
        self.cards().next()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.ranks(card.suite).contains(&card.rank)
    }

    pub fn len(&self) -> usize {
        self.by_suite.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_suite.is_empty()
    }
}

/// Collect every card in `hand` that may be laid on the table.
///
/// Held sevens come first, in hand order, since a seven opens its suite no
/// matter what the table shows. After that each opened suite contributes
/// the held ranks sitting directly below its low end or above its high end.
/// Ranks of unopened suites other than the seven never qualify.
pub fn compute_legal_moves(played: &PlayedRanges, hand: &Hand) -> LegalMoves {
    let mut legal = LegalMoves::default();

    for (suite, ranks) in hand.iter() {
        for &rank in ranks {
            if rank.is_seven() {
                legal.push(suite, rank);
            }
        }
    }

    for (suite, range) in played.iter() {
        for &rank in hand.ranks(suite) {
            if range.is_extended_by(rank) {
                legal.push(suite, rank);
            }
        }
    }

    legal
}
