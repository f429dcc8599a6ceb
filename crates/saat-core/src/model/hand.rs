use crate::error::SaatError;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suite::Suite;
use indexmap::IndexMap;

/// Cards held by the deciding player, grouped by suite.
///
/// Suites keep the order they were first inserted in and ranks keep the
/// order the caller supplied; nothing here sorts. A suite that was never
/// inserted, or was inserted with no ranks, is simply not held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    suites: IndexMap<Suite, Vec<Rank>>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            suites: IndexMap::new(),
        }
    }

    pub fn from_suites<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Suite, Vec<Rank>)>,
    {
        let mut hand = Self::new();
        for (suite, ranks) in entries {
            hand.insert(suite, ranks);
        }
        hand
    }

    /// Build a hand from raw rank values, rejecting anything outside 1..=13.
    pub fn from_values<I, R>(entries: I) -> Result<Self, SaatError>
    where
        I: IntoIterator<Item = (Suite, R)>,
        R: IntoIterator<Item = u8>,
    {
        let mut hand = Self::new();
        for (suite, values) in entries {
            let ranks = values
                .into_iter()
                .map(Rank::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            hand.insert(suite, ranks);
        }
        Ok(hand)
    }

    /// Append ranks to a suite. Empty input leaves the hand untouched.
    pub fn insert(&mut self, suite: Suite, ranks: Vec<Rank>) {
        if ranks.is_empty() {
            return;
        }
        self.suites.entry(suite).or_default().extend(ranks);
    }

    pub fn add(&mut self, card: Card) {
        self.suites.entry(card.suite).or_default().push(card.rank);
    }

    /// Ranks held in `suite`; empty when the suite is not held.
    pub fn ranks(&self, suite: Suite) -> &[Rank] {
        self.suites.get(&suite).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn holds(&self, suite: Suite) -> bool {
        !self.ranks(suite).is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.ranks(card.suite).contains(&card.rank)
    }

    pub fn contains_rank(&self, suite: Suite, rank: Rank) -> bool {
        self.ranks(suite).contains(&rank)
    }

    /// Lowest and highest rank held in `suite`.
    pub fn extremes(&self, suite: Suite) -> Option<(Rank, Rank)> {
        let ranks = self.ranks(suite);
        let low = ranks.iter().copied().min()?;
        let high = ranks.iter().copied().max()?;
        Some((low, high))
    }

    /// Suites in insertion order.
    pub fn suites(&self) -> impl Iterator<Item = Suite> + '_ {
        self.suites.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suite, &[Rank])> {
        self.suites
            .iter()
            .map(|(suite, ranks)| (*suite, ranks.as_slice()))
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.iter().flat_map(|(suite, ranks)| {
            ranks.iter().map(move |&rank| Card::new(rank, suite))
        })
    }

    pub fn card_count(&self) -> usize {
        self.suites.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}
