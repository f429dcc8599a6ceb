use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use saat_bot::{Certainty, MoveSelector, UncertaintyTable, compute_legal_moves};
use saat_core::model::hand::Hand;
use saat_core::model::moves::Move;
use saat_core::model::played::PlayedRanges;
use saat_core::model::rank::Rank;
use saat_core::model::suite::Suite;

const DEALS: usize = 1_500;

fn random_deal(rng: &mut StdRng) -> (PlayedRanges, Hand) {
    let mut played = PlayedRanges::new();
    let mut hand = Hand::new();
    for suite in Suite::ALL {
        let opened = rng.gen_bool(0.7);
        let (low, high) = if opened {
            let low = rng.gen_range(1..=7);
            let high = rng.gen_range(7..=13);
            played.insert(suite, low, high).unwrap();
            (low, high)
        } else {
            (7, 7)
        };
        // Only cards that are still off the table can be held.
        let mut ranks: Vec<Rank> = Rank::ordered()
            .filter(|rank| {
                let value = rank.value();
                let on_table = opened && value >= low && value <= high;
                !on_table && rng.gen_bool(0.3)
            })
            .collect();
        if rng.gen_bool(0.5) {
            ranks.reverse();
        }
        hand.insert(suite, ranks);
    }
    (played, hand)
}

#[test]
fn held_sevens_are_always_legal() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..DEALS {
        let (played, hand) = random_deal(&mut rng);
        let legal = compute_legal_moves(&played, &hand);
        for card in hand.cards().filter(|card| card.is_seven()) {
            assert!(legal.contains(card), "{card} missing from legal moves");
        }
    }
}

#[test]
fn empty_legal_set_always_passes() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..DEALS {
        let (played, hand) = random_deal(&mut rng);
        let selector = MoveSelector::new(&played, &hand);
        let mv = selector.pick_optimal_card().unwrap();
        assert_eq!(selector.legal_moves().is_empty(), mv == Move::Pass);
    }
}

#[test]
fn chosen_card_is_legal_and_definite_means_first() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..DEALS {
        let (played, hand) = random_deal(&mut rng);
        let selector = MoveSelector::new(&played, &hand);
        let legal = selector.legal_moves();
        let decision = selector.decide().unwrap();
        match decision.certainty {
            Certainty::Pass => assert!(legal.is_empty()),
            Certainty::Definite => {
                assert_eq!(decision.mv.card(), legal.first());
                assert_eq!(decision.max_uncertainty, 0);
            }
            Certainty::NotDefinite => {
                let card = decision.mv.card().expect("a card was chosen");
                assert!(legal.contains(card));
                assert!(decision.max_uncertainty > 0);
            }
        }
    }
}

#[test]
fn chosen_card_carries_the_maximum_score() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..DEALS {
        let (played, hand) = random_deal(&mut rng);
        let selector = MoveSelector::new(&played, &hand);
        let legal = selector.legal_moves();
        if legal.is_empty() {
            continue;
        }
        let table = UncertaintyTable::compute(&played, &hand).unwrap();
        let max = legal
            .cards()
            .map(|card| table.score(card.suite, card.rank))
            .max()
            .unwrap_or(0);
        let decision = selector.decide().unwrap();
        assert_eq!(decision.max_uncertainty, max);
        if max > 0 {
            let first_max = legal
                .cards()
                .find(|card| table.score(card.suite, card.rank) == max);
            assert_eq!(decision.mv.card(), first_max);
        }
    }
}

#[test]
fn uncertainty_is_bounded_by_its_span() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..DEALS {
        let (played, hand) = random_deal(&mut rng);
        let table = UncertaintyTable::compute(&played, &hand).unwrap();
        for (suite, count) in table.iter() {
            let range = played.range_or_anchor(suite);
            let (lo_hand, hi_hand) = hand.extremes(suite).unwrap();
            let lower_span = range.low().value().saturating_sub(lo_hand.value());
            let upper_span = hi_hand.value().saturating_sub(range.high().value());
            assert!(count.lower <= lower_span, "{suite}: {count:?} below {lower_span}");
            assert!(count.upper <= upper_span, "{suite}: {count:?} above {upper_span}");
        }
    }
}
