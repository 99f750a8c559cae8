//! Game integration tests.

use std::collections::HashMap;

use memrs::{
    CATALOG_SIZE, Card, DeckError, JOKER_BLACK, JOKER_RED, MemoryGame, MemoryOptions,
    OversizeMode, Slot,
};

fn slot(name: &str) -> Slot {
    Some(name.to_string())
}

fn occurrences(deck: &[Slot]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for name in deck.iter().flatten() {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn catalog_defaults_to_52_without_jokers() {
    let game = MemoryGame::new(MemoryOptions::default(), 1);
    let catalog = game.catalog();

    assert_eq!(catalog.len(), CATALOG_SIZE);
    assert_eq!(catalog.first().map(String::as_str), Some("clubs_2"));
    assert_eq!(catalog.last().map(String::as_str), Some("spades_queen"));
    assert!(!catalog.iter().any(|name| name == JOKER_RED || name == JOKER_BLACK));
}

#[test]
fn catalog_with_jokers_has_54() {
    let game = MemoryGame::new(MemoryOptions::default().with_jokers(true), 1);
    let catalog = game.catalog();

    assert_eq!(catalog.len(), 54);
    assert_eq!(&catalog[52..], [JOKER_RED, JOKER_BLACK]);
}

#[test]
fn request_deck_deals_matched_pairs() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 42);
    game.request_deck(3).unwrap();

    let deck = game.deck();
    assert_eq!(deck.len(), 6);
    assert!(deck.iter().all(Option::is_some));

    let counts = occurrences(deck);
    assert_eq!(counts.len(), 3);
    assert!(counts.values().all(|&count| count == 2));
    for name in counts.keys() {
        assert!(name.parse::<Card>().is_ok(), "{name} is not a catalog card");
    }
}

#[test]
fn request_deck_respects_copies() {
    let mut game = MemoryGame::new(MemoryOptions::default().with_copies(3), 42);
    game.request_deck(4).unwrap();

    let counts = occurrences(game.deck());
    assert_eq!(game.deck().len(), 12);
    assert_eq!(counts.len(), 4);
    assert!(counts.values().all(|&count| count == 3));
}

#[test]
fn request_deck_zero_is_empty() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 42);
    game.set_deck(vec![slot("clubs_ace")]);
    game.request_deck(0).unwrap();
    assert!(game.deck().is_empty());
}

#[test]
fn oversized_request_truncates_by_default() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 5);
    game.request_deck(100).unwrap();

    let deck = game.deck();
    assert!(deck.len() <= 200);
    assert_eq!(deck.len(), CATALOG_SIZE * 2);

    let counts = occurrences(deck);
    assert_eq!(counts.len(), CATALOG_SIZE);
    assert!(counts.values().all(|&count| count == 2));
}

#[test]
fn oversized_request_rejected_when_configured() {
    let options = MemoryOptions::default().with_oversize(OversizeMode::Reject);
    let mut game = MemoryGame::new(options, 5);

    assert_eq!(
        game.request_deck(100).unwrap_err(),
        DeckError::NotEnoughCards {
            requested: 100,
            available: CATALOG_SIZE,
        }
    );
    assert!(game.deck().is_empty());

    game.request_deck(CATALOG_SIZE).unwrap();
    assert_eq!(game.deck().len(), CATALOG_SIZE * 2);
}

#[test]
fn same_seed_deals_same_deck() {
    let deal = |seed| {
        let mut game = MemoryGame::new(MemoryOptions::default(), seed);
        game.request_deck(8).unwrap();
        game.deck().to_vec()
    };

    assert_eq!(deal(11), deal(11));
    assert_ne!(deal(11), deal(12));
}

#[test]
fn reseed_restarts_the_sequence() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 11);
    game.request_deck(8).unwrap();
    let first = game.deck().to_vec();

    game.request_deck(8).unwrap();
    game.reseed(11);
    game.request_deck(8).unwrap();
    assert_eq!(game.deck(), first.as_slice());
}

#[test]
fn set_deck_stores_verbatim() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 1);
    let deck = vec![slot("clubs_ace"), None, slot("not_a_card")];

    game.set_deck(deck.clone());
    assert_eq!(game.deck(), deck.as_slice());

    game.clear_deck();
    assert!(game.deck().is_empty());
}

#[test]
fn deck_mut_edits_in_place() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 1);
    game.request_deck(2).unwrap();

    game.deck_mut()[0] = None;
    game.deck_mut().swap(1, 2);

    assert_eq!(game.deck()[0], None);
    assert_eq!(game.remaining_cards(), 3);
}

#[test]
fn clearing_a_matched_pair() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 9);
    game.set_deck(vec![slot("hearts_king"), slot("spades_2"), slot("hearts_king")]);

    let first = game.clear_slot(0).unwrap();
    let second = game.clear_slot(2).unwrap();
    assert_eq!(first, second);
    assert_eq!(game.deck(), [None, slot("spades_2"), None]);
    assert_eq!(game.remaining_cards(), 1);

    assert_eq!(
        game.clear_slot(3).unwrap_err(),
        DeckError::SlotOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn score_clamps_negative_values() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 1);
    assert_eq!(game.score(), 0);

    game.set_score(7);
    assert_eq!(game.score(), 7);

    game.set_score(-5);
    assert_eq!(game.score(), 0);

    game.set_score(0);
    assert_eq!(game.score(), 0);

    game.set_score(i64::MAX);
    assert_eq!(game.score(), i64::MAX as u64);
}

#[test]
fn score_survives_deck_changes() {
    let mut game = MemoryGame::new(MemoryOptions::default(), 1);
    game.set_score(12);
    game.request_deck(4).unwrap();
    game.clear_deck();
    assert_eq!(game.score(), 12);
}
