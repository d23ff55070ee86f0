use std::collections::HashSet;

use elemental_engine::cards::{Card, RevealCard};
use elemental_engine::deck::Deck;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
    assert_eq!(d1.reveal_arena(), d2.reveal_arena());
    assert_eq!(d1.reveal_power(), d2.reveal_power());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn four_seats_never_exhaust_the_deck() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    let dealt: Vec<Card> = (0..8).map(|_| deck.deal_card().unwrap()).collect();
    let set: HashSet<Card> = dealt.iter().copied().collect();
    assert_eq!(set.len(), 8);
    assert_eq!(deck.remaining(), 44);
}

#[test]
fn reveals_do_not_consume_cards() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let _arena = deck.reveal_arena();
    let powers: Vec<RevealCard> = (0..3).map(|_| deck.reveal_power()).collect();
    assert_eq!(powers.len(), 3);
    assert_eq!(deck.remaining(), 52);
}
