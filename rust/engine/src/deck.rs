use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, Element, RevealCard, MAX_POWER};

/// Seeded 52-card deck plus the random source for arena and power reveals.
///
/// Cards are dealt from the end of the shuffled sequence. One seed fixes the
/// whole hand: the shuffle and every reveal come from the same ChaCha stream.
///
/// # Examples
///
/// ```
/// use elemental_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(7);
/// let mut b = Deck::new_with_seed(7);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.deal_card(), b.deal_card());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Restores all 52 cards and runs a Fisher–Yates pass over them.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn reveal_arena(&mut self) -> RevealCard {
        RevealCard::Arena {
            element: self.random_element(),
        }
    }

    pub fn reveal_power(&mut self) -> RevealCard {
        let element = self.random_element();
        let magnitude = self.rng.random_range(1..=MAX_POWER);
        RevealCard::Power { element, magnitude }
    }

    fn random_element(&mut self) -> Element {
        Element::ALL[self.rng.random_range(0..Element::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unshuffled_deck_deals_from_the_end() {
        let mut deck = Deck::new_with_seed(1);
        assert_eq!(deck.deal_card(), Some(Card::new(Element::Air, 13)));
        assert_eq!(deck.remaining(), 51);
    }

    #[test]
    fn power_magnitudes_stay_in_range() {
        let mut deck = Deck::new_with_seed(99);
        for _ in 0..200 {
            match deck.reveal_power() {
                RevealCard::Power { magnitude, .. } => {
                    assert!((1..=MAX_POWER).contains(&magnitude))
                }
                other => panic!("expected power card, got {:?}", other),
            }
        }
    }

    #[test]
    fn arena_reveal_is_an_arena_card() {
        let mut deck = Deck::new_with_seed(3);
        assert!(matches!(deck.reveal_arena(), RevealCard::Arena { .. }));
    }
}
