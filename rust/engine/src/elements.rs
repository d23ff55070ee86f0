//! Element interaction table and effective card values.
//!
//! The table is authored data: every element is worth +4 next to itself, has one
//! contradicting partner at -4, one aligned partner at +2 and one uneasy partner at -2.

use crate::cards::{Card, Element, RevealCard};

/// `BONUS[card][other]`, indexed by [`Element::index`].
const BONUS: [[i32; 4]; 4] = [
    //  Fire Water Earth  Air
    [4, -4, -2, 2], // Fire
    [-4, 4, 2, -2], // Water
    [-2, 2, 4, -4], // Earth
    [2, -2, -4, 4], // Air
];

/// Penalty a power card applies to hole cards of its contradicting element.
pub const POWER_CONTRADICTION_PENALTY: i32 = -1;

/// How much `other` modifies a card of element `card`.
///
/// # Examples
///
/// ```
/// use elemental_engine::cards::Element;
/// use elemental_engine::elements::bonus;
///
/// assert_eq!(bonus(Element::Fire, Element::Fire), 4);
/// assert_eq!(bonus(Element::Fire, Element::Water), -4);
/// ```
pub fn bonus(card: Element, other: Element) -> i32 {
    BONUS[card.index()][other.index()]
}

pub fn is_contradicting(a: Element, b: Element) -> bool {
    bonus(a, b) == -4
}

/// The single element that contradicts `e`.
pub fn contradiction_of(e: Element) -> Element {
    Element::ALL
        .into_iter()
        .find(|&o| is_contradicting(e, o))
        .unwrap_or(e)
}

/// Bonus a single revealed card gives to a hole card.
pub fn reveal_bonus(card: &Card, reveal: &RevealCard) -> i32 {
    match *reveal {
        RevealCard::Arena { element } => bonus(card.element, element),
        RevealCard::Power { element, magnitude } => {
            if element == card.element {
                i32::from(magnitude)
            } else if is_contradicting(card.element, element) {
                POWER_CONTRADICTION_PENALTY
            } else {
                0
            }
        }
    }
}

/// Rank plus every bonus from the reveals seen so far.
///
/// # Examples
///
/// ```
/// use elemental_engine::cards::{Card, Element, RevealCard};
/// use elemental_engine::elements::effective_value;
///
/// let seven = Card::new(Element::Earth, 7);
/// assert_eq!(effective_value(&seven, None, &[]), 7);
///
/// let arena = RevealCard::Arena { element: Element::Air };
/// assert_eq!(effective_value(&seven, Some(&arena), &[]), 3);
/// ```
pub fn effective_value(card: &Card, arena: Option<&RevealCard>, powers: &[RevealCard]) -> i32 {
    let arena_bonus = arena.map(|a| reveal_bonus(card, a)).unwrap_or(0);
    let power_bonus: i32 = powers.iter().map(|p| reveal_bonus(card, p)).sum();
    i32::from(card.rank) + arena_bonus + power_bonus
}

/// Sum of the effective values of both hole cards.
pub fn hand_value(hole: &[Card; 2], arena: Option<&RevealCard>, powers: &[RevealCard]) -> i32 {
    hole.iter()
        .map(|c| effective_value(c, arena, powers))
        .sum()
}
