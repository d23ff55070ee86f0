use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four elements printed on every card.
/// Elements replace suits and drive the bonus table in [`crate::elements`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Fire (contradicts Water)
    Fire,
    /// Water (contradicts Fire)
    Water,
    /// Earth (contradicts Air)
    Earth,
    /// Air (contradicts Earth)
    Air,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    /// Position of the element in [`Element::ALL`]; also the row/column of the bonus table.
    pub fn index(self) -> usize {
        match self {
            Element::Fire => 0,
            Element::Water => 1,
            Element::Earth => 2,
            Element::Air => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Element::Fire => 'F',
            Element::Water => 'W',
            Element::Earth => 'E',
            Element::Air => 'A',
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Air => "air",
        };
        f.write_str(name)
    }
}

/// Lowest card rank.
pub const MIN_RANK: u8 = 1;
/// Highest card rank.
pub const MAX_RANK: u8 = 13;
/// Largest magnitude a power card can carry.
pub const MAX_POWER: u8 = 5;

/// A hole card: an element and a rank between 1 and 13.
/// Cards are plain values; two cards with the same element and rank are the same card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Element of the card
    pub element: Element,
    /// Face value, 1..=13
    pub rank: u8,
}

impl Card {
    pub fn new(element: Element, rank: u8) -> Self {
        Self { element, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.element.symbol())
    }
}

/// A card revealed to the whole table after a betting round.
///
/// The arena card is revealed first and shifts every hole card by the bonus table;
/// up to three power cards follow, each boosting cards of its own element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RevealCard {
    Arena { element: Element },
    Power { element: Element, magnitude: u8 },
}

impl RevealCard {
    pub fn element(&self) -> Element {
        match self {
            RevealCard::Arena { element } | RevealCard::Power { element, .. } => *element,
        }
    }
}

impl fmt::Display for RevealCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealCard::Arena { element } => write!(f, "arena:{}", element),
            RevealCard::Power { element, magnitude } => {
                write!(f, "power:{}+{}", element, magnitude)
            }
        }
    }
}

/// All 52 cards in element-major order (Fire 1..13, Water 1..13, ...).
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &e in &Element::ALL {
        for r in MIN_RANK..=MAX_RANK {
            v.push(Card::new(e, r));
        }
    }
    v
}
