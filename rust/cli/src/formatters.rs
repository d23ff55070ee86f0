//! Card, reveal and action formatters for terminal display.
//!
//! Elements print as alchemical glyphs (🜂 fire, 🜄 water, 🜃 earth, 🜁 air)
//! where the terminal is expected to render them, and as their letters
//! (F, W, E, A) otherwise.
//!
//! ```rust
//! use elemental_engine::cards::{Card, Element};
//! use elemental_cli::formatters::format_card;
//!
//! let card = Card::new(Element::Water, 12);
//! assert!(format_card(&card) == "12🜄" || format_card(&card) == "12W");
//! ```

use elemental_engine::cards::{Card, Element, RevealCard};
use elemental_engine::elements::bonus;
use elemental_engine::player::PlayerAction;
use elemental_engine::rules::LegalActions;

/// Check if the terminal supports Unicode symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_element(element: Element) -> String {
    if supports_unicode() {
        match element {
            Element::Fire => "🜂",
            Element::Water => "🜄",
            Element::Earth => "🜃",
            Element::Air => "🜁",
        }
        .to_string()
    } else {
        element.symbol().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank, format_element(card.element))
}

/// Both hole cards, or `[? ?]` when they are hidden from the viewer.
pub fn format_hole(hole: Option<[Card; 2]>) -> String {
    match hole {
        Some([a, b]) => format!("[{} {}]", format_card(&a), format_card(&b)),
        None => "[? ?]".to_string(),
    }
}

pub fn format_reveal(reveal: &RevealCard) -> String {
    match reveal {
        RevealCard::Arena { element } => {
            format!("Arena {} ({})", format_element(*element), element)
        }
        RevealCard::Power { element, magnitude } => {
            format!("Power {}+{} ({})", format_element(*element), magnitude, element)
        }
    }
}

/// Arena card followed by the power cards, `[]` before any reveal.
pub fn format_reveals(arena: Option<&RevealCard>, powers: &[RevealCard]) -> String {
    let parts: Vec<String> = arena.into_iter().chain(powers).map(format_reveal).collect();
    format!("[{}]", parts.join(", "))
}

/// ```rust
/// use elemental_engine::player::PlayerAction;
/// # use elemental_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Raise(40)), "raise to 40");
/// assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(total) => format!("bet {}", total),
        PlayerAction::Raise(total) => format!("raise to {}", total),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// One-line summary of what the seat to act may do.
pub fn format_legal(legal: &LegalActions) -> String {
    let mut opts = Vec::new();
    if legal.can_check {
        opts.push("check".to_string());
    } else {
        opts.push(format!("call {}", legal.call_amount));
    }
    if legal.can_bet && legal.call_amount == 0 {
        opts.push(format!("bet {}-{}", legal.min_total, legal.max_total));
    } else if legal.can_raise {
        opts.push(format!("raise {}-{}", legal.min_total, legal.max_total));
    }
    opts.push("allin".to_string());
    opts.push("fold".to_string());
    opts.join(" | ")
}

/// The bonus table as aligned text: rows are the card's element, columns
/// the arena element.
pub fn format_bonus_table() -> String {
    let mut s = String::from("card \\ arena");
    for col in Element::ALL {
        s.push_str(&format!("{:>7}", col.to_string()));
    }
    s.push('\n');
    for row in Element::ALL {
        s.push_str(&format!("{:<12}", row.to_string()));
        for col in Element::ALL {
            s.push_str(&format!("{:>+7}", bonus(row, col)));
        }
        s.push('\n');
    }
    s
}
