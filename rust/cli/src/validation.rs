//! Parsing of interactive input.
//!
//! Bet and raise amounts are round totals, the same convention the engine uses:
//! `raise 40` means "make it 40", not "add 40".

use elemental_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// Unusable input and a message to show
    Invalid(String),
}

/// Parse user input into a [`PlayerAction`] or the quit command.
///
/// Accepted (case-insensitive): `f`/`fold`, `c`/`check`, `call`, `bet N`,
/// `raise N`, `allin`/`all-in`, `q`/`quit`.
///
/// ```rust
/// # use elemental_cli::validation::{parse_player_action, ParseResult};
/// use elemental_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("Raise 40"), ParseResult::Action(PlayerAction::Raise(40)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "bet" | "raise" => match parse_amount(verb, parts.get(1).copied()) {
            Ok(amount) if verb == "bet" => ParseResult::Action(PlayerAction::Bet(amount)),
            Ok(amount) => ParseResult::Action(PlayerAction::Raise(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <total>, raise <total>, allin, q",
            other
        )),
    }
}

fn parse_amount(verb: &str, raw: Option<&str>) -> Result<u32, String> {
    let Some(raw) = raw else {
        return Err(format!(
            "{} requires a total (e.g., '{} 40')",
            capitalize(verb),
            verb
        ));
    };
    match raw.parse::<u32>() {
        Ok(0) => Err(format!("{} amount must be positive", capitalize(verb))),
        Ok(amount) => Ok(amount),
        Err(_) => Err(format!("Invalid {} amount", verb)),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rejects a zero hand count for `play` and `sim`.
pub fn validate_hands(hands: u64) -> Result<(), String> {
    if hands == 0 {
        return Err("hands must be >= 1".into());
    }
    Ok(())
}
