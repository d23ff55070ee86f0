//! `deal`: deal one hand, run out every reveal and show effective values.
//!
//! Every seat checks or calls so the hand reaches showdown; the point is to
//! inspect a seed, not to play it.

use super::{new_table, resolve_seed, write_result};
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hole, format_reveal};
use elemental_ai::AIOpponent;
use elemental_ai::passive::PassiveAI;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = resolve_seed(seed, &cfg);
    let mut eng = new_table(&cfg, seed)?;
    eng.start_hand()?;

    writeln!(out, "Seed: {}", seed)?;
    for s in eng.state().seats() {
        writeln!(out, "Seat {}: {}", s.id(), format_hole(s.hole_cards()))?;
    }

    while let Some(seat) = eng.current_seat() {
        let action = PassiveAI.get_action(&eng.snapshot(Some(seat)), seat);
        eng.apply(seat, action)?;
    }

    let st = eng.state();
    if let Some(arena) = st.arena_card() {
        writeln!(out, "{}", format_reveal(arena))?;
    }
    for p in st.power_cards() {
        writeln!(out, "{}", format_reveal(p))?;
    }
    for s in st.seats() {
        let Some(hole) = s.hole_cards() else { continue };
        let cards: Vec<String> = hole
            .iter()
            .map(|c| format!("{}={}", format_card(c), st.effective_value(c)))
            .collect();
        let total = st
            .hand_value(s.id())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "Seat {} values: {} total {}", s.id(), cards.join(" "), total)?;
    }
    if let Some(result) = st.result() {
        write_result(out, result)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn same_seed_same_output() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut err = Vec::new();
        handle_deal_command(Some(12345), &mut a, &mut err).unwrap();
        handle_deal_command(Some(12345), &mut b, &mut err).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    #[serial]
    fn shows_every_reveal() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_deal_command(Some(42), &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Seed: 42"));
        assert_eq!(text.matches("Arena ").count(), 1);
        assert_eq!(text.matches("Power ").count(), 3);
        assert!(text.contains("Winner(s): seat"));
    }
}
