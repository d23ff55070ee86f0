//! `elements`: print the bonus table and the power-card rules.

use crate::error::CliError;
use crate::formatters::format_bonus_table;
use elemental_engine::cards::MAX_POWER;
use elemental_engine::elements::POWER_CONTRADICTION_PENALTY;
use std::io::Write;

pub fn handle_elements_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Arena bonus (added to each hole card):")?;
    write!(out, "{}", format_bonus_table())?;
    writeln!(
        out,
        "Power cards: +magnitude (1-{}) to cards of the same element, {} to the contradicting element, 0 otherwise.",
        MAX_POWER, POWER_CONTRADICTION_PENALTY
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_table_and_power_rule() {
        let mut out = Vec::new();
        handle_elements_command(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Arena bonus"));
        assert!(text.contains("water"));
        assert!(text.contains("Power cards: +magnitude (1-5)"));
        assert!(text.contains(", -1 to the contradicting"));
    }
}
