//! `stats`: aggregate JSONL hand histories.
//!
//! Accepts a single `.jsonl` / `.jsonl.zst` file or a directory searched
//! recursively. Besides counts it checks chip conservation on every settled
//! record: payouts plus dropped chips must equal the pot.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use elemental_engine::logger::HandRecord;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
struct StatsState {
    hands: u64,
    showdowns: u64,
    folds: u64,
    unsettled: u64,
    total_pot: u64,
    dropped_chips: u64,
    wins: BTreeMap<u32, u64>,
    winnings: BTreeMap<u32, u64>,
    skipped: u64,
    corrupted: u64,
    violations: Vec<String>,
}

impl StatsState {
    fn consume(&mut self, content: &str) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            let rec: HandRecord = match serde_json::from_str(line) {
                Ok(r) => r,
                Err(_) => {
                    if i == lines.len() - 1 && !has_trailing_nl {
                        self.skipped += 1;
                    } else {
                        self.corrupted += 1;
                    }
                    continue;
                }
            };
            self.record(&rec);
        }
    }

    fn record(&mut self, rec: &HandRecord) {
        self.hands += 1;
        let Some(result) = &rec.result else {
            self.unsettled += 1;
            return;
        };
        if result.ended_by_fold {
            self.folds += 1;
        } else {
            self.showdowns += 1;
        }
        self.total_pot += u64::from(result.pot);
        self.dropped_chips += u64::from(result.dropped_chips);
        for w in &result.winners {
            *self.wins.entry(w.0).or_default() += 1;
        }
        for e in &result.entries {
            *self.winnings.entry(e.seat.0).or_default() += u64::from(e.payout);
        }
        if result.paid_out() + result.dropped_chips != result.pot {
            self.violations.push(rec.hand_id.clone());
        }
    }
}

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let Ok(rd) = std::fs::read_dir(&d) else {
                continue;
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
                {
                    match read_text_auto(&p.to_string_lossy()) {
                        Ok(content) => state.consume(&content),
                        Err(_) => state.corrupted += 1,
                    }
                }
            }
        }
    } else {
        match read_text_auto(&input) {
            Ok(s) => state.consume(&s),
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::write_error(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.hands == 0 && (state.corrupted > 0 || state.skipped > 0) {
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }
    for id in &state.violations {
        ui::write_error(err, &format!("Chip conservation violated at hand {}", id))?;
    }

    let wins: BTreeMap<String, u64> = state
        .wins
        .iter()
        .map(|(seat, n)| (format!("seat{}", seat), *n))
        .collect();
    let winnings: BTreeMap<String, u64> = state
        .winnings
        .iter()
        .map(|(seat, n)| (format!("seat{}", seat), *n))
        .collect();
    let summary = serde_json::json!({
        "hands": state.hands,
        "showdowns": state.showdowns,
        "ended_by_fold": state.folds,
        "unsettled": state.unsettled,
        "total_pot": state.total_pot,
        "dropped_chips": state.dropped_chips,
        "wins": wins,
        "winnings": winnings,
        "conservation_ok": state.violations.is_empty(),
    });
    let json_output = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_output)?;

    if state.violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Statistics validation failed".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemental_engine::player::SeatId;
    use elemental_engine::showdown::{HandResult, ShowdownEntry};

    fn record(id: &str, pot: u32, payouts: &[(u32, u32)], dropped: u32) -> HandRecord {
        HandRecord {
            hand_id: id.to_string(),
            seed: Some(1),
            hand_number: 1,
            dealer: Some(SeatId(1)),
            small_blind: 5,
            big_blind: 10,
            actions: vec![],
            arena_card: None,
            power_cards: vec![],
            result: Some(HandResult {
                ended_by_fold: false,
                pot,
                winners: payouts
                    .iter()
                    .filter(|(_, p)| *p > 0)
                    .map(|(s, _)| SeatId(*s))
                    .collect(),
                entries: payouts
                    .iter()
                    .map(|(s, p)| ShowdownEntry {
                        seat: SeatId(*s),
                        hole_cards: None,
                        hand_value: Some(10),
                        payout: *p,
                    })
                    .collect(),
                dropped_chips: dropped,
            }),
            ts: None,
            meta: None,
        }
    }

    #[test]
    fn counts_wins_and_dropped_chips() {
        let mut state = StatsState::default();
        state.record(&record("a", 101, &[(2, 50), (3, 50)], 1));
        state.record(&record("b", 40, &[(1, 40), (4, 0)], 0));
        assert_eq!(state.hands, 2);
        assert_eq!(state.dropped_chips, 1);
        assert_eq!(state.wins.get(&2), Some(&1));
        assert_eq!(state.wins.get(&4), None);
        assert_eq!(state.winnings.get(&1), Some(&40));
        assert!(state.violations.is_empty());
    }

    #[test]
    fn flags_conservation_violations() {
        let mut state = StatsState::default();
        state.record(&record("bad", 100, &[(1, 90)], 0));
        assert_eq!(state.violations, vec!["bad".to_string()]);
    }

    #[test]
    fn incomplete_last_line_is_skipped_not_corrupt() {
        let good = serde_json::to_string(&record("a", 20, &[(1, 20)], 0)).unwrap();
        let content = format!("{}\n{{\"hand_id\":", good);
        let mut state = StatsState::default();
        state.consume(&content);
        assert_eq!(state.hands, 1);
        assert_eq!(state.skipped, 1);
        assert_eq!(state.corrupted, 0);
    }
}
