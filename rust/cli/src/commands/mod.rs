//! Command handlers for the elemental CLI.
//!
//! Each subcommand lives in its own file and follows one pattern:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) are injected by the caller
//! - Errors propagate as [`CliError`] and `run` maps them to exit codes

mod cfg;
mod deal;
mod elements;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use elements::handle_elements_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_hole, format_reveals};
use elemental_engine::engine::Engine;
use elemental_engine::showdown::HandResult;
use std::io::Write;

/// `--seed` wins over the configured seed; with neither, a random one is drawn.
pub(crate) fn resolve_seed(flag: Option<u64>, cfg: &Config) -> u64 {
    flag.or(cfg.seed).unwrap_or_else(rand::random)
}

/// A fresh table with `cfg.seats` seats of `cfg.starting_stack` chips.
pub(crate) fn new_table(cfg: &Config, seed: u64) -> Result<Engine, CliError> {
    Ok(Engine::with_stacks(
        cfg.seats,
        cfg.starting_stack,
        cfg.table_config(),
        Some(seed),
    )?)
}

/// Prints the settlement of a finished hand.
pub(crate) fn write_result(out: &mut dyn Write, result: &HandResult) -> std::io::Result<()> {
    if result.ended_by_fold {
        writeln!(out, "Hand ended by fold, pot {}", result.pot)?;
    } else {
        writeln!(out, "Showdown, pot {}", result.pot)?;
    }
    for e in &result.entries {
        let value = e
            .hand_value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  seat {} {} value {} payout {}",
            e.seat,
            format_hole(e.hole_cards),
            value,
            e.payout
        )?;
    }
    let winners: Vec<String> = result.winners.iter().map(|s| s.to_string()).collect();
    writeln!(out, "Winner(s): seat {}", winners.join(", seat "))?;
    if result.dropped_chips > 0 {
        writeln!(out, "Dropped chips: {}", result.dropped_chips)?;
    }
    Ok(())
}

pub(crate) fn write_reveals(out: &mut dyn Write, engine: &Engine) -> std::io::Result<()> {
    let st = engine.state();
    writeln!(
        out,
        "Stage: {:?}  Reveals: {}  Pot: {}",
        st.stage(),
        format_reveals(st.arena_card(), st.power_cards()),
        st.pot()
    )
}
