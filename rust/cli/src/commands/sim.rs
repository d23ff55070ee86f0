//! `sim`: AI-only hands, optionally recorded as JSONL hand histories.
//!
//! All seats are played by the configured AI. One table plays on until fewer
//! than two seats have chips; it is then replaced by a fresh table whose seed
//! is drawn from a ChaCha stream keyed by the run seed, so a run is fully
//! determined by `--seed`.
//!
//! # Environment Variables
//!
//! - `ELEMENTAL_SIM_BREAK_AFTER`: stop after N hands and exit as interrupted

use super::{new_table, resolve_seed};
use crate::config;
use crate::error::CliError;
use crate::io_utils::create_output;
use crate::ui;
use crate::validation::validate_hands;
use elemental_ai::{AIOpponent, create_ai};
use elemental_engine::engine::Engine;
use elemental_engine::errors::GameError;
use elemental_engine::logger::HandLogger;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::path::PathBuf;

pub fn handle_sim_command(
    hands: u64,
    output: Option<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Err(msg) = validate_hands(hands) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let cfg = config::load()?;
    let base_seed = resolve_seed(seed, &cfg);
    let ai = create_ai(&cfg.ai)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;
    let break_after = match std::env::var("ELEMENTAL_SIM_BREAK_AFTER") {
        Ok(v) => match v.trim().parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                ui::display_warning(
                    err,
                    &format!("Ignoring ELEMENTAL_SIM_BREAK_AFTER={:?}: not a hand count", v),
                )?;
                None
            }
        },
        Err(_) => None,
    };

    let date = chrono::Utc::now().format("%Y%m%d").to_string();
    let mut logger = match output.as_ref().map(PathBuf::from) {
        Some(p) => match create_output(&p) {
            Ok(w) => HandLogger::with_writer(w, &date),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                return Err(CliError::Io(e));
            }
        },
        None => HandLogger::in_memory(&date),
    };

    let mut tables = ChaCha8Rng::seed_from_u64(base_seed);
    let mut eng = new_table(&cfg, base_seed)?;
    let mut completed = 0u64;
    let mut tables_used = 1u32;

    tracing::info!(hands, seed = base_seed, ai = %cfg.ai, "simulation started");

    while completed < hands {
        match eng.start_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers) => {
                let table_seed: u64 = tables.random();
                eng = new_table(&cfg, table_seed)?;
                tables_used += 1;
                tracing::debug!(seed = table_seed, "table replaced");
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        play_hand(&mut eng, ai.as_ref())?;

        let record = eng.hand_record(logger.next_id());
        logger.write(&record)?;
        completed += 1;

        if let Some(b) = break_after
            && completed == b
            && completed < hands
        {
            logger.flush()?;
            writeln!(out, "Interrupted: saved {}/{}", completed, hands)?;
            return Err(CliError::Interrupted(format!(
                "saved {}/{}",
                completed, hands
            )));
        }
    }

    logger.flush()?;
    tracing::info!(completed, tables = tables_used, "simulation finished");
    writeln!(out, "Simulated: {} hands", completed)?;
    if let Some(p) = output {
        writeln!(out, "Hand records: {}", p)?;
    }
    Ok(())
}

fn play_hand(eng: &mut Engine, ai: &dyn AIOpponent) -> Result<(), CliError> {
    while let Some(seat) = eng.current_seat() {
        let action = ai.get_action(&eng.snapshot(Some(seat)), seat);
        eng.apply(seat, action)?;
    }
    Ok(())
}
