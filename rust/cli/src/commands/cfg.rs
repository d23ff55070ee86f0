//! `cfg`: print the resolved configuration with value sources as JSON.
//!
//! ```json
//! {
//!   "big_blind": { "value": 10, "source": "default" },
//!   "seats": { "value": 3, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": { "value": config.starting_stack, "source": sources.starting_stack },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "seats": { "value": config.seats, "source": sources.seats },
        "seed": { "value": config.seed, "source": sources.seed },
        "side_pots": { "value": config.side_pots, "source": sources.side_pots },
        "odd_chip": { "value": config.odd_chip, "source": sources.odd_chip },
        "ai": { "value": config.ai, "source": sources.ai },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
