//! # Play Command
//!
//! Hands at a full table. With `--vs human` the first seat reads actions from
//! stdin and the other seats are played by the configured AI; with `--vs ai`
//! every seat is an AI and the command narrates the hands.
//!
//! The session ends after the requested number of hands, when fewer than two
//! seats have chips, or when the human enters `q` (or closes stdin).

use super::{new_table, resolve_seed, write_result, write_reveals};
use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_hole, format_legal, format_reveals};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, validate_hands};
use elemental_ai::{AIOpponent, create_ai};
use elemental_engine::engine::Engine;
use elemental_engine::errors::GameError;
use elemental_engine::player::SeatId;
use std::io::{BufRead, Write};

const HUMAN_SEAT: SeatId = SeatId(1);

enum Turn {
    Continue,
    Quit,
}

pub fn handle_play_command(
    vs: Vs,
    hands: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = hands.unwrap_or(1);
    if let Err(msg) = validate_hands(u64::from(hands)) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let cfg = config::load()?;
    let seed = resolve_seed(seed, &cfg);
    let ai = create_ai(&cfg.ai)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;

    writeln!(
        out,
        "play: vs={} hands={} seed={} seats={}",
        vs.as_str(),
        hands,
        seed,
        cfg.seats
    )?;
    writeln!(out, "Blinds: SB={} BB={}", cfg.small_blind, cfg.big_blind)?;

    let mut eng = new_table(&cfg, seed)?;
    let mut played = 0u32;

    'session: for i in 1..=hands {
        match eng.start_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers) => {
                writeln!(out, "Table finished: fewer than two seats have chips")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        let dealer = eng.snapshot(None).dealer;
        writeln!(
            out,
            "Hand {} (dealer seat {})",
            i,
            dealer.map(|d| d.to_string()).unwrap_or_default()
        )?;
        if vs == Vs::Human
            && let Some(me) = eng.state().seat(HUMAN_SEAT)
        {
            writeln!(out, "Your cards: {}", format_hole(me.hole_cards()))?;
        }

        while let Some(seat) = eng.current_seat() {
            let turn = if vs == Vs::Human && seat == HUMAN_SEAT {
                human_turn(&mut eng, out, err, stdin)?
            } else {
                ai_turn(&mut eng, ai.as_ref(), seat, out)?
            };
            if let Turn::Quit = turn {
                break 'session;
            }
        }

        if let Some(result) = eng.state().result() {
            write_result(out, result)?;
        }
        played += 1;
    }

    writeln!(out, "Session hands={}", hands)?;
    writeln!(out, "Hands played: {} (completed)", played)?;
    for s in eng.state().seats() {
        writeln!(out, "  seat {} ({}): {}", s.id(), s.name(), s.stack())?;
    }
    Ok(())
}

fn ai_turn(
    eng: &mut Engine,
    ai: &dyn AIOpponent,
    seat: SeatId,
    out: &mut dyn Write,
) -> Result<Turn, CliError> {
    let action = ai.get_action(&eng.snapshot(Some(seat)), seat);
    let outcome = eng.apply(seat, action)?;
    writeln!(out, "seat {} ({}): {}", seat, ai.name(), format_action(&action))?;
    if outcome.round_closed && !outcome.hand_complete {
        write_reveals(out, eng)?;
    }
    Ok(Turn::Continue)
}

/// Prompts until the human enters a legal action or quits.
fn human_turn(
    eng: &mut Engine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Turn, CliError> {
    loop {
        let snap = eng.snapshot(Some(HUMAN_SEAT));
        if let Some(legal) = &snap.legal {
            writeln!(
                out,
                "Reveals: {}  Pot: {}  Options: {}",
                format_reveals(snap.arena_card.as_ref(), &snap.power_cards),
                snap.pot,
                format_legal(legal)
            )?;
        }
        write!(out, "Enter action (check/call/bet/raise/allin/fold/q): ")?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            return Ok(Turn::Quit);
        };
        match parse_player_action(&input) {
            ParseResult::Action(action) => match eng.apply(HUMAN_SEAT, action) {
                Ok(outcome) => {
                    writeln!(out, "You: {}", format_action(&action))?;
                    if outcome.round_closed && !outcome.hand_complete {
                        write_reveals(out, eng)?;
                    }
                    return Ok(Turn::Continue);
                }
                Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
            },
            ParseResult::Quit => return Ok(Turn::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    #[test]
    #[serial]
    fn ai_table_plays_requested_hands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        handle_play_command(Vs::Ai, Some(3), Some(42), &mut out, &mut err, &mut input).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("play: vs=ai hands=3 seed=42"));
        assert!(output.contains("Hand 1 (dealer seat 1)"));
        assert!(output.contains("Hands played: 3 (completed)"));
        assert_eq!(output.matches("Winner(s)").count(), 3);
    }

    #[test]
    #[serial]
    fn zero_hands_is_invalid() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let result = handle_play_command(Vs::Ai, Some(0), None, &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn human_can_quit_at_first_prompt() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"q\n");

        handle_play_command(Vs::Human, Some(2), Some(7), &mut out, &mut err, &mut input)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Your cards: ["));
        assert!(output.contains("Enter action"));
        assert!(output.contains("Hands played: 0 (completed)"));
    }

    #[test]
    #[serial]
    fn human_mistakes_are_reported_and_reprompted() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        // Seat 1 is the dealer with four seats, so it acts after seat 4 preflop
        // and owes the big blind: a check is illegal, the fold then ends its hand.
        let mut input = Cursor::new(b"check\nshove\nfold\n");

        handle_play_command(Vs::Human, Some(1), Some(3), &mut out, &mut err, &mut input)
            .unwrap();

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Invalid action"));
        assert!(errors.contains("Unrecognized action 'shove'"));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("You: fold"));
        assert!(output.contains("Hands played: 1 (completed)"));
    }
}
