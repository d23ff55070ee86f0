//! Opponent that only checks or calls.

use crate::AIOpponent;
use elemental_engine::player::{PlayerAction, SeatId};
use elemental_engine::snapshot::TableSnapshot;

/// Checks when it can and calls otherwise. Useful as a calling station in
/// simulations because it always reaches showdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAI;

impl AIOpponent for PassiveAI {
    fn get_action(&self, snapshot: &TableSnapshot, _seat: SeatId) -> PlayerAction {
        match snapshot.legal {
            Some(legal) if !legal.can_check => PlayerAction::Call,
            _ => PlayerAction::Check,
        }
    }

    fn name(&self) -> &str {
        "PassiveAI"
    }
}
