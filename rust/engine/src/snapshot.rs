use serde::{Deserialize, Serialize};

use crate::cards::{Card, RevealCard};
use crate::game::{MatchState, Stage};
use crate::player::SeatId;
use crate::rules::LegalActions;
use crate::showdown::HandResult;

/// Public view of one seat. Hole cards are present only for their owner,
/// or for every live seat once the hand is settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: SeatId,
    pub name: String,
    pub stack: u32,
    pub current_bet: u32,
    pub total_contributed: u32,
    pub folded: bool,
    pub all_in: bool,
    pub hole_cards: Option<[Card; 2]>,
}

/// Read-only picture of the table as one viewer may see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hand_number: u32,
    pub stage: Stage,
    pub pot: u32,
    pub current_bet: u32,
    pub min_raise: u32,
    pub big_blind: u32,
    pub dealer: Option<SeatId>,
    pub big_blind_seat: Option<SeatId>,
    pub active: Option<SeatId>,
    pub arena_card: Option<RevealCard>,
    pub power_cards: Vec<RevealCard>,
    pub seats: Vec<SeatView>,
    /// The viewer's options, when it is the viewer's turn
    pub legal: Option<LegalActions>,
    pub result: Option<HandResult>,
}

impl TableSnapshot {
    pub fn seat(&self, id: SeatId) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.id == id)
    }
}

impl MatchState {
    /// Snapshot for `viewer`; `None` gives the spectator view.
    pub fn snapshot(&self, viewer: Option<SeatId>) -> TableSnapshot {
        let settled = self.stage == Stage::Showdown && self.result.is_some();
        let seats = self
            .seats
            .iter()
            .map(|s| {
                let visible = Some(s.id()) == viewer || (settled && !s.is_folded());
                SeatView {
                    id: s.id(),
                    name: s.name().to_string(),
                    stack: s.stack(),
                    current_bet: s.current_bet(),
                    total_contributed: s.total_contributed(),
                    folded: s.is_folded(),
                    all_in: s.is_all_in(),
                    hole_cards: if visible { s.hole_cards() } else { None },
                }
            })
            .collect();
        TableSnapshot {
            hand_number: self.hands_started,
            stage: self.stage,
            pot: self.pot,
            current_bet: self.current_bet,
            min_raise: self.min_raise,
            big_blind: self.config.big_blind,
            dealer: self.seats.get(self.dealer_index).map(|s| s.id()),
            big_blind_seat: self.big_blind_seat(),
            active: self.active_seat(),
            arena_card: self.arena,
            power_cards: self.powers.clone(),
            seats,
            legal: viewer.and_then(|v| self.legal_actions(v)),
            result: self.result.clone(),
        }
    }
}
