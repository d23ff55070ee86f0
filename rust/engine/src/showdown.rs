//! Stage transitions, effective card values and settlement.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::elements;
use crate::game::{MatchState, Stage};
use crate::player::SeatId;
use crate::pot::PotManager;

/// One seat's line in the settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub seat: SeatId,
    pub hole_cards: Option<[Card; 2]>,
    /// `None` when the hand was won uncontested
    pub hand_value: Option<i32>,
    pub payout: u32,
}

/// How a hand ended and who was paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    /// Everyone else folded; no values were compared
    pub ended_by_fold: bool,
    pub pot: u32,
    pub winners: Vec<SeatId>,
    /// Seats still in the hand at the end
    pub entries: Vec<ShowdownEntry>,
    /// Odd chips removed from play
    pub dropped_chips: u32,
}

impl HandResult {
    pub fn paid_out(&self) -> u32 {
        self.entries.iter().map(|e| e.payout).sum()
    }
}

impl MatchState {
    /// Effective value of `card` given the reveals so far.
    pub fn effective_value(&self, card: &Card) -> i32 {
        elements::effective_value(card, self.arena.as_ref(), &self.powers)
    }

    /// Sum of both hole cards' effective values, if the seat holds cards.
    pub fn hand_value(&self, id: SeatId) -> Option<i32> {
        let hole = self.seat(id)?.hole_cards()?;
        Some(elements::hand_value(&hole, self.arena.as_ref(), &self.powers))
    }

    /// Closes the current round and opens the next one, revealing a card.
    pub(crate) fn advance_stage(&mut self) {
        if self.live_count() <= 1 {
            self.showdown();
            return;
        }
        if self.stage.next() == Stage::Showdown {
            self.showdown();
            return;
        }

        for seat in &mut self.seats {
            seat.clear_round();
        }
        self.current_bet = 0;
        self.min_raise = self.config.big_blind;
        self.last_raiser = None;
        self.acted.clear();
        self.raise_closed.clear();
        self.stage = self.stage.next();

        let reveal = if self.stage == Stage::Arena {
            let card = self.deck.reveal_arena();
            self.arena = Some(card);
            card
        } else {
            let card = self.deck.reveal_power();
            self.powers.push(card);
            card
        };
        tracing::info!(stage = ?self.stage, %reveal, pot = self.pot, "stage advanced");

        self.open_round(self.dealer_index);
    }

    /// Ranks the live seats and pays the pot out.
    pub(crate) fn showdown(&mut self) {
        self.stage = Stage::Showdown;
        self.active_index = None;

        let live: Vec<usize> = (0..self.seats.len())
            .filter(|&i| !self.seats[i].is_folded())
            .collect();

        if let [sole] = *live.as_slice() {
            let pot = self.pot;
            self.seats[sole].add_chips(pot);
            let seat = &self.seats[sole];
            tracing::info!(winner = %seat.id(), pot, "hand won uncontested");
            self.result = Some(HandResult {
                ended_by_fold: true,
                pot,
                winners: vec![seat.id()],
                entries: vec![ShowdownEntry {
                    seat: seat.id(),
                    hole_cards: seat.hole_cards(),
                    hand_value: None,
                    payout: pot,
                }],
                dropped_chips: 0,
            });
            return;
        }

        let values: Vec<Option<i32>> = self
            .seats
            .iter()
            .map(|s| {
                if s.is_folded() {
                    None
                } else {
                    s.hole_cards()
                        .map(|h| elements::hand_value(&h, self.arena.as_ref(), &self.powers))
                }
            })
            .collect();
        let contributions: Vec<u32> = self.seats.iter().map(|s| s.total_contributed()).collect();
        let alive: Vec<bool> = values.iter().map(Option::is_some).collect();
        let pots = if self.config.side_pots {
            PotManager::layered(&contributions, &alive)
        } else {
            PotManager::single(&contributions, &alive)
        };
        let n = self.seats.len();
        let order: Vec<usize> = (1..=n).map(|i| (self.dealer_index + i) % n).collect();
        let dist = pots.distribute(&values, &order, self.config.odd_chip);

        for (i, &won) in dist.payouts.iter().enumerate() {
            self.seats[i].add_chips(won);
        }
        let entries = live
            .iter()
            .map(|&i| ShowdownEntry {
                seat: self.seats[i].id(),
                hole_cards: self.seats[i].hole_cards(),
                hand_value: values[i],
                payout: dist.payouts[i],
            })
            .collect();
        let winners: Vec<SeatId> = dist.winners.iter().map(|&i| self.seats[i].id()).collect();

        tracing::info!(
            pot = self.pot,
            winners = ?winners,
            dropped = dist.dropped,
            main_pot = pots.main_pot(),
            side_pots = ?pots.side_pots(),
            "showdown settled"
        );
        self.result = Some(HandResult {
            ended_by_fold: false,
            pot: self.pot,
            winners,
            entries,
            dropped_chips: dist.dropped,
        });
    }
}
