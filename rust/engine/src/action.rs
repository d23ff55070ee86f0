//! Action processing: preconditions, validation and the chip bookkeeping of one action.

use crate::errors::GameError;
use crate::game::{MatchState, Stage};
use crate::player::{PlayerAction, SeatId};
use crate::rules::{validate_action, BettingView, LegalActions, ValidatedAction};

impl MatchState {
    /// Checks, in order, that the seat exists, a hand is running, it is the
    /// seat's turn and the seat can still act. Returns the seat index.
    pub(crate) fn check_turn(&self, id: SeatId) -> Result<usize, GameError> {
        let index = self.seat_index(id).ok_or(GameError::SeatNotFound(id))?;
        if !self.is_hand_in_progress() {
            return Err(GameError::HandComplete);
        }
        match self.active_index {
            Some(active) if active == index => {}
            Some(active) => {
                return Err(GameError::NotYourTurn {
                    expected: self.seats[active].id(),
                    actual: id,
                })
            }
            None => return Err(GameError::HandComplete),
        }
        if !self.seats[index].can_act() {
            return Err(GameError::PlayerInactive(id));
        }
        Ok(index)
    }

    /// True while the preflop big blind, never raised past, still holds the option.
    pub fn big_blind_option_pending(&self) -> bool {
        let Some(bb) = self.big_blind_index else {
            return false;
        };
        let seat = &self.seats[bb];
        self.stage == Stage::Preflop
            && self.last_raiser.is_none()
            && seat.can_act()
            && seat.current_bet() == self.current_bet
            && !self.acted.contains(&seat.id())
    }

    pub(crate) fn betting_view(&self, index: usize) -> BettingView {
        let seat = &self.seats[index];
        BettingView {
            seat: seat.id(),
            stack: seat.stack(),
            seat_bet: seat.current_bet(),
            table_bet: self.current_bet,
            min_raise: self.min_raise,
            big_blind: self.config.big_blind,
            big_blind_option: self.big_blind_index == Some(index) && self.big_blind_option_pending(),
            raise_closed: self.raise_closed.contains(&seat.id()),
        }
    }

    /// Options for `id` if it is that seat's turn.
    pub fn legal_actions(&self, id: SeatId) -> Option<LegalActions> {
        let index = self.check_turn(id).ok()?;
        Some(LegalActions::from(&self.betting_view(index)))
    }

    /// Validates without mutating anything.
    pub(crate) fn validate(
        &self,
        id: SeatId,
        action: PlayerAction,
    ) -> Result<(usize, ValidatedAction), GameError> {
        let index = self.check_turn(id)?;
        let validated = validate_action(&self.betting_view(index), action)?;
        Ok((index, validated))
    }

    /// Applies a validated action's chip movement and round bookkeeping.
    pub(crate) fn commit(&mut self, index: usize, action: ValidatedAction) {
        let id = self.seats[index].id();
        match action {
            ValidatedAction::Fold => self.seats[index].fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call(chips) => {
                self.pot = self.pot.saturating_add(self.seats[index].commit(chips));
            }
            ValidatedAction::Bet(total) | ValidatedAction::Raise(total) => {
                let chips = total - self.seats[index].current_bet();
                self.pot = self.pot.saturating_add(self.seats[index].commit(chips));
                self.reopen(id, total);
            }
            ValidatedAction::AllIn {
                chips,
                total,
                full_raise,
            } => {
                self.pot = self.pot.saturating_add(self.seats[index].commit(chips));
                if full_raise {
                    self.reopen(id, total);
                } else if total > self.current_bet {
                    let prior = self.current_bet;
                    let matched: Vec<SeatId> = self
                        .seats
                        .iter()
                        .filter(|s| {
                            s.id() != id
                                && s.can_act()
                                && s.current_bet() == prior
                                && self.acted.contains(&s.id())
                        })
                        .map(|s| s.id())
                        .collect();
                    self.raise_closed.extend(matched);
                    self.current_bet = total;
                }
            }
        }
        self.acted.insert(id);
    }

    fn reopen(&mut self, raiser: SeatId, total: u32) {
        self.min_raise = total - self.current_bet;
        self.current_bet = total;
        self.last_raiser = Some(raiser);
        self.acted.clear();
        self.raise_closed.clear();
    }
}
