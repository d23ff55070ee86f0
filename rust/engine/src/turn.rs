//! Turn order and betting-round completion.

use crate::game::MatchState;

impl MatchState {
    /// True once the current betting round has nothing left to decide.
    ///
    /// Either at most one seat still holds cards, or every seat able to act has
    /// acted this round and matched the bet. An outstanding big-blind option
    /// keeps the round open.
    pub fn is_round_complete(&self) -> bool {
        if self.live_count() <= 1 {
            return true;
        }
        if self.big_blind_option_pending() {
            return false;
        }
        self.seats
            .iter()
            .filter(|s| s.can_act())
            .all(|s| self.acted.contains(&s.id()) && s.current_bet() == self.current_bet)
    }

    /// First seat clockwise after `from` that can act; `from` itself is checked last.
    pub(crate) fn next_eligible(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|i| (from + i) % n)
            .find(|&i| self.seats[i].can_act())
    }

    /// Hands the turn to the first eligible seat after `from`. With nobody
    /// left to act the hand goes straight to showdown on the reveals so far.
    pub(crate) fn open_round(&mut self, from: usize) {
        self.active_index = match self.live_count() {
            0 | 1 => None,
            _ => self.next_eligible(from),
        };
        if self.active_index.is_none() {
            self.showdown();
        }
    }

    /// Moves play on after the seat at `from` acted.
    pub(crate) fn advance_turn(&mut self, from: usize) {
        if self.live_count() <= 1 {
            self.active_index = None;
            self.showdown();
            return;
        }
        if self.is_round_complete() {
            self.active_index = None;
            self.advance_stage();
            return;
        }
        match self.next_eligible(from) {
            Some(next) if next != from => self.active_index = Some(next),
            _ => {
                self.active_index = None;
                self.advance_stage();
            }
        }
    }
}
