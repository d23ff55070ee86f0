use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{PlayerAction as A, SeatId};

/// An action that passed validation, carrying the exact chip movement to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips moved to match the bet (capped by the stack)
    Call(u32),
    /// New total bet for the round
    Bet(u32),
    /// New total bet for the round
    Raise(u32),
    /// `chips` is the whole stack, `total` the resulting round bet; `full_raise`
    /// marks an all-in large enough to reopen the betting
    AllIn { chips: u32, total: u32, full_raise: bool },
}

/// Everything the rules need to know about one seat facing the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingView {
    pub seat: SeatId,
    pub stack: u32,
    /// The seat's bet this round
    pub seat_bet: u32,
    /// The bet to match this round
    pub table_bet: u32,
    pub min_raise: u32,
    pub big_blind: u32,
    /// Preflop big blind may still open the betting
    pub big_blind_option: bool,
    /// Betting was not reopened for this seat after a short all-in
    pub raise_closed: bool,
}

impl BettingView {
    pub fn to_call(&self) -> u32 {
        self.table_bet.saturating_sub(self.seat_bet)
    }

    /// Smallest legal total for a bet or raise.
    pub fn min_total(&self) -> u32 {
        if self.table_bet == 0 {
            self.big_blind
        } else {
            self.table_bet + self.min_raise
        }
    }

    pub fn max_total(&self) -> u32 {
        self.seat_bet + self.stack
    }
}

/// Options open to the seat whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    pub seat: SeatId,
    pub can_check: bool,
    /// Chips a call would move; zero when there is nothing to call
    pub call_amount: u32,
    pub can_bet: bool,
    pub can_raise: bool,
    /// Smallest total for a bet or raise
    pub min_total: u32,
    /// Largest total the stack allows
    pub max_total: u32,
}

impl From<&BettingView> for LegalActions {
    fn from(v: &BettingView) -> Self {
        let opens = v.table_bet == 0 || v.big_blind_option;
        let reach = v.max_total() >= v.min_total();
        Self {
            seat: v.seat,
            can_check: v.to_call() == 0,
            call_amount: v.to_call().min(v.stack),
            can_bet: opens && reach,
            can_raise: v.table_bet > 0 && !v.raise_closed && reach,
            min_total: v.min_total(),
            max_total: v.max_total(),
        }
    }
}

/// Validates a player action against the betting rules.
///
/// Bet and raise amounts are totals for the round. Nothing is converted
/// silently: an amount the stack cannot cover is an error, and pushing the
/// whole stack is spelled [`A::AllIn`].
///
/// # Errors
///
/// - [`GameError::InvalidCheck`] when checking while chips are owed
/// - [`GameError::NothingToCall`] when calling with nothing owed
/// - [`GameError::BetNotAllowed`], [`GameError::BetTooLow`], [`GameError::BetExceedsStack`]
/// - [`GameError::NothingToRaise`], [`GameError::RaiseBelowMinimum`],
///   [`GameError::RaiseExceedsStack`], [`GameError::RaiseNotReopened`]
///
/// # Examples
///
/// ```
/// use elemental_engine::errors::GameError;
/// use elemental_engine::player::{PlayerAction, SeatId};
/// use elemental_engine::rules::{validate_action, BettingView, ValidatedAction};
///
/// let view = BettingView {
///     seat: SeatId(1),
///     stack: 1000,
///     seat_bet: 0,
///     table_bet: 20,
///     min_raise: 20,
///     big_blind: 20,
///     big_blind_option: false,
///     raise_closed: false,
/// };
/// assert_eq!(validate_action(&view, PlayerAction::Call), Ok(ValidatedAction::Call(20)));
/// assert!(matches!(
///     validate_action(&view, PlayerAction::Raise(35)),
///     Err(GameError::RaiseBelowMinimum { .. })
/// ));
/// ```
pub fn validate_action(view: &BettingView, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if view.seat_bet == view.table_bet {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::InvalidCheck {
                    to_call: view.to_call(),
                })
            }
        }
        A::Call => {
            if view.table_bet > view.seat_bet {
                Ok(ValidatedAction::Call(view.to_call().min(view.stack)))
            } else {
                Err(GameError::NothingToCall)
            }
        }
        A::Bet(amount) => {
            if view.table_bet > 0 {
                if view.big_blind_option {
                    return validate_raise(view, amount);
                }
                return Err(GameError::BetNotAllowed);
            }
            if amount < view.big_blind {
                return Err(GameError::BetTooLow {
                    amount,
                    minimum: view.big_blind,
                });
            }
            if amount > view.max_total() {
                return Err(GameError::BetExceedsStack {
                    amount,
                    stack: view.stack,
                });
            }
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(amount) => {
            if view.table_bet == 0 {
                return Err(GameError::NothingToRaise);
            }
            validate_raise(view, amount)
        }
        A::AllIn => {
            let total = view.max_total();
            if view.raise_closed && total > view.table_bet {
                return Err(GameError::RaiseNotReopened(view.seat));
            }
            let full_raise = total > view.table_bet && total - view.table_bet >= view.min_raise;
            Ok(ValidatedAction::AllIn {
                chips: view.stack,
                total,
                full_raise,
            })
        }
    }
}

fn validate_raise(view: &BettingView, amount: u32) -> Result<ValidatedAction, GameError> {
    if view.raise_closed {
        return Err(GameError::RaiseNotReopened(view.seat));
    }
    if amount < view.min_total() {
        return Err(GameError::RaiseBelowMinimum {
            amount,
            minimum: view.min_total(),
        });
    }
    let needed = amount - view.seat_bet;
    if needed > view.stack {
        return Err(GameError::RaiseExceedsStack {
            amount,
            needed,
            stack: view.stack,
        });
    }
    Ok(ValidatedAction::Raise(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(stack: u32, seat_bet: u32, table_bet: u32, min_raise: u32) -> BettingView {
        BettingView {
            seat: SeatId(7),
            stack,
            seat_bet,
            table_bet,
            min_raise,
            big_blind: 10,
            big_blind_option: false,
            raise_closed: false,
        }
    }

    #[test]
    fn check_requires_matched_bet() {
        assert_eq!(
            validate_action(&view(100, 0, 0, 10), A::Check),
            Ok(ValidatedAction::Check)
        );
        assert_eq!(
            validate_action(&view(100, 5, 10, 10), A::Check),
            Err(GameError::InvalidCheck { to_call: 5 })
        );
    }

    #[test]
    fn call_is_capped_by_stack() {
        assert_eq!(
            validate_action(&view(60, 0, 100, 100), A::Call),
            Ok(ValidatedAction::Call(60))
        );
        assert_eq!(
            validate_action(&view(60, 10, 10, 10), A::Call),
            Err(GameError::NothingToCall)
        );
    }

    #[test]
    fn bet_bounds() {
        assert_eq!(
            validate_action(&view(100, 0, 0, 10), A::Bet(9)),
            Err(GameError::BetTooLow {
                amount: 9,
                minimum: 10
            })
        );
        assert_eq!(
            validate_action(&view(100, 0, 0, 10), A::Bet(101)),
            Err(GameError::BetExceedsStack {
                amount: 101,
                stack: 100
            })
        );
        assert_eq!(
            validate_action(&view(100, 0, 0, 10), A::Bet(100)),
            Ok(ValidatedAction::Bet(100))
        );
        assert_eq!(
            validate_action(&view(100, 0, 20, 20), A::Bet(40)),
            Err(GameError::BetNotAllowed)
        );
    }

    #[test]
    fn big_blind_option_bet_acts_as_raise() {
        let mut v = view(990, 10, 10, 10);
        v.big_blind_option = true;
        assert_eq!(validate_action(&v, A::Bet(30)), Ok(ValidatedAction::Raise(30)));
        assert!(matches!(
            validate_action(&v, A::Bet(15)),
            Err(GameError::RaiseBelowMinimum { minimum: 20, .. })
        ));
    }

    #[test]
    fn raise_uses_new_total() {
        let v = view(1000, 0, 20, 20);
        assert_eq!(
            validate_action(&v, A::Raise(35)),
            Err(GameError::RaiseBelowMinimum {
                amount: 35,
                minimum: 40
            })
        );
        assert_eq!(validate_action(&v, A::Raise(40)), Ok(ValidatedAction::Raise(40)));
        assert_eq!(
            validate_action(&view(30, 0, 20, 20), A::Raise(40)),
            Err(GameError::RaiseExceedsStack {
                amount: 40,
                needed: 40,
                stack: 30
            })
        );
        assert_eq!(
            validate_action(&view(30, 0, 0, 20), A::Raise(40)),
            Err(GameError::NothingToRaise)
        );
    }

    #[test]
    fn short_all_in_is_not_a_full_raise() {
        assert_eq!(
            validate_action(&view(25, 0, 20, 20), A::AllIn),
            Ok(ValidatedAction::AllIn {
                chips: 25,
                total: 25,
                full_raise: false
            })
        );
        assert_eq!(
            validate_action(&view(40, 0, 20, 20), A::AllIn),
            Ok(ValidatedAction::AllIn {
                chips: 40,
                total: 40,
                full_raise: true
            })
        );
    }

    #[test]
    fn closed_seat_may_only_call_or_fold() {
        let mut v = view(500, 20, 25, 20);
        v.raise_closed = true;
        assert_eq!(validate_action(&v, A::Call), Ok(ValidatedAction::Call(5)));
        assert_eq!(
            validate_action(&v, A::Raise(45)),
            Err(GameError::RaiseNotReopened(SeatId(7)))
        );
        assert_eq!(
            validate_action(&v, A::AllIn),
            Err(GameError::RaiseNotReopened(SeatId(7)))
        );
        // a stack that cannot even cover the call may still go all-in
        let mut short = view(3, 20, 25, 20);
        short.raise_closed = true;
        assert!(matches!(
            validate_action(&short, A::AllIn),
            Ok(ValidatedAction::AllIn { full_raise: false, .. })
        ));
    }

    #[test]
    fn legal_actions_summarise_the_view() {
        let la = LegalActions::from(&view(1000, 0, 20, 20));
        assert!(!la.can_check);
        assert_eq!(la.call_amount, 20);
        assert!(!la.can_bet);
        assert!(la.can_raise);
        assert_eq!(la.min_total, 40);
        assert_eq!(la.max_total, 1000);
    }
}
