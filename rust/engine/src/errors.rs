use thiserror::Error;

use crate::player::SeatId;

/// Every way the engine can refuse a request.
///
/// Rejections are ordinary values: a refused action leaves the match untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Seat {0} is not at this table")]
    SeatNotFound(SeatId),
    #[error("No hand in progress")]
    HandComplete,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotYourTurn { expected: SeatId, actual: SeatId },
    #[error("Seat {0} has folded or is all-in")]
    PlayerInactive(SeatId),
    #[error("Cannot check facing a bet of {to_call}")]
    InvalidCheck { to_call: u32 },
    #[error("Nothing to call")]
    NothingToCall,
    #[error("Cannot bet while facing a bet; raise instead")]
    BetNotAllowed,
    #[error("Bet {amount} is below the minimum of {minimum}")]
    BetTooLow { amount: u32, minimum: u32 },
    #[error("Bet {amount} exceeds stack {stack}")]
    BetExceedsStack { amount: u32, stack: u32 },
    #[error("Nothing to raise; bet instead")]
    NothingToRaise,
    #[error("Raise to {amount} is below the minimum of {minimum}")]
    RaiseBelowMinimum { amount: u32, minimum: u32 },
    #[error("Raise to {amount} needs {needed} chips but only {stack} remain")]
    RaiseExceedsStack { amount: u32, needed: u32, stack: u32 },
    #[error("Betting was not reopened for seat {0}; call or fold")]
    RaiseNotReopened(SeatId),
    #[error("Unknown action kind: {0}")]
    UnknownActionKind(String),
    #[error("Action {0} requires an amount")]
    MissingAmount(String),
    #[error("Need at least two seats with chips to start a hand")]
    NotEnoughPlayers,
    #[error("Table holds at most {max} seats")]
    TooManySeats { max: usize },
    #[error("Seat {0} is already taken")]
    DuplicateSeat(SeatId),
    #[error("Table holds {total} chips; at most {max} fit")]
    TooManyChips { total: u64, max: u32 },
}
