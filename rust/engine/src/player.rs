use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a seat, chosen by whoever builds the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub u32);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a player action during a betting round.
///
/// `Bet` and `Raise` carry the seat's new total bet for the round, not the increment.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the current bet
    Call,
    /// Open the betting to the given total
    Bet(u32),
    /// Raise the current bet to the given total
    Raise(u32),
    /// Push the whole remaining stack
    AllIn,
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::AllIn => ActionKind::AllIn,
        }
    }

    /// Builds an action from its kind and the optional amount that came with it.
    pub fn from_parts(kind: ActionKind, amount: Option<u32>) -> Result<Self, GameError> {
        let need = |amount: Option<u32>| {
            amount.ok_or_else(|| GameError::MissingAmount(kind.as_str().to_string()))
        };
        Ok(match kind {
            ActionKind::Fold => PlayerAction::Fold,
            ActionKind::Check => PlayerAction::Check,
            ActionKind::Call => PlayerAction::Call,
            ActionKind::Bet => PlayerAction::Bet(need(amount)?),
            ActionKind::Raise => PlayerAction::Raise(need(amount)?),
            ActionKind::AllIn => PlayerAction::AllIn,
        })
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Bet(n) => write!(f, "bet {}", n),
            PlayerAction::Raise(n) => write!(f, "raise {}", n),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

/// Action kind as it arrives from an untyped caller.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "allin",
        }
    }
}

impl FromStr for ActionKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(ActionKind::Fold),
            "check" => Ok(ActionKind::Check),
            "call" => Ok(ActionKind::Call),
            "bet" => Ok(ActionKind::Bet),
            "raise" => Ok(ActionKind::Raise),
            "allin" | "all-in" | "all_in" => Ok(ActionKind::AllIn),
            other => Err(GameError::UnknownActionKind(other.to_string())),
        }
    }
}

/// A seat at the table: identity, chips and the per-hand betting flags.
///
/// `stack` survives from hand to hand; everything else is reset by
/// [`Seat::reset_for_hand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    id: SeatId,
    name: String,
    hole: Option<[Card; 2]>,
    stack: u32,
    /// Chips put in during the current betting round
    current_bet: u32,
    /// Chips put in during the whole hand
    total_contributed: u32,
    folded: bool,
    all_in: bool,
}

impl Seat {
    pub fn new(id: SeatId, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            hole: None,
            stack,
            current_bet: 0,
            total_contributed: 0,
            folded: false,
            all_in: false,
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_contributed(&self) -> u32 {
        self.total_contributed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Still holding cards and chips, so able to act.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.hole = None;
        self.current_bet = 0;
        self.total_contributed = 0;
        self.folded = false;
        self.all_in = false;
    }

    pub(crate) fn sit_out(&mut self) {
        self.folded = true;
    }

    pub(crate) fn give_cards(&mut self, cards: [Card; 2]) {
        self.hole = Some(cards);
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn clear_round(&mut self) {
        self.current_bet = 0;
    }

    /// Moves `amount` from the stack into the pot; the caller guarantees `amount <= stack`.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let amount = amount.min(self.stack);
        self.stack -= amount;
        self.current_bet += amount;
        self.total_contributed += amount;
        if self.stack == 0 {
            self.all_in = true;
        }
        amount
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}
