use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::RevealCard;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Seat, SeatId};
use crate::showdown::HandResult;

/// Most seats a table holds.
pub const MAX_SEATS: usize = 4;

/// Betting stages of a hand. Stages only ever move forward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Hole cards dealt, blinds posted
    Preflop,
    /// Arena card revealed
    Arena,
    /// First power card revealed
    Power1,
    /// Second power card revealed
    Power2,
    /// Third power card revealed
    Power3,
    /// Hand settled; no further actions
    Showdown,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Arena,
            Stage::Arena => Stage::Power1,
            Stage::Power1 => Stage::Power2,
            Stage::Power2 => Stage::Power3,
            Stage::Power3 | Stage::Showdown => Stage::Showdown,
        }
    }
}

/// What happens to chips that do not divide evenly between tied winners.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OddChipRule {
    /// Remainders leave play and are reported as dropped chips
    #[default]
    Discard,
    /// Remainders go to the first winner clockwise from the dealer
    FirstAfterDealer,
}

/// Stakes and settlement rules for one table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Split contributions into side pots at every all-in level
    pub side_pots: bool,
    pub odd_chip: OddChipRule,
    /// Seat index holding the dealer button for the first hand
    pub first_dealer: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
            side_pots: true,
            odd_chip: OddChipRule::Discard,
            first_dealer: 0,
        }
    }
}

/// The single mutable record of a table: seats, chips, bets, reveals and turn.
///
/// A fresh table rests in [`Stage::Showdown`] with no result until the first
/// hand is started. Only the engine mutates it; everyone else reads.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub(crate) config: TableConfig,
    pub(crate) seats: Vec<Seat>,
    pub(crate) dealer_index: usize,
    pub(crate) active_index: Option<usize>,
    pub(crate) big_blind_index: Option<usize>,
    pub(crate) stage: Stage,
    pub(crate) pot: u32,
    pub(crate) current_bet: u32,
    pub(crate) min_raise: u32,
    pub(crate) last_raiser: Option<SeatId>,
    pub(crate) acted: BTreeSet<SeatId>,
    /// Seats that matched a bet before a short all-in topped it; they may only call or fold
    pub(crate) raise_closed: BTreeSet<SeatId>,
    pub(crate) arena: Option<RevealCard>,
    pub(crate) powers: Vec<RevealCard>,
    pub(crate) deck: Deck,
    pub(crate) hands_started: u32,
    pub(crate) result: Option<HandResult>,
}

impl MatchState {
    pub fn new(seats: Vec<Seat>, config: TableConfig, seed: u64) -> Result<Self, GameError> {
        if seats.len() > MAX_SEATS {
            return Err(GameError::TooManySeats { max: MAX_SEATS });
        }
        let mut ids = BTreeSet::new();
        for s in &seats {
            if !ids.insert(s.id()) {
                return Err(GameError::DuplicateSeat(s.id()));
            }
        }
        let total: u64 = seats.iter().map(|s| u64::from(s.stack())).sum();
        if total > u64::from(u32::MAX) {
            return Err(GameError::TooManyChips {
                total,
                max: u32::MAX,
            });
        }
        let dealer_index = if seats.is_empty() {
            0
        } else {
            config.first_dealer % seats.len()
        };
        Ok(Self {
            config,
            seats,
            dealer_index,
            active_index: None,
            big_blind_index: None,
            stage: Stage::Showdown,
            pot: 0,
            current_bet: 0,
            min_raise: config.big_blind,
            last_raiser: None,
            acted: BTreeSet::new(),
            raise_closed: BTreeSet::new(),
            arena: None,
            powers: Vec::with_capacity(3),
            deck: Deck::new_with_seed(seed),
            hands_started: 0,
            result: None,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id() == id)
    }
    pub fn seat_index(&self, id: SeatId) -> Option<usize> {
        self.seats.iter().position(|s| s.id() == id)
    }
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }
    pub fn active_seat(&self) -> Option<SeatId> {
        self.active_index.map(|i| self.seats[i].id())
    }
    pub fn big_blind_seat(&self) -> Option<SeatId> {
        self.big_blind_index.map(|i| self.seats[i].id())
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn last_raiser(&self) -> Option<SeatId> {
        self.last_raiser
    }
    pub fn acted_this_round(&self) -> &BTreeSet<SeatId> {
        &self.acted
    }
    pub fn arena_card(&self) -> Option<&RevealCard> {
        self.arena.as_ref()
    }
    pub fn power_cards(&self) -> &[RevealCard] {
        &self.powers
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn hands_started(&self) -> u32 {
        self.hands_started
    }
    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }
    pub fn is_hand_in_progress(&self) -> bool {
        self.stage != Stage::Showdown
    }

    /// Chips on the table plus chips in the pot.
    pub fn chips_in_play(&self) -> u64 {
        self.seats.iter().map(|s| u64::from(s.stack())).sum::<u64>() + u64::from(self.pot)
    }

    /// Seats still holding cards.
    pub fn live_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_folded()).count()
    }

    /// Starts a new hand: moves the button, resets seats, deals and posts blinds.
    pub(crate) fn start_hand(&mut self) -> Result<(), GameError> {
        if self.is_hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        let funded = self.seats.iter().filter(|s| s.stack() > 0).count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        for seat in &mut self.seats {
            seat.reset_for_hand();
            if seat.stack() == 0 {
                seat.sit_out();
            }
        }
        if self.hands_started > 0 || self.seats[self.dealer_index].stack() == 0 {
            self.dealer_index = self.next_funded(self.dealer_index);
        }

        self.pot = 0;
        self.current_bet = 0;
        self.min_raise = self.config.big_blind;
        self.last_raiser = None;
        self.acted.clear();
        self.raise_closed.clear();
        self.arena = None;
        self.powers.clear();
        self.result = None;
        self.stage = Stage::Preflop;
        self.active_index = None;
        self.hands_started += 1;

        self.deal_hole_cards();

        let sb = self.next_funded(self.dealer_index);
        let bb = self.next_funded(sb);
        self.post_blind(sb, self.config.small_blind);
        self.post_blind(bb, self.config.big_blind);
        self.current_bet = self.config.big_blind;
        self.big_blind_index = Some(bb);

        tracing::info!(
            hand = self.hands_started,
            dealer = %self.seats[self.dealer_index].id(),
            small_blind = %self.seats[sb].id(),
            big_blind = %self.seats[bb].id(),
            pot = self.pot,
            "hand started"
        );

        self.open_round(bb);
        Ok(())
    }

    fn deal_hole_cards(&mut self) {
        self.deck.shuffle();
        let n = self.seats.len();
        let order: Vec<usize> = (1..=n)
            .map(|i| (self.dealer_index + i) % n)
            .filter(|&i| !self.seats[i].is_folded())
            .collect();
        let mut first = Vec::with_capacity(order.len());
        for _ in &order {
            first.push(self.deck.deal_card());
        }
        for (k, &i) in order.iter().enumerate() {
            // 52 cards always cover four seats
            if let (Some(a), Some(b)) = (first[k], self.deck.deal_card()) {
                self.seats[i].give_cards([a, b]);
            }
        }
    }

    fn post_blind(&mut self, index: usize, amount: u32) {
        self.pot = self.pot.saturating_add(self.seats[index].commit(amount));
    }

    /// Next seat clockwise from `from` that has chips at the start of the hand.
    fn next_funded(&self, from: usize) -> usize {
        let n = self.seats.len();
        (1..=n)
            .map(|i| (from + i) % n)
            .find(|&i| self.seats[i].stack() > 0 || self.seats[i].total_contributed() > 0)
            .unwrap_or(from)
    }
}
