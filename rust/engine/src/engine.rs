use crate::errors::GameError;
use crate::game::{MatchState, Stage, TableConfig};
use crate::logger::{ActionRecord, HandRecord};
use crate::player::{ActionKind, PlayerAction, Seat, SeatId};
use crate::rules::{LegalActions, ValidatedAction};
use crate::snapshot::TableSnapshot;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 0xE1E_4E47;

/// What a successful action did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub applied: ValidatedAction,
    /// Stage after the action (and any transitions it caused)
    pub stage: Stage,
    pub pot: u32,
    /// The next seat to act, if betting continues
    pub next: Option<SeatId>,
    /// The action closed its betting round
    pub round_closed: bool,
    pub hand_complete: bool,
}

/// Owner of one table's [`MatchState`] and the only way to change it.
///
/// Every call is applied completely (validated, committed, turn advanced)
/// before it returns, so callers serialize actions simply by holding
/// `&mut Engine`.
///
/// # Examples
///
/// ```
/// use elemental_engine::engine::Engine;
/// use elemental_engine::game::{Stage, TableConfig};
/// use elemental_engine::player::PlayerAction;
///
/// let mut engine = Engine::with_stacks(4, 1000, TableConfig::default(), Some(12345)).unwrap();
/// engine.start_hand().unwrap();
/// assert_eq!(engine.state().pot(), 15);
///
/// // everyone folds to the big blind
/// for _ in 0..3 {
///     let seat = engine.current_seat().unwrap();
///     engine.apply(seat, PlayerAction::Fold).unwrap();
/// }
/// assert_eq!(engine.state().stage(), Stage::Showdown);
/// assert!(engine.state().result().unwrap().ended_by_fold);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    state: MatchState,
    seed: u64,
    history: Vec<ActionRecord>,
}

impl Engine {
    pub fn new(seats: Vec<Seat>, config: TableConfig, seed: Option<u64>) -> Result<Self, GameError> {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Ok(Self {
            state: MatchState::new(seats, config, seed)?,
            seed,
            history: Vec::new(),
        })
    }

    /// `count` seats with ids 1..=count, all starting with `stack` chips.
    pub fn with_stacks(
        count: u32,
        stack: u32,
        config: TableConfig,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let seats = (1..=count)
            .map(|i| Seat::new(SeatId(i), format!("seat-{}", i), stack))
            .collect();
        Self::new(seats, config, seed)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn start_hand(&mut self) -> Result<(), GameError> {
        self.state.start_hand()?;
        self.history.clear();
        Ok(())
    }

    pub fn current_seat(&self) -> Option<SeatId> {
        self.state.active_seat()
    }

    pub fn legal_actions(&self, seat: SeatId) -> Option<LegalActions> {
        self.state.legal_actions(seat)
    }

    pub fn is_round_complete(&self) -> bool {
        self.state.is_round_complete()
    }

    pub fn is_hand_complete(&self) -> bool {
        !self.state.is_hand_in_progress()
    }

    pub fn snapshot(&self, viewer: Option<SeatId>) -> TableSnapshot {
        self.state.snapshot(viewer)
    }

    /// Validates and applies one action for `seat`, then moves the turn on.
    ///
    /// On error the table is left exactly as it was.
    pub fn apply(&mut self, seat: SeatId, action: PlayerAction) -> Result<ActionOutcome, GameError> {
        let (index, validated) = match self.state.validate(seat, action) {
            Ok(ok) => ok,
            Err(e) => {
                tracing::debug!(seat = %seat, action = %action, error = %e, "action rejected");
                return Err(e);
            }
        };

        let stage = self.state.stage();
        self.state.commit(index, validated);
        self.history.push(ActionRecord {
            seat,
            stage,
            action,
        });
        tracing::debug!(
            seat = %seat,
            action = %action,
            applied = ?validated,
            pot = self.state.pot(),
            current_bet = self.state.current_bet(),
            "action applied"
        );

        self.state.advance_turn(index);

        Ok(ActionOutcome {
            applied: validated,
            stage: self.state.stage(),
            pot: self.state.pot(),
            next: self.state.active_seat(),
            round_closed: self.state.stage() != stage,
            hand_complete: self.is_hand_complete(),
        })
    }

    /// Entry point for untyped callers: parses `kind` and pairs it with `amount`.
    pub fn apply_raw(
        &mut self,
        seat: SeatId,
        kind: &str,
        amount: Option<u32>,
    ) -> Result<ActionOutcome, GameError> {
        let kind: ActionKind = kind.parse()?;
        let action = PlayerAction::from_parts(kind, amount)?;
        self.apply(seat, action)
    }

    /// Builds the hand-history record for the current (usually finished) hand.
    pub fn hand_record(&self, hand_id: String) -> HandRecord {
        let st = &self.state;
        HandRecord {
            hand_id,
            seed: Some(self.seed),
            hand_number: st.hands_started(),
            dealer: st.seats().get(st.dealer_index()).map(|s| s.id()),
            small_blind: st.config().small_blind,
            big_blind: st.config().big_blind,
            actions: self.history.clone(),
            arena_card: st.arena_card().copied(),
            power_cards: st.power_cards().to_vec(),
            result: st.result().cloned(),
            ts: None,
            meta: None,
        }
    }
}
