//! Baseline opponent for elemental play.
//!
//! Scores its two hole cards with the public reveals and maps the score onto
//! a fixed betting policy. Decisions are deterministic so simulations replay
//! exactly from a seed.

use crate::AIOpponent;
use elemental_engine::cards::{Card, MAX_RANK};
use elemental_engine::elements::hand_value;
use elemental_engine::game::Stage;
use elemental_engine::player::{PlayerAction, SeatId};
use elemental_engine::rules::LegalActions;
use elemental_engine::snapshot::TableSnapshot;

/// Rule-based opponent driven by effective hand value.
///
/// # Strategy
///
/// - Strong hands (8-10): bet or raise about two thirds of the pot
/// - Good hands (6-7): bet half the pot when unopened, otherwise call
/// - Medium hands (4-5): check, call while the price is at most a third of the pot
/// - Weak hands: check when free, fold to any bet
///
/// # Example
///
/// ```rust
/// use elemental_ai::baseline::BaselineAI;
/// use elemental_ai::AIOpponent;
/// use elemental_engine::engine::Engine;
/// use elemental_engine::game::TableConfig;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
///
/// let mut engine = Engine::with_stacks(3, 200, TableConfig::default(), Some(5)).unwrap();
/// engine.start_hand().unwrap();
/// while let Some(seat) = engine.current_seat() {
///     let action = ai.get_action(&engine.snapshot(Some(seat)), seat);
///     engine.apply(seat, action).unwrap();
/// }
/// assert!(engine.is_hand_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Strength on a 0-10 scale.
    ///
    /// Before any reveal the two ranks dominate, with a point for a matching
    /// element pair since every later reveal then hits both cards alike. After
    /// reveals the effective value is compared against what an average pair of
    /// ranks would score.
    fn evaluate_strength(hole: &[Card; 2], snapshot: &TableSnapshot) -> u8 {
        let value = hand_value(hole, snapshot.arena_card.as_ref(), &snapshot.power_cards);
        let paired = hole[0].element == hole[1].element;
        let base = if snapshot.stage == Stage::Preflop {
            Self::scale(value, 2 * i32::from(MAX_RANK))
        } else {
            // Reveals can push values well past the raw rank ceiling
            Self::scale(value - 4, 2 * i32::from(MAX_RANK))
        };
        (base + u8::from(paired)).min(10)
    }

    fn scale(value: i32, ceiling: i32) -> u8 {
        let scaled = (value.max(0) * 10) / ceiling.max(1);
        scaled.clamp(0, 10) as u8
    }

    /// Total to bet or raise to: `fraction` of the pot on top of the current
    /// bet, held inside the legal window.
    fn sized_total(legal: &LegalActions, current_bet: u32, pot: u32, num: u32, den: u32) -> u32 {
        let target = current_bet + pot * num / den;
        target.clamp(legal.min_total, legal.max_total)
    }

    fn aggressive(
        legal: &LegalActions,
        snapshot: &TableSnapshot,
        num: u32,
        den: u32,
    ) -> Option<PlayerAction> {
        // can_bet and can_raise both guarantee min_total <= max_total
        let total = || Self::sized_total(legal, snapshot.current_bet, snapshot.pot, num, den);
        if snapshot.current_bet == 0 && legal.can_bet {
            Some(PlayerAction::Bet(total()))
        } else if legal.can_raise {
            Some(PlayerAction::Raise(total()))
        } else {
            None
        }
    }

    fn decide(strength: u8, legal: &LegalActions, snapshot: &TableSnapshot) -> PlayerAction {
        let to_call = legal.call_amount;
        let passive = if legal.can_check {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };

        match strength {
            8..=10 => Self::aggressive(legal, snapshot, 2, 3).unwrap_or(passive),
            6..=7 => {
                if legal.can_check {
                    Self::aggressive(legal, snapshot, 1, 2).unwrap_or(PlayerAction::Check)
                } else {
                    PlayerAction::Call
                }
            }
            4..=5 => {
                if legal.can_check || to_call.saturating_mul(3) <= snapshot.pot {
                    passive
                } else {
                    PlayerAction::Fold
                }
            }
            _ => {
                if legal.can_check {
                    PlayerAction::Check
                } else {
                    PlayerAction::Fold
                }
            }
        }
    }
}

impl AIOpponent for BaselineAI {
    fn get_action(&self, snapshot: &TableSnapshot, seat: SeatId) -> PlayerAction {
        let Some(legal) = snapshot.legal.filter(|l| l.seat == seat) else {
            return PlayerAction::Check;
        };

        let hole = snapshot.seat(seat).and_then(|s| s.hole_cards);
        let Some(hole) = hole else {
            return if legal.can_check {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
        };

        let strength = Self::evaluate_strength(&hole, snapshot);
        Self::decide(strength, &legal, snapshot)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemental_engine::cards::{Element, RevealCard};
    use elemental_engine::engine::Engine;
    use elemental_engine::game::TableConfig;

    fn snapshot_at(stage: Stage, arena: Option<RevealCard>, powers: Vec<RevealCard>) -> TableSnapshot {
        let mut engine = Engine::with_stacks(4, 1000, TableConfig::default(), Some(1)).unwrap();
        engine.start_hand().unwrap();
        let seat = engine.current_seat().unwrap();
        let mut snap = engine.snapshot(Some(seat));
        snap.stage = stage;
        snap.arena_card = arena;
        snap.power_cards = powers;
        snap
    }

    #[test]
    fn high_ranks_score_as_strong_preflop() {
        let snap = snapshot_at(Stage::Preflop, None, vec![]);
        let kings = [Card::new(Element::Fire, 13), Card::new(Element::Water, 12)];
        assert!(BaselineAI::evaluate_strength(&kings, &snap) >= 9);

        let low = [Card::new(Element::Fire, 2), Card::new(Element::Water, 3)];
        assert!(BaselineAI::evaluate_strength(&low, &snap) <= 2);
    }

    #[test]
    fn contradicting_arena_weakens_a_hand() {
        let hole = [Card::new(Element::Fire, 9), Card::new(Element::Fire, 8)];
        let friendly = snapshot_at(
            Stage::Arena,
            Some(RevealCard::Arena {
                element: Element::Fire,
            }),
            vec![],
        );
        let hostile = snapshot_at(
            Stage::Arena,
            Some(RevealCard::Arena {
                element: Element::Water,
            }),
            vec![],
        );
        assert!(
            BaselineAI::evaluate_strength(&hole, &friendly)
                > BaselineAI::evaluate_strength(&hole, &hostile)
        );
    }

    #[test]
    fn weak_hand_folds_to_a_bet_and_checks_when_free() {
        let snap = snapshot_at(Stage::Preflop, None, vec![]);
        let mut legal = snap.legal.unwrap();
        legal.can_check = false;
        legal.call_amount = 500;
        assert_eq!(BaselineAI::decide(1, &legal, &snap), PlayerAction::Fold);

        legal.can_check = true;
        legal.call_amount = 0;
        assert_eq!(BaselineAI::decide(1, &legal, &snap), PlayerAction::Check);
    }

    #[test]
    fn strong_hand_raises_within_the_legal_window() {
        let snap = snapshot_at(Stage::Preflop, None, vec![]);
        let legal = snap.legal.unwrap();
        match BaselineAI::decide(10, &legal, &snap) {
            PlayerAction::Raise(total) => {
                assert!(total >= legal.min_total && total <= legal.max_total)
            }
            other => panic!("expected a raise, got {:?}", other),
        }
    }

    #[test]
    fn no_turn_means_a_harmless_default() {
        let mut engine = Engine::with_stacks(4, 1000, TableConfig::default(), Some(1)).unwrap();
        engine.start_hand().unwrap();
        let snap = engine.snapshot(None);
        assert_eq!(BaselineAI::new().get_action(&snap, SeatId(1)), PlayerAction::Check);
    }
}
