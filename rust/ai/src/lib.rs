//! # elemental-ai: scripted opponents for the elemental table
//!
//! Opponents decide from a [`TableSnapshot`] taken from their own seat, so
//! they see exactly what a human in that chair would see: their own hole
//! cards, the public reveals and the legal options for the turn.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every opponent implements
//! - [`baseline`] - Value-driven opponent scoring its hand with the reveals
//! - [`passive`] - Opponent that never folds and never raises
//! - [`create_ai`] - Factory looking opponents up by name
//!
//! ## Quick Start
//!
//! ```rust
//! use elemental_ai::{create_ai, AIOpponent};
//! use elemental_engine::engine::Engine;
//! use elemental_engine::game::TableConfig;
//!
//! let ai = create_ai("baseline").expect("baseline is always available");
//!
//! let mut engine = Engine::with_stacks(4, 1000, TableConfig::default(), Some(42)).unwrap();
//! engine.start_hand().unwrap();
//!
//! let seat = engine.current_seat().expect("someone is to act");
//! let action = ai.get_action(&engine.snapshot(Some(seat)), seat);
//! assert!(engine.apply(seat, action).is_ok());
//! ```

use elemental_engine::player::{PlayerAction, SeatId};
use elemental_engine::snapshot::TableSnapshot;

pub mod baseline;
pub mod passive;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 2] = ["baseline", "passive"];

/// Interface for computer-controlled seats.
///
/// # Example Implementation
///
/// ```rust
/// use elemental_ai::AIOpponent;
/// use elemental_engine::player::{PlayerAction, SeatId};
/// use elemental_engine::snapshot::TableSnapshot;
///
/// struct Folder;
///
/// impl AIOpponent for Folder {
///     fn get_action(&self, _snapshot: &TableSnapshot, _seat: SeatId) -> PlayerAction {
///         PlayerAction::Fold
///     }
///
///     fn name(&self) -> &str {
///         "Folder"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Chooses an action for `seat`. The snapshot should be taken with
    /// `seat` as the viewer so that hole cards and legal options are present.
    fn get_action(&self, snapshot: &TableSnapshot, seat: SeatId) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Looks an opponent up by name; `None` for names not in [`AI_NAMES`].
///
/// ```rust
/// use elemental_ai::create_ai;
///
/// assert_eq!(create_ai("baseline").unwrap().name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(name: &str) -> Option<Box<dyn AIOpponent>> {
    match name.to_ascii_lowercase().as_str() {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "passive" => Some(Box::new(passive::PassiveAI)),
        _ => None,
    }
}
