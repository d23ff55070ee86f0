//! # elemental-engine: Elemental Poker Engine Core
//!
//! A deterministic engine for four-seat elemental poker: two hole cards per
//! seat, one arena reveal and three power reveals, five betting stages. Hand
//! strength is the sum of both cards after the elemental bonuses.
//!
//! ## Core Modules
//!
//! - [`cards`] - Elements, hole cards and reveal cards
//! - [`elements`] - The element bonus table and effective card values
//! - [`deck`] - Seeded deck shuffling with ChaCha20
//! - [`player`] - Seats, seat ids and player actions
//! - [`game`] - Match state, stages, table configuration and hand setup
//! - [`rules`] - Betting validation and legal-action summaries
//! - [`action`] - Turn preconditions and chip bookkeeping for one action
//! - [`turn`] - Turn order and betting-round completion
//! - [`showdown`] - Stage transitions and settlement
//! - [`pot`] - Main pot / side pot layering and payout
//! - [`snapshot`] - Read-only table views for renderers and AI
//! - [`engine`] - The public façade that owns a table
//! - [`logger`] - Hand records and JSONL hand histories
//! - [`errors`] - Rejection reasons
//!
//! ## Quick Start
//!
//! ```rust
//! use elemental_engine::engine::Engine;
//! use elemental_engine::game::TableConfig;
//! use elemental_engine::player::PlayerAction;
//!
//! let mut engine = Engine::with_stacks(4, 1000, TableConfig::default(), Some(42)).unwrap();
//! engine.start_hand().unwrap();
//!
//! while let Some(seat) = engine.current_seat() {
//!     let legal = engine.legal_actions(seat).unwrap();
//!     let action = if legal.can_check { PlayerAction::Check } else { PlayerAction::Call };
//!     engine.apply(seat, action).unwrap();
//! }
//! assert!(engine.is_hand_complete());
//! ```
//!
//! ## Element Bonuses
//!
//! ```rust
//! use elemental_engine::cards::{Card, Element, RevealCard};
//! use elemental_engine::elements::effective_value;
//!
//! let card = Card::new(Element::Fire, 7);
//! let arena = RevealCard::Arena { element: Element::Water };
//! assert_eq!(effective_value(&card, Some(&arena), &[]), 3);
//! ```

pub mod action;
pub mod cards;
pub mod deck;
pub mod elements;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod showdown;
pub mod snapshot;
pub mod turn;
