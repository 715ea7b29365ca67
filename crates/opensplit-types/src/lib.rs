//! # opensplit-types
//!
//! Shared types, errors, and constants for the **OpenSplit** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Participant`], [`ExpenseId`]
//! - **Expense model**: [`Expense`], [`SplitMode`]
//! - **Settlement model**: [`Debt`], [`Transaction`], [`Balances`], [`SettlementResult`]
//! - **Money semantics**: [`money::EPSILON`], [`money::round_to_cents`]
//! - **Errors**: [`OpensplitError`] with `OS_ERR_` prefix codes
//! - **Constants**: roster limits and defaults

pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod money;
pub mod participant;
pub mod settlement;

// Re-export all primary types at crate root for ergonomic imports:
//   use opensplit_types::{Expense, Participant, SettlementResult, ...};

pub use error::*;
pub use expense::*;
pub use ids::*;
pub use participant::*;
pub use settlement::*;

// Money helpers are accessed via `opensplit_types::money::round_to_cents`
// (not re-exported to keep call sites explicit about rounding).
