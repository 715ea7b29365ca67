//! # opensplit-engine
//!
//! Pure settlement computation for shared expenses. The single exposed
//! operation is [`settle()`] — no side effects, no I/O, no state between
//! calls.
//!
//! ```text
//! settle(&[Expense], &[Participant]) -> SettlementResult
//! ```
//!
//! ## The three passes
//!
//! 1. **Balances** ([`balance`]): net position per participant from raw
//!    splits.
//! 2. **Debt netting** ([`netting`]): per-pair obligations with mutual
//!    debts netted, independent of pass 1.
//! 3. **Transaction plan** ([`plan`]): greedy two-pointer sweep over the
//!    sorted balances — each step fully zeroes at least one party, which
//!    makes the plan minimal in transaction count.
//!
//! [`conservation`] checks the output invariants after the fact;
//! [`digest`] produces a deterministic hash of a result so independent
//! callers can confirm they computed the same settlement.

pub mod balance;
pub mod conservation;
pub mod digest;
pub mod netting;
pub mod plan;
pub mod settle;

pub use balance::{BalanceBook, compute_balances};
pub use digest::{digest_hex, settlement_digest, verify_settlement_digest};
pub use netting::net_original_debts;
pub use plan::build_plan;
pub use settle::settle;
