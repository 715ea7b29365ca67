//! Settlement output types.
//!
//! A [`SettlementResult`] is the complete, immutable output of one engine
//! invocation. `original_debts` and `transactions` are independent views:
//! the former records who originally owed whom after pairwise netting (for
//! transparency), the latter is the minimal plan that actually settles the
//! group. They do not enumerate the same pairs in general.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Participant;

/// Net position per participant. Positive = is owed money (creditor),
/// negative = owes money (debtor).
pub type Balances = HashMap<Participant, f64>;

/// A directed, netted pairwise obligation derived from raw expense splits.
/// `amount` is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub from: Participant,
    pub to: Participant,
    pub amount: f64,
}

impl std::fmt::Display for Debt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} owes {} {:.2}", self.from, self.to, self.amount)
    }
}

/// One instruction in the minimal settlement plan. `amount` is always
/// positive; `from` and `to` carry balances of opposite sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub from: Participant,
    pub to: Participant,
    pub amount: f64,
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pays {} {:.2}", self.from, self.to, self.amount)
    }
}

/// Complete output of one settlement computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Minimal set of payments that zeroes every balance.
    pub transactions: Vec<Transaction>,
    /// Full-precision net position per participant.
    pub balances: Balances,
    /// Netted pairwise obligations, in first-seen-pair order.
    pub original_debts: Vec<Debt>,
}

impl SettlementResult {
    /// The result for no expenses and no participants.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transactions: Vec::new(),
            balances: Balances::new(),
            original_debts: Vec::new(),
        }
    }

    /// Net position of `person`, zero if unknown.
    #[must_use]
    pub fn balance_of(&self, person: &Participant) -> f64 {
        self.balances.get(person).copied().unwrap_or(0.0)
    }

    /// Whether nothing is owed by anyone.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transactions.is_empty()
    }
}
