//! Expense types.
//!
//! An [`Expense`] records who paid, how much, and how the amount is split
//! across participants. The settlement engine consumes only `payer` and
//! `splits`; everything else is bookkeeping for the ledger. Callers are
//! expected to keep `sum(splits.values()) ≈ amount` — the engine never
//! validates this, the ledger does at recording time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, Participant};

/// How the splits of an expense were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitMode {
    /// Amount divided evenly across the involved participants.
    Equal,
    /// Caller-supplied per-participant shares.
    Custom,
}

impl std::fmt::Display for SplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "EQUAL"),
            Self::Custom => write!(f, "CUSTOM"),
        }
    }
}

/// One shared expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Who fronted the money.
    pub payer: Participant,
    /// Total amount paid.
    pub amount: f64,
    pub description: String,
    /// Everyone involved in this expense (payer included if they owe a share).
    pub participants: Vec<Participant>,
    /// Per-participant share of the amount. A self-share (payer owing
    /// themselves) is legal and contributes nothing to settlement.
    pub splits: HashMap<Participant, f64>,
    pub split_mode: SplitMode,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// The share owed by `person` for this expense, zero if uninvolved.
    #[must_use]
    pub fn share_of(&self, person: &Participant) -> f64 {
        self.splits.get(person).copied().unwrap_or(0.0)
    }

    /// Whether `person` appears in this expense as payer or split member.
    #[must_use]
    pub fn involves(&self, person: &Participant) -> bool {
        self.payer == *person || self.participants.contains(person)
    }

    /// Sum of all split shares at full precision.
    #[must_use]
    pub fn split_total(&self) -> f64 {
        self.splits.values().sum()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    /// Expense split evenly across `among`, at full precision.
    pub fn dummy_equal(payer: &str, amount: f64, among: &[&str]) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let share = amount / among.len() as f64;
        let participants: Vec<Participant> = among.iter().map(|p| Participant::from(*p)).collect();
        let splits = participants.iter().map(|p| (p.clone(), share)).collect();
        Self {
            id: ExpenseId::new(),
            payer: Participant::from(payer),
            amount,
            description: "dummy".to_string(),
            participants,
            splits,
            split_mode: SplitMode::Equal,
            created_at: Utc::now(),
        }
    }

    /// Expense with explicit shares; the amount is their sum.
    pub fn dummy_custom(payer: &str, shares: &[(&str, f64)]) -> Self {
        let participants: Vec<Participant> =
            shares.iter().map(|(p, _)| Participant::from(*p)).collect();
        let splits: HashMap<Participant, f64> = shares
            .iter()
            .map(|(p, a)| (Participant::from(*p), *a))
            .collect();
        let amount = splits.values().sum();
        Self {
            id: ExpenseId::new(),
            payer: Participant::from(payer),
            amount,
            description: "dummy".to_string(),
            participants,
            splits,
            split_mode: SplitMode::Custom,
            created_at: Utc::now(),
        }
    }
}
