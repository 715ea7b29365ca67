//! The in-memory roster and expense book.

use std::collections::HashMap;

use chrono::Utc;
use opensplit_engine::conservation;
use opensplit_types::constants::MIN_PARTICIPANTS_FOR_SPLIT;
use opensplit_types::money::EPSILON;
use opensplit_types::{
    Expense, ExpenseId, OpensplitError, Participant, Result, SettlementResult, SplitMode,
};

use crate::summary::{ParticipantSummary, summarize};

/// How a recorded expense should be split.
#[derive(Debug, Clone)]
pub enum SplitSpec {
    /// Divide the amount evenly across `among` (payer included if listed;
    /// their own share settles itself).
    Equal { among: Vec<Participant> },
    /// Explicit per-participant shares. Non-positive shares are dropped;
    /// the rest must sum to the expense amount within the tolerance.
    Custom { shares: HashMap<Participant, f64> },
}

/// In-memory book of participants and shared expenses.
///
/// All mutations validate fail-closed: either the full operation applies
/// or the book is unchanged.
#[derive(Debug, Default)]
pub struct Ledger {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------
    // Roster
    // -----------------------------------------------------------------

    /// Add a participant by display name. The name is trimmed; it must be
    /// non-empty and not already on the roster.
    ///
    /// # Errors
    /// - [`OpensplitError::EmptyParticipantName`] if blank after trimming
    /// - [`OpensplitError::DuplicateParticipant`] if already present
    pub fn add_participant(&mut self, name: &str) -> Result<Participant> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(OpensplitError::EmptyParticipantName);
        }
        let person = Participant::from(trimmed);
        if self.participants.contains(&person) {
            return Err(OpensplitError::DuplicateParticipant(person));
        }
        tracing::debug!(participant = %person, "participant added");
        self.participants.push(person.clone());
        Ok(person)
    }

    /// Rename a participant, propagating the new name through every
    /// stored expense (payer, involvement list, split keys). Renaming to
    /// the current name is a no-op.
    ///
    /// # Errors
    /// - [`OpensplitError::UnknownParticipant`] if `old` is not on the roster
    /// - [`OpensplitError::EmptyParticipantName`] if `new_name` is blank
    /// - [`OpensplitError::DuplicateParticipant`] if `new_name` is taken
    pub fn rename_participant(&mut self, old: &Participant, new_name: &str) -> Result<Participant> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(OpensplitError::EmptyParticipantName);
        }
        if !self.participants.contains(old) {
            return Err(OpensplitError::UnknownParticipant(old.clone()));
        }
        let new = Participant::from(trimmed);
        if new == *old {
            return Ok(new);
        }
        if self.participants.contains(&new) {
            return Err(OpensplitError::DuplicateParticipant(new));
        }

        for person in &mut self.participants {
            if person == old {
                *person = new.clone();
            }
        }
        for expense in &mut self.expenses {
            if expense.payer == *old {
                expense.payer = new.clone();
            }
            for person in &mut expense.participants {
                if person == old {
                    *person = new.clone();
                }
            }
            if let Some(share) = expense.splits.remove(old) {
                expense.splits.insert(new.clone(), share);
            }
        }

        tracing::info!(old = %old, new = %new, "participant renamed");
        Ok(new)
    }

    /// Remove a participant. Every expense they are involved in is
    /// dropped with them; the number of dropped expenses is returned.
    /// Refused while the roster is at the minimum needed to split.
    ///
    /// # Errors
    /// - [`OpensplitError::UnknownParticipant`] if not on the roster
    /// - [`OpensplitError::RosterTooSmall`] at the roster floor
    pub fn remove_participant(&mut self, person: &Participant) -> Result<usize> {
        if !self.participants.contains(person) {
            return Err(OpensplitError::UnknownParticipant(person.clone()));
        }
        if self.participants.len() <= MIN_PARTICIPANTS_FOR_SPLIT {
            return Err(OpensplitError::RosterTooSmall {
                min: MIN_PARTICIPANTS_FOR_SPLIT,
            });
        }

        let before = self.expenses.len();
        self.expenses.retain(|expense| !expense.involves(person));
        let dropped = before - self.expenses.len();
        self.participants.retain(|p| p != person);

        tracing::info!(participant = %person, dropped, "participant removed");
        Ok(dropped)
    }

    // -----------------------------------------------------------------
    // Expenses
    // -----------------------------------------------------------------

    /// Record a shared expense.
    ///
    /// # Errors
    /// - [`OpensplitError::UnknownParticipant`] if the payer or any split
    ///   member is not on the roster
    /// - [`OpensplitError::InvalidAmount`] unless the amount is finite and
    ///   positive
    /// - [`OpensplitError::EmptyDescription`] if the description is blank
    /// - [`OpensplitError::EmptySplit`] if nobody is left to split between
    /// - [`OpensplitError::DuplicateParticipant`] if an equal split lists
    ///   someone twice
    /// - [`OpensplitError::SplitMismatch`] if custom shares do not add up
    ///   to the amount
    pub fn record_expense(
        &mut self,
        payer: &Participant,
        amount: f64,
        description: &str,
        split: SplitSpec,
    ) -> Result<ExpenseId> {
        if !self.participants.contains(payer) {
            return Err(OpensplitError::UnknownParticipant(payer.clone()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(OpensplitError::InvalidAmount { amount });
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(OpensplitError::EmptyDescription);
        }

        let (participants, splits, split_mode) = match split {
            SplitSpec::Equal { among } => {
                if among.is_empty() {
                    return Err(OpensplitError::EmptySplit);
                }
                for (idx, person) in among.iter().enumerate() {
                    if !self.participants.contains(person) {
                        return Err(OpensplitError::UnknownParticipant(person.clone()));
                    }
                    if among[..idx].contains(person) {
                        return Err(OpensplitError::DuplicateParticipant(person.clone()));
                    }
                }
                #[allow(clippy::cast_precision_loss)]
                let share = amount / among.len() as f64;
                let splits: HashMap<Participant, f64> =
                    among.iter().map(|person| (person.clone(), share)).collect();
                (among, splits, SplitMode::Equal)
            }
            SplitSpec::Custom { shares } => {
                let mut splits: HashMap<Participant, f64> = HashMap::new();
                for (person, share) in shares {
                    if share <= 0.0 {
                        continue;
                    }
                    if !self.participants.contains(&person) {
                        return Err(OpensplitError::UnknownParticipant(person));
                    }
                    splits.insert(person, share);
                }
                if splits.is_empty() {
                    return Err(OpensplitError::EmptySplit);
                }
                let split_total: f64 = splits.values().sum();
                if (split_total - amount).abs() > EPSILON {
                    return Err(OpensplitError::SplitMismatch {
                        split_total,
                        amount,
                    });
                }
                let mut participants: Vec<Participant> = splits.keys().cloned().collect();
                participants.sort();
                (participants, splits, SplitMode::Custom)
            }
        };

        let expense = Expense {
            id: ExpenseId::new(),
            payer: payer.clone(),
            amount,
            description: description.to_string(),
            participants,
            splits,
            split_mode,
            created_at: Utc::now(),
        };
        let id = expense.id;
        tracing::debug!(
            expense = %id,
            payer = %expense.payer,
            amount,
            mode = %expense.split_mode,
            "expense recorded"
        );
        self.expenses.push(expense);
        Ok(id)
    }

    // -----------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.expenses.is_empty()
    }

    /// Sum of all recorded expense amounts.
    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Per-participant paid/share/net totals, in roster order.
    #[must_use]
    pub fn summary(&self) -> Vec<ParticipantSummary> {
        summarize(&self.expenses, &self.participants)
    }

    /// Settle the book: balances, netted original debts, and the minimal
    /// transaction plan for the current expense history.
    ///
    /// The output invariants are re-checked; a violation is logged, never
    /// raised — the result still faithfully reflects the recorded data.
    #[must_use]
    pub fn settle(&self) -> SettlementResult {
        let result = opensplit_engine::settle(&self.expenses, &self.participants);
        if let Err(err) = conservation::verify(&result) {
            tracing::warn!(error = %err, "settlement violated an invariant");
        }
        result
    }
}
