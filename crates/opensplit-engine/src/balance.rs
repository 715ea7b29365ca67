//! Pass 1 — net balance computation.
//!
//! Every roster participant starts at zero. For each expense, each split
//! entry `(person, owed)` with `person != payer` moves `owed` from
//! `person` to the payer. A self-share (payer owing themselves) is a
//! no-op. Names that appear only inside splits are not dropped: they get
//! a balance entry the first time a split touches them, union'd with the
//! supplied roster.
//!
//! Balances accumulate at full precision — rounding happens only when a
//! debt or transaction is emitted downstream.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use opensplit_types::{Balances, Expense, Participant};

/// Balances plus the order entries were first touched in.
///
/// The order is what makes the downstream plan deterministic: split maps
/// have no iteration order of their own, so split entries are walked
/// sorted by name, and first-touch order (roster first, then vivified
/// names) is recorded here for the plan's stable sort to preserve.
#[derive(Debug, Default)]
pub struct BalanceBook {
    amounts: HashMap<Participant, f64>,
    order: Vec<Participant>,
}

impl BalanceBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `person` has an entry, starting at zero.
    pub fn touch(&mut self, person: &Participant) {
        if let Entry::Vacant(slot) = self.amounts.entry(person.clone()) {
            slot.insert(0.0);
            self.order.push(person.clone());
        }
    }

    /// Add `delta` to the balance of `person`, creating the entry if needed.
    pub fn adjust(&mut self, person: &Participant, delta: f64) {
        match self.amounts.entry(person.clone()) {
            Entry::Occupied(mut slot) => *slot.get_mut() += delta,
            Entry::Vacant(slot) => {
                slot.insert(delta);
                self.order.push(person.clone());
            }
        }
    }

    /// Balance of `person`, zero if untouched.
    #[must_use]
    pub fn get(&self, person: &Participant) -> f64 {
        self.amounts.get(person).copied().unwrap_or(0.0)
    }

    /// Number of participants with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Entries in the order they were first touched.
    #[must_use]
    pub fn in_first_touch_order(&self) -> Vec<(Participant, f64)> {
        self.order
            .iter()
            .map(|p| (p.clone(), self.get(p)))
            .collect()
    }

    /// Consume the book, keeping only the balance map.
    #[must_use]
    pub fn into_balances(self) -> Balances {
        self.amounts
    }
}

/// Split entries of an expense, sorted by participant name.
///
/// Split maps carry no iteration order, so every pass walks them in
/// sorted order to keep the whole computation deterministic.
pub(crate) fn sorted_splits(expense: &Expense) -> Vec<(&Participant, f64)> {
    let mut entries: Vec<(&Participant, f64)> = expense
        .splits
        .iter()
        .map(|(person, owed)| (person, *owed))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Compute net balances for the whole expense history.
#[must_use]
pub fn compute_balances(expenses: &[Expense], participants: &[Participant]) -> BalanceBook {
    let mut book = BalanceBook::new();
    for person in participants {
        book.touch(person);
    }

    for expense in expenses {
        for (person, owed) in sorted_splits(expense) {
            if *person != expense.payer {
                book.adjust(person, -owed);
                book.adjust(&expense.payer, owed);
            }
        }
    }

    book
}
