//! Pass 2 — original debt netting.
//!
//! Independent of the balance pass: this records *who originally owed
//! whom* before any multi-party offsetting. Raw per-pair amounts are
//! accumulated from every split entry, then mutual debts between a pair
//! are netted into a single direction (the party owing the larger raw
//! amount owes the difference). Emission follows first-seen-pair order.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use opensplit_types::money::{EPSILON, round_to_cents};
use opensplit_types::{Debt, Expense, Participant};

use crate::balance::sorted_splits;

type Pair = (Participant, Participant);

/// Accumulate and net the pairwise debt graph of an expense history.
///
/// Entries with a zero or negative share, and self-shares, contribute
/// nothing. Amounts are rounded to cents only at emission; a mutual pair
/// whose difference stays within the tolerance nets to nothing.
#[must_use]
pub fn net_original_debts(expenses: &[Expense]) -> Vec<Debt> {
    // Raw accumulation per directed pair, tracking first-seen order.
    let mut raw: HashMap<Pair, f64> = HashMap::new();
    let mut first_seen: Vec<Pair> = Vec::new();

    for expense in expenses {
        for (person, owed) in sorted_splits(expense) {
            if *person == expense.payer || owed <= 0.0 {
                continue;
            }
            let key = (person.clone(), expense.payer.clone());
            match raw.entry(key) {
                Entry::Occupied(mut slot) => *slot.get_mut() += owed,
                Entry::Vacant(slot) => {
                    first_seen.push(slot.key().clone());
                    slot.insert(owed);
                }
            }
        }
    }

    // Net mutual debts, walking pairs in first-seen order.
    let mut processed: HashSet<Pair> = HashSet::new();
    let mut netted: Vec<Debt> = Vec::new();

    for key in &first_seen {
        if processed.contains(key) {
            continue;
        }
        let (from, to) = key;
        let Some(&amount) = raw.get(key) else {
            continue;
        };

        let reverse = (to.clone(), from.clone());
        if let Some(&reverse_amount) = raw.get(&reverse) {
            let net = (amount - reverse_amount).abs();
            if net > EPSILON {
                let (net_from, net_to) = if amount > reverse_amount {
                    (from, to)
                } else {
                    (to, from)
                };
                netted.push(Debt {
                    from: net_from.clone(),
                    to: net_to.clone(),
                    amount: round_to_cents(net),
                });
            }
            // Both directions are spoken for even when the net is zero.
            processed.insert(key.clone());
            processed.insert(reverse);
        } else {
            netted.push(Debt {
                from: from.clone(),
                to: to.clone(),
                amount: round_to_cents(amount),
            });
            processed.insert(key.clone());
        }
    }

    netted
}
