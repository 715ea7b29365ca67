//! Per-participant spending totals.
//!
//! The content behind a trip report: how much each person fronted, what
//! their share of the spending was, and the resulting net. `net` agrees
//! with the engine's balance for any book whose splits sum to their
//! amounts — which the ledger enforces at recording time.

use serde::{Deserialize, Serialize};

use opensplit_types::{Expense, Participant};

/// Totals for one participant, at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub participant: Participant,
    /// Total fronted as payer.
    pub paid: f64,
    /// Total owed across all splits (own shares included).
    pub share: f64,
    /// `paid - share`: positive means the group owes this person.
    pub net: f64,
}

/// Summarize an expense history per participant, in roster order.
#[must_use]
pub fn summarize(expenses: &[Expense], participants: &[Participant]) -> Vec<ParticipantSummary> {
    participants
        .iter()
        .map(|person| {
            let paid: f64 = expenses
                .iter()
                .filter(|expense| expense.payer == *person)
                .map(|expense| expense.amount)
                .sum();
            let share: f64 = expenses.iter().map(|expense| expense.share_of(person)).sum();
            ParticipantSummary {
                participant: person.clone(),
                paid,
                share,
                net: paid - share,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use opensplit_types::money::EPSILON;

    use super::*;

    fn p(name: &str) -> Participant {
        Participant::from(name)
    }

    #[test]
    fn empty_history_all_zero() {
        let summaries = summarize(&[], &[p("Alice"), p("Bob")]);
        assert_eq!(summaries.len(), 2);
        for s in summaries {
            assert_eq!(s.paid, 0.0);
            assert_eq!(s.share, 0.0);
            assert_eq!(s.net, 0.0);
        }
    }

    #[test]
    fn paid_and_share_totals() {
        let expenses = vec![
            Expense::dummy_equal("Alice", 90.0, &["Alice", "Bob", "Carol"]),
            Expense::dummy_custom("Bob", &[("Alice", 12.0), ("Carol", 8.0)]),
        ];
        let roster = [p("Alice"), p("Bob"), p("Carol")];
        let summaries = summarize(&expenses, &roster);

        let alice = &summaries[0];
        assert_eq!(alice.paid, 90.0);
        assert_eq!(alice.share, 42.0);
        assert_eq!(alice.net, 48.0);

        let bob = &summaries[1];
        assert_eq!(bob.paid, 20.0);
        assert_eq!(bob.share, 30.0);
        assert_eq!(bob.net, -10.0);
    }

    #[test]
    fn net_matches_engine_balance() {
        let expenses = vec![
            Expense::dummy_equal("Alice", 75.0, &["Alice", "Bob", "Carol"]),
            Expense::dummy_custom("Carol", &[("Alice", 10.0), ("Bob", 14.0)]),
        ];
        let roster = [p("Alice"), p("Bob"), p("Carol")];
        let result = opensplit_engine::settle(&expenses, &roster);

        for summary in summarize(&expenses, &roster) {
            let balance = result.balance_of(&summary.participant);
            assert!(
                (summary.net - balance).abs() <= EPSILON,
                "{}: net {} vs balance {}",
                summary.participant,
                summary.net,
                balance
            );
        }
    }

    #[test]
    fn summary_keeps_roster_order() {
        let expenses = vec![Expense::dummy_equal("Carol", 30.0, &["Alice", "Carol"])];
        let roster = [p("Carol"), p("Alice"), p("Bob")];
        let names: Vec<String> = summarize(&expenses, &roster)
            .into_iter()
            .map(|s| s.participant.0)
            .collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }
}
