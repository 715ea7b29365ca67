//! Pass 3 — minimal transaction plan.
//!
//! Greedy two-pointer sweep over the balances sorted ascending: `i` walks
//! debtors from the most negative, `j` walks creditors from the most
//! positive. Each exchange moves `min(|debt|, credit)`, which fully zeroes
//! at least one of the two parties — that is what makes the plan minimal
//! in transaction count, emitting at most P−1 transactions.
//!
//! Balances already within the tolerance are treated as settled and never
//! enter the sweep. The sort is stable, so equal balances keep their
//! first-touch order and the plan is deterministic.

use opensplit_types::Transaction;
use opensplit_types::money::{EPSILON, is_settled, round_to_cents};

use crate::balance::BalanceBook;

/// Build the minimal settlement plan from computed balances.
#[must_use]
pub fn build_plan(book: &BalanceBook) -> Vec<Transaction> {
    let mut people: Vec<_> = book
        .in_first_touch_order()
        .into_iter()
        .filter(|(_, balance)| !is_settled(*balance))
        .collect();
    people.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut transactions: Vec<Transaction> = Vec::new();
    if people.is_empty() {
        return transactions;
    }

    let mut i = 0;
    let mut j = people.len() - 1;

    while i < j {
        // Debtor balance is negative, creditor balance positive.
        let amount = people[i].1.abs().min(people[j].1);

        if amount > EPSILON {
            transactions.push(Transaction {
                from: people[i].0.clone(),
                to: people[j].0.clone(),
                amount: round_to_cents(amount),
            });
            // Adjust at full precision; rounding applies to the emitted
            // amount only.
            people[i].1 += amount;
            people[j].1 -= amount;
        }

        if people[i].1.abs() < EPSILON {
            i += 1;
        }
        if people[j].1.abs() < EPSILON {
            j -= 1;
        }
    }

    transactions
}

#[cfg(test)]
mod tests {
    use opensplit_types::{Expense, Participant};

    use super::*;
    use crate::balance::compute_balances;

    fn p(name: &str) -> Participant {
        Participant::from(name)
    }

    fn plan_for(expenses: &[Expense], roster: &[&str]) -> Vec<Transaction> {
        let roster: Vec<Participant> = roster.iter().map(|name| p(name)).collect();
        build_plan(&compute_balances(expenses, &roster))
    }

    #[test]
    fn settled_group_needs_no_transactions() {
        assert!(plan_for(&[], &["Alice", "Bob"]).is_empty());
    }

    #[test]
    fn single_debtor_single_creditor() {
        let expenses = vec![Expense::dummy_equal("Alice", 100.0, &["Alice", "Bob"])];
        let plan = plan_for(&expenses, &["Alice", "Bob"]);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].from, p("Bob"));
        assert_eq!(plan[0].to, p("Alice"));
        assert_eq!(plan[0].amount, 50.0);
    }

    #[test]
    fn two_debtors_pay_the_sole_creditor() {
        let expenses = vec![Expense::dummy_equal("Alice", 90.0, &["Alice", "Bob", "Carol"])];
        let plan = plan_for(&expenses, &["Alice", "Bob", "Carol"]);
        assert_eq!(plan.len(), 2);
        for tx in &plan {
            assert_eq!(tx.to, p("Alice"));
            assert_eq!(tx.amount, 30.0);
        }
        // Equal debtors keep first-touch (roster) order.
        assert_eq!(plan[0].from, p("Bob"));
        assert_eq!(plan[1].from, p("Carol"));
    }

    #[test]
    fn chain_of_debts_collapses() {
        // Bob owes Alice 30, Carol owes Bob 30: net is Carol -> Alice.
        let expenses = vec![
            Expense::dummy_custom("Alice", &[("Bob", 30.0)]),
            Expense::dummy_custom("Bob", &[("Carol", 30.0)]),
        ];
        let plan = plan_for(&expenses, &["Alice", "Bob", "Carol"]);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].from, p("Carol"));
        assert_eq!(plan[0].to, p("Alice"));
        assert_eq!(plan[0].amount, 30.0);
    }

    #[test]
    fn largest_debtor_pays_largest_creditor_first() {
        let expenses = vec![
            Expense::dummy_custom("Alice", &[("Carol", 60.0)]),
            Expense::dummy_custom("Bob", &[("Carol", 10.0)]),
        ];
        let plan = plan_for(&expenses, &["Alice", "Bob", "Carol"]);
        // Carol at -70 pays Alice (+60) then Bob (+10).
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].from, p("Carol"));
        assert_eq!(plan[0].to, p("Alice"));
        assert_eq!(plan[0].amount, 60.0);
        assert_eq!(plan[1].to, p("Bob"));
        assert_eq!(plan[1].amount, 10.0);
    }

    #[test]
    fn sub_tolerance_balances_never_enter_the_sweep() {
        let expenses = vec![Expense::dummy_custom("Alice", &[("Bob", 0.005)])];
        assert!(plan_for(&expenses, &["Alice", "Bob"]).is_empty());
    }

    #[test]
    fn emitted_amounts_are_cent_rounded() {
        let expenses = vec![Expense::dummy_equal("Alice", 100.0, &["Alice", "Bob", "Carol"])];
        let plan = plan_for(&expenses, &["Alice", "Bob", "Carol"]);
        assert_eq!(plan.len(), 2);
        for tx in plan {
            assert_eq!(tx.amount, 33.33);
        }
    }

    #[test]
    fn plan_size_is_bounded_by_active_parties() {
        let expenses = vec![
            Expense::dummy_equal("Alice", 100.0, &["Alice", "Bob", "Carol", "Dave"]),
            Expense::dummy_custom("Bob", &[("Carol", 5.0)]),
        ];
        let roster = ["Alice", "Bob", "Carol", "Dave"];
        let plan = plan_for(&expenses, &roster);
        assert!(plan.len() <= roster.len() - 1);
    }
}
