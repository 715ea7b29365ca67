//! The settlement operation.
//!
//! Pure function of its inputs: no state between calls, no I/O, total
//! over any finite expense/participant lists. Malformed input (splits
//! that do not sum to the amount, negative shares) is not validated here
//! — the result reflects it faithfully. Validation belongs to the caller
//! recording the expenses.

use opensplit_types::{Expense, Participant, SettlementResult};

use crate::balance::compute_balances;
use crate::netting::net_original_debts;
use crate::plan::build_plan;

/// Compute balances, netted original debts, and the minimal transaction
/// plan for an expense history.
///
/// `participants` should name everyone expected in the output; names that
/// only appear inside expense splits are included as well. With no
/// expenses, every roster participant balances at zero; with no roster
/// either, the result is fully empty.
#[must_use]
pub fn settle(expenses: &[Expense], participants: &[Participant]) -> SettlementResult {
    let original_debts = net_original_debts(expenses);
    let book = compute_balances(expenses, participants);
    let transactions = build_plan(&book);

    tracing::debug!(
        expenses = expenses.len(),
        participants = book.len(),
        transactions = transactions.len(),
        original_debts = original_debts.len(),
        "settlement computed"
    );

    SettlementResult {
        transactions,
        balances: book.into_balances(),
        original_debts,
    }
}
