//! Settlement invariant checks.
//!
//! Invariants every result must satisfy:
//!
//! ```text
//! Σ balances ≈ 0                      (money is conserved)
//! balances + plan  →  all ≈ 0         (the plan actually settles)
//! no self-payments, amounts > 0,      (the plan is well-formed,
//! |plan| ≤ active parties − 1          and minimal-bounded)
//! ```
//!
//! The engine cannot violate these on well-formed input, but input is
//! never validated — so callers that accept external expense data can
//! run [`verify`] on the output and decide what to do with a violation.
//! Paying a transaction raises the payer's (negative) balance and lowers
//! the payee's, mirroring the plan pass's own in-place adjustment.

use opensplit_types::money::{EPSILON, is_settled};
use opensplit_types::{Balances, OpensplitError, Result, SettlementResult, Transaction};

/// Check that balances sum to zero within the tolerance.
///
/// # Errors
/// Returns [`OpensplitError::ConservationViolation`] if money was created
/// or destroyed.
pub fn check_conservation(balances: &Balances) -> Result<()> {
    let sum: f64 = balances.values().sum();
    if !is_settled(sum) {
        return Err(OpensplitError::ConservationViolation { sum });
    }
    Ok(())
}

/// Check that applying every transaction drives every balance to zero
/// within the tolerance.
///
/// # Errors
/// Returns [`OpensplitError::UnsettledResidual`] for the first participant
/// left unsettled.
pub fn check_settles(balances: &Balances, transactions: &[Transaction]) -> Result<()> {
    let mut residual = balances.clone();
    for tx in transactions {
        *residual.entry(tx.from.clone()).or_insert(0.0) += tx.amount;
        *residual.entry(tx.to.clone()).or_insert(0.0) -= tx.amount;
    }

    let mut entries: Vec<_> = residual.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (participant, balance) in entries {
        if !is_settled(balance) {
            return Err(OpensplitError::UnsettledResidual {
                participant,
                residual: balance,
            });
        }
    }
    Ok(())
}

/// Check structural plan invariants: positive amounts, no self-payments
/// (in transactions and debts alike), and the minimality bound
/// `|transactions| ≤ max(0, active − 1)` where active counts balances
/// beyond the tolerance.
///
/// # Errors
/// Returns [`OpensplitError::MalformedPlan`] naming the first violation.
pub fn check_plan_shape(result: &SettlementResult) -> Result<()> {
    for tx in &result.transactions {
        if tx.from == tx.to {
            return Err(OpensplitError::MalformedPlan {
                reason: format!("self-payment by {}", tx.from),
            });
        }
        if tx.amount <= 0.0 {
            return Err(OpensplitError::MalformedPlan {
                reason: format!("non-positive transaction amount {}", tx.amount),
            });
        }
    }

    for debt in &result.original_debts {
        if debt.from == debt.to {
            return Err(OpensplitError::MalformedPlan {
                reason: format!("self-debt by {}", debt.from),
            });
        }
        if debt.amount <= 0.0 {
            return Err(OpensplitError::MalformedPlan {
                reason: format!("non-positive debt amount {}", debt.amount),
            });
        }
    }

    let active = result
        .balances
        .values()
        .filter(|balance| balance.abs() > EPSILON)
        .count();
    if result.transactions.len() > active.saturating_sub(1) {
        return Err(OpensplitError::MalformedPlan {
            reason: format!(
                "{} transactions for {} active parties",
                result.transactions.len(),
                active
            ),
        });
    }

    Ok(())
}

/// Run every invariant check against a settlement result.
///
/// # Errors
/// Propagates the first failing check.
pub fn verify(result: &SettlementResult) -> Result<()> {
    check_plan_shape(result)?;
    check_conservation(&result.balances)?;
    check_settles(&result.balances, &result.transactions)
}
