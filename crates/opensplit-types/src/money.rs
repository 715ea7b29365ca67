//! Money semantics shared by every settlement pass.
//!
//! All amounts are `f64`. Equal-split shares come from repeated division,
//! so zero/equality checks never use exact comparison — they use the
//! absolute [`EPSILON`] tolerance. Rounding happens only at the point a
//! [`Debt`](crate::Debt) or [`Transaction`](crate::Transaction) is emitted;
//! intermediate balances accumulate at full precision.

/// Absolute tolerance under which an amount counts as zero.
pub const EPSILON: f64 = 0.01;

/// Round to 2 decimal places. Emitted amounts are always positive, so
/// `f64::round` gives half-up behavior here.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Whether a balance is settled (within [`EPSILON`] of zero).
#[must_use]
pub fn is_settled(amount: f64) -> bool {
    amount.abs() <= EPSILON
}

/// Whole cents for an amount, for hashing and exact comparisons.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
