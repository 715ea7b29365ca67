//! Error types for the OpenSplit workspace.
//!
//! All errors use the `OS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Participant / roster errors
//! - 2xx: Expense recording errors
//! - 6xx: Settlement verification errors
//!
//! The settlement computation itself is total and never returns an error;
//! the 6xx group is raised only by the post-settlement invariant checks.

use thiserror::Error;

use crate::Participant;

/// Central error enum for all OpenSplit operations.
#[derive(Debug, Error)]
pub enum OpensplitError {
    // =================================================================
    // Participant / Roster Errors (1xx)
    // =================================================================
    /// A participant with this name is already on the roster.
    #[error("OS_ERR_100: Participant already exists: {0}")]
    DuplicateParticipant(Participant),

    /// The participant name was empty after trimming.
    #[error("OS_ERR_101: Participant name is empty")]
    EmptyParticipantName,

    /// The named participant is not on the roster.
    #[error("OS_ERR_102: Unknown participant: {0}")]
    UnknownParticipant(Participant),

    /// Removing would leave fewer participants than expenses can be split
    /// between.
    #[error("OS_ERR_103: Roster cannot shrink below {min} participants")]
    RosterTooSmall { min: usize },

    // =================================================================
    // Expense Errors (2xx)
    // =================================================================
    /// The expense amount was zero, negative, or not finite.
    #[error("OS_ERR_200: Invalid expense amount: {amount}")]
    InvalidAmount { amount: f64 },

    /// The expense description was empty after trimming.
    #[error("OS_ERR_201: Expense description is empty")]
    EmptyDescription,

    /// No participants were left to split the expense between.
    #[error("OS_ERR_202: Expense has no split participants")]
    EmptySplit,

    /// Custom shares do not add up to the expense amount.
    #[error("OS_ERR_203: Split total {split_total} does not match expense amount {amount}")]
    SplitMismatch { split_total: f64, amount: f64 },

    // =================================================================
    // Settlement Verification Errors (6xx)
    // =================================================================
    /// Balances do not sum to zero — money was created or destroyed.
    #[error("OS_ERR_600: Conservation violation: balances sum to {sum}")]
    ConservationViolation { sum: f64 },

    /// Applying the transaction plan leaves a participant unsettled.
    #[error("OS_ERR_601: Plan leaves {participant} with residual balance {residual}")]
    UnsettledResidual {
        participant: Participant,
        residual: f64,
    },

    /// A plan entry is structurally invalid (self-payment, non-positive
    /// amount, or too many transactions).
    #[error("OS_ERR_602: Malformed settlement plan: {reason}")]
    MalformedPlan { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OpensplitError>;
