//! Error types for the emission engine.

use thiserror::Error;

use crate::{ActivityType, UnknownActivityType};

/// Errors raised at the emission model boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmissionError {
    /// The activity type is outside the closed set or missing from the factor table.
    #[error(transparent)]
    UnknownActivityType(#[from] UnknownActivityType),

    /// The logged quantity is negative, NaN or infinite.
    #[error("invalid quantity for {activity_type}: {value} (must be finite and non-negative)")]
    InvalidQuantity {
        activity_type: ActivityType,
        value: f64,
    },

    /// A custom factor table is incomplete, duplicated or holds a non-positive factor.
    #[error("invalid emission factor table: {0}")]
    InvalidFactorTable(String),
}

/// Errors parsing caller-supplied calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),
}
