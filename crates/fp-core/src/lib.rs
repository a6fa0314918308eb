//! Core domain logic for the footprint tracker.
//!
//! This crate contains the pure computations behind the tracker:
//! - Emission model: converting a logged quantity into kg CO₂
//! - Categorization: grouping activity types into reporting categories
//! - Aggregation: daily, monthly and per-category totals
//! - Status and suggestions: qualitative feedback on a day's footprint
//!
//! Nothing here performs I/O; callers pass already-fetched activities.

pub mod activity;
pub mod activity_type;
pub mod aggregate;
pub mod category;
pub mod emission;
mod error;
pub mod status;
pub mod suggest;
pub mod summary;

pub use activity::{Activity, DatedEmission, Emission, NewActivity};
pub use activity_type::{ActivityType, UnknownActivityType};
pub use aggregate::{
    CategoryBreakdown, CategoryShare, YearMonth, category_breakdown, daily_total, monthly_total,
    parse_date, percentage_of,
};
pub use category::{Category, category_for};
pub use emission::{ActivityLabel, EmissionFactorEntry, EmissionModel, StampMismatch, label_for};
pub use error::{CalendarError, EmissionError};
pub use status::{EcoStatus, StatusReport, classify};
pub use suggest::{Suggestion, suggest};
pub use summary::{AggregateSnapshot, recent, summarize};
