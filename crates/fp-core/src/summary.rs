//! The figures shown on the summary view, recomputed on demand.

use chrono::NaiveDate;
use serde::Serialize;

use crate::activity::DatedEmission;
use crate::aggregate::{
    CategoryBreakdown, YearMonth, activities_on, category_breakdown, daily_total, monthly_total,
};
use crate::status::{StatusReport, classify};
use crate::suggest::{Suggestion, suggest};

/// Fixed divisor for the daily average over a month.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Number of activities listed in the recent view.
pub const RECENT_LIMIT: usize = 10;

/// Aggregates for one day and its month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSnapshot {
    pub day: NaiveDate,
    pub month: YearMonth,
    pub daily_total: f64,
    pub monthly_total: f64,
    /// Monthly total spread over [`DAYS_PER_MONTH`].
    pub daily_average: f64,
    /// Breakdown of the day's activities.
    pub category_breakdown: CategoryBreakdown,
    pub status: StatusReport,
    pub suggestions: Vec<Suggestion>,
    /// Activities on the given day.
    pub day_count: usize,
    /// Activities in the whole collection.
    pub activity_count: usize,
}

/// Builds the snapshot for `today` from the full collection.
pub fn summarize<A: DatedEmission>(activities: &[A], today: NaiveDate) -> AggregateSnapshot {
    let month = YearMonth::of(today);
    let todays = activities_on(activities, today);
    let daily = daily_total(activities, today);
    let monthly = monthly_total(activities, month);

    AggregateSnapshot {
        day: today,
        month,
        daily_total: daily,
        monthly_total: monthly,
        daily_average: monthly / DAYS_PER_MONTH,
        category_breakdown: category_breakdown(&todays),
        status: classify(daily),
        suggestions: suggest(&todays),
        day_count: todays.len(),
        activity_count: activities.len(),
    }
}

/// The first `limit` activities of an already ordered collection.
pub fn recent<A>(activities: &[A], limit: usize) -> &[A] {
    &activities[..activities.len().min(limit)]
}
