//! Day, month and category aggregation over activity collections.
//!
//! Every function recomputes from the collection it is given; nothing is
//! cached between calls.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::activity::{DatedEmission, Emission};
use crate::category::{Category, category_for};
use crate::CalendarError;

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(s.to_string()))
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns the month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    /// Whether `date` falls within this month. The day is ignored.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = format!("{}-01", s.trim());
        NaiveDate::parse_from_str(&first, "%Y-%m-%d")
            .map(Self::of)
            .map_err(|_| CalendarError::InvalidMonth(s.to_string()))
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Activities logged on `day`, in input order.
pub fn activities_on<A: DatedEmission>(activities: &[A], day: NaiveDate) -> Vec<&A> {
    activities
        .iter()
        .filter(|a| a.activity_date() == day)
        .collect()
}

/// Activities logged in `month`, in input order.
pub fn activities_in_month<A: DatedEmission>(activities: &[A], month: YearMonth) -> Vec<&A> {
    activities
        .iter()
        .filter(|a| month.contains(a.activity_date()))
        .collect()
}

/// Sum of carbon over activities logged on `day`.
pub fn daily_total<A: DatedEmission>(activities: &[A], day: NaiveDate) -> f64 {
    activities
        .iter()
        .filter(|a| a.activity_date() == day)
        .map(Emission::carbon_kg)
        .fold(0.0, |acc, kg| acc + kg)
}

/// Sum of carbon over activities logged in `month`.
pub fn monthly_total<A: DatedEmission>(activities: &[A], month: YearMonth) -> f64 {
    activities
        .iter()
        .filter(|a| month.contains(a.activity_date()))
        .map(Emission::carbon_kg)
        .fold(0.0, |acc, kg| acc + kg)
}

/// Share of `total` represented by `category_mass`, in percent.
///
/// A zero total yields zero for every category.
pub fn percentage_of(category_mass: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (category_mass / total * 100.0).clamp(0.0, 100.0)
}

/// Carbon mass per category.
///
/// Categories without activity are absent; [`CategoryBreakdown::get`] reads
/// them as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryBreakdown {
    totals: BTreeMap<Category, f64>,
}

/// One category's line in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub carbon_kg: f64,
    pub percentage: f64,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> f64 {
        self.totals.get(&category).copied().unwrap_or(0.0)
    }

    /// Sum across all categories.
    pub fn total(&self) -> f64 {
        self.totals.values().fold(0.0, |acc, kg| acc + kg)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Every category in [`Category::ALL`] order, zero-filled, with its
    /// percentage of `total`.
    pub fn shares(&self, total: f64) -> Vec<CategoryShare> {
        Category::ALL
            .iter()
            .map(|&category| {
                let carbon_kg = self.get(category);
                CategoryShare {
                    category,
                    carbon_kg,
                    percentage: percentage_of(carbon_kg, total),
                }
            })
            .collect()
    }
}

/// Sums carbon by category over the given activities.
pub fn category_breakdown<A: Emission>(activities: &[A]) -> CategoryBreakdown {
    let mut totals = BTreeMap::new();
    for activity in activities {
        *totals
            .entry(category_for(activity.activity_type()))
            .or_insert(0.0) += activity.carbon_kg();
    }
    CategoryBreakdown { totals }
}
