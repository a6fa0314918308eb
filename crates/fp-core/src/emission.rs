//! Emission factor table and carbon calculation.
//!
//! The [`EmissionModel`] is an immutable value holding one factor per
//! [`ActivityType`]. [`EmissionModel::standard`] builds the fixed table used in
//! production; tests can build a controlled table with
//! [`EmissionModel::from_factors`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::activity::{Activity, NewActivity};
use crate::{ActivityType, EmissionError, UnknownActivityType};

/// Number of decimal places kept on a stamped carbon mass.
pub const CARBON_DECIMALS: i32 = 4;

/// Display metadata for an activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityLabel {
    pub label: &'static str,
    pub unit: &'static str,
    pub icon: &'static str,
}

/// A factor together with the display metadata of its activity type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactorEntry {
    pub activity_type: ActivityType,
    /// kg CO₂ per unit.
    pub factor: f64,
    #[serde(flatten)]
    pub display: ActivityLabel,
}

/// Returns the label, unit and icon for an activity type.
pub const fn label_for(activity_type: ActivityType) -> ActivityLabel {
    let (label, unit, icon) = match activity_type {
        ActivityType::Car => ("Car Travel", "km", "🚗"),
        ActivityType::Bike => ("Bike/Walk", "km", "🚴"),
        ActivityType::PublicTransport => ("Public Transport", "km", "🚌"),
        ActivityType::Electricity => ("Electricity", "kWh", "⚡"),
        ActivityType::VegetarianMeal => ("Vegetarian Meal", "meals", "🥗"),
        ActivityType::NonVegetarianMeal => ("Non-Veg Meal", "meals", "🍖"),
    };
    ActivityLabel { label, unit, icon }
}

const STANDARD_FACTORS: [(ActivityType, f64); 6] = [
    (ActivityType::Car, 0.21),
    (ActivityType::Bike, 0.05),
    (ActivityType::PublicTransport, 0.089),
    (ActivityType::Electricity, 0.82),
    (ActivityType::VegetarianMeal, 1.5),
    (ActivityType::NonVegetarianMeal, 3.3),
];

/// A stored carbon value that no longer matches a fresh calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StampMismatch {
    pub id: String,
    pub activity_type: ActivityType,
    pub value: f64,
    pub stored_kg: f64,
    pub expected_kg: f64,
}

/// Immutable activity type → emission factor table.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionModel {
    factors: BTreeMap<ActivityType, f64>,
}

impl Default for EmissionModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl EmissionModel {
    /// The fixed production factor table.
    pub fn standard() -> Self {
        Self {
            factors: STANDARD_FACTORS.into_iter().collect(),
        }
    }

    /// Builds a custom table.
    ///
    /// Every activity type must appear exactly once with a positive, finite factor.
    pub fn from_factors(
        factors: impl IntoIterator<Item = (ActivityType, f64)>,
    ) -> Result<Self, EmissionError> {
        let mut table = BTreeMap::new();
        for (activity_type, factor) in factors {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(EmissionError::InvalidFactorTable(format!(
                    "factor for {activity_type} must be positive, got {factor}"
                )));
            }
            if table.insert(activity_type, factor).is_some() {
                return Err(EmissionError::InvalidFactorTable(format!(
                    "duplicate factor for {activity_type}"
                )));
            }
        }
        if let Some(missing) = ActivityType::ALL.iter().find(|t| !table.contains_key(*t)) {
            return Err(EmissionError::InvalidFactorTable(format!(
                "missing factor for {missing}"
            )));
        }
        Ok(Self { factors: table })
    }

    /// Returns the kg CO₂ per unit for an activity type.
    pub fn factor_for(&self, activity_type: ActivityType) -> Result<f64, EmissionError> {
        self.factors
            .get(&activity_type)
            .copied()
            .ok_or_else(|| UnknownActivityType(activity_type.to_string()).into())
    }

    /// Returns the full table entry for an activity type.
    pub fn entry(&self, activity_type: ActivityType) -> Result<EmissionFactorEntry, EmissionError> {
        Ok(EmissionFactorEntry {
            activity_type,
            factor: self.factor_for(activity_type)?,
            display: label_for(activity_type),
        })
    }

    /// Lists every entry in [`ActivityType::ALL`] order.
    pub fn entries(&self) -> Result<Vec<EmissionFactorEntry>, EmissionError> {
        ActivityType::ALL.iter().map(|t| self.entry(*t)).collect()
    }

    /// Computes the carbon mass for a quantity, rounded to four decimals.
    ///
    /// Negative and non-finite quantities are rejected.
    pub fn calculate_carbon(
        &self,
        activity_type: ActivityType,
        value: f64,
    ) -> Result<f64, EmissionError> {
        let factor = self.factor_for(activity_type)?;
        if !value.is_finite() || value < 0.0 {
            return Err(EmissionError::InvalidQuantity {
                activity_type,
                value,
            });
        }
        Ok(round_carbon(factor * value))
    }

    /// Stamps a not-yet-persisted activity with its carbon mass.
    pub fn new_activity(
        &self,
        activity_type: ActivityType,
        value: f64,
        activity_date: NaiveDate,
    ) -> Result<NewActivity, EmissionError> {
        let carbon_kg = self.calculate_carbon(activity_type, value)?;
        tracing::debug!(%activity_type, value, carbon_kg, %activity_date, "stamped activity");
        Ok(NewActivity {
            activity_type,
            value,
            carbon_kg,
            activity_date,
        })
    }

    /// Live estimate for interactive input.
    ///
    /// Empty, partial or invalid input yields `None` rather than an error.
    pub fn preview(&self, activity_type: ActivityType, raw_value: &str) -> Option<f64> {
        let value: f64 = raw_value.trim().parse().ok()?;
        self.calculate_carbon(activity_type, value).ok()
    }

    /// Recomputes every activity's carbon mass and reports those that differ
    /// from the stored value.
    pub fn audit(&self, activities: &[Activity]) -> Vec<StampMismatch> {
        let mut mismatches = Vec::new();
        for activity in activities {
            let expected = self
                .calculate_carbon(activity.activity_type, activity.value)
                .ok();
            // Unrecomputable rows are reported with a NaN expectation.
            let expected_kg = expected.unwrap_or(f64::NAN);
            if expected != Some(activity.carbon_kg) {
                tracing::warn!(
                    id = %activity.id,
                    stored = activity.carbon_kg,
                    expected = expected_kg,
                    "carbon stamp mismatch"
                );
                mismatches.push(StampMismatch {
                    id: activity.id.clone(),
                    activity_type: activity.activity_type,
                    value: activity.value,
                    stored_kg: activity.carbon_kg,
                    expected_kg,
                });
            }
        }
        mismatches
    }
}

/// Magnitude from which four-decimal rounding no longer changes an `f64`.
const ROUNDING_LIMIT_KG: f64 = 1e15;

/// Rounds half away from zero to [`CARBON_DECIMALS`] places.
fn round_carbon(kg: f64) -> f64 {
    if kg.abs() >= ROUNDING_LIMIT_KG {
        return kg;
    }
    let scale = 10_f64.powi(CARBON_DECIMALS);
    (kg * scale).round() / scale
}
