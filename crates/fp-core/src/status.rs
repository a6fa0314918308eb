//! Qualitative classification of a day's footprint.

use serde::Serialize;

/// Daily totals below this are [`EcoStatus::Low`].
pub const LOW_THRESHOLD_KG: f64 = 5.0;

/// Daily totals above this are [`EcoStatus::High`].
pub const HIGH_THRESHOLD_KG: f64 = 15.0;

/// Three-level footprint status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EcoStatus {
    Low,
    Medium,
    High,
}

/// Status with its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: EcoStatus,
    pub label: &'static str,
    pub message: &'static str,
}

impl EcoStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Footprint",
            Self::Medium => "Medium Footprint",
            Self::High => "High Footprint",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Low => "Great job! Keep up the sustainable lifestyle.",
            Self::Medium => "Room for improvement. Try switching to public transport or bike.",
            Self::High => "Consider reducing car usage and choosing vegetarian meals.",
        }
    }

    pub const fn report(self) -> StatusReport {
        StatusReport {
            status: self,
            label: self.label(),
            message: self.message(),
        }
    }
}

/// Classifies a daily total. Both thresholds belong to the medium band.
pub fn classify(daily_total_kg: f64) -> StatusReport {
    let status = if daily_total_kg < LOW_THRESHOLD_KG {
        EcoStatus::Low
    } else if daily_total_kg <= HIGH_THRESHOLD_KG {
        EcoStatus::Medium
    } else {
        EcoStatus::High
    };
    status.report()
}
