//! Logged activities and the views the engine reads from them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ActivityType;

/// A persisted activity belonging to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    pub activity_type: ActivityType,
    /// Quantity in the type's unit.
    pub value: f64,
    /// Carbon mass stamped at creation time.
    pub carbon_kg: f64,
    pub activity_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A stamped activity that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewActivity {
    pub activity_type: ActivityType,
    pub value: f64,
    pub carbon_kg: f64,
    pub activity_date: NaiveDate,
}

impl NewActivity {
    /// Attaches storage identity to the stamped values.
    pub fn into_activity(
        self,
        id: impl Into<String>,
        user_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Activity {
        Activity {
            id: id.into(),
            user_id: user_id.into(),
            activity_type: self.activity_type,
            value: self.value,
            carbon_kg: self.carbon_kg,
            activity_date: self.activity_date,
            created_at,
        }
    }
}

/// Anything carrying an activity type and its carbon mass.
///
/// Suggestions only need this reduced view; it lets callers pass stored
/// activities or lightweight fixtures.
pub trait Emission {
    fn activity_type(&self) -> ActivityType;
    fn carbon_kg(&self) -> f64;
}

/// An [`Emission`] anchored to a calendar day.
pub trait DatedEmission: Emission {
    fn activity_date(&self) -> NaiveDate;
}

impl Emission for Activity {
    fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    fn carbon_kg(&self) -> f64 {
        self.carbon_kg
    }
}

impl DatedEmission for Activity {
    fn activity_date(&self) -> NaiveDate {
        self.activity_date
    }
}

impl Emission for (ActivityType, f64) {
    fn activity_type(&self) -> ActivityType {
        self.0
    }

    fn carbon_kg(&self) -> f64 {
        self.1
    }
}

impl Emission for (ActivityType, f64, NaiveDate) {
    fn activity_type(&self) -> ActivityType {
        self.0
    }

    fn carbon_kg(&self) -> f64 {
        self.1
    }
}

impl DatedEmission for (ActivityType, f64, NaiveDate) {
    fn activity_date(&self) -> NaiveDate {
        self.2
    }
}

impl<T: Emission + ?Sized> Emission for &T {
    fn activity_type(&self) -> ActivityType {
        (**self).activity_type()
    }

    fn carbon_kg(&self) -> f64 {
        (**self).carbon_kg()
    }
}

impl<T: DatedEmission + ?Sized> DatedEmission for &T {
    fn activity_date(&self) -> NaiveDate {
        (**self).activity_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn activity_json_uses_snake_case_fields() {
        let activity = NewActivity {
            activity_type: ActivityType::Car,
            value: 10.0,
            carbon_kg: 2.1,
            activity_date: NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
        }
        .into_activity(
            "act-1",
            "user-1",
            Utc.with_ymd_and_hms(2025, 1, 29, 8, 30, 0).unwrap(),
        );

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["activity_type"], "car");
        assert_eq!(json["activity_date"], "2025-01-29");
        assert_eq!(json["carbon_kg"], 2.1);
        assert_eq!(json["created_at"], "2025-01-29T08:30:00Z");
    }
}
