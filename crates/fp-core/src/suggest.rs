//! Improvement suggestions derived from a set of activities.
//!
//! Rules are evaluated in a fixed priority order and the result is truncated
//! to [`MAX_SUGGESTIONS`], so lower-priority rules can be evicted.

use std::fmt;

use serde::Serialize;

use crate::ActivityType;
use crate::activity::Emission;

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// Car carbon above this triggers [`Suggestion::UsePublicTransport`].
const CAR_KG_THRESHOLD: f64 = 3.0;

/// Meat meal count at or above this triggers [`Suggestion::EatMoreVegetarian`].
const MEAT_MEAL_THRESHOLD: usize = 2;

/// Electricity carbon above this triggers [`Suggestion::SaveElectricity`].
const ELECTRICITY_KG_THRESHOLD: f64 = 2.0;

/// A single advisory, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    UsePublicTransport,
    EatMoreVegetarian,
    SaveElectricity,
    KeepCycling,
    KeepItUp,
}

impl Suggestion {
    pub const fn message(self) -> &'static str {
        match self {
            Self::UsePublicTransport => {
                "🚌 Consider using public transport or carpooling to reduce transport emissions"
            }
            Self::EatMoreVegetarian => {
                "🥗 Try adding more vegetarian meals to your diet - each switch saves ~1.8 kg CO₂"
            }
            Self::SaveElectricity => {
                "💡 Switch off unused appliances and consider energy-efficient alternatives"
            }
            Self::KeepCycling => {
                "🚴 Great choice using a bike! Keep it up for a healthier you and planet"
            }
            Self::KeepItUp => "🌱 You're doing great! Keep making sustainable choices every day",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Suggestion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.message())
    }
}

#[derive(Debug, Default)]
struct Tally {
    car_kg: f64,
    meat_meals: usize,
    electricity_kg: f64,
    biked: bool,
}

impl Tally {
    fn of<A: Emission>(activities: &[A]) -> Self {
        let mut tally = Self::default();
        for activity in activities {
            match activity.activity_type() {
                ActivityType::Car => tally.car_kg += activity.carbon_kg(),
                ActivityType::NonVegetarianMeal => tally.meat_meals += 1,
                ActivityType::Electricity => tally.electricity_kg += activity.carbon_kg(),
                ActivityType::Bike => tally.biked = true,
                ActivityType::PublicTransport | ActivityType::VegetarianMeal => {}
            }
        }
        tally
    }
}

/// Produces up to [`MAX_SUGGESTIONS`] suggestions, highest priority first.
///
/// When no rule triggers, returns exactly [`Suggestion::KeepItUp`].
pub fn suggest<A: Emission>(activities: &[A]) -> Vec<Suggestion> {
    let tally = Tally::of(activities);

    let rules = [
        (tally.car_kg > CAR_KG_THRESHOLD, Suggestion::UsePublicTransport),
        (
            tally.meat_meals >= MEAT_MEAL_THRESHOLD,
            Suggestion::EatMoreVegetarian,
        ),
        (
            tally.electricity_kg > ELECTRICITY_KG_THRESHOLD,
            Suggestion::SaveElectricity,
        ),
        (tally.biked, Suggestion::KeepCycling),
    ];

    let mut suggestions: Vec<Suggestion> = rules
        .into_iter()
        .filter_map(|(triggered, suggestion)| triggered.then_some(suggestion))
        .take(MAX_SUGGESTIONS)
        .collect();

    if suggestions.is_empty() {
        suggestions.push(Suggestion::KeepItUp);
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heavy_car_use_yields_only_transport_suggestion() {
        let activities = [(ActivityType::Car, 4.0), (ActivityType::Car, 2.0)];
        assert_eq!(suggest(&activities), vec![Suggestion::UsePublicTransport]);
    }

    #[test]
    fn car_threshold_is_exclusive() {
        let activities = [(ActivityType::Car, 3.0)];
        assert_eq!(suggest(&activities), vec![Suggestion::KeepItUp]);
    }

    #[test]
    fn first_three_rules_evict_bike_reinforcement() {
        let activities = [
            (ActivityType::Car, 5.0),
            (ActivityType::NonVegetarianMeal, 3.3),
            (ActivityType::NonVegetarianMeal, 3.3),
            (ActivityType::Electricity, 2.46),
            (ActivityType::Bike, 0.5),
        ];
        assert_eq!(
            suggest(&activities),
            vec![
                Suggestion::UsePublicTransport,
                Suggestion::EatMoreVegetarian,
                Suggestion::SaveElectricity,
            ]
        );
    }

    #[test]
    fn bike_reinforcement_survives_when_quota_allows() {
        let activities = [
            (ActivityType::Electricity, 8.2),
            (ActivityType::Bike, 0.25),
        ];
        assert_eq!(
            suggest(&activities),
            vec![Suggestion::SaveElectricity, Suggestion::KeepCycling]
        );
    }

    #[test]
    fn single_meat_meal_does_not_trigger() {
        let activities = [
            (ActivityType::NonVegetarianMeal, 3.3),
            (ActivityType::VegetarianMeal, 1.5),
        ];
        assert_eq!(suggest(&activities), vec![Suggestion::KeepItUp]);
    }

    #[test]
    fn empty_input_yields_default_message() {
        let activities: [(ActivityType, f64); 0] = [];
        let suggestions = suggest(&activities);
        assert_eq!(suggestions, vec![Suggestion::KeepItUp]);
        assert_eq!(
            suggestions[0].to_string(),
            "🌱 You're doing great! Keep making sustainable choices every day"
        );
    }

    #[test]
    fn serializes_as_message() {
        let json = serde_json::to_string(&[Suggestion::KeepCycling]).unwrap();
        assert_eq!(
            json,
            r#"["🚴 Great choice using a bike! Keep it up for a healthier you and planet"]"#
        );
    }
}
