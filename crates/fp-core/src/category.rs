//! Reporting categories over activity types.

use std::fmt;

use serde::Serialize;

use crate::ActivityType;

/// Coarse reporting bucket for an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Electricity,
    Food,
}

impl Category {
    /// Every category, in the order the summary view lists them.
    pub const ALL: [Self; 3] = [Self::Transport, Self::Electricity, Self::Food];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Electricity => "Electricity",
            Self::Food => "Food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Transport => "transport",
            Self::Electricity => "electricity",
            Self::Food => "food",
        };
        f.write_str(s)
    }
}

/// Maps an activity type to its reporting category.
pub const fn category_for(activity_type: ActivityType) -> Category {
    match activity_type {
        ActivityType::Car | ActivityType::Bike | ActivityType::PublicTransport => {
            Category::Transport
        }
        ActivityType::Electricity => Category::Electricity,
        ActivityType::VegetarianMeal | ActivityType::NonVegetarianMeal => Category::Food,
    }
}
