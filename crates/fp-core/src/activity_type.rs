//! Activity type enum as the single source of truth for activity type strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of activity a person can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityType {
    Car,
    Bike,
    PublicTransport,
    Electricity,
    VegetarianMeal,
    NonVegetarianMeal,
}

impl ActivityType {
    /// Every variant, in display order.
    pub const ALL: [Self; 6] = [
        Self::Car,
        Self::Bike,
        Self::PublicTransport,
        Self::Electricity,
        Self::VegetarianMeal,
        Self::NonVegetarianMeal,
    ];

    /// Returns the canonical snake_case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::PublicTransport => "public_transport",
            Self::Electricity => "electricity",
            Self::VegetarianMeal => "vegetarian_meal",
            Self::NonVegetarianMeal => "non_vegetarian_meal",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "public_transport" => Ok(Self::PublicTransport),
            "electricity" => Ok(Self::Electricity),
            "vegetarian_meal" => Ok(Self::VegetarianMeal),
            "non_vegetarian_meal" => Ok(Self::NonVegetarianMeal),
            _ => Err(UnknownActivityType(s.to_string())),
        }
    }
}

impl Serialize for ActivityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for activity type strings outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActivityType(pub String);

impl fmt::Display for UnknownActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activity type: {}", self.0)
    }
}

impl std::error::Error for UnknownActivityType {}
