use std::{fmt, str::FromStr};

use thiserror::Error;

/// Returned when a travel mode other than `car` or `walking` is requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported travel mode '{0}', expected 'car' or 'walking'")]
pub struct UnsupportedMode(pub String);

// Only ways with one of these highway values are routable for the mode
const CAR_HIGHWAYS: &[&str] = &[
    "track",
    "path",
    "residential",
    "primary",
    "secondary",
    "unclassified",
    "tertiary",
    "service",
    "driveway",
    "motorway",
    "trunk",
    "parking_aisle",
];

const WALKING_HIGHWAYS: &[&str] = &[
    "service",
    "pedestrian",
    "unclassified",
    "footway",
    "track",
    "path",
    "steps",
    "cycleway",
    "parking_aisle",
    "bridleway",
    "residential",
    "crossing",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TravelMode {
    #[default]
    Car,
    Walking,
}

impl TravelMode {
    /// Values of the `highway` tag accepted for this mode.
    pub fn accepted_highways(&self) -> &'static [&'static str] {
        match self {
            TravelMode::Car => CAR_HIGHWAYS,
            TravelMode::Walking => WALKING_HIGHWAYS,
        }
    }

    pub fn accepts_highway(&self, value: &str) -> bool {
        self.accepted_highways().contains(&value)
    }
}

impl FromStr for TravelMode {
    type Err = UnsupportedMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(TravelMode::Car),
            "walking" => Ok(TravelMode::Walking),
            _ => Err(UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::Car => write!(f, "car"),
            TravelMode::Walking => write!(f, "walking"),
        }
    }
}
