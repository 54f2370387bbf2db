use crate::domain::GeoPoint;
use serde::Deserialize;

pub const DEFAULT_VENUE_NAME: &str = "Riaan Tower, Rangilal Marg, Near Mangalwari Bazaar, Sadar 440001";

/// A named lecture venue.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Venue {
    pub name: String,
    pub location: GeoPoint,
}

impl Venue {
    pub fn new(name: impl Into<String>, location: GeoPoint) -> Self {
        Venue { name: name.into(), location }
    }

    /// The venue used when no position can be detected.
    pub fn default_venue() -> Self {
        Venue {
            name: DEFAULT_VENUE_NAME.to_string(),
            location: GeoPoint {
                latitude: 21.1592,
                longitude: 79.0806,
            },
        }
    }
}
