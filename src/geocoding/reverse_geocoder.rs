use crate::domain::GeoPoint;
use async_trait::async_trait;
use std::fmt::Debug;

/// Name given to a point the geocoder could not resolve.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

#[async_trait]
pub trait ReverseGeocoder: Debug + Send + Sync {
    /// Returns a human-readable name for the point, or [`UNKNOWN_LOCATION`] when it cannot be resolved.
    async fn name_of(&self, point: &GeoPoint) -> String;
}
