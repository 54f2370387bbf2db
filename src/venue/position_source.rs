use crate::domain::GeoPoint;
use crate::geofence::GeofenceError;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Supplies the current position of the device, e.g. a GPS receiver or a browser's geolocation API.
#[async_trait]
pub trait PositionSource: Debug + Send + Sync {
    async fn current_position(&self) -> Result<GeoPoint, PositionError>;
}

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("unable to access the current position: {0}")]
    Unavailable(String),
    #[error("position source returned an invalid position: {0}")]
    Invalid(#[from] GeofenceError),
}
