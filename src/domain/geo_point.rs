use crate::geofence::GeofenceError;
use std::fmt::Display;

/// Spatial reference identifier of WGS 84, the datum all coordinates are expressed in.
pub const WGS84_SRID: u32 = 4326;

/// A position on Earth in decimal degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeofenceError> {
        let point = GeoPoint { latitude, longitude };
        point.validate()?;
        Ok(point)
    }

    /// Fails with [`GeofenceError::InvalidCoordinate`] when either coordinate is non-finite or out of range.
    pub fn validate(&self) -> Result<(), GeofenceError> {
        if is_valid_latitude(self.latitude) && is_valid_longitude(self.longitude) {
            Ok(())
        } else {
            Err(GeofenceError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Returns the point as extended well-known text, e.g. `SRID=4326;POINT(79.0806 21.1592)`.
    /// Longitude comes first, matching the x/y order of the geography column.
    pub fn to_ewkt(&self) -> String {
        format!("SRID={};POINT({} {})", WGS84_SRID, self.longitude, self.latitude)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (-90.0..=90.0).contains(&latitude)
}

fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (-180.0..=180.0).contains(&longitude)
}
