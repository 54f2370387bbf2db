mod haversine;
mod validator;

pub use haversine::{EARTH_RADIUS_M, distance_meters};
pub use validator::{AdmissionResult, GeofenceError, GeofenceRule, GeofenceValidator};
