use crate::domain::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle distance in meters between two points using the haversine formula.
/// Both points are assumed to be valid, see [`GeoPoint::validate`].
pub fn distance_meters(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let from_latitude = from.latitude.to_radians();
    let to_latitude = to.latitude.to_radians();
    let delta_latitude = (to.latitude - from.latitude).to_radians();
    let delta_longitude = (to.longitude - from.longitude).to_radians();

    let a = (delta_latitude / 2.0).sin().powi(2) + from_latitude.cos() * to_latitude.cos() * (delta_longitude / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for (nearly) antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
