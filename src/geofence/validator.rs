use crate::domain::GeoPoint;
use crate::geofence::distance_meters;
use serde::Serialize;
use thiserror::Error;
use tracing::{instrument, trace};

/// A circular boundary around a venue, fixed for the lifetime of a class event.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GeofenceRule {
    pub center: GeoPoint,
    pub radius_meters: f64,
}

impl GeofenceRule {
    pub fn new(center: GeoPoint, radius_meters: f64) -> Result<Self, GeofenceError> {
        let rule = GeofenceRule { center, radius_meters };
        rule.validate()?;
        Ok(rule)
    }

    pub fn validate(&self) -> Result<(), GeofenceError> {
        if !(self.radius_meters.is_finite() && self.radius_meters > 0.0) {
            return Err(GeofenceError::InvalidRadius(self.radius_meters));
        }

        self.center.validate()
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResult {
    pub distance_meters: f64,
    pub admitted: bool,
}

/// Decides whether a location claim falls within a geofence. Stateless, so a single instance can be shared freely.
#[derive(Clone, Copy, Default, Debug)]
pub struct GeofenceValidator;

impl GeofenceValidator {
    pub fn new() -> Self {
        GeofenceValidator
    }

    /// Admits `candidate` when its great-circle distance to the rule's center is at most the rule's radius.
    #[instrument(level = "trace", skip(self))]
    pub fn evaluate(&self, rule: &GeofenceRule, candidate: &GeoPoint) -> Result<AdmissionResult, GeofenceError> {
        rule.validate()?;
        candidate.validate()?;

        let distance_meters = distance_meters(&rule.center, candidate);
        let admitted = distance_meters <= rule.radius_meters;
        trace!(distance_meters, admitted, "Evaluated geofence with radius {} m", rule.radius_meters);

        Ok(AdmissionResult { distance_meters, admitted })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeofenceError {
    #[error("invalid coordinate ({latitude}, {longitude}), latitude must be between -90 and 90 and longitude between -180 and 180")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("invalid geofence radius: {0}, must be a finite number greater than 0")]
    InvalidRadius(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geofence::EARTH_RADIUS_M;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::f64::consts::PI;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint { latitude, longitude }
    }

    fn rule(latitude: f64, longitude: f64, radius_meters: f64) -> GeofenceRule {
        GeofenceRule::new(point(latitude, longitude), radius_meters).unwrap()
    }

    #[test]
    fn admits_a_candidate_at_the_center() -> Result<(), GeofenceError> {
        let rule = rule(21.1592, 79.0806, 60.0);
        let result = GeofenceValidator::new().evaluate(&rule, &point(21.1592, 79.0806))?;

        assert!(result.distance_meters < 1e-6);
        assert!(result.admitted);
        assert_eq!(format!("{:.2}", result.distance_meters), "0.00");
        Ok(())
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, -180.0)]
    #[case(-45.5, 170.25)]
    #[case(51.5074, -0.1278)]
    fn the_center_is_always_admitted(#[case] latitude: f64, #[case] longitude: f64) -> Result<(), GeofenceError> {
        let rule = rule(latitude, longitude, 0.001);
        let result = GeofenceValidator::new().evaluate(&rule, &rule.center)?;

        assert!(result.distance_meters < 1e-6);
        assert!(result.admitted);
        Ok(())
    }

    #[test]
    fn reports_the_distance_of_a_candidate_sixty_meters_east() -> Result<(), GeofenceError> {
        let result = GeofenceValidator::new().evaluate(&rule(0.0, 0.0, 60.0), &point(0.0, 0.000539957))?;

        assert!((59.0..=61.0).contains(&result.distance_meters), "distance was {}", result.distance_meters);
        assert_eq!(result.admitted, result.distance_meters <= 60.0);
        Ok(())
    }

    #[test]
    fn rejects_a_candidate_in_another_city() -> Result<(), GeofenceError> {
        let result = GeofenceValidator::new().evaluate(&rule(51.5074, -0.1278, 60.0), &point(48.8566, 2.3522))?;

        assert!((result.distance_meters - 343_556.0).abs() < 1.0, "distance was {}", result.distance_meters);
        assert!(!result.admitted);
        Ok(())
    }

    #[rstest]
    #[case(point(21.1597, 79.0806))]
    #[case(point(21.1592, 79.0811))]
    #[case(point(21.15875, 79.08025))]
    #[case(point(-21.1592, -100.9194))]
    fn admits_a_candidate_exactly_on_the_boundary(#[case] candidate: GeoPoint) -> Result<(), GeofenceError> {
        let center = point(21.1592, 79.0806);
        let radius_meters = distance_meters(&center, &candidate);
        let result = GeofenceValidator::new().evaluate(&GeofenceRule::new(center, radius_meters)?, &candidate)?;

        assert_eq!(result.distance_meters, radius_meters);
        assert!(result.admitted);
        Ok(())
    }

    #[test]
    fn widening_the_radius_never_rejects_an_admitted_candidate() -> Result<(), GeofenceError> {
        let validator = GeofenceValidator::new();
        let candidates = [
            point(21.1592, 79.0806),
            point(21.1595, 79.0806),
            point(21.1600, 79.0810),
            point(21.1700, 79.0900),
            point(22.0, 80.0),
            point(-21.1592, -100.9194),
        ];
        let radii = [1.0, 10.0, 60.0, 100.0, 1_500.0, 200_000.0, 2.0 * PI * EARTH_RADIUS_M];

        for candidate in &candidates {
            let mut previously_admitted = false;
            for radius in radii {
                let admitted = validator.evaluate(&rule(21.1592, 79.0806, radius), candidate)?.admitted;
                assert!(admitted || !previously_admitted, "{} was rejected at radius {}", candidate, radius);
                previously_admitted = admitted;
            }
        }
        Ok(())
    }

    #[rstest]
    #[case(point(0.0, 180.0))]
    #[case(point(-21.1592, -100.9194))]
    #[case(point(-90.0, 0.0))]
    fn a_radius_larger_than_the_earth_admits_everything(#[case] candidate: GeoPoint) -> Result<(), GeofenceError> {
        let rule = rule(21.1592, 79.0806, 2.0 * PI * EARTH_RADIUS_M + 1.0);
        let result = GeofenceValidator::new().evaluate(&rule, &candidate)?;

        assert!(result.admitted);
        Ok(())
    }

    #[test]
    fn admission_matches_the_distance_comparison() -> Result<(), GeofenceError> {
        let validator = GeofenceValidator::new();
        let rule = rule(21.1592, 79.0806, 60.0);

        for offset in [0.0, 0.0001, 0.0003, 0.0005, 0.0006, 0.001, 0.01] {
            let result = validator.evaluate(&rule, &point(21.1592 + offset, 79.0806))?;
            assert_eq!(result.admitted, result.distance_meters <= rule.radius_meters);
        }
        Ok(())
    }

    #[rstest]
    #[case::latitude_too_large(point(95.0, 0.0))]
    #[case::longitude_too_small(point(0.0, -180.01))]
    #[case::latitude_nan(point(f64::NAN, 0.0))]
    #[case::longitude_infinite(point(0.0, f64::NEG_INFINITY))]
    fn fails_for_an_invalid_candidate(#[case] candidate: GeoPoint) {
        let result = GeofenceValidator::new().evaluate(&rule(0.0, 0.0, 60.0), &candidate);
        assert!(matches!(result, Err(GeofenceError::InvalidCoordinate { .. })));
    }

    #[test]
    fn fails_for_an_invalid_center() {
        let rule = GeofenceRule {
            center: point(95.0, 0.0),
            radius_meters: 60.0,
        };
        let result = GeofenceValidator::new().evaluate(&rule, &point(0.0, 0.0));
        assert!(matches!(
            result,
            Err(GeofenceError::InvalidCoordinate {
                latitude: 95.0,
                longitude: 0.0
            })
        ));
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-60.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn fails_for_an_invalid_radius(#[case] radius_meters: f64) {
        let rule = GeofenceRule {
            center: point(0.0, 0.0),
            radius_meters,
        };
        let result = GeofenceValidator::new().evaluate(&rule, &point(0.0, 0.0));
        assert!(matches!(result, Err(GeofenceError::InvalidRadius(_))));
        assert!(matches!(GeofenceRule::new(point(0.0, 0.0), radius_meters), Err(GeofenceError::InvalidRadius(_))));
    }

    #[test]
    fn serializes_the_result_in_camel_case() {
        let result = AdmissionResult {
            distance_meters: 12.5,
            admitted: true,
        };
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            serde_json::json!({ "distanceMeters": 12.5, "admitted": true })
        );
    }
}
