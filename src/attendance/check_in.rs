use crate::attendance::AttendanceRegister;
use crate::domain::{Attendee, GeoPoint};
use crate::geofence::{AdmissionResult, GeofenceError, GeofenceRule, GeofenceValidator};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Clone, PartialEq, Debug)]
pub struct CheckInReceipt {
    pub admission: AdmissionResult,
    pub attendee: Attendee,
}

/// Marks attendance for students whose position lies within the geofence of the class venue.
#[derive(Debug, Default)]
pub struct CheckIn {
    validator: GeofenceValidator,
}

impl CheckIn {
    pub fn new(validator: GeofenceValidator) -> Self {
        CheckIn { validator }
    }

    /// Evaluates the geofence first; the register is only touched for an admitted candidate.
    #[instrument(skip(self, register, rule), fields(course_id = register.course_id()))]
    pub fn submit(
        &self,
        register: &mut AttendanceRegister,
        rule: &GeofenceRule,
        candidate: &GeoPoint,
        name: &str,
        matric_no: &str,
        at: DateTime<Utc>,
    ) -> Result<CheckInReceipt, CheckInError> {
        let admission = self.validator.evaluate(rule, candidate)?;
        if !admission.admitted {
            warn!("🚫 Rejected check-in at {:.2} m from the venue, limit is {} m", admission.distance_meters, rule.radius_meters);
            return Err(CheckInError::OutsideGeofence {
                distance_meters: admission.distance_meters,
                radius_meters: rule.radius_meters,
            });
        }

        let attendee = register.register(name, matric_no, at)?.clone();
        info!("✅ Attendance marked at {:.2} m from the venue", admission.distance_meters);

        Ok(CheckInReceipt { admission, attendee })
    }
}

#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("the '{0}' field is required")]
    MissingField(&'static str),
    #[error("you must be within {radius_meters} meters of the lecture venue, you are {distance_meters:.2} meters away")]
    OutsideGeofence { distance_meters: f64, radius_meters: f64 },
    #[error("matriculation number {0} has already been registered")]
    AlreadyRegistered(String),
    #[error(transparent)]
    Geofence(#[from] GeofenceError),
}
