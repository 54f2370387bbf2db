use crate::app_config::AppConfig;
use crate::attendance::{AttendanceLink, LinkError};
use crate::domain::{ClassSchedule, GeoPoint, ScheduleError, Venue};
use crate::geocoding::{GeocodeError, NominatimGeocoder};
use crate::geofence::{AdmissionResult, GeofenceError, GeofenceValidator};
use crate::venue::{FixedPosition, VenueSelector};
use chrono::{NaiveDate, NaiveTime};
use reqwest::Url;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Evaluates a student's position against the venue encoded in an attendance link. The configured radius is used
/// unless `radius_m` overrides it.
#[instrument(skip(config))]
pub fn check(config: &AppConfig, link: &str, candidate: GeoPoint, radius_m: Option<f64>) -> Result<AdmissionResult, CommandError> {
    let link = AttendanceLink::parse(link)?;
    let rule = link.rule(radius_m.unwrap_or(config.geofence().radius_m()))?;

    let result = GeofenceValidator::new().evaluate(&rule, &candidate)?;
    info!(admitted = result.admitted, "📏 {:.2} m from the venue of {}", result.distance_meters, link.course_code());
    Ok(result)
}

/// Resolves a venue for the given point. Without a point the configured default venue is returned.
#[instrument(skip(config))]
pub async fn locate(config: &AppConfig, point: Option<GeoPoint>) -> Result<Venue, CommandError> {
    Ok(venue_selector(config, point)?.detect().await)
}

fn venue_selector(config: &AppConfig, point: Option<GeoPoint>) -> Result<VenueSelector, CommandError> {
    let geocoder = NominatimGeocoder::new(config.nominatim().into())?;
    Ok(VenueSelector::new(Arc::new(geocoder), Arc::new(FixedPosition::new(point)), config.default_venue().clone()))
}

#[derive(Clone, Debug)]
pub struct ScheduleRequest {
    pub course_id: String,
    pub course_title: String,
    pub course_code: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub note: Option<String>,
    pub venue: Option<GeoPoint>,
    /// Name of the venue; resolved through the reverse geocoder when absent.
    pub venue_name: Option<String>,
}

/// A newly scheduled class: the record to store, the link to share with students and the venue geography.
#[derive(Debug)]
pub struct ScheduledClass {
    pub schedule: ClassSchedule,
    pub url: Url,
    pub venue_geography: String,
}

#[instrument(skip(config))]
pub async fn schedule(config: &AppConfig, request: ScheduleRequest) -> Result<ScheduledClass, CommandError> {
    let venue = match (request.venue, request.venue_name) {
        (Some(point), Some(name)) => {
            point.validate()?;
            Some(Venue::new(name, point))
        }
        (Some(point), None) => {
            point.validate()?;
            Some(venue_selector(config, None)?.select(point).await)
        }
        (None, _) => None,
    };

    let schedule = ClassSchedule::new(&request.course_title, &request.course_code, request.date, request.time, venue, request.note)?;
    let url = schedule.attendance_link(config.attendance().base_url(), &request.course_id).to_url()?;
    info!("🗓️ Scheduled {} at '{}' on {}", schedule.course_code(), schedule.location_name(), schedule.starts_at());

    Ok(ScheduledClass {
        venue_geography: schedule.venue_geography(),
        url,
        schedule,
    })
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error(transparent)]
    Geofence(#[from] GeofenceError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
