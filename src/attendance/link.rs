use crate::domain::GeoPoint;
use crate::geofence::{GeofenceError, GeofenceRule};
use reqwest::Url;
use thiserror::Error;

const ATTENDANCE_PATH: &str = "attendance";

/// The link students open, usually through a QR code, to mark their attendance for a class.
#[derive(Clone, PartialEq, Debug)]
pub struct AttendanceLink {
    base_url: String,
    course_id: String,
    course_code: String,
    time: Option<String>,
    venue: GeoPoint,
}

impl AttendanceLink {
    pub fn new(base_url: impl Into<String>, course_id: impl Into<String>, course_code: impl Into<String>, time: Option<String>, venue: GeoPoint) -> Self {
        let base_url = base_url.into();
        AttendanceLink {
            base_url: base_url.trim_end_matches('/').to_string(),
            course_id: course_id.into(),
            course_code: course_code.into(),
            time,
            venue,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn venue(&self) -> &GeoPoint {
        &self.venue
    }

    /// Returns the geofence around the venue of this class.
    pub fn rule(&self, radius_meters: f64) -> Result<GeofenceRule, GeofenceError> {
        GeofenceRule::new(self.venue, radius_meters)
    }

    pub fn to_url(&self) -> Result<Url, LinkError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, ATTENDANCE_PATH)).map_err(|e| LinkError::InvalidUrl(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("courseId", &self.course_id);
            if let Some(time) = &self.time {
                query.append_pair("time", time);
            }
            query.append_pair("courseCode", &self.course_code);
            query.append_pair("lat", &self.venue.latitude.to_string());
            query.append_pair("lng", &self.venue.longitude.to_string());
        }

        Ok(url)
    }

    pub fn parse(link: &str) -> Result<Self, LinkError> {
        let url = Url::parse(link).map_err(|e| LinkError::InvalidUrl(e.to_string()))?;
        let parameters = url.query_pairs().into_owned().collect::<Vec<_>>();

        let course_id = required(&parameters, "courseId")?;
        let course_code = required(&parameters, "courseCode")?;
        let latitude = number(&parameters, "lat")?;
        let longitude = number(&parameters, "lng")?;
        let venue = GeoPoint::new(latitude, longitude)?;
        let time = first(&parameters, "time").filter(|time| !time.is_empty()).cloned();

        let mut base = url.clone();
        base.set_query(None);
        base.set_fragment(None);
        let base = base.as_str().trim_end_matches('/');
        let base_url = base.strip_suffix(&format!("/{}", ATTENDANCE_PATH)).unwrap_or(base);

        Ok(AttendanceLink::new(base_url, course_id, course_code, time, venue))
    }
}

/// Returns the first value of a query parameter, later duplicates are ignored.
fn first<'a>(parameters: &'a [(String, String)], name: &str) -> Option<&'a String> {
    parameters.iter().find(|(key, _)| key == name).map(|(_, value)| value)
}

fn required(parameters: &[(String, String)], name: &'static str) -> Result<String, LinkError> {
    first(parameters, name)
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .ok_or(LinkError::MissingParameter(name))
}

fn number(parameters: &[(String, String)], name: &'static str) -> Result<f64, LinkError> {
    let value = required(parameters, name)?;
    value.trim().parse().map_err(|_| LinkError::InvalidNumber { parameter: name, value })
}

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("invalid attendance link: {0}")]
    InvalidUrl(String),
    #[error("attendance link is missing the '{0}' parameter")]
    MissingParameter(&'static str),
    #[error("attendance link parameter '{parameter}' is not a number: '{value}'")]
    InvalidNumber { parameter: &'static str, value: String },
    #[error(transparent)]
    Geofence(#[from] GeofenceError),
}
