use crate::attendance::AttendanceLink;
use crate::domain::Venue;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// A class a lecturer scheduled at a venue, as stored in the `classes` table.
#[derive(Clone, PartialEq, Debug)]
pub struct ClassSchedule {
    course_title: String,
    course_code: String,
    date: NaiveDate,
    time: NaiveTime,
    venue: Venue,
    note: Option<String>,
}

impl ClassSchedule {
    /// Fails when title or code are blank, or when no venue was selected.
    pub fn new(
        course_title: &str,
        course_code: &str,
        date: NaiveDate,
        time: NaiveTime,
        venue: Option<Venue>,
        note: Option<String>,
    ) -> Result<Self, ScheduleError> {
        let course_title = course_title.trim();
        let course_code = course_code.trim();
        if course_title.is_empty() {
            return Err(ScheduleError::MissingField("course_title"));
        }
        if course_code.is_empty() {
            return Err(ScheduleError::MissingField("course_code"));
        }
        let venue = venue.ok_or(ScheduleError::MissingVenue)?;
        venue.location.validate().map_err(|_| ScheduleError::MissingVenue)?;

        Ok(ClassSchedule {
            course_title: course_title.to_string(),
            course_code: course_code.to_string(),
            date,
            time,
            venue,
            note: note.map(|note| note.trim().to_string()).filter(|note| !note.is_empty()),
        })
    }

    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn location_name(&self) -> &str {
        &self.venue.name
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// The venue as extended well-known text for the geography column.
    pub fn venue_geography(&self) -> String {
        self.venue.location.to_ewkt()
    }

    /// Returns the link students open for this class once the backend assigned it `course_id`.
    pub fn attendance_link(&self, base_url: &str, course_id: &str) -> AttendanceLink {
        AttendanceLink::new(
            base_url,
            course_id,
            self.course_code.as_str(),
            Some(self.time.format("%H:%M").to_string()),
            self.venue.location,
        )
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("the '{0}' field is required")]
    MissingField(&'static str),
    #[error("please select a lecture venue location")]
    MissingVenue,
}
