use chrono::{DateTime, Utc};

#[derive(Clone, PartialEq, Debug)]
pub struct Attendee {
    pub matric_no: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}
