mod attendee;
mod class_schedule;
mod geo_point;
mod venue;

pub use attendee::Attendee;
pub use class_schedule::{ClassSchedule, ScheduleError};
pub use geo_point::{GeoPoint, WGS84_SRID};
pub use venue::{DEFAULT_VENUE_NAME, Venue};
