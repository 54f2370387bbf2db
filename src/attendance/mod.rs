mod check_in;
mod link;
mod register;

pub use check_in::{CheckIn, CheckInError, CheckInReceipt};
pub use link::{AttendanceLink, LinkError};
pub use register::AttendanceRegister;
