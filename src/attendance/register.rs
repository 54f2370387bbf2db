use crate::attendance::CheckInError;
use crate::domain::Attendee;
use crate::extensions::normalize_ext::Normalize;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// The attendees of a single class event, in the order they registered.
#[derive(Debug, Default)]
pub struct AttendanceRegister {
    course_id: String,
    attendees: Vec<Attendee>,
}

impl AttendanceRegister {
    pub fn new(course_id: impl Into<String>) -> Self {
        AttendanceRegister {
            course_id: course_id.into(),
            attendees: Vec::new(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn len(&self) -> usize {
        self.attendees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }

    pub fn contains(&self, matric_no: &str) -> bool {
        let matric_no = matric_no.normalized();
        self.attendees.iter().any(|attendee| attendee.matric_no == matric_no)
    }

    /// Adds a student to the register. Name and matric number are stored normalized and a matric number can only
    /// be registered once.
    #[instrument(skip(self), fields(course_id = %self.course_id))]
    pub fn register(&mut self, name: &str, matric_no: &str, at: DateTime<Utc>) -> Result<&Attendee, CheckInError> {
        let name = name.normalized();
        let matric_no = matric_no.normalized();

        if name.is_empty() {
            return Err(CheckInError::MissingField("name"));
        }
        if matric_no.is_empty() {
            return Err(CheckInError::MissingField("matric_no"));
        }
        if self.contains(&matric_no) {
            return Err(CheckInError::AlreadyRegistered(matric_no));
        }

        info!("📝 Registered '{}' ({}) for course {}", name, matric_no, self.course_id);
        let index = self.attendees.len();
        self.attendees.push(Attendee {
            matric_no,
            name,
            timestamp: at,
        });

        Ok(&self.attendees[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 7, 9, minute, 0).unwrap()
    }

    #[test]
    fn register_stores_a_normalized_attendee() -> Result<(), CheckInError> {
        let mut register = AttendanceRegister::new("42");

        let attendee = register.register("  Ada Lovelace ", " csc/2019/001", at(5))?.clone();

        assert_eq!(
            attendee,
            Attendee {
                matric_no: "CSC/2019/001".to_string(),
                name: "ADA LOVELACE".to_string(),
                timestamp: at(5),
            }
        );
        assert_eq!(register.attendees(), &[attendee]);
        Ok(())
    }

    #[test]
    fn register_keeps_the_registration_order() -> Result<(), CheckInError> {
        let mut register = AttendanceRegister::new("42");

        register.register("Grace", "B", at(1))?;
        register.register("Alan", "A", at(2))?;
        register.register("Edsger", "C", at(3))?;

        let matric_numbers = register.attendees().iter().map(|a| a.matric_no.as_str()).collect::<Vec<_>>();
        assert_eq!(matric_numbers, vec!["B", "A", "C"]);
        assert_eq!(register.len(), 3);
        Ok(())
    }

    #[rstest]
    #[case("CSC/2019/001")]
    #[case("csc/2019/001")]
    #[case("  CSC/2019/001  ")]
    fn register_rejects_a_matric_number_that_was_already_registered(#[case] matric_no: &str) -> Result<(), CheckInError> {
        let mut register = AttendanceRegister::new("42");
        register.register("Ada", "CSC/2019/001", at(1))?;

        let result = register.register("Someone Else", matric_no, at(2));

        assert!(matches!(result, Err(CheckInError::AlreadyRegistered(ref m)) if m == "CSC/2019/001"));
        assert_eq!(register.len(), 1);
        Ok(())
    }

    #[rstest]
    #[case::empty_name("", "CSC/1", "name")]
    #[case::blank_name("   ", "CSC/1", "name")]
    #[case::empty_matric_number("Ada", "", "matric_no")]
    #[case::blank_matric_number("Ada", " \t", "matric_no")]
    fn register_requires_name_and_matric_number(#[case] name: &str, #[case] matric_no: &str, #[case] field: &str) {
        let mut register = AttendanceRegister::new("42");

        match register.register(name, matric_no, at(1)) {
            Err(CheckInError::MissingField(missing)) => assert_eq!(missing, field),
            other => panic!("Expected a missing field error, found {:?}", other),
        }
        assert!(register.is_empty());
    }

    #[test]
    fn contains_ignores_case_and_whitespace() -> Result<(), CheckInError> {
        let mut register = AttendanceRegister::new("42");
        register.register("Ada", "mat-7", at(1))?;

        assert!(register.contains(" MAT-7 "));
        assert!(!register.contains("MAT-8"));
        Ok(())
    }
}
