/// Canonical form of free-text identifiers typed in by students.
pub trait Normalize {
    /// Returns the value trimmed and upper-cased.
    fn normalized(&self) -> String;
}

impl Normalize for str {
    fn normalized(&self) -> String {
        self.trim().to_uppercase()
    }
}
