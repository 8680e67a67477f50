use serde::Serialize;

/// A single waitlist signup as stored in the `pre_signups` table.
///
/// The email is the unique key of the table; the row is created once and
/// never mutated, so this is the entire persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub email: String,
}

impl WaitlistEntry {
    /// Builds an entry from an already-normalized (trimmed, lowercased) email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
