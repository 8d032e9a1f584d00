use chrono::{DateTime, Utc};

/// Source of "now" for timestamps on tickets and notes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
