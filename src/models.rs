use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

pub const PENDING: &str = "pending";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignmentRecord {
    pub title: String,
    #[serde(default)]
    pub course: Option<String>,
    /// Kept untyped so a malformed value only drops this record.
    #[serde(default)]
    pub due: Option<Value>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    PENDING.to_string()
}

impl AssignmentRecord {
    pub fn is_pending(&self) -> bool {
        self.status == PENDING
    }
}

/// A pending assignment paired with its parsed due instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingAssignment<'a> {
    pub record: &'a AssignmentRecord,
    pub due: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let record: AssignmentRecord =
            serde_json::from_str(r#"{"title":"Essay","due":"2026-10-19 23:59"}"#).unwrap();
        assert_eq!(record.status, "pending");
        assert!(record.is_pending());
        assert_eq!(record.course, None);
    }

    #[test]
    fn non_string_due_still_deserializes() {
        let record: AssignmentRecord =
            serde_json::from_str(r#"{"title":"Essay","due":5}"#).unwrap();
        assert_eq!(record.due, Some(Value::from(5)));
    }

    #[test]
    fn class_optional_fields_default() {
        let record: ClassRecord = serde_json::from_str(r#"{"name":"Algorithms"}"#).unwrap();
        assert!(record.days.is_empty());
        assert_eq!(record.start_time, None);
        assert_eq!(record.end_time, "");
        assert_eq!(record.location, None);
    }
}
