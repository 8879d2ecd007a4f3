use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid JSON array of records: {source}", path.display())]
    DataFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("class '{class}' has an invalid start time: {value:?}")]
    TimeFormat { class: String, value: Option<String> },

    #[error("Bad due date format for '{title}': {value}")]
    BadDueDate { title: String, value: String },
}

pub type Result<T, E = ReminderError> = std::result::Result<T, E>;
