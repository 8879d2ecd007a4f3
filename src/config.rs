use std::path::{Path, PathBuf};

pub const CLASSES_FILE: &str = "classes.json";
pub const ASSIGNMENTS_FILE: &str = "assignments.json";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DAYS_AHEAD: i64 = 7;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub days_ahead: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_DAYS_AHEAD)
    }
}

impl AppConfig {
    pub fn new(data_dir: impl AsRef<Path>, days_ahead: i64) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            days_ahead,
        }
    }

    pub fn classes_path(&self) -> PathBuf {
        self.data_dir.join(CLASSES_FILE)
    }

    pub fn assignments_path(&self) -> PathBuf {
        self.data_dir.join(ASSIGNMENTS_FILE)
    }
}
