use super::fill_template;
use pattern_framework::{Subscriber, SubscriberError};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Writes one line per notification to a log file.
#[derive(Debug)]
pub struct LoggingListener {
    log_file: PathBuf,
    message: String,
    lines: Mutex<Vec<String>>,
}

impl LoggingListener {
    /// # Arguments
    /// * `log_file` - Where the lines would be appended
    /// * `message` - Line template; `%s` is replaced by the file name
    pub fn new(log_file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            log_file: log_file.into(),
            message: message.into(),
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Subscriber<String> for LoggingListener {
    fn name(&self) -> &str {
        "logging"
    }

    fn update(&self, filename: &String) -> Result<(), SubscriberError> {
        let line = fill_template(&self.message, filename);
        info!(log_file = %self.log_file.display(), %line, "Log");
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
        Ok(())
    }
}
