//! JSONL chat log storage.
//!
//! Each entry is one JSON object per line appended to the log file. Appends
//! are line-atomic at the application level, so a failed write needs no
//! cleanup pass.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/chat-log.jsonl";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A single prompt/response exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub prompt: String,
    pub response: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl LogEntry {
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            prompt: prompt.into(),
            response: response.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Append one entry to the log file, creating the parent directory if it
/// does not exist yet.
pub fn append_entry(path: &Path, entry: &LogEntry) -> Result<(), LogError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut line = serde_json::to_string(entry)?;
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        dir.path().join("logs").join("chat-log.jsonl")
    }

    #[test]
    fn test_append_creates_directory_and_single_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        let entry = LogEntry::new("hi", "hello");
        append_entry(&path, &entry).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let parsed: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["prompt"], "hi");
        assert_eq!(parsed["response"], "hello");

        let stamp = parsed["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_second_append_leaves_first_line_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        append_entry(&path, &LogEntry::new("hi", "hello")).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        append_entry(&path, &LogEntry::new("second", "reply")).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(format!("{}\n", lines[0]), first);

        let parsed: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed["prompt"], "second");
    }

    #[test]
    fn test_metadata_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        let entry = LogEntry::new("q", "a").with_metadata("cli_command", "append-log");
        append_entry(&path, &entry).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(parsed["metadata"]["cli_command"], "append-log");
    }

    #[test]
    fn test_append_to_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the log path makes the open fail.
        let path = dir.path().join("chat-log.jsonl");
        fs::create_dir(&path).unwrap();

        let err = append_entry(&path, &LogEntry::new("hi", "hello")).unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }
}
