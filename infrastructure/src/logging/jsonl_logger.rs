//! JSONL file writer for prediction events.
//!
//! Each [`PredictionEvent`] becomes one JSON line with `type` and
//! `timestamp` fields merged into its payload. The file is opened in append
//! mode so the log accumulates across runs.

use loanrisk_application::{PredictionEvent, PredictionLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL prediction logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and on `Drop`.
pub struct JsonlPredictionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlPredictionLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create prediction log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open prediction log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PredictionLogger for JsonlPredictionLogger {
    fn log(&self, event: PredictionEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = match event.payload {
            serde_json::Value::Object(mut map) => {
                map.insert(
                    "type".to_string(),
                    serde_json::Value::String(event.event_type.to_string()),
                );
                map.insert(
                    "timestamp".to_string(),
                    serde_json::Value::String(timestamp),
                );
                serde_json::Value::Object(map)
            }
            other => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlPredictionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
