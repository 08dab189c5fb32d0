use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use staff_directory::directory::sharing::{CredentialHandoff, CredentialPublisher, ShareError};
use staff_directory::directory::store::{SnapshotError, SnapshotStore};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Roster blob persisted as a single JSON file on local disk.
pub(crate) struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::Unavailable(err.to_string())),
        }
    }

    fn save(&self, blob: &str) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| SnapshotError::Unavailable(err.to_string()))?;
            }
        }
        fs::write(&self.path, blob).map_err(|err| SnapshotError::Unavailable(err.to_string()))
    }
}

/// Roster blob held in process memory, used by the CLI demo so a run leaves
/// no files behind.
#[derive(Default, Clone)]
pub(crate) struct InMemorySnapshot {
    blob: Arc<Mutex<Option<String>>>,
}

impl SnapshotStore for InMemorySnapshot {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        Ok(self.blob.lock().expect("snapshot mutex poisoned").clone())
    }

    fn save(&self, blob: &str) -> Result<(), SnapshotError> {
        *self.blob.lock().expect("snapshot mutex poisoned") = Some(blob.to_string());
        Ok(())
    }
}

/// Delivery collaborator for the HTTP service. The server has no clipboard
/// or mail client of its own, so handoffs are logged for the operator and
/// the prepared links travel back to the caller in the response body.
#[derive(Default, Clone)]
pub(crate) struct LoggingPublisher;

impl CredentialPublisher for LoggingPublisher {
    fn publish(&self, handoff: CredentialHandoff) -> Result<(), ShareError> {
        info!(
            channel = ?handoff.channel,
            destination = %handoff.destination,
            "credential handoff prepared"
        );
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
