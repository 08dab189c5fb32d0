use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::directory::domain::{HireRole, StaffId};
use crate::directory::service::StaffDirectoryService;
use crate::directory::sharing::{CredentialHandoff, CredentialPublisher, ShareError};
use crate::directory::store::{SnapshotError, SnapshotStore, StaffStore};
use crate::directory::validation::{HireForm, ProfileForm};

/// Blob store backed by shared memory so tests can inspect what was
/// persisted after each mutation.
#[derive(Default, Clone)]
pub(super) struct MemorySnapshot {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemorySnapshot {
    pub(super) fn with_blob(blob: &str) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.to_string()))),
        }
    }

    pub(super) fn blob(&self) -> Option<String> {
        self.blob.lock().expect("snapshot mutex poisoned").clone()
    }
}

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        Ok(self.blob.lock().expect("snapshot mutex poisoned").clone())
    }

    fn save(&self, blob: &str) -> Result<(), SnapshotError> {
        *self.blob.lock().expect("snapshot mutex poisoned") = Some(blob.to_string());
        Ok(())
    }
}

/// Snapshot store whose writes always fail, for exercising mutation error
/// paths.
#[derive(Default, Clone)]
pub(super) struct ReadOnlySnapshot;

impl SnapshotStore for ReadOnlySnapshot {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        Ok(None)
    }

    fn save(&self, _blob: &str) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable("volume remounted read-only".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingPublisher {
    handoffs: Arc<Mutex<Vec<CredentialHandoff>>>,
}

impl RecordingPublisher {
    pub(super) fn handoffs(&self) -> Vec<CredentialHandoff> {
        self.handoffs.lock().expect("publisher mutex poisoned").clone()
    }
}

impl CredentialPublisher for RecordingPublisher {
    fn publish(&self, handoff: CredentialHandoff) -> Result<(), ShareError> {
        self.handoffs
            .lock()
            .expect("publisher mutex poisoned")
            .push(handoff);
        Ok(())
    }
}

pub(super) struct OfflinePublisher;

impl CredentialPublisher for OfflinePublisher {
    fn publish(&self, _handoff: CredentialHandoff) -> Result<(), ShareError> {
        Err(ShareError::Transport("clipboard bridge offline".to_string()))
    }
}

pub(super) fn seeded_store() -> (StaffStore<MemorySnapshot>, MemorySnapshot) {
    let snapshot = MemorySnapshot::default();
    let store = StaffStore::open(snapshot.clone()).expect("seeded store opens");
    (store, snapshot)
}

pub(super) fn build_service() -> (
    StaffDirectoryService<MemorySnapshot, RecordingPublisher>,
    MemorySnapshot,
    Arc<RecordingPublisher>,
) {
    let snapshot = MemorySnapshot::default();
    let publisher = Arc::new(RecordingPublisher::default());
    let service = StaffDirectoryService::open(snapshot.clone(), publisher.clone())
        .expect("service opens over empty snapshot");
    (service, snapshot, publisher)
}

pub(super) fn hire_form() -> HireForm {
    HireForm {
        first_name: "Neema".to_string(),
        last_name: "Bakari".to_string(),
        email: "neema.bakari@restaurant.com".to_string(),
        phone: "+255712345678".to_string(),
        role: HireRole::Chef,
        department: "Hot Kitchen".to_string(),
        hire_date: "2025-06-02".to_string(),
        salary: Some("950000".to_string()),
        address: Some("12 Baobab Rd, Dar es Salaam".to_string()),
        emergency_contact: Some("Amani Bakari".to_string()),
        password: "Seed#Pass9xQ".to_string(),
    }
}

pub(super) fn profile_form() -> ProfileForm {
    ProfileForm {
        name: "Sarah Kimani".to_string(),
        email: "sarah.lead@restaurant.com".to_string(),
        phone: "+255987654321".to_string(),
        address: "456 Service Ave, Arusha".to_string(),
        position: "Floor Lead".to_string(),
        department: crate::directory::domain::Department::Service,
        role: crate::directory::domain::Role::Server,
        salary: "900000".to_string(),
        status: crate::directory::domain::StaffStatus::Active,
        emergency_name: "James Kimani".to_string(),
        emergency_phone: "+255456789123".to_string(),
        emergency_relationship: "Brother".to_string(),
    }
}

pub(super) fn seeded_id(name: &str, store_list: &[crate::directory::domain::StaffRecord]) -> StaffId {
    store_list
        .iter()
        .find(|record| record.name == name)
        .map(|record| record.id)
        .expect("seed roster contains the member")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
