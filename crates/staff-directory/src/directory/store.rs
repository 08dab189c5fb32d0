use std::sync::Mutex;

use chrono::Utc;
use tracing::warn;

use super::domain::{StaffId, StaffRecord};
use super::seed::seed_roster;

/// Persistence collaborator: a key-value blob holding the JSON-serialized
/// roster under a single key. Every mutation overwrites the blob in full.
pub trait SnapshotStore: Send + Sync {
    /// Read the current blob, `None` when nothing has been written yet.
    fn load(&self) -> Result<Option<String>, SnapshotError>;
    fn save(&self, blob: &str) -> Result<(), SnapshotError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("staff record {0} not found")]
    NotFound(StaffId),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Single owner of the authoritative roster. Holds the ordered collection in
/// memory and funnels every read-modify-write through one place, pushing a
/// full re-serialization to the snapshot store after each mutation.
pub struct StaffStore<S> {
    records: Mutex<Vec<StaffRecord>>,
    snapshot: S,
}

impl<S: SnapshotStore> StaffStore<S> {
    /// Load the roster from the snapshot store. An absent blob seeds the
    /// fixed default roster; a corrupt blob is logged and silently replaced
    /// by the same seed, which is written back immediately.
    pub fn open(snapshot: S) -> Result<Self, StoreError> {
        let records = match snapshot.load()? {
            Some(blob) => match serde_json::from_str::<Vec<StaffRecord>>(&blob) {
                Ok(records) => records,
                Err(err) => {
                    warn!(%err, "stored roster failed to parse, falling back to seed data");
                    let seed = seed_roster();
                    save_snapshot(&snapshot, &seed)?;
                    seed
                }
            },
            None => {
                let seed = seed_roster();
                save_snapshot(&snapshot, &seed)?;
                seed
            }
        };

        Ok(Self {
            records: Mutex::new(records),
            snapshot,
        })
    }

    /// Insert a record, assigning a fresh id when the caller left it
    /// unassigned (the hire path always does). Ids come from the creation
    /// clock and are bumped past any existing id, so they are never reused.
    pub fn add(&self, mut record: StaffRecord) -> Result<StaffRecord, StoreError> {
        let mut guard = self.records.lock().expect("roster mutex poisoned");
        if !record.id.is_assigned() {
            record.id = next_id(&guard);
        }
        guard.push(record.clone());
        save_snapshot(&self.snapshot, &guard)?;
        Ok(record)
    }

    /// Replace the attributes of an existing record. The stored id and
    /// hire date always survive the replacement.
    pub fn update(&self, id: StaffId, record: StaffRecord) -> Result<StaffRecord, StoreError> {
        let mut guard = self.records.lock().expect("roster mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut record = record;
        record.id = slot.id;
        record.hire_date = slot.hire_date;
        *slot = record.clone();

        save_snapshot(&self.snapshot, &guard)?;
        Ok(record)
    }

    /// Remove a record. Removing an id that is no longer present is an
    /// error, including the second of two removals for the same id.
    pub fn remove(&self, id: StaffId) -> Result<StaffRecord, StoreError> {
        let mut guard = self.records.lock().expect("roster mutex poisoned");
        let index = guard
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = guard.remove(index);
        save_snapshot(&self.snapshot, &guard)?;
        Ok(removed)
    }

    pub fn get(&self, id: StaffId) -> Option<StaffRecord> {
        let guard = self.records.lock().expect("roster mutex poisoned");
        guard.iter().find(|record| record.id == id).cloned()
    }

    /// Current roster in insertion order.
    pub fn list(&self) -> Vec<StaffRecord> {
        self.records.lock().expect("roster mutex poisoned").clone()
    }
}

fn next_id(existing: &[StaffRecord]) -> StaffId {
    let mut candidate = Utc::now().timestamp_millis().max(1);
    while existing.iter().any(|record| record.id.0 == candidate) {
        candidate += 1;
    }
    StaffId(candidate)
}

fn save_snapshot<S: SnapshotStore>(
    snapshot: &S,
    records: &[StaffRecord],
) -> Result<(), SnapshotError> {
    let blob = serde_json::to_string(records)?;
    snapshot.save(&blob)
}
