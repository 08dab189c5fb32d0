use std::sync::Arc;

use tracing::warn;

use super::credentials::{bundle_for_new_hire, bundle_for_reset};
use super::domain::{
    CredentialBundle, Department, EmergencyContact, PerformanceSnapshot, ShiftSchedule, StaffId,
    StaffRecord, StaffStatus,
};
use super::query::{run_query, summarize, DirectorySummary, StaffQuery};
use super::sharing::{handoff_for, CredentialPublisher, ShareChannel};
use super::store::{SnapshotStore, StaffStore, StoreError};
use super::validation::{HireForm, ProfileForm, ValidationReport};

/// Monthly salary applied when the hire form leaves the field blank.
pub const DEFAULT_HIRE_SALARY: u64 = 600_000;

/// Explicit human confirmation gate for destructive operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    Confirmed,
    Declined,
}

/// Service composing the record store, validation engine, credential
/// generator, and sharing collaborators behind the operations the UI layer
/// invokes.
pub struct StaffDirectoryService<S, P> {
    store: StaffStore<S>,
    publisher: Arc<P>,
}

impl<S, P> StaffDirectoryService<S, P>
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    pub fn open(snapshot: S, publisher: Arc<P>) -> Result<Self, StoreError> {
        Ok(Self {
            store: StaffStore::open(snapshot)?,
            publisher,
        })
    }

    /// Create a staff account from the inline hire form. Validation failure
    /// returns the structured field report and leaves the roster untouched;
    /// success returns the stored record together with the one-time
    /// credential bundle.
    pub fn hire(
        &self,
        form: HireForm,
    ) -> Result<(StaffRecord, CredentialBundle), DirectoryServiceError> {
        let report = form.validate();
        if !report.is_valid() {
            return Err(DirectoryServiceError::Validation(report));
        }

        let department = Department::classify(&form.department, form.role);
        let salary = form
            .salary
            .as_deref()
            .and_then(super::validation::parse_salary)
            .unwrap_or(DEFAULT_HIRE_SALARY);

        let record = StaffRecord {
            id: StaffId::UNASSIGNED,
            name: form.full_name(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.clone().unwrap_or_default(),
            position: form.role.position().to_string(),
            department,
            role: form.role.role(),
            hire_date: form.parsed_hire_date().unwrap_or_default(),
            salary,
            status: StaffStatus::Active,
            permissions: form.role.default_permissions(),
            shift_schedule: ShiftSchedule::business_hours(),
            performance: PerformanceSnapshot::new_hire(),
            emergency_contact: EmergencyContact {
                name: form.emergency_contact.clone().unwrap_or_default(),
                phone: String::new(),
                relationship: String::new(),
            },
        };

        let stored = self.store.add(record)?;
        let bundle = bundle_for_new_hire(
            &stored.name,
            &stored.email,
            &form.password,
            stored.role,
            form.department.trim(),
        );

        Ok((stored, bundle))
    }

    /// Replace a member's profile attributes from the full edit form. The
    /// schedule, permissions, and performance history are not on that form
    /// and carry over unchanged, as do the id and hire date.
    pub fn update(
        &self,
        id: StaffId,
        form: ProfileForm,
    ) -> Result<StaffRecord, DirectoryServiceError> {
        let report = form.validate();
        if !report.is_valid() {
            return Err(DirectoryServiceError::Validation(report));
        }

        let existing = self.store.get(id).ok_or(StoreError::NotFound(id))?;

        let record = StaffRecord {
            id: existing.id,
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
            position: form.position.trim().to_string(),
            department: form.department,
            role: form.role,
            hire_date: existing.hire_date,
            salary: form.parsed_salary().unwrap_or(existing.salary),
            status: form.status,
            permissions: existing.permissions,
            shift_schedule: existing.shift_schedule,
            performance: existing.performance,
            emergency_contact: EmergencyContact {
                name: form.emergency_name.trim().to_string(),
                phone: form.emergency_phone.trim().to_string(),
                relationship: form.emergency_relationship.trim().to_string(),
            },
        };

        Ok(self.store.update(id, record)?)
    }

    /// Remove a member. The irreversible-action confirmation must have
    /// happened before the store is touched.
    pub fn remove(
        &self,
        id: StaffId,
        confirmation: DeleteConfirmation,
    ) -> Result<StaffRecord, DirectoryServiceError> {
        if confirmation != DeleteConfirmation::Confirmed {
            return Err(DirectoryServiceError::RemovalNotConfirmed);
        }
        Ok(self.store.remove(id)?)
    }

    pub fn get(&self, id: StaffId) -> Result<StaffRecord, DirectoryServiceError> {
        self.store
            .get(id)
            .ok_or(DirectoryServiceError::Store(StoreError::NotFound(id)))
    }

    pub fn list(&self) -> Vec<StaffRecord> {
        self.store.list()
    }

    pub fn query(&self, query: &StaffQuery) -> Vec<StaffRecord> {
        run_query(&self.store.list(), query)
    }

    pub fn summary(&self) -> DirectorySummary {
        summarize(&self.store.list())
    }

    /// Issue a fresh password for an existing member. The bundle is the only
    /// place the password ever appears.
    pub fn regenerate_credentials(
        &self,
        id: StaffId,
    ) -> Result<CredentialBundle, DirectoryServiceError> {
        let record = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        Ok(bundle_for_reset(&record))
    }

    /// Hand a bundle to a sharing collaborator. Delivery is best effort:
    /// failures are logged and swallowed, never retried, never blocking.
    pub fn share_credentials(&self, bundle: &CredentialBundle, channel: ShareChannel) {
        let handoff = handoff_for(bundle, channel);
        if let Err(err) = self.publisher.publish(handoff) {
            warn!(%err, ?channel, member = %bundle.full_name, "credential share failed");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryServiceError {
    #[error("form validation failed on {} field(s)", .0.errors.len())]
    Validation(ValidationReport),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("removing a staff record requires an explicit confirmation")]
    RemovalNotConfirmed,
}
