//! Staff directory engine: roster storage, querying, form validation, and
//! credential issuance for the back-office staff screen.
//!
//! The engine is synchronous and single-writer by design; the HTTP layer in
//! [`router`] is a thin adapter over the same operations the desktop UI
//! invokes directly.

pub mod credentials;
pub mod domain;
pub mod query;
pub mod router;
pub mod seed;
pub mod service;
pub mod sharing;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use credentials::{generate_password, PASSWORD_LENGTH, SYMBOLS};
pub use domain::{
    CredentialBundle, Department, EmergencyContact, HireRole, PerformanceSnapshot, Role,
    ShiftSchedule, StaffId, StaffRecord, StaffStatus, DAY_OFF, PERMISSION_CATALOG,
};
pub use query::{
    run_query, summarize, DepartmentFilter, DirectorySummary, SortKey, SortOrder, StaffQuery,
    StatusFilter,
};
pub use router::directory_router;
pub use seed::seed_roster;
pub use service::{
    DeleteConfirmation, DirectoryServiceError, StaffDirectoryService, DEFAULT_HIRE_SALARY,
};
pub use sharing::{
    credentials_text, download_file_name, handoff_for, mailto_url, whatsapp_url, CredentialHandoff,
    CredentialPublisher, ShareChannel, ShareError,
};
pub use store::{SnapshotError, SnapshotStore, StaffStore, StoreError};
pub use validation::{HireForm, ProfileForm, ValidationReport};
