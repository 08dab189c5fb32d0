use std::sync::{Arc, Mutex};

use staff_directory::directory::domain::{Department, HireRole, Role, StaffStatus};
use staff_directory::directory::query::{
    DepartmentFilter, SortKey, SortOrder, StaffQuery, StatusFilter,
};
use staff_directory::directory::service::{DeleteConfirmation, StaffDirectoryService};
use staff_directory::directory::sharing::{
    CredentialHandoff, CredentialPublisher, ShareChannel, ShareError,
};
use staff_directory::directory::store::{SnapshotError, SnapshotStore, StaffStore};
use staff_directory::directory::validation::HireForm;

#[derive(Default, Clone)]
struct SharedBlob {
    blob: Arc<Mutex<Option<String>>>,
}

impl SnapshotStore for SharedBlob {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        Ok(self.blob.lock().expect("blob mutex poisoned").clone())
    }

    fn save(&self, blob: &str) -> Result<(), SnapshotError> {
        *self.blob.lock().expect("blob mutex poisoned") = Some(blob.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct CapturingPublisher {
    handoffs: Mutex<Vec<CredentialHandoff>>,
}

impl CredentialPublisher for CapturingPublisher {
    fn publish(&self, handoff: CredentialHandoff) -> Result<(), ShareError> {
        self.handoffs
            .lock()
            .expect("publisher mutex poisoned")
            .push(handoff);
        Ok(())
    }
}

fn hire_form() -> HireForm {
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

#[test]
fn hire_share_and_offboard_round_trip() {
    let blob = SharedBlob::default();
    let publisher = Arc::new(CapturingPublisher::default());
    let service = StaffDirectoryService::open(blob.clone(), publisher.clone())
        .expect("service seeds an empty snapshot");

    // Fresh install starts from the seeded roster.
    let roster = service.list();
    assert_eq!(roster.len(), 4);

    // Case-insensitive search finds the senior server.
    let found = service.query(&StaffQuery {
        search: "kimani".to_string(),
        ..StaffQuery::default()
    });
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Sarah Kimani");

    // Hire a new chef and hand the credentials over two channels.
    let (record, bundle) = service.hire(hire_form()).expect("hire form is valid");
    assert_eq!(record.department, Department::Kitchen);
    assert_eq!(record.role, Role::Chef);
    assert_eq!(bundle.password, "Seed#Pass9xQ");

    service.share_credentials(&bundle, ShareChannel::Email);
    service.share_credentials(&bundle, ShareChannel::WhatsApp);
    let handoffs = publisher.handoffs.lock().expect("publisher mutex poisoned");
    assert_eq!(handoffs.len(), 2);
    assert!(handoffs[0].destination.starts_with("mailto:"));
    assert!(handoffs[1].destination.starts_with("https://wa.me/?text="));
    drop(handoffs);

    // The snapshot now holds five records; a reopened store sees them all.
    let reopened = StaffStore::open(blob.clone()).expect("snapshot reopens");
    assert_eq!(reopened.list().len(), 5);
    assert_eq!(reopened.list(), service.list());

    // Offboard the new hire; only their record disappears.
    let removed = service
        .remove(record.id, DeleteConfirmation::Confirmed)
        .expect("confirmed removal succeeds");
    assert_eq!(removed.id, record.id);

    let after = service.list();
    assert_eq!(after.len(), 4);
    assert!(after.iter().all(|member| member.id != record.id));

    // The removal is durable too.
    let final_state = StaffStore::open(blob).expect("snapshot reopens");
    assert_eq!(final_state.list().len(), 4);
}

#[test]
fn dashboard_view_sorts_active_payroll_descending() {
    let service = StaffDirectoryService::open(
        SharedBlob::default(),
        Arc::new(CapturingPublisher::default()),
    )
    .expect("service seeds an empty snapshot");

    let by_salary = service.query(&StaffQuery {
        sort_key: SortKey::Salary,
        sort_order: SortOrder::Desc,
        ..StaffQuery::default()
    });
    let salaries: Vec<u64> = by_salary.iter().map(|member| member.salary).collect();
    assert_eq!(salaries, [1_800_000, 1_200_000, 800_000, 600_000]);

    let active_service = service.query(&StaffQuery {
        department: DepartmentFilter::Only(Department::Service),
        status: StatusFilter::Only(StaffStatus::Active),
        ..StaffQuery::default()
    });
    assert_eq!(active_service.len(), 1);
    assert_eq!(active_service[0].name, "Sarah Kimani");

    let summary = service.summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.total_monthly_payroll, 4_400_000);
}
