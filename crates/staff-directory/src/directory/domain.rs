use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned once at creation time and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StaffId(pub i64);

impl StaffId {
    /// Sentinel used by callers that want the store to assign a fresh id.
    pub const UNASSIGNED: StaffId = StaffId(0);

    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Department axis used for filtering and headcount reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Kitchen,
    Service,
    Management,
    Admin,
}

impl Department {
    pub const fn label(self) -> &'static str {
        match self {
            Department::Kitchen => "kitchen",
            Department::Service => "service",
            Department::Management => "management",
            Department::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "kitchen" => Some(Department::Kitchen),
            "service" => Some(Department::Service),
            "management" => Some(Department::Management),
            "admin" => Some(Department::Admin),
            _ => None,
        }
    }

    /// Classify free-text department input from the hire form.
    ///
    /// Substring heuristic carried over from the legacy intake flow: kitchen
    /// keywords or a chef hire land in the kitchen, front-of-house keywords
    /// or a server hire land in service, and only text matching neither
    /// reaches the management and admin keywords. Deliberately not
    /// strengthened beyond the documented keywords.
    pub fn classify(free_text: &str, role: HireRole) -> Self {
        let text = free_text.to_ascii_lowercase();
        if text.contains("kitchen") || text.contains("cook") || role == HireRole::Chef {
            Department::Kitchen
        } else if text.contains("service")
            || text.contains("server")
            || text.contains("waiter")
            || text.contains("front")
            || role == HireRole::Server
        {
            Department::Service
        } else if text.contains("management") || text.contains("manager") {
            Department::Management
        } else if text.contains("admin") {
            Department::Admin
        } else {
            match role {
                HireRole::Chef => Department::Kitchen,
                HireRole::Server => Department::Service,
            }
        }
    }
}

/// Role axis driving permission defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Chef,
    Server,
    Cashier,
    Cleaner,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Chef => "chef",
            Role::Server => "server",
            Role::Cashier => "cashier",
            Role::Cleaner => "cleaner",
        }
    }
}

/// Roles offered on the inline hire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HireRole {
    Server,
    Chef,
}

impl HireRole {
    pub const fn role(self) -> Role {
        match self {
            HireRole::Server => Role::Server,
            HireRole::Chef => Role::Chef,
        }
    }

    pub const fn position(self) -> &'static str {
        match self {
            HireRole::Server => "Server",
            HireRole::Chef => "Chef",
        }
    }

    pub fn default_permissions(self) -> BTreeSet<String> {
        let grant = match self {
            HireRole::Server => "pos_access",
            HireRole::Chef => "kitchen_access",
        };
        BTreeSet::from([grant.to_string()])
    }
}

/// Employment status tracked per staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    Active,
    Inactive,
    OnLeave,
}

impl StaffStatus {
    pub const fn label(self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Inactive => "inactive",
            StaffStatus::OnLeave => "on_leave",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(StaffStatus::Active),
            "inactive" => Some(StaffStatus::Inactive),
            "on_leave" => Some(StaffStatus::OnLeave),
            _ => None,
        }
    }
}

/// Marker for days without a scheduled shift.
pub const DAY_OFF: &str = "OFF";

/// Weekly schedule; every weekday is always present, either a time range
/// ("08:00-16:00") or [`DAY_OFF`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl ShiftSchedule {
    /// Business-hours template applied to new hires.
    pub fn business_hours() -> Self {
        let shift = "08:00-16:00".to_string();
        Self {
            monday: shift.clone(),
            tuesday: shift.clone(),
            wednesday: shift.clone(),
            thursday: shift.clone(),
            friday: shift.clone(),
            saturday: shift,
            sunday: DAY_OFF.to_string(),
        }
    }
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        Self::business_hours()
    }
}

/// Performance metrics: rating and customer feedback on a 0-5 scale,
/// punctuality as a 0-100 percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub rating: f32,
    pub orders_handled: u32,
    pub customer_feedback: f32,
    pub punctuality: u8,
}

impl PerformanceSnapshot {
    /// Baseline granted to new hires before any shifts are worked.
    pub fn new_hire() -> Self {
        Self {
            rating: 5.0,
            orders_handled: 0,
            customer_feedback: 5.0,
            punctuality: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

impl EmergencyContact {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            relationship: String::new(),
        }
    }
}

/// One employee's profile, schedule, permissions, and performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub id: StaffId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub position: String,
    pub department: Department,
    pub role: Role,
    pub hire_date: NaiveDate,
    /// Monthly salary; strictly positive when set through a validated form.
    pub salary: u64,
    pub status: StaffStatus,
    pub permissions: BTreeSet<String>,
    pub shift_schedule: ShiftSchedule,
    pub performance: PerformanceSnapshot,
    pub emergency_contact: EmergencyContact,
}

/// Fixed catalog the `permissions` set draws from.
pub const PERMISSION_CATALOG: &[&str] = &[
    "kitchen_access",
    "menu_management",
    "inventory_view",
    "pos_access",
    "customer_service",
    "order_management",
    "payment_processing",
    "full_access",
    "staff_management",
    "financial_reports",
    "system_admin",
];

/// One-time credential hand-off for a new or reset account. Displayed once
/// and never written back onto the staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialBundle {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
}
