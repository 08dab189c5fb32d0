use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::domain::{
    Department, EmergencyContact, PerformanceSnapshot, Role, ShiftSchedule, StaffId, StaffRecord,
    StaffStatus, DAY_OFF,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn permissions(grants: &[&str]) -> BTreeSet<String> {
    grants.iter().map(|grant| grant.to_string()).collect()
}

fn week(weekday: &str, saturday: &str, sunday: &str) -> ShiftSchedule {
    ShiftSchedule {
        monday: weekday.to_string(),
        tuesday: weekday.to_string(),
        wednesday: weekday.to_string(),
        thursday: weekday.to_string(),
        friday: weekday.to_string(),
        saturday: saturday.to_string(),
        sunday: sunday.to_string(),
    }
}

/// Fixed roster used on first start and when the persisted blob cannot be
/// read back.
pub fn seed_roster() -> Vec<StaffRecord> {
    vec![
        StaffRecord {
            id: StaffId(1),
            name: "John Mwalimu".to_string(),
            email: "john.chef@restaurant.com".to_string(),
            phone: "+255123456789".to_string(),
            address: "123 Kitchen St, Dar es Salaam".to_string(),
            position: "Head Chef".to_string(),
            department: Department::Kitchen,
            role: Role::Chef,
            hire_date: date(2023, 1, 15),
            salary: 1_200_000,
            status: StaffStatus::Active,
            permissions: permissions(&["kitchen_access", "menu_management", "inventory_view"]),
            shift_schedule: week("06:00-14:00", DAY_OFF, DAY_OFF),
            performance: PerformanceSnapshot {
                rating: 4.8,
                orders_handled: 1250,
                customer_feedback: 4.7,
                punctuality: 95,
            },
            emergency_contact: EmergencyContact {
                name: "Mary Mwalimu".to_string(),
                phone: "+255987654321".to_string(),
                relationship: "Wife".to_string(),
            },
        },
        StaffRecord {
            id: StaffId(2),
            name: "Sarah Kimani".to_string(),
            email: "sarah.server@restaurant.com".to_string(),
            phone: "+255987654321".to_string(),
            address: "456 Service Ave, Arusha".to_string(),
            position: "Senior Server".to_string(),
            department: Department::Service,
            role: Role::Server,
            hire_date: date(2023, 3, 20),
            salary: 800_000,
            status: StaffStatus::Active,
            permissions: permissions(&["pos_access", "customer_service", "order_management"]),
            shift_schedule: ShiftSchedule {
                wednesday: DAY_OFF.to_string(),
                ..week("10:00-18:00", "10:00-18:00", "10:00-18:00")
            },
            performance: PerformanceSnapshot {
                rating: 4.6,
                orders_handled: 890,
                customer_feedback: 4.8,
                punctuality: 92,
            },
            emergency_contact: EmergencyContact {
                name: "James Kimani".to_string(),
                phone: "+255456789123".to_string(),
                relationship: "Brother".to_string(),
            },
        },
        StaffRecord {
            id: StaffId(3),
            name: "Michael Juma".to_string(),
            email: "michael.manager@restaurant.com".to_string(),
            phone: "+255456789123".to_string(),
            address: "789 Management Blvd, Mwanza".to_string(),
            position: "Restaurant Manager".to_string(),
            department: Department::Management,
            role: Role::Manager,
            hire_date: date(2022, 11, 1),
            salary: 1_800_000,
            status: StaffStatus::Active,
            permissions: permissions(&[
                "full_access",
                "staff_management",
                "financial_reports",
                "system_admin",
            ]),
            shift_schedule: week("08:00-17:00", "09:00-15:00", DAY_OFF),
            performance: PerformanceSnapshot {
                rating: 4.9,
                orders_handled: 0,
                customer_feedback: 4.9,
                punctuality: 98,
            },
            emergency_contact: EmergencyContact {
                name: "Grace Juma".to_string(),
                phone: "+255789123456".to_string(),
                relationship: "Mother".to_string(),
            },
        },
        StaffRecord {
            id: StaffId(4),
            name: "Alice Mwangi".to_string(),
            email: "alice.cashier@restaurant.com".to_string(),
            phone: "+255789123456".to_string(),
            address: "321 Payment St, Dodoma".to_string(),
            position: "Cashier".to_string(),
            department: Department::Service,
            role: Role::Cashier,
            hire_date: date(2024, 2, 10),
            salary: 600_000,
            status: StaffStatus::OnLeave,
            permissions: permissions(&["pos_access", "payment_processing"]),
            shift_schedule: week("09:00-17:00", DAY_OFF, DAY_OFF),
            performance: PerformanceSnapshot {
                rating: 4.3,
                orders_handled: 650,
                customer_feedback: 4.4,
                punctuality: 88,
            },
            emergency_contact: EmergencyContact {
                name: "Peter Mwangi".to_string(),
                phone: "+255321654987".to_string(),
                relationship: "Husband".to_string(),
            },
        },
    ]
}
