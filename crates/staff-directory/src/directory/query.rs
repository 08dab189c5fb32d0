use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::{Department, StaffRecord, StaffStatus};

/// Combined search + filter + sort configuration producing the visible
/// staff subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffQuery {
    pub search: String,
    pub department: DepartmentFilter,
    pub status: StatusFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl Default for StaffQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: DepartmentFilter::All,
            status: StatusFilter::All,
            sort_key: SortKey::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentFilter {
    All,
    Only(Department),
}

impl DepartmentFilter {
    /// "all" (or anything unrecognized) widens to the full roster; a known
    /// department name narrows to it.
    pub fn parse(value: &str) -> Self {
        match Department::parse(value) {
            Some(department) => DepartmentFilter::Only(department),
            None => DepartmentFilter::All,
        }
    }

    fn matches(self, department: Department) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(only) => only == department,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(StaffStatus),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        match StaffStatus::parse(value) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::All,
        }
    }

    fn matches(self, status: StaffStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => only == status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    HireDate,
    Salary,
    Performance,
}

impl SortKey {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hire_date" => SortKey::HireDate,
            "salary" => SortKey::Salary,
            "performance" => SortKey::Performance,
            _ => SortKey::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Pure function over the roster: identical inputs always yield the same
/// ordered output. Recomputed in full on every call; the roster stays small
/// enough that indexing would buy nothing.
pub fn run_query(records: &[StaffRecord], query: &StaffQuery) -> Vec<StaffRecord> {
    let needle = query.search.trim().to_lowercase();

    let mut matches: Vec<StaffRecord> = records
        .iter()
        .filter(|record| {
            matches_search(record, &needle)
                && query.department.matches(record.department)
                && query.status.matches(record.status)
        })
        .cloned()
        .collect();

    matches.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_key);
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    matches
}

fn matches_search(record: &StaffRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle)
        || record.email.to_lowercase().contains(needle)
        || record.position.to_lowercase().contains(needle)
}

fn compare(a: &StaffRecord, b: &StaffRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::HireDate => a.hire_date.cmp(&b.hire_date),
        SortKey::Salary => a.salary.cmp(&b.salary),
        SortKey::Performance => a.performance.rating.total_cmp(&b.performance.rating),
    }
}

/// Headcount and payroll rollup for the directory dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorySummary {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub kitchen: usize,
    pub service: usize,
    pub management: usize,
    pub admin: usize,
    pub total_monthly_payroll: u64,
    pub average_rating: f32,
}

pub fn summarize(records: &[StaffRecord]) -> DirectorySummary {
    let count_status =
        |status: StaffStatus| records.iter().filter(|r| r.status == status).count();
    let count_department =
        |department: Department| records.iter().filter(|r| r.department == department).count();

    let total = records.len();
    let average_rating = if total == 0 {
        0.0
    } else {
        records.iter().map(|r| r.performance.rating).sum::<f32>() / total as f32
    };

    DirectorySummary {
        total,
        active: count_status(StaffStatus::Active),
        on_leave: count_status(StaffStatus::OnLeave),
        kitchen: count_department(Department::Kitchen),
        service: count_department(Department::Service),
        management: count_department(Department::Management),
        admin: count_department(Department::Admin),
        total_monthly_payroll: records.iter().map(|r| r.salary).sum(),
        average_rating,
    }
}
