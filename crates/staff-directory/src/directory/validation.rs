use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Department, HireRole, Role, StaffStatus};

/// Per-field validation outcome. Rules are evaluated independently so that
/// every failing field surfaces its message in one pass; validation never
/// raises, a failed form is data, not an exception.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.errors.insert(field.to_string(), message.to_string());
        }
    }

    fn reject(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }
}

/// Inline new-hire form: minimal intake plus generated login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HireForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "HireForm::default_role")]
    pub role: HireRole,
    /// Free text ("Kitchen", "Front of House", ...) classified into a
    /// [`Department`] at record creation.
    #[serde(default)]
    pub department: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub hire_date: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    /// Generated or manually entered; must exist before submission.
    #[serde(default)]
    pub password: String,
}

impl HireForm {
    fn default_role() -> HireRole {
        HireRole::Server
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn parsed_hire_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.hire_date.trim(), "%Y-%m-%d").ok()
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        report.require("first_name", &self.first_name, "First name is required");
        report.require("last_name", &self.last_name, "Last name is required");
        validate_email(&mut report, &self.email);
        report.require("phone", &self.phone, "Phone number is required");
        report.require("department", &self.department, "Department is required");

        if self.hire_date.trim().is_empty() {
            report.reject("hire_date", "Hire date is required");
        } else if self.parsed_hire_date().is_none() {
            report.reject("hire_date", "Hire date must be a valid YYYY-MM-DD date");
        }

        if let Some(salary) = &self.salary {
            validate_optional_salary(&mut report, salary);
        }

        report.require("password", &self.password, "Password is required");

        report
    }
}

/// Full staff-profile form used by the add/edit modal; carries the complete
/// attribute set including the emergency contact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub position: String,
    pub department: Department,
    pub role: Role,
    #[serde(default)]
    pub salary: String,
    #[serde(default = "ProfileForm::default_status")]
    pub status: StaffStatus,
    #[serde(default)]
    pub emergency_name: String,
    #[serde(default)]
    pub emergency_phone: String,
    #[serde(default)]
    pub emergency_relationship: String,
}

impl ProfileForm {
    fn default_status() -> StaffStatus {
        StaffStatus::Active
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        report.require("name", &self.name, "Staff name is required");
        validate_email(&mut report, &self.email);
        report.require("phone", &self.phone, "Phone number is required");
        report.require("position", &self.position, "Position is required");

        if self.salary.trim().is_empty() {
            report.reject("salary", "Salary is required");
        } else {
            validate_optional_salary(&mut report, &self.salary);
        }

        report.require(
            "emergency_name",
            &self.emergency_name,
            "Emergency contact name is required",
        );
        report.require(
            "emergency_phone",
            &self.emergency_phone,
            "Emergency contact phone is required",
        );

        report
    }

    pub fn parsed_salary(&self) -> Option<u64> {
        parse_salary(&self.salary)
    }
}

fn validate_email(report: &mut ValidationReport, email: &str) {
    if email.trim().is_empty() {
        report.reject("email", "Email is required");
    } else if !looks_like_email(email.trim()) {
        report.reject("email", "Email is invalid");
    }
}

fn validate_optional_salary(report: &mut ValidationReport, raw: &str) {
    if raw.trim().is_empty() {
        return;
    }
    if parse_salary(raw).is_none() {
        report.reject("salary", "Please enter a valid salary amount");
    }
}

pub(crate) fn parse_salary(raw: &str) -> Option<u64> {
    let amount: f64 = raw.trim().parse().ok()?;
    if amount > 0.0 && amount.is_finite() {
        Some(amount.round() as u64)
    } else {
        None
    }
}

/// Basic `local@domain.tld` shape. The check is unanchored: it passes when
/// any whitespace-delimited part of the input has non-space characters
/// around one `@` and a `.` somewhere in the domain part. Intentionally no
/// stricter than that.
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        let Some((local, domain)) = token.split_once('@') else {
            return false;
        };
        let Some((host, tail)) = domain.rsplit_once('.') else {
            return false;
        };
        !local.is_empty() && !host.is_empty() && !tail.is_empty()
    })
}
