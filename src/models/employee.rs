//! Employee model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::EntityId;

/// Employment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "active"),
            EmployeeStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            _ => Err(format!("Invalid employee status: {}", s)),
        }
    }
}

/// Employee entity
///
/// `department` holds a department name rather than an id. This mirrors
/// the fixture format; renaming a department does not rewrite employee
/// records pointing at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub manager_id: Option<EntityId>,
    pub location: String,
    /// External display code (e.g. "EMP-0042")
    #[serde(rename = "employeeId")]
    pub employee_code: String,
}

impl Employee {
    /// Full name as rendered in directory listings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request to create a new employee
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(length(min = 1))]
    pub position: String,
    /// Defaults to today when omitted
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub manager_id: Option<EntityId>,
    #[serde(default)]
    pub location: String,
    #[validate(custom(function = crate::utils::validation::validate_employee_code))]
    #[serde(rename = "employeeId")]
    pub employee_code: String,
}

/// Request to update an employee (field-wise merge)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub status: Option<EmployeeStatus>,
    pub manager_id: Option<Option<EntityId>>,
    pub location: Option<String>,
    #[validate(custom(function = crate::utils::validation::validate_employee_code))]
    #[serde(rename = "employeeId")]
    pub employee_code: Option<String>,
}
