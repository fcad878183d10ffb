//! Department model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::EntityId;

/// Department entity
///
/// `name` is the display key other records reference. `employee_count`
/// is denormalized: it starts at 0 on creation and is only changed by
/// explicit updates, never recomputed from the employee collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub employee_count: u32,
}

/// Request to create a new department
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[validate(custom(function = crate::utils::validation::validate_department_name))]
    pub name: String,
}

/// Request to update a department (field-wise merge)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub employee_count: Option<u32>,
}
