//! List filtering rules
//!
//! Pure predicate filtering over the entity collections. Inputs are
//! never mutated and source order is preserved; no sort key exists
//! anywhere in this domain.

use crate::models::{Employee, EntityId, LeaveRequest, LeaveStatus};

/// Employee directory filter
///
/// Empty or absent fields are pass-through; populated fields AND
/// together.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring, matched against full name OR email
    /// OR external employee code
    pub search_term: Option<String>,
    /// Exact department name
    pub department: Option<String>,
    /// Exact position
    pub position: Option<String>,
}

impl EmployeeFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }
}

/// Leave request list filter
#[derive(Debug, Clone, Default)]
pub struct LeaveFilter {
    /// Case-insensitive substring, matched against the requester's
    /// resolved full name OR the leave type
    pub search_term: Option<String>,
    /// Exact status
    pub status: Option<LeaveStatus>,
}

fn active_term(term: &Option<String>) -> Option<String> {
    term.as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn active_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Filter the employee directory
pub fn filter_employees(employees: &[Employee], filter: &EmployeeFilter) -> Vec<Employee> {
    let term = active_term(&filter.search_term);
    let department = active_value(&filter.department);
    let position = active_value(&filter.position);

    employees
        .iter()
        .filter(|emp| {
            if let Some(ref term) = term {
                let matches = emp.full_name().to_lowercase().contains(term)
                    || emp.email.to_lowercase().contains(term)
                    || emp.employee_code.to_lowercase().contains(term);
                if !matches {
                    return false;
                }
            }
            if let Some(department) = department {
                if emp.department != department {
                    return false;
                }
            }
            if let Some(position) = position {
                if emp.position != position {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Filter leave requests, resolving requester names through the
/// employee collection
///
/// A request whose employee id resolves to nothing contributes an
/// empty name, so it can still be found by leave type.
pub fn filter_leave_requests(
    requests: &[LeaveRequest],
    employees: &[Employee],
    filter: &LeaveFilter,
) -> Vec<LeaveRequest> {
    let term = active_term(&filter.search_term);

    requests
        .iter()
        .filter(|req| {
            if let Some(ref term) = term {
                let name = resolve_name(employees, req.employee_id).to_lowercase();
                let matches =
                    name.contains(term.as_str()) || req.leave_type.to_lowercase().contains(term);
                if !matches {
                    return false;
                }
            }
            if let Some(status) = filter.status {
                if req.status != status {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Distinct positions in first-seen order, for the role filter dropdown
pub fn unique_positions(employees: &[Employee]) -> Vec<String> {
    let mut seen = Vec::new();
    for emp in employees {
        if !emp.position.is_empty() && !seen.contains(&emp.position) {
            seen.push(emp.position.clone());
        }
    }
    seen
}

fn resolve_name(employees: &[Employee], employee_id: EntityId) -> String {
    employees
        .iter()
        .find(|emp| emp.id == employee_id)
        .map(|emp| emp.full_name())
        .unwrap_or_default()
}
