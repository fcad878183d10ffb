//! Dashboard aggregates
//!
//! Summary counts over the entity collections. The active-leave count
//! depends on the current calendar day, so aggregates are recomputed on
//! every call and never memoized across days.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Department, Employee, LeaveRequest, LeaveStatus};

/// Counts shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAggregates {
    pub total_employees: usize,
    /// Approved leave requests whose end date has not passed
    pub active_leaves: usize,
    pub pending_requests: usize,
    pub total_departments: usize,
}

/// Compute the dashboard aggregates as of today
pub fn dashboard_aggregates(
    employees: &[Employee],
    requests: &[LeaveRequest],
    departments: &[Department],
) -> DashboardAggregates {
    dashboard_aggregates_at(employees, requests, departments, Utc::now().date_naive())
}

/// Compute the dashboard aggregates as of a given day
pub fn dashboard_aggregates_at(
    employees: &[Employee],
    requests: &[LeaveRequest],
    departments: &[Department],
    today: NaiveDate,
) -> DashboardAggregates {
    let active_leaves = requests
        .iter()
        .filter(|req| req.status == LeaveStatus::Approved && req.end_date >= today)
        .count();
    let pending_requests = requests
        .iter()
        .filter(|req| req.status == LeaveStatus::Pending)
        .count();

    DashboardAggregates {
        total_employees: employees.len(),
        active_leaves,
        pending_requests,
        total_departments: departments.len(),
    }
}
