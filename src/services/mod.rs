//! Business logic services

pub mod attendance_rules;
pub mod dashboard;
pub mod filters;
pub mod leave;

pub use attendance_rules::{AttendanceRules, Classification};
pub use dashboard::{dashboard_aggregates, dashboard_aggregates_at, DashboardAggregates};
pub use filters::{
    filter_employees, filter_leave_requests, unique_positions, EmployeeFilter, LeaveFilter,
};
pub use leave::approve_or_reject;
