//! Bundled sample fixtures
//!
//! Stand-in data for the future backend. Ids follow the
//! creation-timestamp scheme used for live records.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    AttendanceRecord, AttendanceStatus, Department, Document, Employee, EmployeeStatus,
    LeaveRequest, LeaveStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1715000000001,
            first_name: "Anna".to_string(),
            last_name: "Kovacs".to_string(),
            email: "anna.kovacs@staffhub.dev".to_string(),
            phone: "+1-555-0101".to_string(),
            department: "Engineering".to_string(),
            position: "Software Engineer".to_string(),
            hire_date: date(2022, 3, 14),
            status: EmployeeStatus::Active,
            manager_id: Some(1715000000004),
            location: "Berlin".to_string(),
            employee_code: "EMP-001".to_string(),
        },
        Employee {
            id: 1715000000002,
            first_name: "Marcus".to_string(),
            last_name: "Webb".to_string(),
            email: "marcus.webb@staffhub.dev".to_string(),
            phone: "+1-555-0102".to_string(),
            department: "Sales".to_string(),
            position: "Account Manager".to_string(),
            hire_date: date(2021, 8, 2),
            status: EmployeeStatus::Active,
            manager_id: None,
            location: "London".to_string(),
            employee_code: "EMP-002".to_string(),
        },
        Employee {
            id: 1715000000003,
            first_name: "Joanne".to_string(),
            last_name: "Park".to_string(),
            email: "joanne.park@staffhub.dev".to_string(),
            phone: "+1-555-0103".to_string(),
            department: "Engineering".to_string(),
            position: "QA Engineer".to_string(),
            hire_date: date(2023, 1, 9),
            status: EmployeeStatus::Active,
            manager_id: Some(1715000000004),
            location: "Berlin".to_string(),
            employee_code: "EMP-003".to_string(),
        },
        Employee {
            id: 1715000000004,
            first_name: "Priya".to_string(),
            last_name: "Raman".to_string(),
            email: "priya.raman@staffhub.dev".to_string(),
            phone: "+1-555-0104".to_string(),
            department: "Engineering".to_string(),
            position: "Engineering Manager".to_string(),
            hire_date: date(2019, 11, 18),
            status: EmployeeStatus::Active,
            manager_id: None,
            location: "Berlin".to_string(),
            employee_code: "EMP-004".to_string(),
        },
        Employee {
            id: 1715000000005,
            first_name: "Tomas".to_string(),
            last_name: "Lindqvist".to_string(),
            email: "tomas.lindqvist@staffhub.dev".to_string(),
            phone: "+1-555-0105".to_string(),
            department: "Finance".to_string(),
            position: "Accountant".to_string(),
            hire_date: date(2020, 5, 25),
            status: EmployeeStatus::Inactive,
            manager_id: None,
            location: "Stockholm".to_string(),
            employee_code: "EMP-005".to_string(),
        },
    ]
}

pub fn departments() -> Vec<Department> {
    vec![
        Department {
            id: 1715000001001,
            name: "Engineering".to_string(),
            employee_count: 3,
        },
        Department {
            id: 1715000001002,
            name: "Sales".to_string(),
            employee_count: 1,
        },
        Department {
            id: 1715000001003,
            name: "Finance".to_string(),
            employee_count: 1,
        },
        Department {
            id: 1715000001004,
            name: "Human Resources".to_string(),
            employee_count: 0,
        },
    ]
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: 1715000002001,
            employee_id: 1715000000001,
            leave_type: "vacation".to_string(),
            start_date: date(2025, 7, 14),
            end_date: date(2025, 7, 25),
            reason: Some("Summer holiday".to_string()),
            status: LeaveStatus::Pending,
            approved_by: None,
            request_date: date(2025, 6, 2),
        },
        LeaveRequest {
            id: 1715000002002,
            employee_id: 1715000000002,
            leave_type: "sick".to_string(),
            start_date: date(2025, 5, 12),
            end_date: date(2025, 5, 13),
            reason: None,
            status: LeaveStatus::Approved,
            approved_by: Some("HR Admin".to_string()),
            request_date: date(2025, 5, 12),
        },
        LeaveRequest {
            id: 1715000002003,
            employee_id: 1715000000003,
            leave_type: "personal".to_string(),
            start_date: date(2025, 6, 20),
            end_date: date(2025, 6, 20),
            reason: Some("Moving day".to_string()),
            status: LeaveStatus::Rejected,
            approved_by: Some("HR Admin".to_string()),
            request_date: date(2025, 6, 10),
        },
        LeaveRequest {
            id: 1715000002004,
            employee_id: 1715000000004,
            leave_type: "vacation".to_string(),
            start_date: date(2025, 8, 4),
            end_date: date(2025, 8, 15),
            reason: None,
            status: LeaveStatus::Pending,
            approved_by: None,
            request_date: date(2025, 6, 15),
        },
    ]
}

pub fn attendance_records() -> Vec<AttendanceRecord> {
    let created: DateTime<Utc> = "2025-06-02T06:00:00Z".parse().expect("seed timestamp");
    vec![
        AttendanceRecord {
            id: 1715000003001,
            employee_id: 1715000000001,
            date: date(2025, 6, 2),
            clock_in: Some("2025-06-02T08:55:00+02:00".parse().expect("seed timestamp")),
            clock_out: Some("2025-06-02T17:25:00+02:00".parse().expect("seed timestamp")),
            break_duration: 60,
            total_hours: Some(7.5),
            status: AttendanceStatus::Present,
            notes: None,
            created_at: created,
            updated_at: created,
        },
        AttendanceRecord {
            id: 1715000003002,
            employee_id: 1715000000002,
            date: date(2025, 6, 2),
            clock_in: Some("2025-06-02T10:20:00+01:00".parse().expect("seed timestamp")),
            clock_out: Some("2025-06-02T18:05:00+01:00".parse().expect("seed timestamp")),
            break_duration: 30,
            total_hours: Some(7.25),
            status: AttendanceStatus::Late,
            notes: Some("Train delay".to_string()),
            created_at: created,
            updated_at: created,
        },
        AttendanceRecord {
            id: 1715000003003,
            employee_id: 1715000000003,
            date: date(2025, 6, 2),
            clock_in: Some("2025-06-02T09:00:00+02:00".parse().expect("seed timestamp")),
            clock_out: None,
            break_duration: 0,
            total_hours: None,
            status: AttendanceStatus::Working,
            notes: None,
            created_at: created,
            updated_at: created,
        },
        AttendanceRecord {
            id: 1715000003004,
            employee_id: 1715000000005,
            date: date(2025, 6, 2),
            clock_in: None,
            clock_out: None,
            break_duration: 0,
            total_hours: None,
            status: AttendanceStatus::Absent,
            notes: None,
            created_at: created,
            updated_at: created,
        },
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            id: 1715000004001,
            employee_id: 1715000000001,
            name: "Employment contract".to_string(),
            category: "contract".to_string(),
            upload_date: date(2022, 3, 14),
            notes: None,
        },
        Document {
            id: 1715000004002,
            employee_id: 1715000000001,
            name: "AWS certification".to_string(),
            category: "certificate".to_string(),
            upload_date: date(2024, 2, 1),
            notes: None,
        },
        Document {
            id: 1715000004003,
            employee_id: 1715000000002,
            name: "2024 performance review".to_string(),
            category: "review".to_string(),
            upload_date: date(2025, 1, 20),
            notes: Some("Signed copy".to_string()),
        },
    ]
}
