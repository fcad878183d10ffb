//! Factories for randomized test data
//!
//! Factories build valid create-payloads with randomized identifying
//! fields, for tests that need many distinct records.

use rand::Rng;

use staffhub::models::{
    CreateEmployeeRequest, CreateLeaveRequest, EmployeeStatus, EntityId,
};

const FIRST_NAMES: &[&str] = &["Anna", "Marcus", "Joanne", "Priya", "Tomas", "Lena", "Oscar"];
const LAST_NAMES: &[&str] = &["Kovacs", "Webb", "Park", "Raman", "Lindqvist", "Moreau", "Diaz"];
const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "Finance", "Human Resources"];
const POSITIONS: &[&str] = &[
    "Software Engineer",
    "QA Engineer",
    "Account Manager",
    "Accountant",
];
const LEAVE_TYPES: &[&str] = &["vacation", "sick", "personal"];

fn pick<'a>(options: &'a [&str]) -> &'a str {
    let mut rng = rand::thread_rng();
    options[rng.gen_range(0..options.len())]
}

/// Build a valid employee create payload with randomized fields
pub fn employee_payload() -> CreateEmployeeRequest {
    let mut rng = rand::thread_rng();
    let first = pick(FIRST_NAMES);
    let last = pick(LAST_NAMES);
    let serial: u32 = rng.gen_range(100..10_000);

    CreateEmployeeRequest {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!(
            "{}.{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            serial
        ),
        phone: format!("+1-555-{:04}", rng.gen_range(0..10_000)),
        department: pick(DEPARTMENTS).to_string(),
        position: pick(POSITIONS).to_string(),
        hire_date: None,
        status: EmployeeStatus::Active,
        manager_id: None,
        location: "Berlin".to_string(),
        employee_code: format!("EMP-{:04}", serial),
    }
}

/// Build a valid leave request payload for the given employee
pub fn leave_payload(employee_id: EntityId) -> CreateLeaveRequest {
    let mut rng = rand::thread_rng();
    let start = chrono::Utc::now().date_naive() + chrono::Days::new(rng.gen_range(1..30));

    CreateLeaveRequest {
        employee_id,
        leave_type: pick(LEAVE_TYPES).to_string(),
        start_date: start,
        end_date: start + chrono::Days::new(rng.gen_range(0..10)),
        reason: None,
    }
}
