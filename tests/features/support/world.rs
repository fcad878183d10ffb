//! Test world for Cucumber scenarios

use std::collections::HashMap;
use std::fmt;

use cucumber::World;

use staffhub::models::{
    AttendanceRecord, CreateEmployeeRequest, Employee, EmployeeStatus, EntityId, LeaveRequest,
};
use staffhub::store::HrStore;
use staffhub::AppError;

/// Test world that maintains state across scenario steps
#[derive(World)]
#[world(init = Self::new)]
pub struct TestWorld {
    /// Isolated store, latency disabled
    pub store: HrStore,

    /// Employees created by the scenario, by full name
    pub employees: HashMap<String, EntityId>,

    /// Attendance record the scenario is working with
    pub current_record: Option<AttendanceRecord>,

    /// Leave request the scenario is working with
    pub current_request: Option<LeaveRequest>,

    /// Result of the last directory search
    pub search_results: Vec<Employee>,

    /// Error from the last failed operation
    pub last_error: Option<AppError>,
}

impl TestWorld {
    fn new() -> Self {
        Self {
            store: HrStore::for_tests(),
            employees: HashMap::new(),
            current_record: None,
            current_request: None,
            search_results: Vec::new(),
            last_error: None,
        }
    }

    /// Create an employee from a "First Last" name and remember its id
    pub async fn add_employee(
        &mut self,
        full_name: &str,
        department: &str,
        position: &str,
    ) -> EntityId {
        let (first, last) = full_name
            .split_once(' ')
            .unwrap_or((full_name, "Example"));
        let serial = self.employees.len() + 1;

        let employee = self
            .store
            .employees
            .create(CreateEmployeeRequest {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!(
                    "{}.{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                phone: String::new(),
                department: department.to_string(),
                position: position.to_string(),
                hire_date: None,
                status: EmployeeStatus::Active,
                manager_id: None,
                location: String::new(),
                employee_code: format!("EMP-{:03}", serial),
            })
            .await
            .expect("Failed to create employee");

        self.employees.insert(full_name.to_string(), employee.id);
        employee.id
    }

    /// Id of a previously created employee
    pub fn employee_id(&self, full_name: &str) -> EntityId {
        *self
            .employees
            .get(full_name)
            .unwrap_or_else(|| panic!("Unknown employee in scenario: {}", full_name))
    }

    /// Refresh the current leave request from the store
    pub async fn reload_request(&mut self) -> LeaveRequest {
        let id = self
            .current_request
            .as_ref()
            .expect("No leave request in scenario")
            .id;
        self.store
            .leave_requests
            .get_by_id(id)
            .await
            .expect("Leave request vanished")
    }
}

impl fmt::Debug for TestWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestWorld")
            .field("employees", &self.employees)
            .field("current_record", &self.current_record)
            .field("current_request", &self.current_request)
            .field("search_results", &self.search_results.len())
            .field("last_error", &self.last_error)
            .finish()
    }
}
