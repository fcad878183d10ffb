//! Employee repository

use std::time::Duration;

use chrono::Utc;

use crate::models::{CreateEmployeeRequest, Employee, EntityId, UpdateEmployeeRequest};
use crate::store::{Collection, Latency, StoreRecord};
use crate::utils::error::AppResult;

impl StoreRecord for Employee {
    const KIND: &'static str = "Employee";

    fn id(&self) -> EntityId {
        self.id
    }
}

// Simulated latency per operation
const GET_ALL_DELAY: Duration = Duration::from_millis(300);
const GET_BY_ID_DELAY: Duration = Duration::from_millis(200);
const CREATE_DELAY: Duration = Duration::from_millis(400);
const UPDATE_DELAY: Duration = Duration::from_millis(350);
const DELETE_DELAY: Duration = Duration::from_millis(250);

#[derive(Clone)]
pub struct EmployeeRepository {
    collection: Collection<Employee>,
}

impl EmployeeRepository {
    pub fn new(latency: Latency) -> Self {
        Self {
            collection: Collection::new(latency),
        }
    }

    pub async fn preload(&self, employees: Vec<Employee>) {
        self.collection.preload(employees).await;
    }

    pub async fn get_all(&self) -> Vec<Employee> {
        self.collection.get_all(GET_ALL_DELAY).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> AppResult<Employee> {
        self.collection.get_by_id(GET_BY_ID_DELAY, id).await
    }

    /// Create an employee; `hire_date` defaults to today when omitted
    pub async fn create(&self, req: CreateEmployeeRequest) -> AppResult<Employee> {
        let hire_date = req.hire_date.unwrap_or_else(|| Utc::now().date_naive());
        let employee = self
            .collection
            .insert(CREATE_DELAY, |id| Employee {
                id,
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                phone: req.phone,
                department: req.department,
                position: req.position,
                hire_date,
                status: req.status,
                manager_id: req.manager_id,
                location: req.location,
                employee_code: req.employee_code,
            })
            .await;
        Ok(employee)
    }

    /// Merge an update into an existing employee
    pub async fn update(&self, id: EntityId, req: UpdateEmployeeRequest) -> AppResult<Employee> {
        self.collection
            .update_with(UPDATE_DELAY, id, |emp| {
                if let Some(first_name) = req.first_name {
                    emp.first_name = first_name;
                }
                if let Some(last_name) = req.last_name {
                    emp.last_name = last_name;
                }
                if let Some(email) = req.email {
                    emp.email = email;
                }
                if let Some(phone) = req.phone {
                    emp.phone = phone;
                }
                if let Some(department) = req.department {
                    emp.department = department;
                }
                if let Some(position) = req.position {
                    emp.position = position;
                }
                if let Some(hire_date) = req.hire_date {
                    emp.hire_date = hire_date;
                }
                if let Some(status) = req.status {
                    emp.status = status;
                }
                if let Some(manager_id) = req.manager_id {
                    emp.manager_id = manager_id;
                }
                if let Some(location) = req.location {
                    emp.location = location;
                }
                if let Some(employee_code) = req.employee_code {
                    emp.employee_code = employee_code;
                }
            })
            .await
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<bool> {
        self.collection.delete(DELETE_DELAY, id).await
    }
}
