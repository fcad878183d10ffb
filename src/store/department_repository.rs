//! Department repository

use std::time::Duration;

use crate::models::{CreateDepartmentRequest, Department, EntityId, UpdateDepartmentRequest};
use crate::store::{Collection, Latency, StoreRecord};
use crate::utils::error::AppResult;

impl StoreRecord for Department {
    const KIND: &'static str = "Department";

    fn id(&self) -> EntityId {
        self.id
    }
}

// Simulated latency per operation
const GET_ALL_DELAY: Duration = Duration::from_millis(200);
const GET_BY_ID_DELAY: Duration = Duration::from_millis(150);
const CREATE_DELAY: Duration = Duration::from_millis(350);
const UPDATE_DELAY: Duration = Duration::from_millis(300);
const DELETE_DELAY: Duration = Duration::from_millis(250);

#[derive(Clone)]
pub struct DepartmentRepository {
    collection: Collection<Department>,
}

impl DepartmentRepository {
    pub fn new(latency: Latency) -> Self {
        Self {
            collection: Collection::new(latency),
        }
    }

    pub async fn preload(&self, departments: Vec<Department>) {
        self.collection.preload(departments).await;
    }

    pub async fn get_all(&self) -> Vec<Department> {
        self.collection.get_all(GET_ALL_DELAY).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> AppResult<Department> {
        self.collection.get_by_id(GET_BY_ID_DELAY, id).await
    }

    /// Create a department; `employee_count` starts at 0
    pub async fn create(&self, req: CreateDepartmentRequest) -> AppResult<Department> {
        let department = self
            .collection
            .insert(CREATE_DELAY, |id| Department {
                id,
                name: req.name,
                employee_count: 0,
            })
            .await;
        Ok(department)
    }

    pub async fn update(&self, id: EntityId, req: UpdateDepartmentRequest) -> AppResult<Department> {
        self.collection
            .update_with(UPDATE_DELAY, id, |dept| {
                if let Some(name) = req.name {
                    dept.name = name;
                }
                if let Some(employee_count) = req.employee_count {
                    dept.employee_count = employee_count;
                }
            })
            .await
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<bool> {
        self.collection.delete(DELETE_DELAY, id).await
    }
}
