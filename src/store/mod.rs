//! Entity store
//!
//! In-memory collections standing in for a future backend. Every
//! operation is asynchronous and, unless disabled, sleeps for an
//! artificial per-operation latency. Collections are
//! copy-on-read: callers always receive clones and submit whole
//! payloads back, so partial mutations are never observable.
//!
//! There is no shared singleton; an [`HrStore`] is constructed
//! explicitly, empty or from seed data, so tests can instantiate
//! isolated stores.

mod attendance_repository;
mod collection;
mod department_repository;
mod document_repository;
mod employee_repository;
mod leave_request_repository;
pub mod seed;

pub use attendance_repository::AttendanceRepository;
pub use collection::{Collection, StoreRecord};
pub use department_repository::DepartmentRepository;
pub use document_repository::DocumentRepository;
pub use employee_repository::EmployeeRepository;
pub use leave_request_repository::LeaveRequestRepository;

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::Utc;

use crate::config::{AppConfig, AttendancePolicy};
use crate::models::EntityId;

/// Gate for the artificial per-operation delays
#[derive(Debug, Clone)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Disabled latency for tests
    pub fn off() -> Self {
        Self { enabled: false }
    }

    pub async fn simulate(&self, duration: Duration) {
        if self.enabled {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Generator for creation-time ids
///
/// Ids are millisecond timestamps, as in the seed fixtures. Two
/// creations inside the same millisecond would collide, so the
/// generator bumps to one past the previously issued id whenever the
/// clock has not advanced.
#[derive(Debug)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Record an existing id so future ids stay above it
    pub fn observe(&self, id: EntityId) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }

    pub fn next(&self) -> EntityId {
        let now = Utc::now().timestamp_millis();
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .map(|last| now.max(last + 1))
            .unwrap_or(now)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The four core collections plus documents, behind one handle
#[derive(Clone)]
pub struct HrStore {
    pub employees: EmployeeRepository,
    pub departments: DepartmentRepository,
    pub leave_requests: LeaveRequestRepository,
    pub attendance: AttendanceRepository,
    pub documents: DocumentRepository,
}

impl HrStore {
    /// Empty store with the given configuration
    pub fn new(config: &AppConfig) -> Self {
        let latency = Latency::new(config.store.simulate_latency);
        Self::with_latency_and_policy(latency, config.attendance.clone())
    }

    /// Empty store with explicit latency and attendance policy
    pub fn with_latency_and_policy(latency: Latency, policy: AttendancePolicy) -> Self {
        Self {
            employees: EmployeeRepository::new(latency.clone()),
            departments: DepartmentRepository::new(latency.clone()),
            leave_requests: LeaveRequestRepository::new(latency.clone()),
            attendance: AttendanceRepository::new(latency.clone(), policy),
            documents: DocumentRepository::new(latency),
        }
    }

    /// Store preloaded with the bundled sample fixtures
    pub async fn seeded(config: &AppConfig) -> Self {
        let store = Self::new(config);
        store.load_seed_data().await;
        store
    }

    /// Empty store with latency disabled and default policy, for tests
    pub fn for_tests() -> Self {
        Self::with_latency_and_policy(Latency::off(), AttendancePolicy::default())
    }

    async fn load_seed_data(&self) {
        self.employees.preload(seed::employees()).await;
        self.departments.preload(seed::departments()).await;
        self.leave_requests.preload(seed::leave_requests()).await;
        self.attendance.preload(seed::attendance_records()).await;
        self.documents.preload(seed::documents()).await;
    }
}
