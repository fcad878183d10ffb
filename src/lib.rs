//! StaffHub core library
//!
//! This crate provides the data access and business rules for the
//! StaffHub HR interface: the employee directory, the leave approval
//! workflow, attendance tracking and the dashboard aggregates. The
//! presentation layer lives elsewhere; it reads through the store,
//! passes records through the rules engines and writes whole payloads
//! back.

pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

pub use config::AppConfig;
pub use store::HrStore;
pub use utils::error::{AppError, AppResult};

/// Application state shared with the presentation layer
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Entity store
    pub store: HrStore,
}

impl AppState {
    /// Build state with a store seeded from the bundled fixtures
    pub async fn seeded(config: AppConfig) -> Self {
        let store = HrStore::seeded(&config).await;
        Self { config, store }
    }
}
