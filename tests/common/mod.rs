//! Common test utilities and helpers
//!
//! This module provides shared test infrastructure including:
//! - Test fixtures with fixed ids
//! - Factories for randomized test data
//! - Store construction helpers

pub mod factories;

pub use factories::*;
pub use fixtures::*;

use staffhub::store::HrStore;

/// Isolated store with latency disabled and the default policy
pub fn test_store() -> HrStore {
    HrStore::for_tests()
}
