//! Generic in-memory collection
//!
//! Backs every repository with the same contract: copy-on-read,
//! field-wise merge on update, NotFound for missing ids. Updates are
//! last-writer-wins; there is no version check.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::EntityId;
use crate::store::{IdGenerator, Latency};
use crate::utils::error::{AppError, AppResult};

/// Record stored in a [`Collection`]
pub trait StoreRecord: Clone + Send + Sync + 'static {
    /// Entity kind used in log fields and NotFound messages
    const KIND: &'static str;

    fn id(&self) -> EntityId;
}

/// In-memory record collection with simulated latency
#[derive(Clone)]
pub struct Collection<T> {
    records: Arc<RwLock<Vec<T>>>,
    ids: Arc<IdGenerator>,
    latency: Latency,
}

impl<T: StoreRecord> Collection<T> {
    pub fn new(latency: Latency) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            ids: Arc::new(IdGenerator::new()),
            latency,
        }
    }

    /// Load existing records, keeping the id generator above them
    pub async fn preload(&self, records: Vec<T>) {
        for record in &records {
            self.ids.observe(record.id());
        }
        let mut guard = self.records.write().await;
        guard.extend(records);
    }

    /// All records, in insertion order
    pub async fn get_all(&self, delay: Duration) -> Vec<T> {
        self.latency.simulate(delay).await;
        self.records.read().await.clone()
    }

    /// Records matching a predicate, in insertion order
    pub async fn get_matching<F>(&self, delay: Duration, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.latency.simulate(delay).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    pub async fn get_by_id(&self, delay: Duration, id: EntityId) -> AppResult<T> {
        self.latency.simulate(delay).await;
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(T::KIND, id))
    }

    /// Insert a record built from a freshly assigned id
    pub async fn insert<F>(&self, delay: Duration, build: F) -> T
    where
        F: FnOnce(EntityId) -> T,
    {
        self.latency.simulate(delay).await;
        let id = self.ids.next();
        let record = build(id);
        debug!(kind = T::KIND, id, "record created");
        self.records.write().await.push(record.clone());
        record
    }

    /// Merge an update into the stored record and return the new value
    pub async fn update_with<F>(&self, delay: Duration, id: EntityId, apply: F) -> AppResult<T>
    where
        F: FnOnce(&mut T),
    {
        self.latency.simulate(delay).await;
        let mut guard = self.records.write().await;
        let record = guard
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(T::KIND, id))?;
        apply(record);
        debug!(kind = T::KIND, id, "record updated");
        Ok(record.clone())
    }

    pub async fn delete(&self, delay: Duration, id: EntityId) -> AppResult<bool> {
        self.latency.simulate(delay).await;
        let mut guard = self.records.write().await;
        let index = guard
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(T::KIND, id))?;
        guard.remove(index);
        debug!(kind = T::KIND, id, "record deleted");
        Ok(true)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
