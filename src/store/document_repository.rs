//! Document repository

use std::time::Duration;

use chrono::Utc;

use crate::models::{CreateDocumentRequest, Document, EntityId, UpdateDocumentRequest};
use crate::store::{Collection, Latency, StoreRecord};
use crate::utils::error::AppResult;

impl StoreRecord for Document {
    const KIND: &'static str = "Document";

    fn id(&self) -> EntityId {
        self.id
    }
}

// Simulated latency per operation
const GET_ALL_DELAY: Duration = Duration::from_millis(300);
const GET_BY_ID_DELAY: Duration = Duration::from_millis(200);
const CREATE_DELAY: Duration = Duration::from_millis(450);
const UPDATE_DELAY: Duration = Duration::from_millis(350);
const DELETE_DELAY: Duration = Duration::from_millis(250);

#[derive(Clone)]
pub struct DocumentRepository {
    collection: Collection<Document>,
}

impl DocumentRepository {
    pub fn new(latency: Latency) -> Self {
        Self {
            collection: Collection::new(latency),
        }
    }

    pub async fn preload(&self, documents: Vec<Document>) {
        self.collection.preload(documents).await;
    }

    pub async fn get_all(&self) -> Vec<Document> {
        self.collection.get_all(GET_ALL_DELAY).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> AppResult<Document> {
        self.collection.get_by_id(GET_BY_ID_DELAY, id).await
    }

    /// Documents attached to one employee, in insertion order
    pub async fn get_by_employee(&self, employee_id: EntityId) -> Vec<Document> {
        self.collection
            .get_matching(GET_ALL_DELAY, |doc| doc.employee_id == employee_id)
            .await
    }

    /// Register a document; `upload_date` is stamped with today
    pub async fn create(&self, req: CreateDocumentRequest) -> AppResult<Document> {
        let document = self
            .collection
            .insert(CREATE_DELAY, |id| Document {
                id,
                employee_id: req.employee_id,
                name: req.name,
                category: req.category,
                upload_date: Utc::now().date_naive(),
                notes: req.notes,
            })
            .await;
        Ok(document)
    }

    pub async fn update(&self, id: EntityId, req: UpdateDocumentRequest) -> AppResult<Document> {
        self.collection
            .update_with(UPDATE_DELAY, id, |doc| {
                if let Some(name) = req.name {
                    doc.name = name;
                }
                if let Some(category) = req.category {
                    doc.category = category;
                }
                if let Some(notes) = req.notes {
                    doc.notes = notes;
                }
            })
            .await
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<bool> {
        self.collection.delete(DELETE_DELAY, id).await
    }
}
