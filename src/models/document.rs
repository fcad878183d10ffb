//! Employee document model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::EntityId;

/// Document entity (contracts, certificates, reviews)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub employee_id: EntityId,
    pub name: String,
    /// Document category ("contract", "certificate", ...)
    pub category: String,
    pub upload_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to register a new document
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub employee_id: EntityId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to update a document (field-wise merge)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub notes: Option<Option<String>>,
}
