//! Leave request repository

use std::time::Duration;

use chrono::Utc;

use crate::models::{
    CreateLeaveRequest, EntityId, LeaveDecision, LeaveRequest, LeaveStatus, UpdateLeaveRequest,
};
use crate::services::leave::approve_or_reject;
use crate::store::{Collection, Latency, StoreRecord};
use crate::utils::error::AppResult;

impl StoreRecord for LeaveRequest {
    const KIND: &'static str = "Leave request";

    fn id(&self) -> EntityId {
        self.id
    }
}

// Simulated latency per operation
const GET_ALL_DELAY: Duration = Duration::from_millis(250);
const GET_BY_ID_DELAY: Duration = Duration::from_millis(200);
const CREATE_DELAY: Duration = Duration::from_millis(400);
const UPDATE_DELAY: Duration = Duration::from_millis(300);
const DELETE_DELAY: Duration = Duration::from_millis(250);

#[derive(Clone)]
pub struct LeaveRequestRepository {
    collection: Collection<LeaveRequest>,
}

impl LeaveRequestRepository {
    pub fn new(latency: Latency) -> Self {
        Self {
            collection: Collection::new(latency),
        }
    }

    pub async fn preload(&self, requests: Vec<LeaveRequest>) {
        self.collection.preload(requests).await;
    }

    pub async fn get_all(&self) -> Vec<LeaveRequest> {
        self.collection.get_all(GET_ALL_DELAY).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> AppResult<LeaveRequest> {
        self.collection.get_by_id(GET_BY_ID_DELAY, id).await
    }

    /// File a new request; status is always pending and `request_date`
    /// is stamped with today
    pub async fn create(&self, req: CreateLeaveRequest) -> AppResult<LeaveRequest> {
        let request = self
            .collection
            .insert(CREATE_DELAY, |id| LeaveRequest {
                id,
                employee_id: req.employee_id,
                leave_type: req.leave_type,
                start_date: req.start_date,
                end_date: req.end_date,
                reason: req.reason,
                status: LeaveStatus::Pending,
                approved_by: None,
                request_date: Utc::now().date_naive(),
            })
            .await;
        Ok(request)
    }

    /// Merge an update into an existing request; status never changes
    /// through this path
    pub async fn update(&self, id: EntityId, req: UpdateLeaveRequest) -> AppResult<LeaveRequest> {
        self.collection
            .update_with(UPDATE_DELAY, id, |request| {
                if let Some(leave_type) = req.leave_type {
                    request.leave_type = leave_type;
                }
                if let Some(start_date) = req.start_date {
                    request.start_date = start_date;
                }
                if let Some(end_date) = req.end_date {
                    request.end_date = end_date;
                }
                if let Some(reason) = req.reason {
                    request.reason = reason;
                }
            })
            .await
    }

    /// Approve or reject a pending request
    ///
    /// The rules engine validates the transition against the stored
    /// record before anything is written; a non-pending request is left
    /// untouched.
    pub async fn decide(
        &self,
        id: EntityId,
        decision: LeaveDecision,
        approver: &str,
    ) -> AppResult<LeaveRequest> {
        let current = self.collection.get_by_id(Duration::ZERO, id).await?;
        let decided = approve_or_reject(&current, decision, approver)?;

        self.collection
            .update_with(UPDATE_DELAY, id, |request| {
                request.status = decided.status;
                request.approved_by = decided.approved_by.clone();
            })
            .await
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<bool> {
        self.collection.delete(DELETE_DELAY, id).await
    }
}
