//! Leave approval workflow
//!
//! The only legal status transitions are pending -> approved and
//! pending -> rejected. Deciding an already-decided request is an
//! error; it never silently overrides `approved_by`.

use tracing::info;

use crate::models::{LeaveDecision, LeaveRequest, LeaveStatus};
use crate::utils::error::{AppError, AppResult};

/// Apply an approval decision to a pending request
pub fn approve_or_reject(
    request: &LeaveRequest,
    decision: LeaveDecision,
    approver: &str,
) -> AppResult<LeaveRequest> {
    if request.status != LeaveStatus::Pending {
        return Err(AppError::InvalidState(format!(
            "leave request {} is already {}, only pending requests can be decided",
            request.id, request.status
        )));
    }
    if approver.trim().is_empty() {
        return Err(AppError::Validation(
            "approver must not be empty".to_string(),
        ));
    }

    let mut decided = request.clone();
    decided.status = decision.into();
    decided.approved_by = Some(approver.to_string());

    info!(
        request_id = request.id,
        status = %decided.status,
        approver,
        "leave request decided"
    );

    Ok(decided)
}
