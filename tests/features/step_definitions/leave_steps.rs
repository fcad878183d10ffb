//! Leave approval workflow step definitions

use chrono::NaiveDate;
use cucumber::{given, then, when};

use staffhub::models::{CreateLeaveRequest, LeaveDecision, LeaveStatus};
use staffhub::AppError;

use crate::features::TestWorld;

fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("Scenario date must be YYYY-MM-DD")
}

#[given(expr = "{string} has a pending {string} request from {string} to {string}")]
async fn pending_request(
    world: &mut TestWorld,
    name: String,
    leave_type: String,
    start: String,
    end: String,
) {
    let employee_id = world.employee_id(&name);
    let request = world
        .store
        .leave_requests
        .create(CreateLeaveRequest {
            employee_id,
            leave_type,
            start_date: date(&start),
            end_date: date(&end),
            reason: None,
        })
        .await
        .expect("Failed to file leave request");
    world.current_request = Some(request);
}

#[when(expr = "{string} approves the request")]
async fn approve_request(world: &mut TestWorld, approver: String) {
    decide(world, LeaveDecision::Approved, &approver).await;
}

#[when(expr = "{string} rejects the request")]
async fn reject_request(world: &mut TestWorld, approver: String) {
    decide(world, LeaveDecision::Rejected, &approver).await;
}

async fn decide(world: &mut TestWorld, decision: LeaveDecision, approver: &str) {
    let id = world
        .current_request
        .as_ref()
        .expect("No leave request in scenario")
        .id;
    match world.store.leave_requests.decide(id, decision, approver).await {
        Ok(request) => world.current_request = Some(request),
        Err(err) => world.last_error = Some(err),
    }
}

#[then(expr = "the request status is {string}")]
async fn request_status_is(world: &mut TestWorld, expected: String) {
    let request = world.reload_request().await;
    let expected: LeaveStatus = expected.parse().expect("Unknown status in scenario");
    assert_eq!(request.status, expected);
}

#[then(expr = "the request was decided by {string}")]
async fn request_decided_by(world: &mut TestWorld, approver: String) {
    let request = world.reload_request().await;
    assert_eq!(request.approved_by.as_deref(), Some(approver.as_str()));
}

#[then("the decision fails with an invalid state error")]
async fn decision_invalid_state(world: &mut TestWorld) {
    match world.last_error.take() {
        Some(AppError::InvalidState(_)) => {}
        other => panic!("Expected InvalidState, got {:?}", other),
    }
}
