//! Attendance tracking step definitions

use chrono::{DateTime, FixedOffset};
use cucumber::{given, then, when};

use staffhub::models::UpdateAttendanceRequest;
use staffhub::AppError;

use crate::features::TestWorld;

fn ts(raw: &str) -> DateTime<FixedOffset> {
    raw.parse().expect("Scenario timestamp must be RFC 3339")
}

#[given(expr = "an employee {string} in {string} working as {string}")]
async fn employee_exists(world: &mut TestWorld, name: String, department: String, position: String) {
    world.add_employee(&name, &department, &position).await;
}

#[when(expr = "{string} clocks in at {string}")]
async fn clock_in(world: &mut TestWorld, name: String, timestamp: String) {
    let employee_id = world.employee_id(&name);
    let record = world
        .store
        .attendance
        .clock_in(employee_id, ts(&timestamp))
        .await
        .expect("Clock-in failed");
    world.current_record = Some(record);
}

#[when(expr = "the break is set to {int} minutes")]
async fn set_break(world: &mut TestWorld, minutes: u32) {
    let id = world
        .current_record
        .as_ref()
        .expect("No attendance record in scenario")
        .id;
    let updated = world
        .store
        .attendance
        .update(
            id,
            UpdateAttendanceRequest {
                break_duration: Some(minutes),
                ..UpdateAttendanceRequest::default()
            },
        )
        .await
        .expect("Failed to set break duration");
    world.current_record = Some(updated);
}

#[when(expr = "the employee clocks out at {string}")]
async fn clock_out(world: &mut TestWorld, timestamp: String) {
    let id = world
        .current_record
        .as_ref()
        .expect("No attendance record in scenario")
        .id;
    match world.store.attendance.clock_out(id, ts(&timestamp)).await {
        Ok(record) => world.current_record = Some(record),
        Err(err) => world.last_error = Some(err),
    }
}

#[then(expr = "the attendance status is {string}")]
async fn attendance_status_is(world: &mut TestWorld, expected: String) {
    let record = world
        .current_record
        .as_ref()
        .expect("No attendance record in scenario");
    assert_eq!(record.status.to_string(), expected);
}

#[then(expr = "the total hours are {float}")]
async fn total_hours_are(world: &mut TestWorld, expected: f64) {
    let record = world
        .current_record
        .as_ref()
        .expect("No attendance record in scenario");
    let total = record.total_hours.expect("Total hours not computed");
    assert!((total - expected).abs() < 1e-9);
}

#[then("the clock-out fails with an invalid state error")]
async fn clock_out_invalid_state(world: &mut TestWorld) {
    match world.last_error.take() {
        Some(AppError::InvalidState(_)) => {}
        other => panic!("Expected InvalidState, got {:?}", other),
    }
}
