//! Leave request workflow and list view tests

use chrono::{Days, Utc};

use staffhub::models::{LeaveDecision, LeaveStatus};
use staffhub::services::{
    dashboard_aggregates, filter_employees, filter_leave_requests, EmployeeFilter, LeaveFilter,
};
use staffhub::AppError;

use crate::common::{
    leave_payload, test_store, DepartmentFixtures, EmployeeFixtures, LeaveFixtures,
    fixtures::ids,
};

#[tokio::test]
async fn created_request_is_pending_with_request_date() {
    let store = test_store();
    let created = store
        .leave_requests
        .create(leave_payload(ids::ANNA))
        .await
        .unwrap();

    assert_eq!(created.status, LeaveStatus::Pending);
    assert!(created.approved_by.is_none());
    assert_eq!(created.request_date, Utc::now().date_naive());
}

#[tokio::test]
async fn approve_persists_status_and_approver() {
    let store = test_store();
    store
        .leave_requests
        .preload(vec![LeaveFixtures::pending_vacation()])
        .await;

    let decided = store
        .leave_requests
        .decide(ids::VACATION_REQUEST, LeaveDecision::Approved, "HR Admin")
        .await
        .unwrap();
    assert_eq!(decided.status, LeaveStatus::Approved);
    assert_eq!(decided.approved_by.as_deref(), Some("HR Admin"));

    let stored = store
        .leave_requests
        .get_by_id(ids::VACATION_REQUEST)
        .await
        .unwrap();
    assert_eq!(stored.status, LeaveStatus::Approved);
}

#[tokio::test]
async fn double_decision_is_rejected_and_does_not_override() {
    let store = test_store();
    store
        .leave_requests
        .preload(vec![LeaveFixtures::pending_vacation()])
        .await;

    store
        .leave_requests
        .decide(ids::VACATION_REQUEST, LeaveDecision::Approved, "HR Admin")
        .await
        .unwrap();

    let err = store
        .leave_requests
        .decide(ids::VACATION_REQUEST, LeaveDecision::Rejected, "Someone Else")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let stored = store
        .leave_requests
        .get_by_id(ids::VACATION_REQUEST)
        .await
        .unwrap();
    assert_eq!(stored.status, LeaveStatus::Approved);
    assert_eq!(stored.approved_by.as_deref(), Some("HR Admin"));
}

#[tokio::test]
async fn decide_unknown_request_is_not_found() {
    let store = test_store();
    let err = store
        .leave_requests
        .decide(42, LeaveDecision::Approved, "HR Admin")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn directory_search_preserves_order() {
    let employees = EmployeeFixtures::all();
    let matches = filter_employees(&employees, &EmployeeFilter::search("ann"));

    // Anna and Joanne, in directory order
    let names: Vec<String> = matches.iter().map(|e| e.full_name()).collect();
    assert_eq!(names, ["Anna Kovacs", "Joanne Park"]);
}

#[tokio::test]
async fn leave_list_filters_by_requester_name_and_status() {
    let employees = EmployeeFixtures::all();
    let requests = vec![
        LeaveFixtures::pending_vacation(),
        LeaveFixtures::approved_until(Utc::now().date_naive() + Days::new(1)),
    ];

    let by_name = filter_leave_requests(
        &requests,
        &employees,
        &LeaveFilter {
            search_term: Some("anna".to_string()),
            status: None,
        },
    );
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].employee_id, ids::ANNA);

    let approved = filter_leave_requests(
        &requests,
        &employees,
        &LeaveFilter {
            search_term: None,
            status: Some(LeaveStatus::Approved),
        },
    );
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].employee_id, ids::MARCUS);
}

#[tokio::test]
async fn dashboard_counts_follow_the_calendar() {
    let employees = EmployeeFixtures::all();
    let departments = DepartmentFixtures::all();
    let today = Utc::now().date_naive();

    let expired = vec![LeaveFixtures::approved_until(today - Days::new(1))];
    let aggregates = dashboard_aggregates(&employees, &expired, &departments);
    assert_eq!(aggregates.active_leaves, 0);

    let running = vec![LeaveFixtures::approved_until(today + Days::new(1))];
    let aggregates = dashboard_aggregates(&employees, &running, &departments);
    assert_eq!(aggregates.active_leaves, 1);
    assert_eq!(aggregates.total_employees, 3);
    assert_eq!(aggregates.total_departments, 2);
}

#[tokio::test]
async fn dashboard_updates_after_decision() {
    let store = test_store();
    store
        .employees
        .preload(EmployeeFixtures::all())
        .await;
    store
        .departments
        .preload(DepartmentFixtures::all())
        .await;
    store
        .leave_requests
        .preload(vec![LeaveFixtures::pending_vacation()])
        .await;

    let employees = store.employees.get_all().await;
    let departments = store.departments.get_all().await;

    let before = dashboard_aggregates(
        &employees,
        &store.leave_requests.get_all().await,
        &departments,
    );
    assert_eq!(before.pending_requests, 1);

    store
        .leave_requests
        .decide(ids::VACATION_REQUEST, LeaveDecision::Approved, "HR Admin")
        .await
        .unwrap();

    let after = dashboard_aggregates(
        &employees,
        &store.leave_requests.get_all().await,
        &departments,
    );
    assert_eq!(after.pending_requests, 0);
}
