//! Integration test modules

mod leave_workflow_tests;
