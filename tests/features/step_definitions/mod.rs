//! Step definitions for Cucumber scenarios

pub mod attendance_steps;
pub mod leave_steps;
