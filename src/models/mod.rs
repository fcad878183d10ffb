//! Data models

mod attendance;
mod department;
mod document;
mod employee;
mod leave_request;

pub use attendance::*;
pub use department::*;
pub use document::*;
pub use employee::*;
pub use leave_request::*;

/// Identifier assigned to every stored record.
///
/// Ids are creation-time millisecond timestamps, kept as plain integers
/// for compatibility with the existing fixture format.
pub type EntityId = i64;
