//! Attendance classification engine
//!
//! Pure rules deriving `status` and `total_hours` from raw clock
//! timestamps and a break duration, plus the construction and
//! finalization of clock-in/clock-out records. Persistence is the
//! store's job; nothing here touches a collection.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use tracing::debug;

use crate::config::AttendancePolicy;
use crate::models::{AttendanceRecord, AttendanceStatus, EntityId};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::validate_break_minutes;

/// Result of classifying a day's raw clock times
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: AttendanceStatus,
    pub total_hours: Option<f64>,
}

/// Attendance rules engine
#[derive(Debug, Clone)]
pub struct AttendanceRules {
    policy: AttendancePolicy,
}

impl AttendanceRules {
    pub fn new(policy: AttendancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    /// Derive status and worked hours from raw clock times
    ///
    /// - neither timestamp present: `absent`, no hours;
    /// - exactly one present: `working`, no hours;
    /// - both present: worked minutes are the whole minutes between the
    ///   timestamps minus the break, floored at zero; the day is `late`
    ///   when the clock-in's local hour-of-day exceeds the threshold.
    ///
    /// `break_minutes` outside 0..=480 is a caller contract violation
    /// and is rejected before any computation.
    pub fn classify_and_compute(
        &self,
        clock_in: Option<DateTime<FixedOffset>>,
        clock_out: Option<DateTime<FixedOffset>>,
        break_minutes: i64,
    ) -> AppResult<Classification> {
        validate_break_minutes(break_minutes)?;

        let (start, end) = match (clock_in, clock_out) {
            (None, None) => {
                return Ok(Classification {
                    status: AttendanceStatus::Absent,
                    total_hours: None,
                })
            }
            (Some(_), None) | (None, Some(_)) => {
                return Ok(Classification {
                    status: AttendanceStatus::Working,
                    total_hours: None,
                })
            }
            (Some(start), Some(end)) => (start, end),
        };

        let elapsed_minutes = (end - start).num_minutes();
        if elapsed_minutes < 0 && self.policy.reject_negative_duration {
            return Err(AppError::Validation(format!(
                "clock-out {} precedes clock-in {}",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }

        let raw_minutes = elapsed_minutes - break_minutes;
        let total_hours = (raw_minutes as f64 / 60.0).max(0.0);

        let status = if start.hour() > self.policy.late_threshold_hour {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        };

        debug!(
            raw_minutes,
            total_hours,
            status = %status,
            "attendance classified"
        );

        Ok(Classification {
            status,
            total_hours: Some(total_hours),
        })
    }

    /// Build a fresh open record for a clock-in event
    ///
    /// The record is dated at the timestamp's calendar day in its own
    /// offset, not the UTC day.
    pub fn open_record(
        &self,
        id: EntityId,
        employee_id: EntityId,
        timestamp: DateTime<FixedOffset>,
    ) -> AttendanceRecord {
        let now = Utc::now();
        AttendanceRecord {
            id,
            employee_id,
            date: timestamp.date_naive(),
            clock_in: Some(timestamp),
            clock_out: None,
            break_duration: 0,
            total_hours: None,
            status: AttendanceStatus::Working,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Finalize an open record with a clock-out timestamp
    ///
    /// Fails with `InvalidState` unless the record is currently
    /// `working`; a finalized day is never reopened through this path.
    pub fn finalize(
        &self,
        record: &AttendanceRecord,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<AttendanceRecord> {
        if !record.is_open() {
            return Err(AppError::InvalidState(format!(
                "attendance record {} is {}, expected working",
                record.id, record.status
            )));
        }

        let classification = self.classify_and_compute(
            record.clock_in,
            Some(timestamp),
            i64::from(record.break_duration),
        )?;

        let mut finalized = record.clone();
        finalized.clock_out = Some(timestamp);
        finalized.status = classification.status;
        finalized.total_hours = classification.total_hours;
        finalized.updated_at = Utc::now();
        Ok(finalized)
    }
}

impl Default for AttendanceRules {
    fn default() -> Self {
        Self::new(AttendancePolicy::default())
    }
}
