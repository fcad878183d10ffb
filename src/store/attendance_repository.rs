//! Attendance repository
//!
//! Wraps the in-memory collection with the clock-in/clock-out workflow.
//! Derivations (status, worked hours) come from the attendance rules
//! engine; this layer only persists the results.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use tracing::info;

use crate::config::AttendancePolicy;
use crate::models::{
    AttendanceRecord, CreateAttendanceRequest, EntityId, UpdateAttendanceRequest,
};
use crate::services::attendance_rules::AttendanceRules;
use crate::store::{Collection, Latency, StoreRecord};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::validate_break_minutes;

impl StoreRecord for AttendanceRecord {
    const KIND: &'static str = "Attendance record";

    fn id(&self) -> EntityId {
        self.id
    }
}

// Simulated latency per operation
const GET_ALL_DELAY: Duration = Duration::from_millis(300);
const GET_BY_ID_DELAY: Duration = Duration::from_millis(200);
const GET_BY_EMPLOYEE_DELAY: Duration = Duration::from_millis(250);
const GET_BY_RANGE_DELAY: Duration = Duration::from_millis(300);
const CREATE_DELAY: Duration = Duration::from_millis(400);
const UPDATE_DELAY: Duration = Duration::from_millis(350);
const DELETE_DELAY: Duration = Duration::from_millis(250);
const CLOCK_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone)]
pub struct AttendanceRepository {
    collection: Collection<AttendanceRecord>,
    rules: AttendanceRules,
}

impl AttendanceRepository {
    pub fn new(latency: Latency, policy: AttendancePolicy) -> Self {
        Self {
            collection: Collection::new(latency),
            rules: AttendanceRules::new(policy),
        }
    }

    pub fn rules(&self) -> &AttendanceRules {
        &self.rules
    }

    pub async fn preload(&self, records: Vec<AttendanceRecord>) {
        self.collection.preload(records).await;
    }

    pub async fn get_all(&self) -> Vec<AttendanceRecord> {
        self.collection.get_all(GET_ALL_DELAY).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> AppResult<AttendanceRecord> {
        self.collection.get_by_id(GET_BY_ID_DELAY, id).await
    }

    /// All records for one employee, in insertion order
    pub async fn get_by_employee(&self, employee_id: EntityId) -> Vec<AttendanceRecord> {
        self.collection
            .get_matching(GET_BY_EMPLOYEE_DELAY, |rec| rec.employee_id == employee_id)
            .await
    }

    /// Records dated within the inclusive range
    pub async fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        self.collection
            .get_matching(GET_BY_RANGE_DELAY, |rec| {
                rec.date >= start && rec.date <= end
            })
            .await
    }

    /// Manually create a record; status and hours are derived from the
    /// supplied clock times
    pub async fn create(&self, req: CreateAttendanceRequest) -> AppResult<AttendanceRecord> {
        let classification = self.rules.classify_and_compute(
            req.clock_in,
            req.clock_out,
            i64::from(req.break_duration),
        )?;

        let now = Utc::now();
        let record = self
            .collection
            .insert(CREATE_DELAY, |id| AttendanceRecord {
                id,
                employee_id: req.employee_id,
                date: req.date,
                clock_in: req.clock_in,
                clock_out: req.clock_out,
                break_duration: req.break_duration,
                total_hours: classification.total_hours,
                status: classification.status,
                notes: req.notes,
                created_at: now,
                updated_at: now,
            })
            .await;
        Ok(record)
    }

    /// Merge an update into an existing record and re-derive status and
    /// hours from the merged clock times
    pub async fn update(
        &self,
        id: EntityId,
        req: UpdateAttendanceRequest,
    ) -> AppResult<AttendanceRecord> {
        let current = self.collection.get_by_id(Duration::ZERO, id).await?;

        let clock_in = req.clock_in.unwrap_or(current.clock_in);
        let clock_out = req.clock_out.unwrap_or(current.clock_out);
        let break_duration = req.break_duration.unwrap_or(current.break_duration);
        let classification =
            self.rules
                .classify_and_compute(clock_in, clock_out, i64::from(break_duration))?;

        self.collection
            .update_with(UPDATE_DELAY, id, |rec| {
                if let Some(date) = req.date {
                    rec.date = date;
                }
                rec.clock_in = clock_in;
                rec.clock_out = clock_out;
                rec.break_duration = break_duration;
                rec.total_hours = classification.total_hours;
                rec.status = classification.status;
                if let Some(notes) = req.notes {
                    rec.notes = notes;
                }
                rec.updated_at = Utc::now();
            })
            .await
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<bool> {
        self.collection.delete(DELETE_DELAY, id).await
    }

    /// Open a new working record for the employee at the given time
    ///
    /// When the policy forbids multiple open records, a second clock-in
    /// for the same employee and calendar day while one is still open
    /// fails with `InvalidState`.
    pub async fn clock_in(
        &self,
        employee_id: EntityId,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<AttendanceRecord> {
        if !self.rules.policy().allow_multiple_open_records {
            let date = timestamp.date_naive();
            let open = self
                .collection
                .get_matching(Duration::ZERO, |rec| {
                    rec.employee_id == employee_id && rec.date == date && rec.is_open()
                })
                .await;
            if !open.is_empty() {
                return Err(AppError::InvalidState(format!(
                    "employee {} already has an open attendance record for {}",
                    employee_id, date
                )));
            }
        }

        let record = self
            .collection
            .insert(CLOCK_DELAY, |id| {
                self.rules.open_record(id, employee_id, timestamp)
            })
            .await;

        info!(employee_id, record_id = record.id, "clocked in");
        Ok(record)
    }

    /// Finalize an open record with a clock-out time
    ///
    /// The stored break duration is validated and the rules engine
    /// derives the final status and worked hours. Fails with
    /// `InvalidState` when the record is not currently working.
    pub async fn clock_out(
        &self,
        id: EntityId,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<AttendanceRecord> {
        let current = self.collection.get_by_id(Duration::ZERO, id).await?;
        validate_break_minutes(i64::from(current.break_duration))?;
        let finalized = self.rules.finalize(&current, timestamp)?;

        let updated = self
            .collection
            .update_with(CLOCK_DELAY, id, |rec| {
                rec.clock_out = finalized.clock_out;
                rec.status = finalized.status;
                rec.total_hours = finalized.total_hours;
                rec.updated_at = finalized.updated_at;
            })
            .await?;

        info!(
            record_id = id,
            status = %updated.status,
            total_hours = updated.total_hours,
            "clocked out"
        );
        Ok(updated)
    }
}
