//! Attendance record model

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::EntityId;

/// Derived attendance classification
///
/// Per record and day the state machine is
/// `absent -> working -> {present, late}`; `present`, `late` and
/// `absent` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// No clock activity recorded for the day
    #[default]
    Absent,
    /// Clocked in, not yet clocked out
    Working,
    /// Day finalized, clock-in at or before the late threshold
    Present,
    /// Day finalized, clock-in after the late threshold
    Late,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Working => write!(f, "working"),
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Late => write!(f, "late"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "absent" => Ok(AttendanceStatus::Absent),
            "working" => Ok(AttendanceStatus::Working),
            "present" => Ok(AttendanceStatus::Present),
            "late" => Ok(AttendanceStatus::Late),
            _ => Err(format!("Invalid attendance status: {}", s)),
        }
    }
}

/// Attendance record entity
///
/// Clock timestamps keep their original UTC offset so that late
/// classification sees the hour-of-day the employee actually clocked
/// in at, not its UTC translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: EntityId,
    pub employee_id: EntityId,
    pub date: NaiveDate,
    #[serde(default)]
    pub clock_in: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub clock_out: Option<DateTime<FixedOffset>>,
    /// Break duration in minutes, 0-480
    #[serde(default)]
    pub break_duration: u32,
    /// Set iff both clock_in and clock_out are present
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// A record is open while clocked in without a matching clock-out
    pub fn is_open(&self) -> bool {
        self.status == AttendanceStatus::Working
    }
}

/// Request to create an attendance record directly (manual entry)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceRequest {
    pub employee_id: EntityId,
    pub date: NaiveDate,
    #[serde(default)]
    pub clock_in: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub clock_out: Option<DateTime<FixedOffset>>,
    #[validate(range(min = 0, max = 480))]
    #[serde(default)]
    pub break_duration: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to update an attendance record (field-wise merge)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    pub date: Option<NaiveDate>,
    pub clock_in: Option<Option<DateTime<FixedOffset>>>,
    pub clock_out: Option<Option<DateTime<FixedOffset>>>,
    #[validate(range(min = 0, max = 480))]
    pub break_duration: Option<u32>,
    pub notes: Option<Option<String>>,
}
