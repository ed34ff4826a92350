use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Column order of the leaves table.
pub const LEAVE_COLUMNS: [&str; 8] = [
    "id",
    "employee_id",
    "start_date",
    "end_date",
    "days",
    "status",
    "applied_at",
    "reason",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Pending and approved requests hold their dates; rejected ones release them.
    pub fn blocks_dates(self) -> bool {
        matches!(self, LeaveStatus::Pending | LeaveStatus::Approved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = "L001")]
    /// leave application id
    pub id: String,
    /// employee for whom the leave is applied
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    /// first day of leave
    pub start_date: NaiveDate,
    // last day of leave, inclusive
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = 3)]
    pub days: u32,
    pub status: LeaveStatus,
    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    pub applied_at: DateTime<Utc>,
    #[schema(example = "family trip", nullable = true)]
    pub reason: Option<String>,
}

impl LeaveRequest {
    /// Closed-interval intersection of the two date ranges.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !(end < self.start_date || start > self.end_date)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApplyLeave {
    /// Allocated by the ledger when absent or blank
    #[schema(example = "L001", nullable = true)]
    #[serde(default)]
    pub id: Option<String>,
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: String,
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: String,
    #[schema(example = "family trip", nullable = true)]
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body of approve and reject calls.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LeaveDecision {
    #[schema(example = "L001")]
    pub id: String,
    /// Replaces the stored reason on rejection; ignored on approval
    #[schema(example = "team capacity", nullable = true)]
    #[serde(default)]
    pub reason: Option<String>,
}
