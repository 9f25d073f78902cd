use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of `POST /api/v1/attendance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body of `POST /api/v1/attendance/bulk`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkAttendanceRequest {
    pub employee_ids: Vec<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body of `PUT /api/v1/attendance/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceUpdate {
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendanceList {
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub present_count: u64,
    #[serde(default)]
    pub absent_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: u64,
    pub absent: u64,
}

impl AttendanceSummary {
    pub fn total(&self) -> u64 {
        self.present + self.absent
    }
}

impl From<&AttendanceList> for AttendanceSummary {
    fn from(list: &AttendanceList) -> Self {
        Self {
            present: list.present_count,
            absent: list.absent_count,
        }
    }
}

/// A bulk target the backend declined to create.
///
/// Depending on the backend version this is a full record, an object
/// carrying `employee_id` (with or without a reason), or a bare identifier.
/// Anything else is kept as raw JSON so one odd entry cannot fail the
/// whole bulk response; callers only count these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkippedEntry {
    Record(AttendanceRecord),
    Reason {
        employee_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
    Id(String),
    Number(i64),
    Other(Value),
}

impl SkippedEntry {
    pub fn employee_id(&self) -> Option<String> {
        match self {
            SkippedEntry::Record(r) => Some(r.employee_id.clone()),
            SkippedEntry::Reason { employee_id, .. } => Some(employee_id.clone()),
            SkippedEntry::Id(id) => Some(id.clone()),
            SkippedEntry::Number(n) => Some(n.to_string()),
            SkippedEntry::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkMarkResult {
    #[serde(default)]
    pub created: Vec<AttendanceRecord>,
    #[serde(default)]
    pub skipped: Vec<SkippedEntry>,
}
