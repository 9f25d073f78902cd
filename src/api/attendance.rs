use tracing::info;

use crate::api::client::ApiClient;
use crate::error::ApiError;
use crate::model::attendance::{
    AttendanceList, AttendanceRecord, AttendanceStatus, AttendanceUpdate, BulkAttendanceRequest,
    BulkMarkResult, NewAttendance,
};
use crate::utils::date_range::{DateRange, PresetKey, Presets, resolve_preset, to_date_string};

const ATTENDANCE_PATH: &str = "/api/v1/attendance";

/// Filters for the attendance list. An empty `employee_ids` means every employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilters {
    pub employee_ids: Vec<String>,
    pub range: DateRange,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilters {
    pub fn has_active(&self) -> bool {
        !self.employee_ids.is_empty() || !self.range.is_all() || self.status.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Preset matching the current range, recomputed against `presets`
    /// each time so it never goes stale across midnight.
    pub fn active_preset(&self, presets: &Presets) -> PresetKey {
        resolve_preset(&self.range, presets)
    }

    /// Query pairs; parameters that are unset are left out entirely.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .employee_ids
            .iter()
            .map(|id| ("employee_ids", id.clone()))
            .collect();

        if let Some(from) = self.range.from {
            pairs.push(("date_from", to_date_string(from)));
        }
        if let Some(to) = self.range.to {
            pairs.push(("date_to", to_date_string(to)));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_attendance(
        &self,
        filters: &AttendanceFilters,
    ) -> Result<AttendanceList, ApiError> {
        self.get(ATTENDANCE_PATH, &filters.query()).await
    }

    /// Full history of one employee, newest first.
    pub async fn employee_attendance(&self, employee_id: &str) -> Result<AttendanceList, ApiError> {
        self.get(&format!("{}/{}", ATTENDANCE_PATH, employee_id), &[])
            .await
    }

    pub async fn create_attendance(
        &self,
        record: &NewAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let created: AttendanceRecord = self.post(ATTENDANCE_PATH, record).await?;
        info!(id = created.id, employee_id = %created.employee_id, "Attendance marked");
        Ok(created)
    }

    pub async fn create_bulk_attendance(
        &self,
        request: &BulkAttendanceRequest,
    ) -> Result<BulkMarkResult, ApiError> {
        let result: BulkMarkResult = self
            .post(&format!("{}/bulk", ATTENDANCE_PATH), request)
            .await?;
        info!(
            created = result.created.len(),
            skipped = result.skipped.len(),
            date = %request.date,
            "Bulk attendance marked"
        );
        Ok(result)
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        update: &AttendanceUpdate,
    ) -> Result<AttendanceRecord, ApiError> {
        let updated: AttendanceRecord = self
            .put(&format!("{}/{}", ATTENDANCE_PATH, id), update)
            .await?;
        info!(id, status = %updated.status, "Attendance updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_filters_produce_no_query() {
        let filters = AttendanceFilters::default();
        assert!(filters.query().is_empty());
        assert!(!filters.has_active());
    }

    #[test]
    fn query_repeats_employee_ids() {
        let filters = AttendanceFilters {
            employee_ids: vec!["EMP-001".to_string(), "EMP-002".to_string()],
            range: DateRange::new(NaiveDate::from_ymd_opt(2024, 3, 1), None),
            status: Some(AttendanceStatus::Absent),
        };
        assert_eq!(
            filters.query(),
            vec![
                ("employee_ids", "EMP-001".to_string()),
                ("employee_ids", "EMP-002".to_string()),
                ("date_from", "2024-03-01".to_string()),
                ("status", "Absent".to_string()),
            ]
        );
        assert!(filters.has_active());
    }

    #[test]
    fn reset_clears_everything() {
        let mut filters = AttendanceFilters {
            employee_ids: vec!["EMP-001".to_string()],
            range: DateRange::ALL,
            status: Some(AttendanceStatus::Present),
        };
        filters.reset();
        assert_eq!(filters, AttendanceFilters::default());
    }
}
