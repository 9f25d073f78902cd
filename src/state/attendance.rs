use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::api::attendance::AttendanceFilters;
use crate::error::ApiError;
use crate::model::attendance::{
    AttendanceList, AttendanceRecord, AttendanceStatus, AttendanceSummary, AttendanceUpdate,
    BulkAttendanceRequest, BulkMarkResult, NewAttendance,
};
use crate::state::employees::EmployeesState;
use crate::state::feedback::Feedback;
use crate::utils::date_range::{DateRange, PresetKey, Presets, compute_presets, format_display};
use crate::utils::reconcile::{apply_bulk_create, apply_single_create, apply_update};
use crate::utils::selection::{MultiSelect, SelectAllBehavior};

#[derive(Debug, Clone, PartialEq)]
pub enum MarkRequest {
    Single(NewAttendance),
    Bulk(BulkAttendanceRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkOutcome {
    Single(AttendanceRecord),
    Bulk(BulkMarkResult),
}

impl MarkOutcome {
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            MarkOutcome::Single(_) => Some(Feedback::success("Attendance marked successfully")),
            MarkOutcome::Bulk(result) => Feedback::bulk_marked(result),
        }
    }
}

/// Records and summary counts currently shown on the attendance screen.
#[derive(Debug, Clone, Default)]
pub struct AttendanceState {
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
    pub loading: bool,
    pub error: Option<String>,
}

impl AttendanceState {
    pub fn apply_list(&mut self, list: AttendanceList) {
        self.summary = AttendanceSummary::from(&list);
        self.records = list.attendance;
    }

    pub fn apply_created(&mut self, created: AttendanceRecord) {
        self.records = apply_single_create(std::mem::take(&mut self.records), created);
    }

    pub fn apply_bulk(&mut self, result: &BulkMarkResult) {
        self.records = apply_bulk_create(std::mem::take(&mut self.records), result);
    }

    pub fn apply_updated(&mut self, id: i64, updated: AttendanceRecord) {
        self.records = apply_update(std::mem::take(&mut self.records), id, updated);
    }

    /// Failures are kept in `error` for display and also returned.
    pub async fn refresh(
        &mut self,
        client: &ApiClient,
        filters: &AttendanceFilters,
    ) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = client.list_attendance(filters).await;
        self.loading = false;

        match result {
            Ok(list) => {
                self.apply_list(list);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load attendance");
                self.error = Some(e.message());
                Err(e)
            }
        }
    }

    pub async fn mark(
        &mut self,
        client: &ApiClient,
        request: &MarkRequest,
    ) -> Result<MarkOutcome, ApiError> {
        match request {
            MarkRequest::Single(record) => {
                let created = client.create_attendance(record).await?;
                self.apply_created(created.clone());
                Ok(MarkOutcome::Single(created))
            }
            MarkRequest::Bulk(bulk) => {
                let result = client.create_bulk_attendance(bulk).await?;
                self.apply_bulk(&result);
                Ok(MarkOutcome::Bulk(result))
            }
        }
    }

    pub async fn edit(
        &mut self,
        client: &ApiClient,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, ApiError> {
        let updated = client
            .update_attendance(id, &AttendanceUpdate { status })
            .await?;
        self.apply_updated(id, updated.clone());
        Ok(updated)
    }
}

/// The attendance screen: filters, records, and the roster backing the
/// employee pickers.
#[derive(Debug, Clone, Default)]
pub struct AttendanceScreen {
    pub filters: AttendanceFilters,
    pub attendance: AttendanceState,
    pub employees: EmployeesState,
}

impl AttendanceScreen {
    pub fn new(filters: AttendanceFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Loads records and roster concurrently; both finish before the first
    /// error, if any, is returned.
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let (records, roster) = futures::join!(
            self.attendance.refresh(client, &self.filters),
            self.employees.refresh(client)
        );
        records?;
        roster?;
        Ok(())
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.filters.range = range;
    }

    /// Applies a named preset as of `today`. Picking `Custom` keeps the
    /// current range and returns `false` so the caller can ask for bounds.
    pub fn select_preset(&mut self, key: PresetKey, today: NaiveDate) -> bool {
        match compute_presets(today).select(key) {
            Some(range) => {
                self.filters.range = range;
                true
            }
            None => false,
        }
    }

    pub fn active_preset(&self, presets: &Presets) -> PresetKey {
        self.filters.active_preset(presets)
    }

    pub fn range_display(&self) -> String {
        format_display(&self.filters.range)
    }

    /// Filter picker: nothing selected means every employee.
    pub fn employee_filter(&self) -> MultiSelect {
        MultiSelect::new(self.employees.options(), SelectAllBehavior::Clear)
            .with_all_label("All Employees")
            .with_placeholder("Select employees...")
            .with_selected(self.filters.employee_ids.clone())
    }

    /// Mark-attendance picker: employees have to be chosen explicitly.
    pub fn mark_picker(&self) -> MultiSelect {
        MultiSelect::new(self.employees.options(), SelectAllBehavior::Select)
            .with_all_label("Select All")
            .with_placeholder("Select employees...")
    }

    pub fn empty_message(&self) -> &'static str {
        if self.filters.has_active() {
            "No records match your filters."
        } else {
            "Start by marking attendance for your employees."
        }
    }
}
