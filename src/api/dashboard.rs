use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::error::ApiError;
use crate::model::dashboard::DashboardStats;
use crate::utils::date_range::to_date_string;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl ApiClient {
    /// Counts for `today`, which must be the caller's local date so that the
    /// backend's own timezone never decides which day is "today".
    pub async fn dashboard_stats(&self, today: NaiveDate) -> Result<DashboardStats, ApiError> {
        self.get(
            "/api/v1/dashboard/stats",
            &[("today", to_date_string(today))],
        )
        .await
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health", &[]).await
    }
}
