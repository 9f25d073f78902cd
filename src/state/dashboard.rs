use chrono::NaiveDate;
use tracing::warn;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::dashboard::DashboardStats;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub async fn refresh(&mut self, client: &ApiClient, today: NaiveDate) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = client.dashboard_stats(today).await;
        self.loading = false;

        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, %today, "Failed to load dashboard stats");
                self.error = Some(e.message());
                Err(e)
            }
        }
    }

    /// Missing stats read as zero.
    pub fn stats_or_default(&self) -> DashboardStats {
        self.stats.unwrap_or_default()
    }
}
