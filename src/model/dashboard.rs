use serde::Deserialize;

/// Headline counts for the dashboard screen, evaluated for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: u64,
    #[serde(default)]
    pub present_today: u64,
    #[serde(default)]
    pub absent_today: u64,
}

impl DashboardStats {
    /// Employees with no attendance record for the day.
    pub fn unmarked_today(&self) -> u64 {
        self.total_employees.saturating_sub(self.present_today + self.absent_today)
    }
}
