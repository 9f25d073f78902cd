use tracing::warn;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::employee::{Employee, NewEmployee};
use crate::utils::reconcile::{apply_employee_create, apply_employee_removal};
use crate::utils::selection::SelectOption;

/// Roster held by the employees screen.
#[derive(Debug, Clone, Default)]
pub struct EmployeesState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EmployeesState {
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = client.list_employees().await;
        self.loading = false;

        match result {
            Ok(list) => {
                self.employees = list.employees;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load employees");
                self.error = Some(e.message());
                Err(e)
            }
        }
    }

    pub async fn add(
        &mut self,
        client: &ApiClient,
        new: &NewEmployee,
    ) -> Result<Employee, ApiError> {
        let created = client.create_employee(new).await?;
        self.employees =
            apply_employee_create(std::mem::take(&mut self.employees), created.clone());
        Ok(created)
    }

    pub async fn remove(&mut self, client: &ApiClient, employee_id: &str) -> Result<(), ApiError> {
        client.delete_employee(employee_id).await?;
        self.employees = apply_employee_removal(std::mem::take(&mut self.employees), employee_id);
        Ok(())
    }

    /// Choices for employee pickers: business id as value, full name as label.
    pub fn options(&self) -> Vec<SelectOption> {
        self.employees
            .iter()
            .map(|e| SelectOption::new(e.employee_id.clone(), e.full_name.clone()))
            .collect()
    }
}
