use tracing::info;

use crate::api::client::ApiClient;
use crate::error::ApiError;
use crate::model::employee::{Employee, EmployeeList, NewEmployee};

const EMPLOYEES_PATH: &str = "/api/v1/employees";

impl ApiClient {
    /// Whole roster, newest first.
    pub async fn list_employees(&self) -> Result<EmployeeList, ApiError> {
        self.get(EMPLOYEES_PATH, &[]).await
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        self.get(&format!("{}/{}", EMPLOYEES_PATH, employee_id), &[])
            .await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let created: Employee = self.post(EMPLOYEES_PATH, employee).await?;
        info!(employee_id = %created.employee_id, "Employee created");
        Ok(created)
    }

    /// Deletes the employee and, on the backend, their attendance history.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", EMPLOYEES_PATH, employee_id))
            .await?;
        info!(employee_id, "Employee deleted");
        Ok(())
    }
}
