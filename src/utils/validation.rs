use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::model::attendance::{AttendanceStatus, BulkAttendanceRequest};
use crate::model::employee::NewEmployee;

static EMPLOYEE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("employee id pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks an "add employee" form and returns the trimmed payload.
pub fn validate_new_employee(form: &NewEmployee) -> Result<NewEmployee, Vec<FieldError>> {
    let employee_id = form.employee_id.trim();
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    let department = form.department.trim();

    let mut errors = Vec::new();

    if employee_id.is_empty() {
        errors.push(FieldError::new("employee_id", "Employee ID is required"));
    } else if !EMPLOYEE_ID_PATTERN.is_match(employee_id) {
        errors.push(FieldError::new(
            "employee_id",
            "Only alphanumeric characters, hyphens, and underscores allowed",
        ));
    }

    if full_name.is_empty() {
        errors.push(FieldError::new("full_name", "Full name is required"));
    }

    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.push(FieldError::new("email", "Please enter a valid email"));
    }

    if department.is_empty() {
        errors.push(FieldError::new("department", "Department is required"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewEmployee {
        employee_id: employee_id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    })
}

/// State of the "mark attendance" form.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkAttendanceForm {
    pub employee_ids: Vec<String>,
    pub date: Option<NaiveDate>,
    pub status: AttendanceStatus,
}

impl MarkAttendanceForm {
    /// Fresh form: nobody selected, dated `today`, marked present.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_ids: Vec::new(),
            date: Some(today),
            status: AttendanceStatus::default(),
        }
    }

    /// `today` is the caller's local date; later dates are rejected.
    pub fn validate(&self, today: NaiveDate) -> Result<BulkAttendanceRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.employee_ids.is_empty() {
            errors.push(FieldError::new("employee_ids", "Please select at least one employee"));
        }

        match self.date {
            None => errors.push(FieldError::new("date", "Date is required")),
            Some(date) if date > today => errors.push(FieldError::new(
                "date",
                "Cannot mark attendance for future dates",
            )),
            Some(_) => {}
        }

        match (errors.is_empty(), self.date) {
            (true, Some(date)) => Ok(BulkAttendanceRequest {
                employee_ids: self.employee_ids.clone(),
                date,
                status: self.status,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewEmployee {
        NewEmployee {
            employee_id: " EMP-001 ".to_string(),
            full_name: " Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn valid_employee_is_trimmed() {
        let clean = validate_new_employee(&form()).unwrap();
        assert_eq!(clean.employee_id, "EMP-001");
        assert_eq!(clean.full_name, "Ada Lovelace");
    }

    #[test]
    fn employee_errors_are_reported_per_field() {
        let bad = NewEmployee {
            employee_id: "EMP 001".to_string(),
            full_name: "   ".to_string(),
            email: "ada@example".to_string(),
            department: String::new(),
        };
        let errors = validate_new_employee(&bad).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["employee_id", "full_name", "email", "department"]);
        assert_eq!(
            errors[0].message,
            "Only alphanumeric characters, hyphens, and underscores allowed"
        );
        assert_eq!(errors[2].to_string(), "email: Please enter a valid email");
    }

    #[test]
    fn missing_employee_id_and_email_use_required_messages() {
        let bad = NewEmployee {
            employee_id: String::new(),
            email: String::new(),
            ..form()
        };
        let errors = validate_new_employee(&bad).unwrap_err();
        assert_eq!(errors[0].message, "Employee ID is required");
        assert_eq!(errors[1].message, "Email is required");
    }

    #[test]
    fn mark_form_builds_bulk_request() {
        let today = d(2024, 3, 14);
        let mut mark = MarkAttendanceForm::new(today);
        mark.employee_ids = vec!["EMP-001".to_string(), "EMP-002".to_string()];
        mark.status = AttendanceStatus::Absent;

        let request = mark.validate(today).unwrap();
        assert_eq!(request.employee_ids.len(), 2);
        assert_eq!(request.date, today);
        assert_eq!(request.status, AttendanceStatus::Absent);
    }

    #[test]
    fn mark_form_rejects_empty_selection_and_future_dates() {
        let today = d(2024, 3, 14);
        let mut mark = MarkAttendanceForm::new(today);
        mark.date = Some(d(2024, 3, 15));

        let errors = mark.validate(today).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("employee_ids", "Please select at least one employee"),
                FieldError::new("date", "Cannot mark attendance for future dates"),
            ]
        );

        mark.date = None;
        mark.employee_ids = vec!["EMP-001".to_string()];
        assert_eq!(
            mark.validate(today).unwrap_err(),
            vec![FieldError::new("date", "Date is required")]
        );
    }
}
