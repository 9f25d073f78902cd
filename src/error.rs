use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

const FALLBACK_MESSAGE: &str = "An error occurred";

/// Failure of a call against the HRMS backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{}", join_field_errors(.errors))]
    Validation {
        status: u16,
        errors: Vec<ValidationDetail>,
    },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One entry of a `detail` list, as FastAPI sends on 422.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidationDetail {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
}

impl ValidationDetail {
    /// Last path segment of `loc`, e.g. `"email"` for `["body", "email"]`.
    pub fn field(&self) -> Option<String> {
        self.loc.last().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

fn join_field_errors(errors: &[ValidationDetail]) -> String {
    if errors.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    errors
        .iter()
        .map(|e| match e.field() {
            Some(field) => format!("{}: {}", field, e.msg),
            None => e.msg.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    /// Builds the error for a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").cloned());

        match detail {
            Some(Value::String(message)) => ApiError::Api { status, message },
            Some(list @ Value::Array(_)) => {
                match serde_json::from_value::<Vec<ValidationDetail>>(list) {
                    Ok(errors) => ApiError::Validation { status, errors },
                    Err(_) => ApiError::Api {
                        status,
                        message: FALLBACK_MESSAGE.to_string(),
                    },
                }
            }
            _ => ApiError::Api {
                status,
                message: format!("Request failed with status code {}", status),
            },
        }
    }

    /// The single human-readable string shown to the user.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Validation { status, .. } => Some(*status),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_becomes_message() {
        let err = ApiError::from_response(
            409,
            r#"{"detail":"Employee with ID 'EMP-001' already exists"}"#,
        );
        assert!(err.is_conflict());
        assert_eq!(err.message(), "Employee with ID 'EMP-001' already exists");
    }

    #[test]
    fn list_detail_becomes_validation_error() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
            {"loc":["body","date"],"msg":"Attendance date cannot be in the future","type":"value_error"}
        ]}"#;
        let err = ApiError::from_response(422, body);

        match &err {
            ApiError::Validation { errors, .. } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field().as_deref(), Some("email"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(
            err.message(),
            "email: value is not a valid email address; date: Attendance date cannot be in the future"
        );
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn list_detail_keeps_the_response_status() {
        let body = r#"{"detail":[{"loc":["query","date_from"],"msg":"invalid date format"}]}"#;
        let err = ApiError::from_response(400, body);

        assert!(matches!(err, ApiError::Validation { status: 400, .. }));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), "date_from: invalid date format");
    }

    #[test]
    fn body_without_detail_falls_back_to_status() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(err.message(), "Request failed with status code 500");
        assert!(!err.is_not_found());
    }

    #[test]
    fn empty_detail_uses_fallback_message() {
        let err = ApiError::from_response(400, r#"{"detail":""}"#);
        assert_eq!(err.message(), "An error occurred");
    }
}
