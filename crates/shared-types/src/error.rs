use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the domain layer and the pages that render it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn plain(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation error carrying a single field message.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::InternalError, message)
    }

    /// Message for one form field, if the error names it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("missing visit");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "missing visit");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("check_out".to_string(), "before check-in".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("check_out"), Some("before check-in"));
        assert_eq!(err.field("check_in"), None);
    }

    #[test]
    fn invalid_field_uses_message_for_both() {
        let err = AppError::invalid_field("break_minutes", "Break is longer than the shift");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "Break is longer than the shift");
        assert_eq!(err.field("break_minutes"), Some("Break is longer than the shift"));
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("no active session");
        assert_eq!(format!("{}", err), "Unauthorized: no active session");
    }

    #[test]
    fn empty_field_errors_are_not_serialized() {
        let json = serde_json::to_string(&AppError::internal("boom")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
