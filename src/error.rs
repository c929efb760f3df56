//! Application error taxonomy and its HTTP mapping.
//!
//! | Variant | Status |
//! |---|---|
//! | [`AppError::Validation`] | 400 |
//! | [`AppError::NotFound`] | 404 |
//! | [`AppError::Conflict`] | 400 |
//! | [`AppError::NoEffect`] | 400 |
//! | [`AppError::Internal`] | 500 |
//!
//! Every error is rendered as `{ "message": ..., "code": ... }` with optional
//! `details`. Internal causes are logged, never returned to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::pricing::PricingError;
use crate::utils::db_error::{DbErrorKind, classify};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    NoEffect { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn no_effect(message: impl Into<String>, details: Value) -> Self {
        Self::NoEffect {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } | AppError::NoEffect { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::NoEffect { .. } => "no_effect",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Replaces the message of a conflict, leaving other errors untouched.
    ///
    /// Repositories only know that a constraint was violated; services use
    /// this to say which dependency blocked the operation.
    pub fn on_conflict(self, message: impl Into<String>, details: Value) -> Self {
        match self {
            AppError::Conflict { .. } => AppError::conflict(message, details),
            other => other,
        }
    }

    pub fn into_body(self) -> ErrorBody {
        let code = self.code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::NoEffect { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorBody {
            message,
            code,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match classify(&e) {
            DbErrorKind::ForeignKeyViolation { constraint } => AppError::conflict(
                "Operation violates a reference between records",
                json!({ "constraint": constraint }),
            ),
            DbErrorKind::UniqueViolation { constraint } => AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": constraint }),
            ),
            DbErrorKind::CheckViolation { constraint } => AppError::bad_request(
                "Value violates a data constraint",
                json!({ "constraint": constraint }),
            ),
            DbErrorKind::Other => {
                tracing::error!(error = %e, "Database error");
                AppError::internal("Database error", Value::Null)
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = e.errors().keys().map(|field| field.to_string()).collect();
        fields.sort();
        AppError::bad_request("Invalid request data", json!({ "fields": fields }))
    }
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        AppError::bad_request(e.to_string(), Value::Null)
    }
}
