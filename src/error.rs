use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::{response::ApiResponse, validation::FieldErrors};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Hay campos con errores")]
    Validation(FieldErrors),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    ReferentialIntegrity {
        message: String,
        code: Option<String>,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Classifies a failed delete: a foreign-key violation means other rows
    /// still reference the record.
    pub fn from_delete(err: DbErr, in_use_message: &str) -> Self {
        let code = db_error_code(&err);
        let referenced = matches!(
            err.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        ) || code
            .as_deref()
            .is_some_and(is_foreign_key_code);

        if referenced {
            AppError::ReferentialIntegrity {
                message: in_use_message.to_string(),
                code,
            }
        } else {
            AppError::Database(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ReferentialIntegrity { .. }
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Postgres `foreign_key_violation`, SQLite `SQLITE_CONSTRAINT_FOREIGNKEY` and
/// `SQLITE_CONSTRAINT_TRIGGER` (raised by a RESTRICT action).
fn is_foreign_key_code(code: &str) -> bool {
    matches!(code, "23503" | "787" | "1811")
}

/// Driver error code (SQLSTATE on Postgres, extended result code on SQLite).
pub fn db_error_code(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db))) => {
            db.code().map(|code| code.into_owned())
        }
        _ => None,
    }
}

#[derive(Debug, Default, Serialize)]
struct ErrorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let data = match self {
            AppError::Validation(errors) => ErrorData {
                errors: Some(errors),
                code: None,
            },
            AppError::ReferentialIntegrity { code, .. } => {
                tracing::error!(code = ?code, "{message}");
                ErrorData { errors: None, code }
            }
            AppError::Database(ref err) => {
                tracing::error!(error = ?err, "database error");
                ErrorData {
                    errors: None,
                    code: db_error_code(err),
                }
            }
            AppError::Internal(ref err) => {
                tracing::error!(error = ?err, "internal error");
                ErrorData::default()
            }
            _ => ErrorData::default(),
        };

        ApiResponse::failure(status, message, data).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
