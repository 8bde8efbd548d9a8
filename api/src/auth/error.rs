use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};

use crate::auth::LOGIN_PATH;
use crate::response::{ApiResponse, Empty};

/// Every way a request can fail, converted to the JSON envelope at the
/// request boundary.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("You don't have permission to access this page.")]
    Forbidden,

    #[error("Student profile not found. Please contact administrator.")]
    StudentProfileMissing,

    #[error("Teacher profile not found. Please contact administrator.")]
    TeacherProfileMissing,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("{0}")]
    Internal(String),
}

impl From<DbErr> for PortalError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                return PortalError::Conflict(format!(
                    "A record with these values already exists ({detail})"
                ));
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return PortalError::BadRequest(format!(
                    "Referenced record does not exist ({detail})"
                ));
            }
            _ => {}
        }
        match err {
            DbErr::RecordNotFound(msg) => PortalError::NotFound(msg),
            DbErr::Custom(msg) => PortalError::BadRequest(msg),
            other => PortalError::Database(other),
        }
    }
}

impl PortalError {
    pub fn status(&self) -> StatusCode {
        match self {
            PortalError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            PortalError::Forbidden => StatusCode::FORBIDDEN,
            PortalError::StudentProfileMissing
            | PortalError::TeacherProfileMissing
            | PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PortalError::Conflict(_) => StatusCode::CONFLICT,
            PortalError::Database(_) | PortalError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Access denials send the caller back to login.
    fn redirects_to_login(&self) -> bool {
        matches!(
            self,
            PortalError::Forbidden
                | PortalError::StudentProfileMissing
                | PortalError::TeacherProfileMissing
        )
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        let mut body = ApiResponse::<Empty>::error(self.to_string());
        if self.redirects_to_login() {
            body = body.with_redirect(LOGIN_PATH);
        }
        (status, Json(body)).into_response()
    }
}
