//! HTTP-facing error type and its JSON envelope.
//!
//! Every error response has the shape:
//!
//! ```json
//! { "status": 404, "code": "#hotelNotFound", "short": "Hotel not found", "long": "..." }
//! ```

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::pagination::PaginationError;
use crate::domain::repositories::IndexError;

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    code: String,
    short: String,
    long: String,
}

/// Application error with a stable machine-readable code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{short}")]
    BadRequest {
        code: &'static str,
        short: String,
        long: String,
    },
    #[error("{short}")]
    Validation {
        code: &'static str,
        short: String,
        long: String,
    },
    #[error("{short}")]
    NotFound {
        code: &'static str,
        short: String,
        long: String,
    },
    #[error("{short}")]
    BadGateway {
        code: &'static str,
        short: String,
        long: String,
    },
}

impl AppError {
    pub fn bad_request(
        code: &'static str,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        Self::BadRequest {
            code,
            short: short.into(),
            long: long.into(),
        }
    }
    pub fn validation(
        code: &'static str,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        Self::Validation {
            code,
            short: short.into(),
            long: long.into(),
        }
    }
    pub fn not_found(
        code: &'static str,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            code,
            short: short.into(),
            long: long.into(),
        }
    }
    pub fn bad_gateway(
        code: &'static str,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        Self::BadGateway {
            code,
            short: short.into(),
            long: long.into(),
        }
    }

    /// Unknown route.
    pub fn route_not_found() -> Self {
        Self::not_found("notFound", "Page not found", "This endpoint does not exist")
    }

    pub fn hotel_not_found() -> Self {
        Self::not_found(
            "hotelNotFound",
            "Hotel not found",
            "Hotel with the given address is not present in the index.",
        )
    }

    pub fn hotel_not_accessible(reason: impl Into<String>) -> Self {
        Self::bad_gateway(
            "hotelNotAccessible",
            reason,
            "Hotel data is not accessible.",
        )
    }

    pub fn room_type_not_found() -> Self {
        Self::not_found(
            "roomTypeNotFound",
            "Room type not found",
            "Room type with the given id does not exist for this hotel.",
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { code, .. }
            | AppError::Validation { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::BadGateway { code, .. } => *code,
        }
    }
}

impl From<PaginationError> for AppError {
    fn from(e: PaginationError) -> Self {
        match e {
            PaginationError::InvalidLimit => AppError::validation(
                "paginationLimitError",
                "Invalid limit",
                "Limit must be a natural number greater than 0.",
            ),
            PaginationError::MissingStartCursor(_) => AppError::not_found(
                "paginationStartWithError",
                "Unknown startWith",
                "Cannot find startWith in hotel collection.",
            ),
        }
    }
}

impl From<IndexError> for AppError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::Unavailable(reason) => AppError::bad_gateway(
                "unreachableIndex",
                "Hotel index is unreachable",
                reason,
            ),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "badRequest",
            "Invalid query string",
            rejection.body_text(),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request("badRequest", "Invalid path", rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self);
        }

        let code = format!("#{}", self.code());
        let (short, long) = match self {
            AppError::BadRequest { short, long, .. }
            | AppError::Validation { short, long, .. }
            | AppError::NotFound { short, long, .. }
            | AppError::BadGateway { short, long, .. } => (short, long),
        };

        let body = ErrorBody {
            status: status.as_u16(),
            code,
            short,
            long,
        };

        (status, Json(body)).into_response()
    }
}
