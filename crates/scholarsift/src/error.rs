//! Error types for the ScholarSift service.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. `ApiError` is the axum-facing type that maps the lower
//! layers onto HTTP status codes.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors from the arXiv HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the arXiv API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Resource not found (404 response)
    #[error("Not found: {message}")]
    NotFound {
        /// Error message from API
        message: String,
    },

    /// Atom feed could not be parsed
    #[error("Failed to parse Atom feed: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// The feed itself reports a query error (arXiv error entry)
    #[error("arXiv rejected the query: {message}")]
    Feed {
        /// Error message embedded in the feed
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    /// Create a feed error from an arXiv error entry.
    #[must_use]
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from the document export layer.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// Nothing to export
    #[error("No papers to export")]
    NoPapers,

    /// Word document writer failed
    #[error("Word export failed: {message}")]
    Docx {
        /// Error message from the writer
        message: String,
    },

    /// PDF writer failed
    #[error("PDF export failed: {message}")]
    Pdf {
        /// Error message from the writer
        message: String,
    },

    /// Excel writer failed
    #[error("Excel export failed: {message}")]
    Xlsx {
        /// Error message from the writer
        message: String,
    },

    /// I/O error writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create a Word writer error.
    #[must_use]
    pub fn docx(message: impl ToString) -> Self {
        Self::Docx { message: message.to_string() }
    }

    /// Create a PDF writer error.
    #[must_use]
    pub fn pdf(message: impl ToString) -> Self {
        Self::Pdf { message: message.to_string() }
    }

    /// Create an Excel writer error.
    #[must_use]
    pub fn xlsx(message: impl ToString) -> Self {
        Self::Xlsx { message: message.to_string() }
    }
}

/// Errors surfaced by the HTTP API.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Error from the arXiv client
    #[error("arXiv error: {0}")]
    Client(#[from] ClientError),

    /// Error from a document writer
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Input validation failed
    #[error("Invalid input for '{field}': {message}")]
    Validation {
        /// Parameter that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

impl ApiError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Export(ExportError::NoPapers) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Client(ClientError::BadRequest { .. } | ClientError::Feed { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::Client(ClientError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Client(ClientError::RateLimited { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Client(_) => StatusCode::BAD_GATEWAY,
            Self::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
