//! The domain error model: a failure already shaped for disclosure.

use std::sync::Arc;

use http::StatusCode;
use thiserror::Error;

use crate::taxonomy::ErrorKind;

/// A failure raised intentionally by business logic, with caller-safe fields.
///
/// `exposed_title` and `exposed_detail` are safe for external disclosure as
/// written by the raising call site: no stack traces, internal identifiers,
/// or secrets. Anything unsafe belongs in `internal`, which is carried for
/// diagnostic logging only and is never serialized into a report (the type
/// deliberately has no serde derives).
#[derive(Debug, Clone, Error)]
#[error("{exposed_title}: {exposed_detail}")]
pub struct DomainError {
    /// Taxonomy tag for this failure.
    pub kind: ErrorKind,
    /// Short caller-safe summary.
    pub exposed_title: String,
    /// Caller-safe explanation of this occurrence.
    pub exposed_detail: String,
    /// HTTP status emitted for this failure.
    pub status: StatusCode,
    /// Internal-only diagnostic context (original error, call-site info).
    ///
    /// Behind `Arc` so the value stays `Clone` and can ride HTTP response
    /// extensions to the boundary layer.
    pub internal: Option<Arc<anyhow::Error>>,
}

impl DomainError {
    /// Create a domain error with the kind's default status.
    #[must_use]
    pub fn new(kind: ErrorKind, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            exposed_title: title.into(),
            exposed_detail: detail.into(),
            status: kind.default_status(),
            internal: None,
        }
    }

    /// Creates a `Validation` error.
    #[must_use]
    pub fn validation(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, title, detail)
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, title, detail)
    }

    /// Creates a `Conflict` error.
    #[must_use]
    pub fn conflict(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, title, detail)
    }

    /// Creates an `Unauthorized` error.
    #[must_use]
    pub fn unauthorized(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, title, detail)
    }

    /// Creates a `Forbidden` error.
    #[must_use]
    pub fn forbidden(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, title, detail)
    }

    /// Override the emitted status code.
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attach internal diagnostic context for the log record.
    #[must_use]
    pub fn with_internal(mut self, source: anyhow::Error) -> Self {
        self.internal = Some(Arc::new(source));
        self
    }
}
