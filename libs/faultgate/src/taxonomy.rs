//! Closed error taxonomy: stable codes, type URLs, and default status codes.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Closed set of failure categories recognized at the request boundary.
///
/// `Unexpected` is the mandatory catch-all; the classifier coerces every
/// unrecognized failure to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Forbidden,
    Unexpected,
}

impl ErrorKind {
    /// Every member of the taxonomy, for table-driven checks.
    pub const ALL: [Self; 6] = [
        Self::Validation,
        Self::NotFound,
        Self::Conflict,
        Self::Unauthorized,
        Self::Forbidden,
        Self::Unexpected,
    ];

    /// Stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Unexpected => "UNEXPECTED",
        }
    }

    /// Stable type URI identifying the problem category.
    #[must_use]
    pub const fn type_url(self) -> &'static str {
        match self {
            Self::Validation => "https://errors.faultgate.dev/VALIDATION",
            Self::NotFound => "https://errors.faultgate.dev/NOT_FOUND",
            Self::Conflict => "https://errors.faultgate.dev/CONFLICT",
            Self::Unauthorized => "https://errors.faultgate.dev/UNAUTHORIZED",
            Self::Forbidden => "https://errors.faultgate.dev/FORBIDDEN",
            Self::Unexpected => "https://errors.faultgate.dev/UNEXPECTED",
        }
    }

    /// Default HTTP status for this kind.
    #[must_use]
    pub const fn default_status(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-deployment `{kind → status}` table.
///
/// Built once at process start and treated as immutable thereafter; passed
/// explicitly into the classifier rather than held as global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusOverrides(BTreeMap<ErrorKind, u16>);

impl StatusOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the status emitted for a kind.
    #[must_use]
    pub fn with(mut self, kind: ErrorKind, status: u16) -> Self {
        self.0.insert(kind, status);
        self
    }

    /// Effective status for a kind.
    ///
    /// A configured code outside the valid HTTP status range falls back to
    /// the kind's default, so the lookup is total and never raises.
    #[must_use]
    pub fn status_for(&self, kind: ErrorKind) -> StatusCode {
        self.0
            .get(&kind)
            .and_then(|&code| StatusCode::from_u16(code).ok())
            .unwrap_or_else(|| kind.default_status())
    }
}
