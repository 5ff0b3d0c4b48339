//! Total classification of raised failures into the domain error shape.

use std::sync::Arc;

use crate::domain::DomainError;
use crate::taxonomy::{ErrorKind, StatusOverrides};

/// Fixed caller-facing title for failures with no recognized shape.
pub const UNEXPECTED_TITLE: &str = "Unexpected Error";

/// Fixed caller-facing detail for failures with no recognized shape.
pub const UNEXPECTED_DETAIL: &str = "An unexpected error occurred.";

/// Any failure escaping request processing, as a tagged variant.
///
/// A closed enum instead of an open type hierarchy keeps [`classify`] an
/// exhaustive match. `Clone + Send + Sync` so a failure can ride HTTP
/// response extensions to the boundary layer.
#[derive(Debug, Clone)]
pub enum RawFailure {
    /// Raised intentionally by business logic with caller-safe fields.
    Domain(DomainError),
    /// Any other propagated error.
    Unhandled(Arc<anyhow::Error>),
    /// A panic captured at the boundary, reduced to its payload message.
    Panic(String),
}

impl From<DomainError> for RawFailure {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<anyhow::Error> for RawFailure {
    fn from(err: anyhow::Error) -> Self {
        Self::Unhandled(Arc::new(err))
    }
}

/// Map any raised failure to a [`DomainError`].
///
/// Total and infallible: recognized failures pass through unchanged, and
/// everything else is coerced to `ErrorKind::Unexpected` with the fixed
/// generic title and detail. Raw error text may contain secrets, file paths,
/// or query fragments, so it is retained only as internal payload and never
/// copied into the exposed fields.
#[must_use]
pub fn classify(failure: RawFailure, overrides: &StatusOverrides) -> DomainError {
    match failure {
        RawFailure::Domain(err) => err,
        RawFailure::Unhandled(source) => {
            // A DomainError that traveled inside an anyhow chain is still recognized.
            if let Some(err) = source.downcast_ref::<DomainError>() {
                return err.clone();
            }
            let mut err = unexpected(overrides);
            err.internal = Some(source);
            err
        }
        RawFailure::Panic(message) => {
            unexpected(overrides).with_internal(anyhow::anyhow!("panic: {message}"))
        }
    }
}

fn unexpected(overrides: &StatusOverrides) -> DomainError {
    DomainError::new(ErrorKind::Unexpected, UNEXPECTED_TITLE, UNEXPECTED_DETAIL)
        .with_status(overrides.status_for(ErrorKind::Unexpected))
}
