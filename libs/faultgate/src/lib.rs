//! Request-boundary error translation
//!
//! This crate turns any failure that escapes request processing into two
//! artifacts joined by a per-failure correlation identifier:
//! - a full diagnostic log record (internal-only detail included), and
//! - a caller-facing RFC 9457 Problem report built exclusively from
//!   caller-safe fields.
//!
//! The pipeline is a single linear pass: [`classify`] → [`CorrelationId::allocate`]
//! → [`record_failure`] → [`build_problem`], bundled as [`translate`]. It holds
//! no shared mutable state and is safe to invoke concurrently from many
//! in-flight requests.

pub mod classify;
pub mod correlation;
pub mod diag;
pub mod domain;
pub mod problem;
pub mod report;
pub mod taxonomy;

// Re-export commonly used types
pub use classify::{RawFailure, UNEXPECTED_DETAIL, UNEXPECTED_TITLE, classify};
pub use correlation::CorrelationId;
pub use diag::record_failure;
pub use domain::DomainError;
pub use problem::{APPLICATION_PROBLEM_JSON, Problem};
pub use report::build_problem;
pub use taxonomy::{ErrorKind, StatusOverrides};

/// Run the full translation pipeline for one failure.
///
/// The diagnostic record is initiated before the caller-facing report is
/// finalized; recording is best-effort and can never fail the report.
#[must_use]
pub fn translate(
    failure: RawFailure,
    overrides: &StatusOverrides,
    trace_id: Option<String>,
) -> Problem {
    let error = classify(failure, overrides);
    let correlation_id = CorrelationId::allocate();
    record_failure(&correlation_id, &error, trace_id.as_deref());
    build_problem(&error, &correlation_id, trace_id)
}
