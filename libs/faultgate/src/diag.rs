//! Diagnostic recording of classified failures.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::correlation::CorrelationId;
use crate::domain::DomainError;

/// Write one structured log record for a failure, at error severity.
///
/// The record carries the correlation identifier, the taxonomy code, the
/// exposed detail (for cross-reference with the caller's report), and the
/// full internal error chain. It is initiated before the caller-facing
/// report is finalized.
///
/// Best-effort: a panicking subscriber is swallowed here so that a broken
/// log sink can never turn into a second user-visible error.
pub fn record_failure(
    correlation_id: &CorrelationId,
    error: &DomainError,
    trace_id: Option<&str>,
) {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let source = error.internal.as_ref().map(|e| format!("{e:#}"));
        tracing::error!(
            correlation_id = %correlation_id,
            kind = error.kind.code(),
            status = error.status.as_u16(),
            exposed_detail = %error.exposed_detail,
            source = source.as_deref(),
            trace_id,
            "{error}"
        );
    }));
    drop(outcome);
}
