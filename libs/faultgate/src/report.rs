//! Assembly of caller-facing problem reports.

use crate::correlation::CorrelationId;
use crate::domain::DomainError;
use crate::problem::Problem;

/// Build the caller-facing report for a classified failure.
///
/// Pure construction: only the exposed fields and the identifiers flow in.
/// The internal payload never does.
#[must_use]
pub fn build_problem(
    error: &DomainError,
    correlation_id: &CorrelationId,
    trace_id: Option<String>,
) -> Problem {
    let mut problem = Problem::new(
        error.status,
        error.exposed_title.clone(),
        error.exposed_detail.clone(),
    )
    .with_type(error.kind.type_url())
    .with_instance(format!("errorId:{correlation_id}"))
    .with_correlation_id(correlation_id.to_string());

    if let Some(tid) = trace_id {
        problem = problem.with_trace_id(tid);
    }

    problem
}
