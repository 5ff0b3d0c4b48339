//! The terminal error-translation middleware and its handler error type.

use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use http::StatusCode;

use faultgate::{APPLICATION_PROBLEM_JSON, RawFailure, StatusOverrides, translate};

use crate::trace::extract_trace_id;

/// A failure escaping a handler, carried to the boundary layer.
///
/// Handlers return `Result<_, Fault>`; the `IntoResponse` impl stashes the
/// failure in the response extensions for [`error_boundary`] to translate.
/// Without the boundary layer installed the caller sees only the bare status,
/// never the failure's content.
#[derive(Debug, Clone)]
pub struct Fault(RawFailure);

impl Fault {
    #[must_use]
    pub fn into_failure(self) -> RawFailure {
        self.0
    }
}

impl<E> From<E> for Fault
where
    E: Into<RawFailure>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RawFailure::Domain(err) => err.status,
            RawFailure::Unhandled(_) | RawFailure::Panic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut response = status.into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Terminal error-translation middleware.
///
/// Must be the outermost layer (see the crate docs for registration). For
/// each request it captures the trace id, then:
/// - passes through successful responses and responses that already carry
///   `application/problem+json`,
/// - pops a stashed [`RawFailure`] from the response extensions, and
/// - catches handler panics,
///
/// translating the latter two through the full pipeline: classify, allocate
/// a fresh correlation id, record the diagnostic log entry, and answer with
/// the caller-safe problem report.
#[allow(clippy::needless_pass_by_value)] // from_fn closures hand the captured config in by value
pub async fn error_boundary(overrides: StatusOverrides, request: Request, next: Next) -> Response {
    let trace_id = extract_trace_id(request.headers());

    let failure = match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(mut response) => {
            if is_problem_response(&response) {
                return response;
            }
            match response.extensions_mut().remove::<RawFailure>() {
                Some(failure) => failure,
                None => return response,
            }
        }
        Err(payload) => RawFailure::Panic(panic_message(payload.as_ref())),
    };

    translate(failure, &overrides, trace_id).into_response()
}

/// Check if a response is already a Problem+JSON response
fn is_problem_response(response: &Response) -> bool {
    response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains(APPLICATION_PROBLEM_JSON))
}

/// Reduce a panic payload to its message, if it has one.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_owned()
    }
}
