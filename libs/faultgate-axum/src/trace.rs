//! Trace-context capture at the request boundary.

use http::HeaderMap;

/// Extract trace ID from headers or the current tracing span.
///
/// Captured alongside the correlation id (never instead of it) so upstream
/// distributed-tracing systems can cross-reference the failure.
#[must_use]
pub fn extract_trace_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-trace-id")
        .or_else(|| headers.get("x-request-id"))
        .or_else(|| headers.get("traceparent"))
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
        .or_else(|| {
            tracing::Span::current()
                .id()
                .map(|id| id.into_u64().to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_x_trace_id_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-trace-id", "test-trace-123".parse().expect("valid"));
        headers.insert("x-request-id", "req-456".parse().expect("valid"));

        assert_eq!(extract_trace_id(&headers), Some("test-trace-123".to_owned()));
    }

    #[test]
    fn falls_back_to_request_id_then_traceparent() {
        let mut headers = HeaderMap::new();
        headers.insert("traceparent", "00-abc-def-01".parse().expect("valid"));
        assert_eq!(extract_trace_id(&headers), Some("00-abc-def-01".to_owned()));

        headers.insert("x-request-id", "req-456".parse().expect("valid"));
        assert_eq!(extract_trace_id(&headers), Some("req-456".to_owned()));
    }

    #[test]
    fn yields_none_outside_any_span_with_bare_headers() {
        assert_eq!(extract_trace_id(&HeaderMap::new()), None);
    }
}
