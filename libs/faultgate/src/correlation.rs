//! Per-failure correlation identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token joining a caller-facing report to its full log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Allocate a fresh identifier for one failure occurrence.
    ///
    /// Called once per failure, never cached per process or per handler:
    /// the identifier is the operator's only join key between a reported
    /// failure and its log record, so unrelated failures must not share one.
    /// Lock-free and safe for concurrent use.
    #[must_use]
    pub fn allocate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_allocations_differ() {
        assert_ne!(CorrelationId::allocate(), CorrelationId::allocate());
    }

    #[test]
    fn display_round_trips_through_uuid() {
        let id = CorrelationId::allocate();
        let parsed = Uuid::parse_str(&id.to_string()).expect("valid uuid");
        assert_eq!(&parsed, id.as_uuid());
    }
}
