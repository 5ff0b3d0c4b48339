//! Centralized error translation for axum
//!
//! This crate wires the faultgate pipeline into an axum router as a single
//! terminal middleware. Registration order matters: the boundary must be the
//! *outermost* layer so every propagated failure reaches it before the
//! response is written.
//!
//! ```ignore
//! use faultgate::StatusOverrides;
//! use faultgate_axum::error_boundary;
//!
//! let overrides = StatusOverrides::default();
//! let app = axum::Router::new()
//!     .route("/users/{id}", axum::routing::get(get_user))
//!     .layer(axum::middleware::from_fn(move |req, next| {
//!         error_boundary(overrides.clone(), req, next)
//!     }));
//! ```

pub mod boundary;
pub mod trace;

pub use boundary::{Fault, error_boundary};
pub use trace::extract_trace_id;
