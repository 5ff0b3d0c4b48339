#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Cross-module properties of the translation pipeline:
//! taxonomy totality, non-disclosure of internal payloads, and
//! per-failure correlation-id uniqueness under concurrency.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use http::StatusCode;

use faultgate::{
    CorrelationId, DomainError, ErrorKind, RawFailure, StatusOverrides, UNEXPECTED_DETAIL,
    UNEXPECTED_TITLE, classify, translate,
};

#[test]
fn taxonomy_mappings_are_total() {
    // Both mapping tables must cover the identical (full) key set.
    for kind in ErrorKind::ALL {
        assert!(!kind.type_url().is_empty(), "missing type url for {kind}");
        let status = kind.default_status().as_u16();
        assert!(
            (100..=599).contains(&status),
            "status out of range for {kind}"
        );
    }
}

#[test]
fn classify_is_total_over_every_failure_shape() {
    let overrides = StatusOverrides::default();
    let failures: Vec<RawFailure> = vec![
        DomainError::validation("Invalid request", "bad field").into(),
        DomainError::forbidden("Forbidden", "missing role").into(),
        anyhow::anyhow!("dangling pointer-ish failure").into(),
        RawFailure::Panic("called `Option::unwrap()` on a `None` value".to_owned()),
        RawFailure::Panic(String::new()),
    ];

    for failure in failures {
        let classified = classify(failure, &overrides);
        assert!(ErrorKind::ALL.contains(&classified.kind));
        let status = classified.status.as_u16();
        assert!((100..=599).contains(&status));
    }
}

#[test]
fn reports_never_disclose_internal_payloads() {
    let overrides = StatusOverrides::default();
    let secrets = [
        "sk-live-4242424242",
        "password=hunter2",
        "/etc/faultgate/private.key",
        "SELECT * FROM users WHERE email =",
        "Bearer eyJhbGciOiJIUzI1NiJ9",
    ];

    for secret in secrets {
        let recognized = DomainError::conflict("Conflict", "resource busy")
            .with_internal(anyhow::anyhow!("context: {secret}"));
        let unrecognized: RawFailure = anyhow::anyhow!("raw failure: {secret}").into();

        for failure in [RawFailure::from(recognized), unrecognized] {
            let problem = translate(failure, &overrides, None);
            let json = serde_json::to_string(&problem).unwrap();
            assert!(!json.contains(secret), "leaked {secret:?} into {json}");
        }
    }
}

#[test]
fn unrecognized_failures_get_the_fixed_generic_text() {
    let overrides = StatusOverrides::default();
    let problem = translate(
        anyhow::anyhow!("NullPointerException at 0x7fff").into(),
        &overrides,
        None,
    );

    assert_eq!(problem.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(problem.title, UNEXPECTED_TITLE);
    assert_eq!(problem.detail, UNEXPECTED_DETAIL);
    assert!(!problem.detail.contains("0x7fff"));
}

#[test]
fn concurrent_allocations_are_unique() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1250;

    let ids = Arc::new(Mutex::new(HashSet::with_capacity(THREADS * PER_THREAD)));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let ids = Arc::clone(&ids);
            std::thread::spawn(move || {
                let mut local = Vec::with_capacity(PER_THREAD);
                for _ in 0..PER_THREAD {
                    local.push(CorrelationId::allocate());
                }
                ids.lock().unwrap().extend(local);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ids.lock().unwrap().len(), THREADS * PER_THREAD);
}
