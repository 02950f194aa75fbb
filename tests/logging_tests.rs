//! Logging bootstrap tests. Kept in one test: the backend is process-wide.

use homekeeper::logging::{init_logging, logging_active};

#[test]
fn test_init_logging_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");

    assert!(!logging_active());
    init_logging("debug", dir.path()).expect("first init");
    assert!(logging_active());

    // further calls are no-ops, whatever the arguments
    init_logging("info", dir.path()).expect("second init");
    init_logging("debug", &dir.path().join("elsewhere")).expect("third init");

    log::info!("logging smoke line");
}
