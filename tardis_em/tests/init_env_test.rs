//! Tests for `init()` when the logging environment is invalid.
//!
//! Mutates process environment variables, so it runs as its own test binary
//! with a single test.

use tardis_em::{LoggingError, MPS_FALLBACK_ENV, init};

#[test]
fn test_mps_fallback_set_even_when_log_settings_are_invalid() {
    // SAFETY: the only test in this binary; no other thread touches the environment.
    unsafe {
        std::env::remove_var(MPS_FALLBACK_ENV);
        std::env::set_var("TARDIS_LOG_LEVEL", "loud");
    }

    let result = unsafe { init() };

    assert!(matches!(result, Err(LoggingError::InvalidLevel(level)) if level == "loud"));
    assert_eq!(std::env::var(MPS_FALLBACK_ENV).as_deref(), Ok("1"));
}
