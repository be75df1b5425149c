//! Diagnostic output control for the demo.
//!
//! Diagnostics go to stderr so they never mix with the report on stdout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Reads the environment gate at most once per process.
static INIT: Once = Once::new();

/// Check if diagnostic output is enabled via `FIBDEMO_DEBUG`.
pub fn is_debug_enabled() -> bool {
    INIT.call_once(|| {
        if std::env::var("FIBDEMO_DEBUG").is_ok() {
            DEBUG_ENABLED.store(true, Ordering::Relaxed);
        }
    });
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print a diagnostic line to stderr when `FIBDEMO_DEBUG` is set.
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}
