//! Process-wide toggle for verbose diagnostic tracing.
//!
//! Diagnostics go through `tracing` at debug level, but only when the toggle
//! is on. The toggle never affects control flow.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug_logging(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Emits a `tracing::debug!` line when debug logging is enabled.
macro_rules! diag {
    ($($arg:tt)*) => {
        if $crate::diag::enabled() {
            tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use diag;
