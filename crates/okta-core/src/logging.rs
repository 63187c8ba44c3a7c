#![forbid(unsafe_code)]

//! Logging shim for the Omnioktagram crates.
//!
//! With the `tracing` feature the macros below are `tracing`'s own. Without
//! it they expand to nothing, and the span macros hand back a [`NoopSpan`],
//! so call sites such as `okta_core::debug!(ordinal, "step appended")` or
//! `okta_core::debug_span!("load_code").entered()` need no `cfg` of their own.
//!
//! Only the levels the session code logs at are exported: `trace` for
//! per-pointer noise, `debug` for recorded steps and spans, `info` for a
//! completed spell, `warn` for rejected commands.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod disabled {
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Yields a [`NoopSpan`](crate::logging::NoopSpan).
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Stand-in for `tracing::Span` when logging is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Matches `tracing::Span::entered`.
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn disabled_macros_accept_structured_fields() {
        let ordinal = 3usize;
        crate::trace!(x = 1.0f32, y = 2.0f32, "pointer moved");
        crate::debug!(ordinal, kind = "line", "step appended");
        crate::info!(code = "81234567", total_cost = 36, "spell completed");
        crate::warn!("skip rejected: {}", ordinal);
        let _guard = crate::debug_span!("pointer_up", x = 1.0f32).entered();
    }
}
