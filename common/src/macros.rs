//! Status-line macros.
//!
//! Thin wrappers over `tracing` events on the `shelfr::status` target. The
//! subscriber installed by the binary turns the level into a colored symbol
//! prefix, so callers just state what happened.

/// Neutral progress line, rendered as `[+]`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "shelfr::status", $($arg)*)
    };
}

/// Positive outcome line, rendered as `[+]`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "shelfr::status", $($arg)*)
    };
}

/// Recoverable problem line, rendered as `[*]`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "shelfr::status", $($arg)*)
    };
}
