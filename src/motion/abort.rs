//! Emergency abort flag.

use core::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag for rail motion.
///
/// One side (an interrupt handler, a serial command) calls [`request`]; the
/// rail polls it before every pulse and clears it with [`consume`]. Only plain
/// loads and stores are used, so it works on cores without compare-and-swap.
///
/// [`request`]: AbortToken::request
/// [`consume`]: AbortToken::consume
#[derive(Debug, Default)]
pub struct AbortToken {
    requested: AtomicBool,
}

impl AbortToken {
    /// Create a cleared token. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Ask the running (or next) motion command to stop.
    #[inline]
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    /// Check the flag without clearing it.
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Read and clear the flag.
    ///
    /// Returns `true` if an abort was pending.
    #[inline]
    pub fn consume(&self) -> bool {
        let pending = self.requested.load(Ordering::Acquire);
        if pending {
            self.requested.store(false, Ordering::Release);
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_clears_once() {
        let token = AbortToken::new();
        assert!(!token.consume());

        token.request();
        assert!(token.is_requested());
        assert!(token.consume());
        assert!(!token.is_requested());
        assert!(!token.consume());
    }

    #[test]
    fn test_static_token() {
        static TOKEN: AbortToken = AbortToken::new();

        TOKEN.request();
        assert!(TOKEN.consume());
    }
}
