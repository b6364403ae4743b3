// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Execution context threaded through every reduction and kernel call.
//!
//! The context is a small `Copy` value passed explicitly, never read from global
//! state, so independent reductions on different streams cannot observe each other.

use core::fmt;

use crate::config::DEFAULT_STREAM;

/// Ordered-submission token identifying where kernel work is queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamId(pub u64);

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stream#{}", self.0)
    }
}

/// Per-call execution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecContext {
    stream: StreamId,
    parallel_sort: bool,
}

impl ExecContext {
    pub fn new(stream: u64) -> Self {
        Self {
            stream: StreamId(stream),
            parallel_sort: false,
        }
    }

    /// Allows order-producing kernels to sort on the rayon pool.
    ///
    /// Has no effect unless the crate is built with `parallel_sort`.
    pub fn with_parallel_sort(mut self, parallel: bool) -> Self {
        self.parallel_sort = parallel;
        self
    }

    #[inline]
    pub fn stream(&self) -> StreamId {
        self.stream
    }

    #[inline]
    pub fn parallel_sort(&self) -> bool {
        self.parallel_sort
    }
}

impl Default for ExecContext {
    fn default() -> Self {
        Self::new(DEFAULT_STREAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = ExecContext::new(7).with_parallel_sort(true);
        assert_eq!(ctx.stream(), StreamId(7));
        assert!(ctx.parallel_sort());
        assert_eq!(ExecContext::default().stream(), StreamId(DEFAULT_STREAM));
        assert!(!ExecContext::default().parallel_sort());
        assert_eq!(StreamId(3).to_string(), "stream#3");
    }
}
