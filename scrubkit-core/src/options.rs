//! options.rs - Matching options shared by every pattern-based operation.
//!
//! The case-sensitivity flag applies only to pattern operations, never to the
//! character or word tables, whose comparison behavior is fixed when the
//! table is built.
//!
//! License: MIT OR APACHE 2.0

use std::time::Duration;

/// Default match timeout applied when none (or a non-positive one) is set.
pub const DEFAULT_MATCH_TIMEOUT: Duration = Duration::from_secs(1);

/// Default capacity of the compiled-pattern cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Options consulted by every pattern-based operation on a [`Scrub`] engine.
///
/// [`Scrub`]: crate::engine::Scrub
#[derive(Debug, Clone)]
pub struct ScrubOptions {
    ignore_case: bool,
    timeout: Duration,
    cache_capacity: usize,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            timeout: DEFAULT_MATCH_TIMEOUT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ScrubOptions {
    /// Whether pattern operations currently ignore case.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// The match timeout applied to each pattern replace.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sets the match timeout in seconds. Non-positive (or non-finite) input
    /// is coerced to [`DEFAULT_MATCH_TIMEOUT`] rather than rejected.
    pub fn set_timeout_secs(&mut self, secs: f64) {
        self.timeout = if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            DEFAULT_MATCH_TIMEOUT
        };
    }

    /// Capacity of the shared compiled-pattern cache.
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    /// Sets the cache capacity. Zero is coerced to
    /// [`DEFAULT_CACHE_CAPACITY`] rather than rejected.
    pub fn set_cache_capacity(&mut self, capacity: usize) {
        self.cache_capacity = if capacity == 0 {
            DEFAULT_CACHE_CAPACITY
        } else {
            capacity
        };
    }
}
