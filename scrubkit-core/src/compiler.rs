//! compiler.rs - Compilation and caching of patterns.
//!
//! This module provides a thread-safe, bounded cache of compiled patterns
//! keyed by pattern text and case mode. It is a process-wide, shared cache:
//! purely a performance optimization, never observable in results. Distinct
//! engine instances share compiled patterns but nothing else.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use fancy_regex::{Regex, RegexBuilder};
use lazy_static::lazy_static;
use log::debug;

use crate::errors::ScrubError;

/// Upper bound on backtracking steps for a single match attempt. Exceeding
/// it surfaces as a timeout to the caller.
const BACKTRACK_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: String,
    ignore_case: bool,
}

/// The cache proper: compiled patterns plus insertion order for eviction.
#[derive(Debug, Default)]
struct PatternCache {
    compiled: HashMap<CacheKey, Arc<Regex>>,
    order: VecDeque<CacheKey>,
}

impl PatternCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<Regex>> {
        self.compiled.get(key).map(Arc::clone)
    }

    /// Inserts a compiled pattern, evicting the oldest entries until the
    /// cache fits within `capacity`.
    fn insert(&mut self, key: CacheKey, regex: Arc<Regex>, capacity: usize) {
        let capacity = capacity.max(1);
        while self.compiled.len() >= capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.compiled.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.compiled.insert(key, regex);
    }
}

lazy_static! {
    /// A thread-safe, global cache of compiled patterns.
    static ref PATTERN_CACHE: RwLock<PatternCache> = RwLock::new(PatternCache::default());
}

/// Gets a compiled pattern from the cache, compiling and caching it on a
/// miss. Callers never observe a miss as a different result, only as a
/// performance difference.
pub fn get_or_compile(
    pattern: &str,
    ignore_case: bool,
    capacity: usize,
) -> Result<Arc<Regex>, ScrubError> {
    let key = CacheKey {
        pattern: pattern.to_string(),
        ignore_case,
    };

    // Attempt a read lock first; the common case is a hit.
    {
        let cache = PATTERN_CACHE.read().unwrap();
        if let Some(regex) = cache.get(&key) {
            debug!("serving compiled pattern from cache: `{}`", pattern);
            return Ok(regex);
        }
    } // Read lock is released here.

    debug!("compiling pattern `{}` (ignore_case: {})", pattern, ignore_case);
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
        .map_err(|e| ScrubError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(e),
        })?;
    let regex = Arc::new(regex);

    PATTERN_CACHE
        .write()
        .unwrap()
        .insert(key, Arc::clone(&regex), capacity);

    Ok(regex)
}
