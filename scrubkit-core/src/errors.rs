//! errors.rs - Custom error types for the scrubkit-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::time::Duration;
use thiserror::Error;

/// This enum represents all possible error types in the `scrubkit-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    /// Positional character-map construction was handed two sequences of
    /// different lengths. The map needs a one-to-one pairing.
    #[error("character map length mismatch: `from` has {from_len} characters but `to` has {to_len}")]
    CharMapLengthMismatch { from_len: usize, to_len: usize },

    /// The host pattern engine refused to compile a pattern.
    #[error("failed to compile pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// `apply_named` was given a name that is not in the pattern library.
    #[error("unknown named pattern `{0}`: not present in the pattern library")]
    UnknownPattern(String),

    /// A pattern operation exceeded the configured match timeout (or the
    /// engine's backtrack budget). The working string is left unchanged.
    #[error("pattern `{pattern}` did not finish matching within {timeout:?}")]
    MatchTimeout { pattern: String, timeout: Duration },
}
