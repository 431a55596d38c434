// scrubkit-core/src/lib.rs
//! # scrubkit Core Library
//!
//! `scrubkit-core` is a chainable text-scrubbing engine: given an input
//! string, it applies a sequence of configured transformations (per-character
//! substitution, whole-word dictionary substitution, and pattern-based
//! substitution with either static replacement text or a caller-supplied
//! evaluator) to produce a cleaned output string. It is aimed at normalizing
//! free-form text (accented characters, casing, slugs, masked addresses,
//! stripped markup) through a declarative, reusable pipeline instead of
//! ad hoc string code.
//!
//! ## Modules
//!
//! * `engine`: The [`Scrub`] type owning the working string, the translation
//!   tables and every fluent transformation operation.
//! * `tables`: The [`WordTable`] and the positional character-pair builder.
//! * `library`: The [`PatternLibrary`] of named patterns, pre-populated with
//!   a built-in set and extensible at runtime.
//! * `compiler`: The bounded, process-wide compiled-pattern cache.
//! * `options`: [`ScrubOptions`] for case mode, match timeout and cache
//!   sizing.
//! * `plan`: [`ScrubPlan`], a YAML-loadable description of a full pipeline.
//! * `errors`: The [`ScrubError`] enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use scrubkit_core::Scrub;
//! use std::collections::HashMap;
//!
//! fn main() -> Result<(), scrubkit_core::ScrubError> {
//!     let mut scrub = Scrub::new("Hank@kimball.com is sending an email");
//!     scrub.apply_named("email", "**Email Removed**")?;
//!     assert_eq!(scrub.as_str(), "**Email Removed** is sending an email");
//!
//!     // Whole-word translation, case-insensitive.
//!     let words: HashMap<String, String> =
//!         [("chevrolet".to_string(), "Ford".to_string())].into();
//!     scrub.set("the Chevrolet guys").set_word_map(words, true).map_words();
//!     assert_eq!(scrub.to_string(), "the Ford guys");
//!     Ok(())
//! }
//! ```
//!
//! ## Design Principles
//!
//! * **Fluent:** every transform stores its result back into the engine and
//!   returns it, so calls chain in the order written.
//! * **Tables are data:** all three translation tables and the pattern
//!   library stay open to direct mutation after bulk setup.
//! * **Delegated matching:** the pattern sublanguage itself belongs to the
//!   host engine (`fancy-regex`); this crate specifies only the integration
//!   contract - case mode, timeout, caching and capture-group access.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod compiler;
pub mod engine;
pub mod errors;
pub mod library;
pub mod options;
pub mod plan;
pub mod tables;

/// Re-exports the engine itself.
pub use engine::Scrub;

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScrubError;

/// Re-exports the named pattern library and the built-in pattern set.
pub use library::{PatternLibrary, BUILTIN_PATTERNS};

/// Re-exports matching options and their documented defaults.
pub use options::{ScrubOptions, DEFAULT_CACHE_CAPACITY, DEFAULT_MATCH_TIMEOUT};

/// Re-exports declarative plan types.
pub use plan::{CharMapSpec, PatternEntry, PlanOptions, ScrubPlan, ScrubStep};

/// Re-exports the whole-word translation table.
pub use tables::WordTable;

/// Match captures handed to rewrite evaluators, re-exported from the host
/// pattern engine.
pub use fancy_regex::Captures;
