//! engine.rs - The chainable text-scrubbing engine.
//!
//! [`Scrub`] owns a working string and drives it through character, word and
//! pattern based transformations. Every transform reads the current working
//! string, produces a new one, stores it back and returns the engine, so
//! calls compose left-to-right:
//!
//! ```rust
//! use scrubkit_core::Scrub;
//!
//! let mut scrub = Scrub::new("  the BMW car  ");
//! scrub.set_pattern_list(vec![
//!     ("BMW".to_string(), "Fiat".to_string()),
//!     (r"\s+".to_string(), " ".to_string()),
//!     (r"^\s*|\s*$".to_string(), String::new()),
//! ]);
//! scrub.translate_patterns().unwrap();
//! assert_eq!(scrub.as_str(), "the Fiat car");
//! ```
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use fancy_regex::{Captures, Regex};
use log::debug;

use crate::compiler;
use crate::errors::ScrubError;
use crate::library::PatternLibrary;
use crate::options::ScrubOptions;
use crate::tables::{char_map_from_pairs, WordTable};

/// How a pattern match turns into replacement text.
enum Replacer<'a> {
    /// Literal text, with `$n`/`${n}` capture-group expansion.
    Literal(&'a str),
    /// A caller-supplied evaluator invoked once per match.
    Evaluator(&'a mut dyn FnMut(&Captures) -> String),
}

/// The text-scrubbing engine.
///
/// Owns the working string, the three translation tables, the named-pattern
/// library and the matching options. All tables are created empty at
/// construction (the library starts with the built-in set) and stay open to
/// wholesale replacement or direct incremental mutation for the engine's
/// lifetime.
///
/// The engine is ordinary mutable state with no internal locking; wrap it in
/// external synchronization if it must cross threads.
#[derive(Debug)]
pub struct Scrub {
    working: String,
    char_map: HashMap<char, char>,
    word_map: WordTable,
    pattern_list: Vec<(String, String)>,
    library: PatternLibrary,
    options: ScrubOptions,
}

impl Scrub {
    /// Creates an engine around an initial working string, with empty
    /// translation tables and the built-in pattern library.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            working: initial.into(),
            char_map: HashMap::new(),
            word_map: WordTable::default(),
            pattern_list: Vec::new(),
            library: PatternLibrary::default(),
            options: ScrubOptions::default(),
        }
    }

    // ------------------------------------------------------------------
    // Working string
    // ------------------------------------------------------------------

    /// Replaces the working string outright.
    pub fn set(&mut self, working: impl Into<String>) -> &mut Self {
        self.working = working.into();
        self
    }

    /// The current working string.
    pub fn as_str(&self) -> &str {
        &self.working
    }

    /// Consumes the engine, yielding the working string.
    pub fn into_string(self) -> String {
        self.working
    }

    // ------------------------------------------------------------------
    // Table configuration
    // ------------------------------------------------------------------

    /// Builds the character table from two equal-length character sequences
    /// paired positionally, replacing (never merging with) any previous
    /// table. Fails with [`ScrubError::CharMapLengthMismatch`] when the
    /// sequences differ in length.
    pub fn set_char_map_pairs(&mut self, from: &str, to: &str) -> Result<&mut Self, ScrubError> {
        self.char_map = char_map_from_pairs(from, to)?;
        Ok(self)
    }

    /// Replaces the character table wholesale. Pass an empty map to clear.
    pub fn set_char_map(&mut self, map: HashMap<char, char>) -> &mut Self {
        self.char_map = map;
        self
    }

    pub fn char_map(&self) -> &HashMap<char, char> {
        &self.char_map
    }

    /// Direct mutable access to the character table for incremental
    /// enrichment after bulk setup.
    pub fn char_map_mut(&mut self) -> &mut HashMap<char, char> {
        &mut self.char_map
    }

    /// Replaces the word table wholesale, fixing its comparison mode. Pass
    /// an empty map for an empty table with the requested mode.
    pub fn set_word_map(&mut self, map: HashMap<String, String>, ignore_case: bool) -> &mut Self {
        self.word_map = WordTable::new(map, ignore_case);
        self
    }

    pub fn word_map(&self) -> &WordTable {
        &self.word_map
    }

    /// Direct mutable access to the word table. The comparison mode stays
    /// fixed; only entries can change.
    pub fn word_map_mut(&mut self) -> &mut WordTable {
        &mut self.word_map
    }

    /// Replaces the ordered pattern/replacement list wholesale. Pass an
    /// empty list to clear.
    pub fn set_pattern_list(&mut self, list: Vec<(String, String)>) -> &mut Self {
        self.pattern_list = list;
        self
    }

    pub fn pattern_list(&self) -> &[(String, String)] {
        &self.pattern_list
    }

    /// Direct mutable access to the ordered pattern list.
    pub fn pattern_list_mut(&mut self) -> &mut Vec<(String, String)> {
        &mut self.pattern_list
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Direct mutable access to the named pattern library, for caller-added
    /// entries beyond the built-in set.
    pub fn library_mut(&mut self) -> &mut PatternLibrary {
        &mut self.library
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    pub fn options(&self) -> &ScrubOptions {
        &self.options
    }

    /// Toggles case-insensitive matching for pattern operations only; the
    /// character and word tables keep their own comparison behavior.
    pub fn ignore_case(&mut self, ignore_case: bool) -> &mut Self {
        self.options.set_ignore_case(ignore_case);
        self
    }

    /// Sets the match timeout in seconds; non-positive input falls back to
    /// the default. See [`ScrubOptions::set_timeout_secs`].
    pub fn set_match_timeout_secs(&mut self, secs: f64) -> &mut Self {
        self.options.set_timeout_secs(secs);
        self
    }

    /// Sets the compiled-pattern cache capacity; zero falls back to the
    /// default. See [`ScrubOptions::set_cache_capacity`].
    pub fn set_cache_capacity(&mut self, capacity: usize) -> &mut Self {
        self.options.set_cache_capacity(capacity);
        self
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    /// Substitutes every character present in the character table and passes
    /// all others through untouched. Never changes the length of the string.
    pub fn map_chars(&mut self) -> &mut Self {
        if self.char_map.is_empty() {
            return self;
        }
        let map = &self.char_map;
        let mapped: String = self
            .working
            .chars()
            .map(|c| map.get(&c).copied().unwrap_or(c))
            .collect();
        self.working = mapped;
        self
    }

    /// [`map_words_on`](Self::map_words_on) with a single-space separator.
    pub fn map_words(&mut self) -> &mut Self {
        self.map_words_on(" ")
    }

    /// Splits the working string on an exact literal separator, swaps each
    /// token found in the word table (per the table's comparison mode) and
    /// rejoins with the same separator. Each token is looked up once; a
    /// substituted token is not re-submitted within the pass. An empty
    /// working string or empty separator yields an empty result.
    pub fn map_words_on(&mut self, separator: &str) -> &mut Self {
        if self.working.is_empty() || separator.is_empty() {
            self.working = String::new();
            return self;
        }

        let mut joined = String::with_capacity(self.working.len());
        for token in self.working.split(separator) {
            match self.word_map.lookup(token) {
                Some(replacement) => joined.push_str(replacement),
                None => joined.push_str(token),
            }
            joined.push_str(separator);
        }

        // The loop emits one trailing separator past the last token; drop
        // exactly that one occurrence, whatever the separator's length.
        joined.truncate(joined.len() - separator.len());
        self.working = joined;
        self
    }

    /// Removes every match of an inline pattern.
    pub fn strip(&mut self, pattern: &str) -> Result<&mut Self, ScrubError> {
        self.apply_pattern(pattern, &mut Replacer::Literal(""))?;
        Ok(self)
    }

    /// Applies the ordered pattern list in sequence. Each entry runs against
    /// the cumulative result of the previous one, so later patterns can
    /// match text produced by earlier replacements.
    pub fn translate_patterns(&mut self) -> Result<&mut Self, ScrubError> {
        let pairs = self.pattern_list.clone();
        for (pattern, replacement) in &pairs {
            self.apply_pattern(pattern, &mut Replacer::Literal(replacement))?;
        }
        Ok(self)
    }

    /// Like [`translate_patterns`](Self::translate_patterns), but the single
    /// shared evaluator overrides every entry's literal replacement text for
    /// this invocation.
    pub fn translate_patterns_with<F>(&mut self, mut evaluator: F) -> Result<&mut Self, ScrubError>
    where
        F: FnMut(&Captures) -> String,
    {
        let pairs = self.pattern_list.clone();
        for (pattern, _) in &pairs {
            self.apply_pattern(pattern, &mut Replacer::Evaluator(&mut evaluator))?;
        }
        Ok(self)
    }

    /// Resolves a name in the pattern library and replaces every match with
    /// the given text. Fails with [`ScrubError::UnknownPattern`] when the
    /// name is absent.
    pub fn apply_named(&mut self, name: &str, replacement: &str) -> Result<&mut Self, ScrubError> {
        let pattern = self.library.get(name)?.to_string();
        self.apply_pattern(&pattern, &mut Replacer::Literal(replacement))?;
        Ok(self)
    }

    /// [`apply_named`](Self::apply_named) with an empty replacement.
    pub fn strip_named(&mut self, name: &str) -> Result<&mut Self, ScrubError> {
        self.apply_named(name, "")
    }

    /// Applies an ad hoc pattern with a caller-supplied evaluator invoked
    /// once per non-overlapping match. The evaluator receives the full
    /// captures (match plus groups) and returns the literal text to
    /// substitute for that match.
    pub fn apply_custom<F>(&mut self, pattern: &str, mut evaluator: F) -> Result<&mut Self, ScrubError>
    where
        F: FnMut(&Captures) -> String,
    {
        self.apply_pattern(pattern, &mut Replacer::Evaluator(&mut evaluator))?;
        Ok(self)
    }

    /// Shared find-and-replace core for every pattern operation. Compiles
    /// through the cache, honors the case flag and the timeout, and commits
    /// the result only when the whole replace succeeds, so a timed-out
    /// operation leaves the working string untouched.
    fn apply_pattern(&mut self, pattern: &str, replacer: &mut Replacer<'_>) -> Result<(), ScrubError> {
        let regex = compiler::get_or_compile(
            pattern,
            self.options.ignore_case(),
            self.options.cache_capacity(),
        )?;
        debug!("applying pattern `{}` to {} bytes", pattern, self.working.len());
        self.working = replace_all(&self.working, &regex, replacer, pattern, self.options.timeout())?;
        Ok(())
    }
}

impl fmt::Display for Scrub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.working)
    }
}

/// Replaces every non-overlapping match of `regex` in `working`, checking
/// the deadline between matches. Returns the fully built result or an error;
/// never a partially replaced string.
fn replace_all(
    working: &str,
    regex: &Regex,
    replacer: &mut Replacer<'_>,
    pattern: &str,
    timeout: Duration,
) -> Result<String, ScrubError> {
    let started = Instant::now();
    let mut out = String::with_capacity(working.len());
    let mut last_end = 0usize;

    for caps in regex.captures_iter(working) {
        if started.elapsed() > timeout {
            return Err(ScrubError::MatchTimeout {
                pattern: pattern.to_string(),
                timeout,
            });
        }
        let caps = caps.map_err(|e| match_error(pattern, timeout, e))?;
        let full = match caps.get(0) {
            Some(full) => full,
            None => continue,
        };

        out.push_str(&working[last_end..full.start()]);
        match replacer {
            Replacer::Literal(text) => caps.expand(text, &mut out),
            Replacer::Evaluator(evaluator) => out.push_str(&evaluator(&caps)),
        }
        last_end = full.end();
    }

    out.push_str(&working[last_end..]);
    Ok(out)
}

/// Maps a failure raised during matching. Blowing the backtrack budget is
/// surfaced as a timeout; anything else means the pattern itself is at
/// fault.
fn match_error(pattern: &str, timeout: Duration, err: fancy_regex::Error) -> ScrubError {
    match err {
        fancy_regex::Error::RuntimeError(_) => ScrubError::MatchTimeout {
            pattern: pattern.to_string(),
            timeout,
        },
        other => ScrubError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(other),
        },
    }
}
