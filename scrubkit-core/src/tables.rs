//! tables.rs - Translation tables used by the non-pattern transforms.
//!
//! Two table flavors live here: the character map builder used by
//! `map_chars`, and the whole-word [`WordTable`] used by `map_words`. Both
//! treat "key absent" as an ordinary pass-through, never an error.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use crate::errors::ScrubError;

/// Builds a character map by pairing two equal-length character sequences
/// positionally. Each character of `from` maps to the character of `to` at
/// the same offset. A one-char-to-one-char mapping only, so the transform it
/// drives can never change the length of a string.
///
/// Fails with [`ScrubError::CharMapLengthMismatch`] when the sequences have
/// different character counts.
pub fn char_map_from_pairs(from: &str, to: &str) -> Result<HashMap<char, char>, ScrubError> {
    let from: Vec<char> = from.chars().collect();
    let to: Vec<char> = to.chars().collect();

    if from.len() != to.len() {
        return Err(ScrubError::CharMapLengthMismatch {
            from_len: from.len(),
            to_len: to.len(),
        });
    }

    Ok(from.into_iter().zip(to).collect())
}

/// A whole-word translation table.
///
/// The comparison mode (exact or case-insensitive) is fixed when the table is
/// created and cannot be changed afterwards; to switch modes, build a new
/// table. Entries themselves stay open to insertion and removal for the
/// table's whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    entries: HashMap<String, String>,
    ignore_case: bool,
}

impl WordTable {
    /// Builds a table from an existing map with the given comparison mode.
    pub fn new(entries: HashMap<String, String>, ignore_case: bool) -> Self {
        Self {
            entries,
            ignore_case,
        }
    }

    /// An empty table with the requested comparison mode.
    pub fn with_mode(ignore_case: bool) -> Self {
        Self::new(HashMap::new(), ignore_case)
    }

    /// Whether lookups compare keys case-insensitively.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Looks a token up, honoring the table's comparison mode. Empty tokens
    /// never match; a missing key is a normal "no match" outcome.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        if token.is_empty() {
            return None;
        }
        if let Some(replacement) = self.entries.get(token) {
            return Some(replacement);
        }
        if self.ignore_case {
            let lowered = token.to_lowercase();
            return self
                .entries
                .iter()
                .find(|(key, _)| key.to_lowercase() == lowered)
                .map(|(_, replacement)| replacement.as_str());
        }
        None
    }

    pub fn insert(
        &mut self,
        word: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(word.into(), replacement.into())
    }

    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.entries.remove(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read access to the underlying entries.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Direct mutable access to the underlying entries. Incremental
    /// enrichment after bulk setup is a first-class part of the contract.
    pub fn entries_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.entries
    }
}
