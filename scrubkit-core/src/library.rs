//! library.rs - The named pattern library.
//!
//! A mapping from a symbolic name to a pattern, pre-populated with a fixed
//! built-in set and open to caller-added entries at runtime. Looking up a
//! missing name is an error, never a silent no-op, so callers keying off
//! these names find out immediately when a name is wrong.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use crate::errors::ScrubError;

/// The built-in pattern set every library starts with.
///
/// The names and their matching behavior are a compatibility contract for
/// callers that address patterns by name.
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    // Match runs of whitespace, used to compact whitespace.
    ("whitespace_compact", r"\s+"),
    // Match leading and trailing whitespace.
    ("whitespace_ends", r"^\s*|\s*$"),
    ("whitespace_begin", r"^\s*"),
    ("whitespace_end", r"\s*$"),
    // Masks a string holding a single email; confused by extra `@`.
    ("single_email_mask", r"(?<=.{2}).(?=[^@]*?@)"),
    // Fair email regex, better than most.
    (
        "email",
        r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)",
    ),
    // Runs of non-ASCII characters, including spaces between them.
    ("non_ascii", r"[^\x00-\x7F]+\ *(?:[^\x00-\x7F]| )*"),
    // Simple tag strip, matches anything inside `<>`.
    ("tags_simple", r"\<[^\>]*\>"),
    // Script tag blocks; apply before `tags_simple` when stripping HTML.
    ("script_tags", r"<script[^>]*>[\s\S]*?</script>"),
    // Numeric literal with a period decimal, no thousands separators.
    ("en_number", r"[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)"),
    // Numeric literal with a comma decimal, no thousands separators.
    ("eu_number", r"[+-]?([0-9]+([,][0-9]*)?|[,][0-9]+)"),
    // Either decimal convention; may pick up things that are not numbers.
    ("uni_number", r"[+-]?([0-9]+([.,][0-9]*)?|[,.][0-9]+)"),
];

/// A name-to-pattern map, unique names, extensible at runtime.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: HashMap<String, String>,
}

impl Default for PatternLibrary {
    /// A library pre-populated with [`BUILTIN_PATTERNS`].
    fn default() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS
                .iter()
                .map(|(name, pattern)| (name.to_string(), pattern.to_string()))
                .collect(),
        }
    }
}

impl PatternLibrary {
    /// A library with no entries at all, not even the built-ins.
    pub fn empty() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    /// Resolves a name to its pattern. Fails with
    /// [`ScrubError::UnknownPattern`], naming the offender, when absent.
    pub fn get(&self, name: &str) -> Result<&str, ScrubError> {
        self.patterns
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ScrubError::UnknownPattern(name.to_string()))
    }

    /// Adds or replaces an entry, returning the previous pattern if the name
    /// was already taken.
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) -> Option<String> {
        self.patterns.insert(name.into(), pattern.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.patterns.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterates over `(name, pattern)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns
            .iter()
            .map(|(name, pattern)| (name.as_str(), pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_library_holds_every_builtin() {
        let library = PatternLibrary::default();
        assert_eq!(library.len(), BUILTIN_PATTERNS.len());
        for (name, pattern) in BUILTIN_PATTERNS {
            assert_eq!(library.get(name).unwrap(), *pattern);
        }
    }

    #[test]
    fn every_builtin_pattern_compiles() {
        for (name, pattern) in BUILTIN_PATTERNS {
            assert!(
                fancy_regex::Regex::new(pattern).is_ok(),
                "builtin `{name}` failed to compile"
            );
        }
    }

    #[test]
    fn missing_name_error_includes_the_name() {
        let library = PatternLibrary::default();
        let err = library.get("DoesNotExist").unwrap_err();
        assert!(matches!(err, ScrubError::UnknownPattern(_)));
        assert!(err.to_string().contains("DoesNotExist"));
    }

    #[test]
    fn runtime_entries_can_be_added_and_removed() {
        let mut library = PatternLibrary::default();
        assert!(library.insert("remove_wtf", r"(wtf)|(what the)\s+(hell)").is_none());
        assert!(library.contains("remove_wtf"));
        assert!(library.remove("remove_wtf").is_some());
        assert!(!library.contains("remove_wtf"));
    }
}
