//! plan.rs - Declarative scrub plans.
//!
//! A [`ScrubPlan`] describes a whole scrubbing pipeline in data: the
//! translation tables, extra library entries, matching options and an
//! ordered list of steps. Plans are deserialized from YAML, validated up
//! front and then driven through a [`Scrub`] engine, so callers can keep
//! their pipelines in configuration instead of code.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::engine::Scrub;
use crate::errors::ScrubError;
use crate::library::PatternLibrary;

/// Positional character-pair specification for the character table.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CharMapSpec {
    pub from: String,
    pub to: String,
}

/// One entry of the ordered pattern/replacement list.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatternEntry {
    pub pattern: String,
    pub replace_with: String,
}

/// Matching options carried by a plan. Unset fields keep engine defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PlanOptions {
    pub ignore_case: bool,
    pub timeout_secs: Option<f64>,
    pub cache_capacity: Option<usize>,
}

fn default_separator() -> String {
    " ".to_string()
}

/// One transformation step of a plan, applied in order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScrubStep {
    MapChars,
    MapWords {
        #[serde(default = "default_separator")]
        separator: String,
    },
    Strip {
        pattern: String,
    },
    TranslatePatterns,
    ApplyNamed {
        name: String,
        #[serde(default)]
        replacement: String,
    },
}

/// A full, declarative description of a scrub pipeline.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScrubPlan {
    /// Positional character pairs for the character table.
    pub char_map: Option<CharMapSpec>,
    /// Whole-word translations.
    pub word_map: HashMap<String, String>,
    /// Comparison mode for the word table.
    pub word_map_ignore_case: bool,
    /// The ordered pattern/replacement list.
    pub patterns: Vec<PatternEntry>,
    /// Extra named patterns layered on top of the built-in library.
    pub library: HashMap<String, String>,
    pub options: PlanOptions,
    /// Steps to run, in order.
    pub steps: Vec<ScrubStep>,
}

impl ScrubPlan {
    /// Loads and validates a plan from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading scrub plan from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        let plan = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load plan file {}", path.display()))?;
        Ok(plan)
    }

    /// Parses and validates a plan from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let plan: ScrubPlan = serde_yml::from_str(text).context("Failed to parse scrub plan")?;
        plan.validate()?;
        debug!(
            "parsed plan: {} word(s), {} pattern(s), {} step(s)",
            plan.word_map.len(),
            plan.patterns.len(),
            plan.steps.len()
        );
        Ok(plan)
    }

    /// Validates plan integrity: character-pair lengths, pattern
    /// compilation, and that every named step resolves against the built-in
    /// library plus this plan's extra entries.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(spec) = &self.char_map {
            let from_len = spec.from.chars().count();
            let to_len = spec.to.chars().count();
            if from_len != to_len {
                errors.push(format!(
                    "char_map `from` has {from_len} characters but `to` has {to_len}"
                ));
            }
        }

        for entry in &self.patterns {
            if let Err(e) = fancy_regex::Regex::new(&entry.pattern) {
                errors.push(format!("pattern `{}` does not compile: {e}", entry.pattern));
            }
        }

        for (name, pattern) in &self.library {
            if let Err(e) = fancy_regex::Regex::new(pattern) {
                errors.push(format!("library entry `{name}` does not compile: {e}"));
            }
        }

        let builtins = PatternLibrary::default();
        for step in &self.steps {
            match step {
                ScrubStep::Strip { pattern } => {
                    if let Err(e) = fancy_regex::Regex::new(pattern) {
                        errors.push(format!("strip pattern `{pattern}` does not compile: {e}"));
                    }
                }
                ScrubStep::ApplyNamed { name, .. } => {
                    if !builtins.contains(name) && !self.library.contains_key(name) {
                        errors.push(format!("apply_named step references unknown pattern `{name}`"));
                    }
                }
                _ => {}
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Plan validation failed:\n{}", errors.join("\n")))
        }
    }

    /// Installs this plan's tables, library entries and options into an
    /// engine without running any steps.
    pub fn configure(&self, scrub: &mut Scrub) -> Result<(), ScrubError> {
        if let Some(spec) = &self.char_map {
            scrub.set_char_map_pairs(&spec.from, &spec.to)?;
        }
        scrub.set_word_map(self.word_map.clone(), self.word_map_ignore_case);
        scrub.set_pattern_list(
            self.patterns
                .iter()
                .map(|entry| (entry.pattern.clone(), entry.replace_with.clone()))
                .collect(),
        );
        for (name, pattern) in &self.library {
            scrub.library_mut().insert(name.clone(), pattern.clone());
        }

        scrub.ignore_case(self.options.ignore_case);
        if let Some(secs) = self.options.timeout_secs {
            scrub.set_match_timeout_secs(secs);
        }
        if let Some(capacity) = self.options.cache_capacity {
            scrub.set_cache_capacity(capacity);
        }
        Ok(())
    }

    /// Runs the whole plan against an input string and returns the scrubbed
    /// result.
    pub fn run(&self, input: &str) -> Result<String> {
        let mut scrub = Scrub::new(input);
        self.configure(&mut scrub)?;

        for step in &self.steps {
            match step {
                ScrubStep::MapChars => {
                    scrub.map_chars();
                }
                ScrubStep::MapWords { separator } => {
                    scrub.map_words_on(separator);
                }
                ScrubStep::Strip { pattern } => {
                    scrub.strip(pattern)?;
                }
                ScrubStep::TranslatePatterns => {
                    scrub.translate_patterns()?;
                }
                ScrubStep::ApplyNamed { name, replacement } => {
                    scrub.apply_named(name, replacement)?;
                }
            }
        }

        Ok(scrub.into_string())
    }
}
