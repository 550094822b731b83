//! Scanning free text for color names and hex codes

use std::cmp::Reverse;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};
use crate::named::ColorRegistry;
use crate::ArgbColor;

/// Which registry keys take part in extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// Registered names only, resolved with `by_name`
    Name,
    /// Registered canonical hex codes only, resolved with `by_hex`
    Hex,
    /// Names and hex codes, resolved with `by_css`
    #[default]
    Both,
}

impl MatchMode {
    pub fn includes_names(self) -> bool {
        matches!(self, MatchMode::Name | MatchMode::Both)
    }

    pub fn includes_hex(self) -> bool {
        matches!(self, MatchMode::Hex | MatchMode::Both)
    }
}

/// A single alternation over a registry's keys, bound to that registry.
///
/// Keys are ordered longest first so that the leftmost-first semantics of
/// the alternation pick the longest key at each position.
#[derive(Debug)]
pub struct ColorMatcher<'r> {
    registry: &'r ColorRegistry,
    mode: MatchMode,
    pattern: Regex,
}

impl<'r> ColorMatcher<'r> {
    /// Build a matcher over the keys `mode` selects from `registry`
    pub fn new(registry: &'r ColorRegistry, mode: MatchMode) -> ColorResult<Self> {
        let mut keys = registry.keys_for(mode);
        if keys.is_empty() {
            return Err(ColorError::EmptyRegistry);
        }

        keys.sort_by(|a, b| Reverse(a.len()).cmp(&Reverse(b.len())).then_with(|| a.cmp(b)));
        keys.dedup();

        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        log::trace!("Color matcher over {} keys ({:?})", keys.len(), mode);

        Ok(ColorMatcher {
            registry,
            mode,
            pattern: Regex::new(&alternation)?,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Matched key substrings of `text`, lower-cased, in order of occurrence
    pub fn find_keys(&self, text: &str) -> Vec<String> {
        let lowered = text.to_ascii_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Colors mentioned in `text`, in order of occurrence, duplicates kept
    pub fn extract(&self, text: &str) -> ColorResult<Vec<ArgbColor>> {
        let colors = self
            .find_keys(text)
            .iter()
            .map(|key| self.registry.resolve(key, self.mode))
            .collect::<ColorResult<Vec<_>>>()?;
        log::trace!("Extracted {} colors", colors.len());
        Ok(colors)
    }
}
