//! Named color registry
//!
//! A registry indexes colors two ways: by case-insensitive name (a color may
//! carry several aliases) and by canonical 8-digit hex. Colors are `Copy`
//! values, so anything handed out by a lookup is detached from the stored
//! entry and registered colors never change.

use std::sync::LazyLock;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::{ColorError, ColorResult};
use crate::extract::{ColorMatcher, MatchMode};
use crate::hex;
use crate::ArgbColor;

/// Built-in palette: aliases and `[a, r, g, b]` bytes
pub const DEFAULT_PALETTE: &[(&[&str], [u8; 4])] = &[
    (&["white"], [255, 255, 255, 255]),
    (&["silver"], [255, 192, 192, 192]),
    (&["gray", "grey"], [255, 128, 128, 128]),
    (&["black"], [255, 0, 0, 0]),
    (&["red"], [255, 255, 0, 0]),
    (&["maroon"], [255, 128, 0, 0]),
    (&["yellow"], [255, 255, 255, 0]),
    (&["olive"], [255, 128, 128, 0]),
    (&["lime"], [255, 0, 255, 0]),
    (&["green"], [255, 0, 128, 0]),
    (&["aqua", "cyan"], [255, 0, 255, 255]),
    (&["teal"], [255, 0, 128, 128]),
    (&["blue"], [255, 0, 0, 255]),
    (&["navy"], [255, 0, 0, 128]),
    (&["fuchsia", "magenta"], [255, 255, 0, 255]),
    (&["purple"], [255, 128, 0, 128]),
    (&["orange"], [255, 255, 165, 0]),
    (&["transparent"], [0, 0, 0, 0]),
];

static GLOBAL: LazyLock<ColorRegistry> = LazyLock::new(ColorRegistry::with_defaults);

#[derive(Debug, Default)]
struct Tables {
    by_name: AHashMap<String, ArgbColor>,
    by_hex: AHashMap<String, ArgbColor>,
}

/// Bidirectional index of colors by name and by canonical hex.
///
/// Registration takes a write lock; lookups and extraction take read locks.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    tables: RwLock<Tables>,
}

impl ColorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding [`DEFAULT_PALETTE`]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// The process-wide registry, populated with the default palette on first use
    pub fn global() -> &'static ColorRegistry {
        &GLOBAL
    }

    fn register_defaults(&self) {
        for &(names, argb) in DEFAULT_PALETTE {
            if let Err(e) = self.register(ArgbColor::from(argb), names) {
                log::warn!("Skipping default color {:?}: {}", names, e);
            }
        }
    }

    /// Register a color under one or more names.
    ///
    /// Fails with [`ColorError::DuplicateName`] if any name (compared
    /// case-insensitively) is already bound or repeated in `names`; nothing
    /// is stored in that case. The color is also indexed by its canonical hex.
    /// At least one name is required ([`ColorError::InvalidArgument`] otherwise).
    pub fn register<S: AsRef<str>>(&self, color: ArgbColor, names: &[S]) -> ColorResult<ArgbColor> {
        if names.is_empty() {
            return Err(ColorError::invalid_argument(format!(
                "color {} registered without a name",
                color.hex()
            )));
        }
        let keys: Vec<String> = names.iter().map(|n| n.as_ref().to_ascii_lowercase()).collect();

        let mut tables = self.tables.write();
        for (i, key) in keys.iter().enumerate() {
            if tables.by_name.contains_key(key) || keys[..i].contains(key) {
                return Err(ColorError::DuplicateName(key.clone()));
            }
        }

        let hex = color.hex();
        log::debug!("Registering color {} as {:?}", hex, keys);
        for key in keys {
            tables.by_name.insert(key, color);
        }
        tables.by_hex.insert(hex, color);
        Ok(color)
    }

    /// Case-insensitive lookup by name
    pub fn by_name(&self, name: &str) -> ColorResult<ArgbColor> {
        self.tables
            .read()
            .by_name
            .get(&name.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| ColorError::not_found(name))
    }

    /// Lookup by name, producing a value with `fallback` on a miss
    pub fn by_name_or_else<F>(&self, name: &str, fallback: F) -> ArgbColor
    where
        F: FnOnce() -> ArgbColor,
    {
        self.by_name(name).unwrap_or_else(|_| fallback())
    }

    fn find_hex(&self, text: &str) -> Option<ArgbColor> {
        let key = hex::normalize_hex_key(text).ok()?;
        self.tables.read().by_hex.get(&key).copied()
    }

    /// Find-or-parse lookup by hex.
    ///
    /// A registered entry is returned when the normalized key matches one;
    /// otherwise the text is parsed into a fresh, unregistered color. Parse
    /// errors propagate.
    pub fn by_hex(&self, text: &str) -> ColorResult<ArgbColor> {
        if let Some(color) = self.find_hex(text) {
            return Ok(color);
        }
        log::debug!("Hex '{}' not registered, parsing", text);
        ArgbColor::from_html(text)
    }

    /// Find-or-parse lookup by hex, using `fallback` if the text does not parse
    pub fn by_hex_or_else<F>(&self, text: &str, fallback: F) -> ArgbColor
    where
        F: FnOnce() -> ArgbColor,
    {
        self.by_hex(text).unwrap_or_else(|_| fallback())
    }

    /// Resolve a name, then a hex code. Names take precedence.
    pub fn by_css(&self, name_or_hex: &str) -> ColorResult<ArgbColor> {
        match self.by_name(name_or_hex) {
            Ok(color) => Ok(color),
            Err(_) => self.by_hex(name_or_hex),
        }
    }

    /// [`by_css`](Self::by_css) with `fallback` used when neither form resolves
    pub fn by_css_or_else<F>(&self, name_or_hex: &str, fallback: F) -> ArgbColor
    where
        F: FnOnce() -> ArgbColor,
    {
        match self.by_name(name_or_hex) {
            Ok(color) => color,
            Err(_) => self.by_hex_or_else(name_or_hex, fallback),
        }
    }

    /// Check whether a name is bound
    pub fn contains_name(&self, name: &str) -> bool {
        self.tables.read().by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.tables.read().by_name.len()
    }

    /// Check if no name is registered
    pub fn is_empty(&self) -> bool {
        self.tables.read().by_name.is_empty()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().by_name.keys().cloned().collect();
        names.sort();
        names
    }

    /// All registered canonical hex keys, sorted
    pub fn hex_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.tables.read().by_hex.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Snapshot of every `(name, color)` pair, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (String, ArgbColor)> {
        let mut entries: Vec<(String, ArgbColor)> = self
            .tables
            .read()
            .by_name
            .iter()
            .map(|(name, &color)| (name.clone(), color))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter()
    }

    /// Candidate keys for a match mode
    pub(crate) fn keys_for(&self, mode: MatchMode) -> Vec<String> {
        let tables = self.tables.read();
        let mut keys: Vec<String> = Vec::new();
        if mode.includes_names() {
            keys.extend(tables.by_name.keys().cloned());
        }
        if mode.includes_hex() {
            keys.extend(tables.by_hex.keys().cloned());
        }
        keys
    }

    /// Resolve a matched key according to the mode it was matched under
    pub(crate) fn resolve(&self, key: &str, mode: MatchMode) -> ColorResult<ArgbColor> {
        match mode {
            MatchMode::Name => self.by_name(key),
            MatchMode::Hex => self.by_hex(key),
            MatchMode::Both => self.by_css(key),
        }
    }

    /// Find every registered name and/or hex code mentioned in `text`, in order.
    ///
    /// Matching is case-insensitive and non-overlapping; at each position
    /// the longest candidate wins. Repeated mentions yield repeated entries.
    /// Fails with [`ColorError::EmptyRegistry`] when `mode` selects no keys.
    pub fn extract_colors(&self, text: &str, mode: MatchMode) -> ColorResult<Vec<ArgbColor>> {
        ColorMatcher::new(self, mode)?.extract(text)
    }
}

/// [`ColorRegistry::extract_colors`] against the global registry
pub fn extract_colors(text: &str, mode: MatchMode) -> ColorResult<Vec<ArgbColor>> {
    ColorRegistry::global().extract_colors(text, mode)
}
