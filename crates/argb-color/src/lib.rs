//! ARGB Color System
//!
//! This crate provides:
//! - [`ArgbColor`] - an alpha + RGB color stored as normalized fractions, with
//!   byte and percentage views, arithmetic and mixing
//! - [`hex`] - the 3/6/8 digit hex codec and the canonical `aarrggbb` form
//! - [`ColorRegistry`] - colors indexed by name and by canonical hex
//! - [`extract_colors`] - scanning free text for registered names and hex codes
//!
//! # Example
//!
//! ```rust
//! use argb_color::{ArgbColor, ColorRegistry, MatchMode};
//!
//! let registry = ColorRegistry::new();
//! let coral = ArgbColor::from_html("#ff7f50").unwrap();
//! registry.register(coral, &["coral"]).unwrap();
//!
//! assert_eq!(registry.by_name("Coral").unwrap().hex(), "ffff7f50");
//!
//! let found = registry.extract_colors("coral on coral", MatchMode::Name).unwrap();
//! assert_eq!(found, vec![coral, coral]);
//! ```

pub mod channel;
mod color;
mod error;
mod extract;
pub mod hex;
mod named;
mod rgb;

pub use channel::normalize;
pub use color::{ArgbColor, ColorDelta, DEFAULT_RADIX};
pub use error::{ColorError, ColorResult};
pub use extract::{ColorMatcher, MatchMode};
pub use named::{extract_colors, ColorRegistry, DEFAULT_PALETTE};
pub use rgb::{Gray, Rgb, RgbChannels, ToRgba};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{ArgbColor, ColorError, ColorRegistry, MatchMode, Rgb, RgbChannels, ToRgba};
}
