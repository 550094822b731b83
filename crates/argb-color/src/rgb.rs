//! Base RGB color type and the capability traits shared by all color values

use serde::{Deserialize, Serialize};

use crate::channel::{self, normalize};
use crate::error::{ColorError, ColorResult};
use crate::hex;
use crate::ArgbColor;

/// Read access to red, green and blue as normalized fractions
pub trait RgbChannels {
    /// Red fraction (0.0-1.0)
    fn red(&self) -> f64;
    /// Green fraction (0.0-1.0)
    fn green(&self) -> f64;
    /// Blue fraction (0.0-1.0)
    fn blue(&self) -> f64;

    /// Red, green and blue as bytes (0-255)
    fn to_rgb8(&self) -> [u8; 3] {
        [
            channel::to_byte(self.red()),
            channel::to_byte(self.green()),
            channel::to_byte(self.blue()),
        ]
    }

    /// HTML hex form `#rrggbb`
    fn html(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Conversion into an [`ArgbColor`].
///
/// Arithmetic on colors accepts any operand implementing this trait.
/// Implementations that can fail (e.g. parsing text) return
/// [`ColorError::CoercionError`].
pub trait ToRgba {
    fn to_rgba(&self) -> ColorResult<ArgbColor>;
}

/// An RGB color with values in the range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRgb")]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

#[derive(Deserialize)]
struct RawRgb {
    r: f64,
    g: f64,
    b: f64,
}

impl From<RawRgb> for Rgb {
    fn from(raw: RawRgb) -> Self {
        Rgb::new(raw.r, raw.g, raw.b)
    }
}

impl Rgb {
    /// Create a new color from RGB fractions. Values are clamped.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb {
            r: normalize(r),
            g: normalize(g),
            b: normalize(b),
        }
    }

    const fn unchecked(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    /// Create a color from RGB bytes (0-255)
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgb {
            r: channel::from_byte(r),
            g: channel::from_byte(g),
            b: channel::from_byte(b),
        }
    }

    /// Create a color from hex text (`"#f0a"`, `"ff00aa"`, ...). Any alpha digits are dropped.
    pub fn from_html(text: &str) -> ColorResult<Self> {
        let [_, r, g, b] = hex::decode(text)?;
        Ok(Self::from_rgb8(r, g, b))
    }

    pub fn set_red(&mut self, value: f64) {
        self.r = normalize(value);
    }

    pub fn set_green(&mut self, value: f64) {
        self.g = normalize(value);
    }

    pub fn set_blue(&mut self, value: f64) {
        self.b = normalize(value);
    }

    /// Convert to array
    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear interpolation between two colors
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let t = normalize(t);
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// CSS form `rgb(R, G, B)` with byte components
    pub fn css(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// Common colors
    pub const WHITE: Rgb = Rgb::unchecked(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::unchecked(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb::unchecked(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::unchecked(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::unchecked(0.0, 0.0, 1.0);
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

impl RgbChannels for Rgb {
    fn red(&self) -> f64 {
        self.r
    }

    fn green(&self) -> f64 {
        self.g
    }

    fn blue(&self) -> f64 {
        self.b
    }
}

impl ToRgba for Rgb {
    fn to_rgba(&self) -> ColorResult<ArgbColor> {
        Ok(ArgbColor::from_fraction(1.0, self.r, self.g, self.b))
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Rgb::new(arr[0], arr[1], arr[2])
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

/// A grayscale level in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGray")]
pub struct Gray {
    level: f64,
}

#[derive(Deserialize)]
struct RawGray {
    level: f64,
}

impl From<RawGray> for Gray {
    fn from(raw: RawGray) -> Self {
        Gray::new(raw.level)
    }
}

impl Gray {
    pub fn new(level: f64) -> Self {
        Gray {
            level: normalize(level),
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }
}

impl ToRgba for Gray {
    fn to_rgba(&self) -> ColorResult<ArgbColor> {
        Ok(ArgbColor::from_grayscale_fraction(self.level))
    }
}

impl ToRgba for [u8; 4] {
    fn to_rgba(&self) -> ColorResult<ArgbColor> {
        Ok(ArgbColor::from(*self))
    }
}

/// `[a, r, g, b]` fractions
impl ToRgba for [f64; 4] {
    fn to_rgba(&self) -> ColorResult<ArgbColor> {
        let [a, r, g, b] = *self;
        Ok(ArgbColor::from_fraction(a, r, g, b))
    }
}

/// Hex text
impl ToRgba for &str {
    fn to_rgba(&self) -> ColorResult<ArgbColor> {
        ArgbColor::from_html(self)
            .map_err(|e| ColorError::coercion(format!("'{}' is not a color: {}", self, e)))
    }
}
