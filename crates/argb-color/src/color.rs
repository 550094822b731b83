//! ARGB color value type

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::channel::{self, normalize, BYTE_SCALE, PERCENT_SCALE};
use crate::error::{ColorError, ColorResult};
use crate::hex;
use crate::rgb::{Gray, Rgb, RgbChannels, ToRgba};

/// Default radix of [`ArgbColor::new`]: components are bytes
pub const DEFAULT_RADIX: f64 = BYTE_SCALE;

/// An alpha + RGB color with every channel stored as a fraction in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawArgb")]
pub struct ArgbColor {
    a: f64,
    r: f64,
    g: f64,
    b: f64,
}

/// Deserialized channels before clamping
#[derive(Deserialize)]
struct RawArgb {
    a: f64,
    r: f64,
    g: f64,
    b: f64,
}

impl From<RawArgb> for ArgbColor {
    fn from(raw: RawArgb) -> Self {
        ArgbColor::from_fraction(raw.a, raw.r, raw.g, raw.b)
    }
}

/// Generates the fraction/byte/percentage getters and setters of one channel
macro_rules! channel_views {
    ($field:ident, $byte:ident, $percent:ident, $set:ident, $set_byte:ident, $set_percent:ident, $label:literal) => {
        #[doc = concat!($label, " as a fraction (0.0-1.0)")]
        #[inline]
        pub fn $field(&self) -> f64 {
            self.$field
        }

        #[doc = concat!($label, " as a byte (0-255)")]
        #[inline]
        pub fn $byte(&self) -> u8 {
            channel::to_byte(self.$field)
        }

        #[doc = concat!($label, " as a percentage (0.0-100.0)")]
        #[inline]
        pub fn $percent(&self) -> f64 {
            channel::to_percent(self.$field)
        }

        #[doc = concat!("Set ", $label, " from a fraction. Clamped.")]
        pub fn $set(&mut self, fraction: f64) {
            self.$field = normalize(fraction);
        }

        #[doc = concat!("Set ", $label, " from a byte value. Clamped.")]
        pub fn $set_byte(&mut self, byte: f64) {
            self.$field = normalize(byte / BYTE_SCALE);
        }

        #[doc = concat!("Set ", $label, " from a percentage. Clamped.")]
        pub fn $set_percent(&mut self, percent: f64) {
            self.$field = normalize(percent / PERCENT_SCALE);
        }
    };
}

impl ArgbColor {
    /// Create a color from components measured against `radix`.
    ///
    /// Each channel becomes `normalize(component / radix)`. A radix of 255
    /// reads bytes, 100 reads percentages and 1 reads fractions.
    pub fn new(a: f64, r: f64, g: f64, b: f64, radix: f64) -> ColorResult<Self> {
        if !(radix > 0.0) {
            return Err(ColorError::invalid_argument(format!(
                "radix must be positive, got {}",
                radix
            )));
        }
        Ok(Self::scaled(a, r, g, b, radix))
    }

    fn scaled(a: f64, r: f64, g: f64, b: f64, radix: f64) -> Self {
        ArgbColor {
            a: normalize(a / radix),
            r: normalize(r / radix),
            g: normalize(g / radix),
            b: normalize(b / radix),
        }
    }

    const fn unchecked(a: f64, r: f64, g: f64, b: f64) -> Self {
        ArgbColor { a, r, g, b }
    }

    /// Create a color from percentages (0-100)
    pub fn from_percentage(a: f64, r: f64, g: f64, b: f64) -> Self {
        Self::scaled(a, r, g, b, PERCENT_SCALE)
    }

    /// Create a color from fractions (0.0-1.0)
    pub fn from_fraction(a: f64, r: f64, g: f64, b: f64) -> Self {
        Self::scaled(a, r, g, b, 1.0)
    }

    /// Create an opaque gray with every RGB channel at `level`
    pub fn from_grayscale_fraction(level: f64) -> Self {
        Self::from_fraction(1.0, level, level, level)
    }

    /// Create a color from bytes
    pub fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        ArgbColor {
            a: channel::from_byte(a),
            r: channel::from_byte(r),
            g: channel::from_byte(g),
            b: channel::from_byte(b),
        }
    }

    /// Parse 3, 6 or 8 digit hex text. Alpha is opaque unless 8 digits are given.
    pub fn from_html(text: &str) -> ColorResult<Self> {
        let [a, r, g, b] = hex::decode(text)?;
        Ok(Self::from_argb8(a, r, g, b))
    }

    channel_views!(a, alpha8, alpha_percent, set_alpha, set_alpha_byte, set_alpha_percent, "Alpha");
    channel_views!(r, red8, red_percent, set_red, set_red_byte, set_red_percent, "Red");
    channel_views!(g, green8, green_percent, set_green, set_green_byte, set_green_percent, "Green");
    channel_views!(b, blue8, blue_percent, set_blue, set_blue_byte, set_blue_percent, "Blue");

    /// Copy of this color with a different alpha fraction
    pub fn with_alpha(mut self, fraction: f64) -> Self {
        self.set_alpha(fraction);
        self
    }

    /// Channels as `[a, r, g, b]` bytes
    pub fn to_argb8(&self) -> [u8; 4] {
        [self.alpha8(), self.red8(), self.green8(), self.blue8()]
    }

    /// Canonical 8-digit lowercase hex (`aarrggbb`)
    pub fn hex(&self) -> String {
        hex::encode(self)
    }

    /// CSS form `rgba(R.RR%, G.GG%, B.BB%, A.AA)`
    pub fn css(&self) -> String {
        format!(
            "rgba({:.2}%, {:.2}%, {:.2}%, {:.2})",
            self.red_percent(),
            self.green_percent(),
            self.blue_percent(),
            self.a
        )
    }

    /// Already an RGB value; returns a copy of itself
    pub fn to_rgb(&self) -> Self {
        *self
    }

    /// Red, green and blue without alpha
    pub fn to_opaque_rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Collapse to a gray level equal to the largest RGB channel
    pub fn max_rgb_as_grayscale(&self) -> Gray {
        Gray::new(self.r.max(self.g).max(self.b))
    }

    /// Blend red, green and blue toward `mask`; alpha is kept.
    ///
    /// `opacity_percent` is the weight of `self`: 100 keeps this color, 0
    /// yields the mask. Values outside 0-100 extrapolate and the result is
    /// then clamped per channel; they are not rejected.
    pub fn mix_with<M: RgbChannels + ?Sized>(&self, mask: &M, opacity_percent: f64) -> Self {
        let w = opacity_percent / PERCENT_SCALE;
        let mix = |own: f64, other: f64| own * w + other * (1.0 - w);
        Self::from_fraction(
            self.a,
            mix(self.r, mask.red()),
            mix(self.g, mask.green()),
            mix(self.b, mask.blue()),
        )
    }

    /// `mix_with(WHITE, percent)`
    pub fn lighten_by(&self, percent: f64) -> Self {
        self.mix_with(&Rgb::WHITE, percent)
    }

    /// `mix_with(BLACK, percent)`
    pub fn darken_by(&self, percent: f64) -> Self {
        self.mix_with(&Rgb::BLACK, percent)
    }

    /// Linear interpolation of all four channels; `t` is clamped to [0, 1]
    pub fn lerp(&self, other: &ArgbColor, t: f64) -> Self {
        let t = normalize(t);
        let step = |from: f64, to: f64| from + (to - from) * t;
        Self::from_fraction(
            step(self.a, other.a),
            step(self.r, other.r),
            step(self.g, other.g),
            step(self.b, other.b),
        )
    }

    /// Saturating channel-wise sum with any color-like operand
    pub fn checked_add<T: ToRgba + ?Sized>(&self, other: &T) -> ColorResult<Self> {
        Ok(*self + other.to_rgba()?)
    }

    /// Channel-wise difference with any color-like operand, floored at zero
    pub fn checked_sub<T: ToRgba + ?Sized>(&self, other: &T) -> ColorResult<Self> {
        Ok(*self - other.to_rgba()?)
    }

    pub const WHITE: ArgbColor = ArgbColor::unchecked(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: ArgbColor = ArgbColor::unchecked(1.0, 0.0, 0.0, 0.0);
    pub const TRANSPARENT: ArgbColor = ArgbColor::unchecked(0.0, 0.0, 0.0, 0.0);
}

impl Default for ArgbColor {
    /// Opaque black
    fn default() -> Self {
        ArgbColor::BLACK
    }
}

impl RgbChannels for ArgbColor {
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

impl ToRgba for ArgbColor {
    fn to_rgba(&self) -> ColorResult<ArgbColor> {
        Ok(*self)
    }
}

impl From<[u8; 4]> for ArgbColor {
    fn from(argb: [u8; 4]) -> Self {
        let [a, r, g, b] = argb;
        ArgbColor::from_argb8(a, r, g, b)
    }
}

impl From<Rgb> for ArgbColor {
    fn from(rgb: Rgb) -> Self {
        ArgbColor::from_fraction(1.0, rgb.red(), rgb.green(), rgb.blue())
    }
}

impl FromStr for ArgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArgbColor::from_html(s)
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// The negation of a color.
///
/// Channels hold the arithmetic negation of the source color and are not
/// clamped, so a delta is not a displayable color. Its only use is as the
/// right-hand side of `+` on an [`ArgbColor`]; it cannot be formatted,
/// encoded or registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDelta {
    a: f64,
    r: f64,
    g: f64,
    b: f64,
}

impl ColorDelta {
    /// Raw `[a, r, g, b]` offsets
    pub fn components(&self) -> [f64; 4] {
        [self.a, self.r, self.g, self.b]
    }
}

impl Neg for ArgbColor {
    type Output = ColorDelta;

    fn neg(self) -> ColorDelta {
        ColorDelta {
            a: -self.a,
            r: -self.r,
            g: -self.g,
            b: -self.b,
        }
    }
}

impl Neg for ColorDelta {
    type Output = ColorDelta;

    fn neg(self) -> ColorDelta {
        ColorDelta {
            a: -self.a,
            r: -self.r,
            g: -self.g,
            b: -self.b,
        }
    }
}

impl Add for ArgbColor {
    type Output = ArgbColor;

    fn add(self, other: ArgbColor) -> ArgbColor {
        ArgbColor::from_fraction(
            self.a + other.a,
            self.r + other.r,
            self.g + other.g,
            self.b + other.b,
        )
    }
}

impl Add<ColorDelta> for ArgbColor {
    type Output = ArgbColor;

    fn add(self, delta: ColorDelta) -> ArgbColor {
        ArgbColor::from_fraction(
            self.a + delta.a,
            self.r + delta.r,
            self.g + delta.g,
            self.b + delta.b,
        )
    }
}

impl Add<Rgb> for ArgbColor {
    type Output = ArgbColor;

    fn add(self, other: Rgb) -> ArgbColor {
        self + ArgbColor::from(other)
    }
}

impl Sub for ArgbColor {
    type Output = ArgbColor;

    fn sub(self, other: ArgbColor) -> ArgbColor {
        self + (-other)
    }
}

impl Sub<Rgb> for ArgbColor {
    type Output = ArgbColor;

    fn sub(self, other: Rgb) -> ArgbColor {
        self - ArgbColor::from(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_new_with_radix() {
        for radix in [1.0, 100.0, 255.0, 1000.0] {
            for c in [0.0, radix / 3.0, radix / 2.0, radix] {
                let color = ArgbColor::new(radix, c, c, c, radix).unwrap();
                assert!(approx(color.r(), normalize(c / radix)));
                assert!(approx(color.g(), color.b()));
                assert_eq!(color.a(), 1.0);
            }
        }
    }

    #[test]
    fn test_new_rejects_bad_radix() {
        for radix in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                ArgbColor::new(255.0, 0.0, 0.0, 0.0, radix),
                Err(ColorError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_oversized_input_clamps() {
        let c = ArgbColor::new(300.0, -5.0, 128.0, 1e9, DEFAULT_RADIX).unwrap();
        assert_eq!(c.alpha8(), 255);
        assert_eq!(c.red8(), 0);
        assert_eq!(c.green8(), 128);
        assert_eq!(c.blue8(), 255);
    }

    #[test]
    fn test_factories() {
        let p = ArgbColor::from_percentage(100.0, 50.0, 0.0, 25.0);
        assert_eq!(p.r(), 0.5);
        assert_eq!(p.b(), 0.25);
        assert_eq!(p.red_percent(), 50.0);

        let f = ArgbColor::from_fraction(0.5, 1.0, 0.0, 0.0);
        assert_eq!(f.alpha8(), 128);

        let g = ArgbColor::from_grayscale_fraction(0.4);
        assert_eq!([g.a(), g.r(), g.g(), g.b()], [1.0, 0.4, 0.4, 0.4]);
    }

    #[test]
    fn test_from_html_expansion() {
        let short = ArgbColor::from_html("f0a").unwrap();
        let long = ArgbColor::from_html("#ff00aa").unwrap();
        assert_eq!(short, long);
        assert_eq!(short.a(), 1.0);
        assert_eq!(long.a(), 1.0);

        let with_alpha = ArgbColor::from_html("#80ff00aa").unwrap();
        assert_eq!(with_alpha.alpha8(), 0x80);
        assert_eq!(with_alpha.red8(), 0xff);

        assert!(matches!(
            ArgbColor::from_html("#ff00a"),
            Err(ColorError::UnsupportedHexFormat { digits: 5, .. })
        ));
        assert_eq!("#000".parse::<ArgbColor>().unwrap(), ArgbColor::BLACK);
    }

    #[test]
    fn test_setters_in_each_unit() {
        let mut c = ArgbColor::default();
        c.set_red(0.5);
        c.set_green_byte(51.0);
        c.set_blue_percent(250.0);
        c.set_alpha_percent(-10.0);
        assert_eq!(c.r(), 0.5);
        assert!(approx(c.g(), 0.2));
        assert_eq!(c.b(), 1.0);
        assert_eq!(c.a(), 0.0);
        assert_eq!(c.with_alpha(0.25).alpha_percent(), 25.0);
    }

    #[test]
    fn test_hex_encoding() {
        let c = ArgbColor::from_argb8(0x12, 0xab, 0x00, 0xff);
        assert_eq!(c.hex(), "12ab00ff");
        assert_eq!(ArgbColor::WHITE.hex(), "ffffffff");
        assert_eq!(c.html(), "#ab00ff");
    }

    #[test]
    fn test_css() {
        let c = ArgbColor::from_fraction(0.5, 1.0, 0.5, 0.0);
        assert_eq!(c.css(), "rgba(100.00%, 50.00%, 0.00%, 0.50)");
        assert_eq!(c.to_string(), c.css());
    }

    #[test]
    fn test_add_saturates() {
        let c = ArgbColor::from_fraction(0.6, 0.6, 0.2, 0.0) + ArgbColor::from_fraction(0.6, 0.6, 0.2, 0.0);
        assert_eq!(c.a(), 1.0);
        assert_eq!(c.r(), 1.0);
        assert!(approx(c.g(), 0.4));
        assert_eq!(c.b(), 0.0);
    }

    #[test]
    fn test_negate_and_subtract() {
        let c = ArgbColor::from_fraction(0.7, 0.3, 0.9, 0.1);
        let delta = -c;
        assert_eq!(delta.components(), [-0.7, -0.3, -0.9, -0.1]);
        assert_eq!(-delta, -(-c));

        let zero = c - c;
        for v in [zero.a(), zero.r(), zero.g(), zero.b()] {
            assert!(approx(v, 0.0));
        }

        let floored = ArgbColor::from_fraction(1.0, 0.2, 0.2, 0.2) - ArgbColor::WHITE;
        assert_eq!(floored, ArgbColor::TRANSPARENT);
    }

    #[test]
    fn test_checked_arithmetic() {
        let c = ArgbColor::from_fraction(0.5, 0.0, 0.0, 0.0);
        let sum = c.checked_add(&[0.25_f64, 0.5, 0.0, 0.0]).unwrap();
        assert_eq!(sum.a(), 0.75);
        assert_eq!(sum.r(), 0.5);

        let diff = ArgbColor::WHITE.checked_sub(&"#ff0000").unwrap();
        assert_eq!(diff.to_argb8(), [0, 0, 255, 255]);

        assert!(matches!(
            c.checked_add(&"teal?"),
            Err(ColorError::CoercionError(_))
        ));
    }

    #[test]
    fn test_mix_boundaries() {
        let c = ArgbColor::from_fraction(0.4, 0.2, 0.6, 0.8);
        let mask = ArgbColor::from_fraction(1.0, 1.0, 0.0, 0.5);

        let kept = c.mix_with(&mask, 100.0);
        assert!(approx(kept.r(), c.r()) && approx(kept.g(), c.g()) && approx(kept.b(), c.b()));

        let masked = c.mix_with(&mask, 0.0);
        assert!(approx(masked.r(), mask.r()) && approx(masked.g(), mask.g()) && approx(masked.b(), mask.b()));

        // alpha is untouched
        assert_eq!(kept.a(), 0.4);
        assert_eq!(masked.a(), 0.4);

        let half = c.mix_with(&mask, 50.0);
        assert!(approx(half.r(), 0.6));
    }

    #[test]
    fn test_mix_extrapolates() {
        let c = ArgbColor::from_fraction(1.0, 0.5, 0.5, 0.5);
        let beyond = c.mix_with(&Rgb::BLACK, 150.0);
        assert!(approx(beyond.r(), 0.75));
        let clamped = c.mix_with(&Rgb::BLACK, 300.0);
        assert_eq!(clamped.r(), 1.0);
    }

    #[test]
    fn test_lighten_and_darken() {
        let c = ArgbColor::from_fraction(1.0, 0.5, 0.5, 0.5);
        assert!(approx(c.lighten_by(50.0).r(), 0.75));
        assert!(approx(c.darken_by(50.0).r(), 0.25));
        assert_eq!(c.lighten_by(100.0), c);
    }

    #[test]
    fn test_max_rgb_as_grayscale() {
        let c = ArgbColor::from_fraction(0.1, 0.2, 0.7, 0.3);
        assert_eq!(c.max_rgb_as_grayscale().level(), 0.7);
    }

    #[test]
    fn test_lerp_includes_alpha() {
        let mid = ArgbColor::TRANSPARENT.lerp(&ArgbColor::WHITE, 0.5);
        assert_eq!(mid.to_argb8(), [128, 128, 128, 128]);
    }
}
