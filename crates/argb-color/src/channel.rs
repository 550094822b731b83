//! Normalized channel helpers
//!
//! Every stored channel is a fraction in `[0.0, 1.0]`. Byte and percentage
//! views are derived from that fraction on every read.

/// Largest byte value of a channel
pub const BYTE_SCALE: f64 = 255.0;

/// Largest percentage value of a channel
pub const PERCENT_SCALE: f64 = 100.0;

/// Clamp a value into `[0.0, 1.0]`.
///
/// NaN collapses to `0.0` so the result is always a valid channel.
#[inline]
pub fn normalize(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Byte view of a fraction: rounded to nearest, then clamped to `0..=255`
#[inline]
pub fn to_byte(fraction: f64) -> u8 {
    (normalize(fraction) * BYTE_SCALE).round().min(BYTE_SCALE) as u8
}

/// Percentage view of a fraction (`0.0..=100.0`)
#[inline]
pub fn to_percent(fraction: f64) -> f64 {
    normalize(fraction) * PERCENT_SCALE
}

/// Fraction from a byte
#[inline]
pub fn from_byte(byte: u8) -> f64 {
    f64::from(byte) / BYTE_SCALE
}

/// Fraction from a percentage, clamped
#[inline]
pub fn from_percent(percent: f64) -> f64 {
    normalize(percent / PERCENT_SCALE)
}
