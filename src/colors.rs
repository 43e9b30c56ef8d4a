//! Color value types.
//!
//! Provides the two fixed-field color records the crate operates on:
//! - [`Rgba`]: 8-bit RGB channels with an optional alpha fraction
//! - [`Hsla`]: hue in degrees, saturation/lightness fractions, optional alpha
//!
//! Adjustment operations on [`Rgba`] are value-semantic: each returns a new
//! color and leaves the receiver untouched. For in-place chained adjustment
//! see [`crate::dynamic::DynamicColor`].

use owo_colors::OwoColorize;
use std::fmt;

/// An RGB color with an optional alpha channel.
///
/// Channels are `u8`, so out-of-range values are unrepresentable. Alpha is
/// `None` when no transparency information exists; `Some(0.0)` is a real,
/// fully transparent alpha and survives every conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<f32>,
}

/// An HSL color with an optional alpha channel.
///
/// Hue is in degrees `[0, 360)`; saturation and lightness are fractions in
/// `[0, 1]`. Alpha follows the same rules as [`Rgba`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: Option<f32>,
}

impl Rgba {
    /// Create a new RGB color with no alpha information
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create a new RGBA color with the specified alpha fraction
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// The alpha fraction, defaulting to fully opaque when absent
    #[inline]
    pub fn alpha_or_opaque(&self) -> f32 {
        self.a.unwrap_or(1.0)
    }

    /// Get color with modified alpha. The value is stored as given, without
    /// clamping.
    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: Some(alpha),
            ..*self
        }
    }

    /// Darkens the color by `amount` lightness percentage points.
    ///
    /// A result below zero clamps to exactly 0. Alpha passes through.
    #[must_use]
    pub fn darken(&self, amount: f32) -> Self {
        let mut hsl = self.to_hsla();
        let scaled = hsl.l * 100.0 - amount;
        hsl.l = if scaled < 0.0 { 0.0 } else { scaled / 100.0 };
        hsl.to_rgba()
    }

    /// Lightens the color by `amount` lightness percentage points.
    ///
    /// A result above one hundred clamps to exactly 1. Alpha passes through.
    #[must_use]
    pub fn lighten(&self, amount: f32) -> Self {
        let mut hsl = self.to_hsla();
        let scaled = hsl.l * 100.0 + amount;
        hsl.l = if scaled > 100.0 { 1.0 } else { scaled / 100.0 };
        hsl.to_rgba()
    }

    /// Raises the saturation by `amount` percentage points, clamped to [0, 100]
    #[must_use]
    pub fn saturate(&self, amount: f32) -> Self {
        let mut hsl = self.to_hsla();
        hsl.s = ((hsl.s * 100.0 + amount).clamp(0.0, 100.0)) / 100.0;
        hsl.to_rgba()
    }

    /// Lowers the saturation by `amount` percentage points, clamped to [0, 100]
    #[must_use]
    pub fn desaturate(&self, amount: f32) -> Self {
        self.saturate(-amount)
    }

    /// Mix with another color by a specified amount (0.0-1.0)
    #[must_use]
    pub fn mix(&self, other: &Rgba, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let lerp8 = |a: u8, b: u8| -> u8 {
            (a as f32 * (1.0 - amount) + b as f32 * amount).round() as u8
        };

        // Alpha stays absent only when neither input carries any.
        let a = match (self.a, other.a) {
            (None, None) => None,
            _ => {
                let sa = self.alpha_or_opaque();
                let oa = other.alpha_or_opaque();
                Some(sa * (1.0 - amount) + oa * amount)
            }
        };

        Self {
            r: lerp8(self.r, other.r),
            g: lerp8(self.g, other.g),
            b: lerp8(self.b, other.b),
            a,
        }
    }

    /// Inverts the color, leaving alpha untouched
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }

    /// Convert to owo-colors RGB type
    pub fn to_owo_rgb(&self) -> owo_colors::Rgb {
        owo_colors::Rgb(self.r, self.g, self.b)
    }

    /// Render `text` in this color for terminal output
    pub fn paint(&self, text: &str) -> String {
        format!("{}", text.truecolor(self.r, self.g, self.b))
    }
}

impl Hsla {
    /// Create a new HSL color with no alpha information
    #[inline]
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l, a: None }
    }

    /// Create a new HSLA color with the specified alpha fraction
    #[inline]
    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a: Some(a) }
    }

    /// The alpha fraction, defaulting to fully opaque when absent
    #[inline]
    pub fn alpha_or_opaque(&self) -> f32 {
        self.a.unwrap_or(1.0)
    }
}

// Implement conversion to owo-colors RGB
impl From<Rgba> for owo_colors::Rgb {
    fn from(color: Rgba) -> Self {
        color.to_owo_rgb()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.alpha_or_opaque()
        )
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.h,
            self.s * 100.0,
            self.l * 100.0,
            self.alpha_or_opaque()
        )
    }
}
