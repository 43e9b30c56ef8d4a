//! Stateful chained color adjustment.
//!
//! [`DynamicColor`] wraps an original color and a working copy. Adjustment
//! calls mutate the working copy in place and return `&mut Self` so they can
//! be chained; the original stays untouched and can be restored explicitly.
//!
//! The read path is split into [`DynamicColor::peek`] (pure) and
//! [`DynamicColor::consume`] (returns the display form, then resets the
//! working copy to the original), so the reset is visible in the API instead
//! of hiding inside string conversion.

use std::fmt::{self, Display};

use crate::{
    colors::{Hsla, Rgba},
    error::HuekitResult,
};

/// Default lightness/saturation step, in percentage points
pub const DEFAULT_ADJUSTMENT: f32 = 4.0;

/// Default opacity: fully opaque
pub const DEFAULT_OPACITY: f32 = 1.0;

/// A color with an adjustable working copy.
///
/// Adjustments mutate the working copy in place; use the value-semantic
/// operations on [`Rgba`] directly when immutability is preferred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicColor {
    /// Construction-time color, never mutated
    original: Rgba,
    /// Working color, mutated by adjustment calls
    current: Rgba,
}

impl DynamicColor {
    /// Create a dynamic color from a HEX string.
    ///
    /// # Errors
    ///
    /// Fails like [`Rgba::from_hex`] when the string is not 3 or 6 hex
    /// digits after stripping an optional `#`.
    pub fn new(hex: &str) -> HuekitResult<Self> {
        let color = Rgba::from_hex(hex)?;
        Ok(Self {
            original: color,
            current: color,
        })
    }

    /// Darkens the working color by `amount` lightness percentage points.
    ///
    /// [`DEFAULT_ADJUSTMENT`] is the conventional step.
    pub fn darken(&mut self, amount: f32) -> &mut Self {
        self.current = self.current.darken(amount);
        self
    }

    /// Lightens the working color by `amount` lightness percentage points.
    ///
    /// [`DEFAULT_ADJUSTMENT`] is the conventional step.
    pub fn lighten(&mut self, amount: f32) -> &mut Self {
        self.current = self.current.lighten(amount);
        self
    }

    /// Sets the working color's opacity to `opacity`, without clamping.
    ///
    /// [`DEFAULT_OPACITY`] restores full opacity.
    pub fn modify_opacity(&mut self, opacity: f32) -> &mut Self {
        self.current = self.current.with_alpha(opacity);
        self
    }

    /// Raises the working color's saturation by `amount` percentage points
    pub fn saturate(&mut self, amount: f32) -> &mut Self {
        self.current = self.current.saturate(amount);
        self
    }

    /// Lowers the working color's saturation by `amount` percentage points
    pub fn desaturate(&mut self, amount: f32) -> &mut Self {
        self.current = self.current.desaturate(amount);
        self
    }

    /// The working color as a bare lowercase HEX string
    pub fn hex(&self) -> String {
        self.current.to_hex()
    }

    /// The working color
    pub fn rgba(&self) -> Rgba {
        self.current
    }

    /// The working color in HSL form
    pub fn hsla(&self) -> Hsla {
        self.current.to_hsla()
    }

    /// The construction-time color
    pub fn original(&self) -> Rgba {
        self.original
    }

    /// Format the working color as `rgba(R, G, B, A)` without touching state
    pub fn peek(&self) -> String {
        self.current.to_string()
    }

    /// Format the working color as `rgba(R, G, B, A)`, then reset the
    /// working color back to the original.
    pub fn consume(&mut self) -> String {
        let display = self.current.to_string();
        self.current = self.original;
        display
    }

    /// Reset the working color back to the original without formatting it
    pub fn reset(&mut self) -> &mut Self {
        self.current = self.original;
        self
    }
}

impl fmt::Display for DynamicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.current, f)
    }
}
