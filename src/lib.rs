#![forbid(unsafe_code)]

//! # Huekit
//!
//! An opinionated HEX/RGB/HSL color manipulation library for Rust.
//!
//! ## Overview
//!
//! The library is built around a few main concepts:
//!
//! - **Typed Color Records**: Fixed-field RGBA and HSLA values, no stringly
//!   keyed maps and no out-of-range channels
//! - **Pure Conversions**: HEX ↔ RGB and RGB ↔ HSL with diagnostic parse
//!   errors via `miette`
//! - **Value-Semantic Adjustments**: lighten, darken, saturate, mix, invert —
//!   each returns a new color
//! - **Explicit Working State**: [`DynamicColor`] chains in-place adjustments
//!   and splits its read path into a pure `peek()` and a resetting
//!   `consume()`
//!
//! ## Core Components
//!
//! - [`Rgba`]: 8-bit RGB channels plus an optional alpha fraction
//! - [`Hsla`]: hue in degrees, saturation/lightness fractions, optional alpha
//! - [`DynamicColor`]: stateful wrapper for chained adjustment
//! - [`HuekitError`]: diagnostic errors for malformed HEX input
//!
//! ## Example Usage
//!
//! ```rust
//! use huekit::{DynamicColor, HuekitResult, Rgba};
//!
//! fn main() -> HuekitResult<()> {
//!     // Stateful, chained adjustment
//!     let mut color = DynamicColor::new("#ff0000")?;
//!     color.lighten(200.0).modify_opacity(0.5);
//!     assert_eq!(color.hex(), "ffffff");
//!
//!     // consume() reports the working color, then restores the original
//!     assert_eq!(color.consume(), "rgba(255, 255, 255, 0.5)");
//!     assert_eq!(color.hex(), "ff0000");
//!
//!     // Value-semantic operations never mutate their receiver
//!     let base = Rgba::from_hex("3366cc")?;
//!     let darker = base.darken(10.0);
//!     assert_ne!(base, darker);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `colors`: RGBA and HSLA value types with value-semantic adjustments
//! - `convert`: color space conversion algorithms
//! - `dynamic`: stateful chained-adjustment wrapper
//! - `error`: error types and handling
//!
//! ## Error Handling
//!
//! The library uses [`HuekitResult`] and [`HuekitError`] for error handling
//! with detailed diagnostics via `miette`: malformed HEX input produces an
//! error that labels the offending span of the string. Conversions between
//! the typed color records cannot fail and return plain values.
//!
//! ## Alpha Semantics
//!
//! Alpha is an `Option` on both color records. `None` means "no transparency
//! information" and defaults to fully opaque wherever a concrete value is
//! needed; `Some(0.0)` is a real, fully transparent alpha and survives every
//! conversion.

/// Re-exports of core components
pub use colors::{Hsla, Rgba};
pub use dynamic::{DynamicColor, DEFAULT_ADJUSTMENT, DEFAULT_OPACITY};
pub use error::{HuekitError, HuekitResult};

/// Color value types and value-semantic adjustments
pub mod colors;
/// Color space conversion algorithms
pub mod convert;
/// Stateful chained-adjustment wrapper
pub mod dynamic;
/// Error types and handling
pub mod error;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_adjustment_pipeline() {
        let mut color = DynamicColor::new("#3366cc").unwrap();

        color
            .darken(DEFAULT_ADJUSTMENT)
            .lighten(DEFAULT_ADJUSTMENT)
            .modify_opacity(DEFAULT_OPACITY);

        // Darken followed by lighten lands back on the starting color
        // (lightness moves in exact percentage points both ways)
        assert_eq!(color.hex(), "3366cc");
        assert_eq!(color.rgba().a, Some(1.0));

        let hsl = color.hsla();
        let round_tripped = hsl.to_rgba();
        assert_eq!(round_tripped.to_hex(), color.hex());
    }

    #[test]
    fn test_hex_types_agree() {
        let via_rgba = Rgba::from_hex("f0a").unwrap();
        let via_dynamic = DynamicColor::new("#f0a").unwrap();
        assert_eq!(via_dynamic.rgba(), via_rgba);
    }
}
