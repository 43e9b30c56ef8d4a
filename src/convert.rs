//! Color space conversions.
//!
//! Implements the HEX ↔ RGB and RGB ↔ HSL conversions as inherent methods on
//! the [`Rgba`] and [`Hsla`] value types. All conversions are pure; only HEX
//! parsing can fail.

use crate::{
    colors::{Hsla, Rgba},
    error::{HuekitError, HuekitResult},
};

/// Decode a single ASCII hex digit to its value
#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Normalize a HEX string into three channel bytes.
///
/// Strips an optional leading `#`, expands a 3-digit body by digit-doubling,
/// and rejects any other length or any non-hex digit. Error spans point into
/// the original input, `#` included.
fn hex_channels(input: &str) -> HuekitResult<[u8; 3]> {
    let offset = usize::from(input.starts_with('#'));
    let body = input.strip_prefix('#').unwrap_or(input).as_bytes();

    let digit = |i: usize| -> HuekitResult<u8> {
        nibble(body[i]).ok_or_else(|| {
            HuekitError::hex_digit(
                input,
                (offset + i, 1),
                format!("invalid hex digit '{}'", body[i] as char),
            )
            .into()
        })
    };

    match body.len() {
        3 => Ok([
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
        ]),
        6 => Ok([
            digit(0)? << 4 | digit(1)?,
            digit(2)? << 4 | digit(3)?,
            digit(4)? << 4 | digit(5)?,
        ]),
        n => Err(HuekitError::hex_format(
            input,
            (offset, n.max(1)),
            format!("expected 3 or 6 hex digits, got {}", n),
        )
        .into()),
    }
}

impl Rgba {
    /// Parse a color from a HEX string.
    ///
    /// Accepts 3 or 6 hex digits with an optional leading `#`; the 3-digit
    /// form expands each digit by duplication (`"f0a"` → `"ff00aa"`). The
    /// parsed color carries a fully opaque alpha.
    ///
    /// # Errors
    ///
    /// Returns [`HuekitError::HexFormat`] for any other length and
    /// [`HuekitError::HexDigit`] for a non-hex character, each labeling the
    /// offending span of the input.
    pub fn from_hex(hex: &str) -> HuekitResult<Self> {
        let [r, g, b] = hex_channels(hex)?;
        Ok(Self {
            r,
            g,
            b,
            a: Some(1.0),
        })
    }

    /// Format as a bare 6-digit lowercase HEX string, no leading `#`.
    ///
    /// Alpha does not round-trip through HEX.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL, passing alpha through unchanged.
    pub fn to_hsla(&self) -> Hsla {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic: hue is undefined and conventionally 0
            return Hsla {
                h: 0.0,
                s: 0.0,
                l,
                a: self.a,
            };
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let del_r = (((max - r) / 6.0) + (delta / 2.0)) / delta;
        let del_g = (((max - g) / 6.0) + (delta / 2.0)) / delta;
        let del_b = (((max - b) / 6.0) + (delta / 2.0)) / delta;

        let mut h = if r == max {
            del_b - del_g
        } else if g == max {
            (1.0 / 3.0) + del_r - del_b
        } else {
            (2.0 / 3.0) + del_g - del_r
        };

        if h < 0.0 {
            h += 1.0;
        }
        if h > 1.0 {
            h -= 1.0;
        }

        Hsla {
            h: h * 360.0,
            s,
            l,
            a: self.a,
        }
    }
}

impl Hsla {
    /// Convert to RGB, passing alpha through unchanged.
    pub fn to_rgba(&self) -> Rgba {
        if self.s == 0.0 {
            let v = (self.l * 255.0).round() as u8;
            return Rgba {
                r: v,
                g: v,
                b: v,
                a: self.a,
            };
        }

        let h = self.h / 360.0;

        let v2 = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            (self.l + self.s) - (self.s * self.l)
        };
        let v1 = 2.0 * self.l - v2;

        Rgba {
            r: (255.0 * hue_to_channel(v1, v2, h + 1.0 / 3.0)).round() as u8,
            g: (255.0 * hue_to_channel(v1, v2, h)).round() as u8,
            b: (255.0 * hue_to_channel(v1, v2, h - 1.0 / 3.0)).round() as u8,
            a: self.a,
        }
    }
}

/// Resolve one RGB channel from the HSL intermediates at hue offset `h`
fn hue_to_channel(v1: f32, v2: f32, h: f32) -> f32 {
    let mut h = h;
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if 6.0 * h < 1.0 {
        return v1 + (v2 - v1) * 6.0 * h;
    }
    if 2.0 * h < 1.0 {
        return v2;
    }
    if 3.0 * h < 2.0 {
        return v1 + (v2 - v1) * (2.0 / 3.0 - h) * 6.0;
    }

    v1
}
