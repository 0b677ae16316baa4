// SPDX-License-Identifier: MPL-2.0
//! Composite color settings: a hex color input plus an opacity slider
//! stored as one `rgba(r, g, b, a)` string.

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parses `#rrggbb` or `#rgb`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let mut it = digits.chars().map(|c| channel(&format!("{c}{c}")));
                Some(Self {
                    r: it.next()??,
                    g: it.next()??,
                    b: it.next()??,
                })
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`. Alpha defaults to 1.
#[must_use]
pub fn parse_rgba(value: &str) -> Option<(Rgb, f64)> {
    let value = value.trim();
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<u8>().ok();
    let (rgb, alpha) = match parts.as_slice() {
        [r, g, b] => ((channel(r)?, channel(g)?, channel(b)?), 1.0),
        [r, g, b, a] => {
            let alpha = a.parse::<f64>().ok().filter(|a| a.is_finite())?;
            ((channel(r)?, channel(g)?, channel(b)?), alpha.clamp(0.0, 1.0))
        }
        _ => return None,
    };
    Some((
        Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        },
        alpha,
    ))
}

/// Builds the stored composite from a color and an opacity percentage.
#[must_use]
pub fn compose(color: Rgb, opacity_percent: u8) -> String {
    let alpha = f64::from(opacity_percent.min(100)) / 100.0;
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha)
}

/// Splits a stored composite back into the two displayed inputs.
///
/// Plain hex colors are fully opaque. Returns `None` for anything else.
#[must_use]
pub fn decompose(stored: &str) -> Option<(Rgb, u8)> {
    if let Some((color, alpha)) = parse_rgba(stored) {
        return Some((color, (alpha * 100.0).round() as u8));
    }
    Rgb::from_hex(stored).map(|color| (color, 100))
}
