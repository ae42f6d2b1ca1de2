// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use palette::{FromColor, Hsl, Srgb};

/// A 24-bit color, displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Converts a hue in degrees with saturation and lightness in percent.
    #[must_use]
    pub fn from_hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        let hsl: Hsl = Hsl::new(
            f32::from(hue % 360),
            f32::from(saturation.min(100)) / 100.0,
            f32::from(lightness.min(100)) / 100.0,
        );

        Self::from(Srgb::from_color(hsl).into_format::<u8>())
    }

    /// The `#rrggbb` form of the color.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self {
            red: color.red,
            green: color.green,
            blue: color.blue,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// The palette of one progress bar, shifting from blue at 0% to red at 100%.
///
/// # Examples
///
/// ```
/// use timeleft::ProgressColors;
///
/// let empty = ProgressColors::for_percentage(0);
/// let full = ProgressColors::for_percentage(100);
///
/// assert_eq!(empty.hue(), 199);
/// assert_eq!(full.hue(), 0);
/// assert_eq!(full.progress().to_hex(), "#c94040");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressColors {
    hue: u16,
    progress: Rgb,
    glow: Rgb,
    track: Rgb,
}

impl ProgressColors {
    /// Colors for a percentage; values outside `0..=100` are clamped.
    #[must_use]
    pub fn for_percentage(percentage: i32) -> Self {
        let hue = hue(percentage);

        Self {
            hue,
            progress: Rgb::from_hsl(hue, 56, 52),
            glow: Rgb::from_hsl(hue + 10, 76, 62),
            track: Rgb::from_hsl(hue, 15, 35),
        }
    }

    /// Hue of the bar in degrees, 199 at 0% down to 0 at 100%.
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Fill of the elapsed part.
    #[must_use]
    pub const fn progress(&self) -> Rgb {
        self.progress
    }

    /// Highlight around the fill.
    #[must_use]
    pub const fn glow(&self) -> Rgb {
        self.glow
    }

    /// Background of the remaining part.
    #[must_use]
    pub const fn track(&self) -> Rgb {
        self.track
    }
}

// floor(199 - 1.99 * p) in exact integer arithmetic.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the result is within 0..=199"
)]
const fn hue(percentage: i32) -> u16 {
    let p = if percentage < 0 {
        0
    } else if percentage > 100 {
        100
    } else {
        percentage
    };
    ((19_900 - 199 * p) / 100) as u16
}
