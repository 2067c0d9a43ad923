use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Packs `0xRRGGBB` into a color.
    #[must_use]
    pub fn from_rgb_int(rgb: u32, alpha: f64) -> Self {
        Self::rgba(
            f64::from((rgb & 0x00FF_0000) >> 16) / 255.0,
            f64::from((rgb & 0x0000_FF00) >> 8) / 255.0,
            f64::from(rgb & 0x0000_00FF) / 255.0,
            alpha,
        )
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, optionally prefixed by `#`, `0x` or `0X`.
    ///
    /// Anything else falls back to opaque black.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let digits = ["0x", "0X", "#"]
            .iter()
            .find_map(|prefix| hex.strip_prefix(prefix))
            .unwrap_or(hex);

        let Ok(value) = u32::from_str_radix(digits, 16) else {
            return Self::BLACK;
        };
        match digits.len() {
            6 => Self::from_rgb_int(value, 1.0),
            8 => Self::from_rgb_int(value >> 8, f64::from(value & 0xFF) / 255.0),
            _ => Self::BLACK,
        }
    }

    /// Converts hue/saturation/brightness (all in `0..=1`) to RGB.
    #[must_use]
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let hue = hue.rem_euclid(1.0) * 6.0;
        let sector = hue.floor();
        let fraction = hue - sector;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * fraction);
        let t = brightness * (1.0 - saturation * (1.0 - fraction));
        let (red, green, blue) = match sector as u8 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::rgba(red, green, blue, alpha)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Channel-wise interpolation; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: f64, to: f64| (to - from) * t + from;
        Self::rgba(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Default palette of the chart views.
pub mod palette {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use super::Color;

    /// Saturation and brightness of generated pie colors.
    pub const PIE_SATURATION: f64 = 0.9;
    pub const PIE_BRIGHTNESS: f64 = 0.9;

    pub const BAR: &str = "#4DC2AB";
    pub const BAR_TEXT: &str = "#333333";
    pub const LINE: &str = "#FF0066";
    pub const LINE_TEXT: &str = "#333333";
    pub const PIE_TEXT: &str = "#FFFFFF";

    #[must_use]
    pub fn bar() -> Color {
        Color::from_hex(BAR)
    }

    #[must_use]
    pub fn bar_text() -> Color {
        Color::from_hex(BAR_TEXT)
    }

    #[must_use]
    pub fn line() -> Color {
        Color::from_hex(LINE)
    }

    #[must_use]
    pub fn line_text() -> Color {
        Color::from_hex(LINE_TEXT)
    }

    #[must_use]
    pub fn pie_text() -> Color {
        Color::from_hex(PIE_TEXT)
    }

    /// `count` evenly spaced hues in a random order.
    ///
    /// Without a seed the order changes from call to call; callers that need
    /// stable colors pass a seed or supply their own palette.
    #[must_use]
    pub fn pie_colors(count: usize, seed: Option<u64>) -> Vec<Color> {
        let mut colors: Vec<Color> = (0..count)
            .map(|index| {
                Color::from_hsb(
                    index as f64 / count as f64,
                    PIE_SATURATION,
                    PIE_BRIGHTNESS,
                    1.0,
                )
            })
            .collect();
        match seed {
            Some(seed) => colors.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => colors.shuffle(&mut rand::rng()),
        }
        colors
    }
}
