//! Colors: the cluster palette, user-supplied cluster colors and the UI theme.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

use crate::error::{ParCoordsError, Result};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`, lowercase.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let h = s.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ParCoordsError::InvalidColor(s.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&h[i..i + 2], 16)
                .map_err(|_| ParCoordsError::InvalidColor(s.to_string()))
        };
        Ok(Rgb(byte(0)?, byte(2)?, byte(4)?))
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.0, self.1, self.2)
    }

    /// Same color with alpha in `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f32) -> Color32 {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.0, self.1, self.2, a)
    }
}

/// Fixed palette for cluster keys, in assignment order.
pub const CLUSTER_PALETTE: [Rgb; 19] = [
    Rgb(230, 25, 75),
    Rgb(60, 180, 75),
    Rgb(0, 130, 200),
    Rgb(245, 130, 48),
    Rgb(145, 30, 180),
    Rgb(70, 240, 240),
    Rgb(240, 50, 230),
    Rgb(210, 245, 60),
    Rgb(250, 190, 190),
    Rgb(0, 128, 128),
    Rgb(230, 190, 255),
    Rgb(170, 110, 40),
    Rgb(255, 250, 200),
    Rgb(128, 0, 0),
    Rgb(170, 255, 195),
    Rgb(128, 128, 0),
    Rgb(255, 215, 180),
    Rgb(0, 0, 128),
    Rgb(255, 225, 25),
];

/// Line color outside cluster mode.
pub const DEFAULT_LINE: Rgb = Rgb(0, 130, 200);

/// Background line color for rows that are filtered out.
pub const BACKGROUND_LINE: Rgb = Rgb(204, 204, 204);

/// Palette color for the `i`-th key, wrapping past the end.
pub fn palette_color(i: usize) -> Rgb {
    CLUSTER_PALETTE[i % CLUSTER_PALETTE.len()]
}

/// A user-supplied color: `"#rrggbb"` or `{ r, g, b }` with channels in `0..=1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Hex(String),
    Unit { r: f64, g: f64, b: f64 },
}

impl ColorSpec {
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            ColorSpec::Hex(s) => Rgb::from_hex(s),
            ColorSpec::Unit { r, g, b } => {
                let ch = |v: f64| {
                    if (0.0..=1.0).contains(&v) {
                        Ok((v * 255.0).round() as u8)
                    } else {
                        Err(ParCoordsError::InvalidColor(format!(
                            "{{r: {r}, g: {g}, b: {b}}}"
                        )))
                    }
                };
                Ok(Rgb(ch(*r)?, ch(*g)?, ch(*b)?))
            }
        }
    }
}

/// Visual theme of the native window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn apply(&self, ctx: &Context) {
        match self {
            Theme::Dark => ctx.set_visuals(Visuals::dark()),
            Theme::Light => ctx.set_visuals(Visuals::light()),
        }
    }

    /// Grey used for filtered-out lines, tuned to the background.
    pub fn background_line(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_gray(70),
            Theme::Light => BACKGROUND_LINE.to_color32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Rgb::from_hex("#E6194B").unwrap();
        assert_eq!(c, Rgb(230, 25, 75));
        assert_eq!(c.hex(), "#e6194b");
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("zzzzzz").is_err());
    }

    #[test]
    fn unit_channels_scale_to_bytes() {
        let spec = ColorSpec::Unit { r: 1.0, g: 0.0, b: 0.5 };
        assert_eq!(spec.to_rgb().unwrap(), Rgb(255, 0, 128));
        assert!(ColorSpec::Unit { r: 2.0, g: 0.0, b: 0.0 }.to_rgb().is_err());
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(palette_color(0), palette_color(19));
        assert_ne!(palette_color(0), palette_color(1));
    }
}
