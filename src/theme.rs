//! Screen and track colors, read from the `[colors]` table of the config

use ratatui::style::Color;

use crate::config::ColorConfig;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,   // Full-screen backdrop
    pub track: Color,        // Slider track
    pub handle: Color,       // Draggable handle
    pub text: Color,         // Title and track label
    pub text_dim: Color,     // Secondary title weight, hints
    pub accent: Color,       // Alert border
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            track: Color::Rgb(0x2D, 0x68, 0x44),
            handle: Color::Rgb(255, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(170, 170, 170),
            accent: Color::Rgb(0x6f, 0xb2, 0x68),
        }
    }
}

impl Theme {
    /// Build from config; unparsable entries keep the default color
    pub fn from_config(colors: &ColorConfig) -> Self {
        let defaults = Self::default();
        let pick = |name: &str, value: &str, fallback: Color| {
            Self::parse_hex_color(value).unwrap_or_else(|| {
                tracing::warn!("Invalid color for {}: {:?}", name, value);
                fallback
            })
        };

        Self {
            background: pick("background", &colors.background, defaults.background),
            track: pick("track", &colors.track, defaults.track),
            handle: pick("handle", &colors.handle, defaults.handle),
            text: pick("text", &colors.text, defaults.text),
            ..defaults
        }
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    pub fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
