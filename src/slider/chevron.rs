//! Chevron color tables
//!
//! Each chevron maps the shared shimmer phase through its own stop table,
//! so the three marks light up one after another.

use ratatui::style::Color;

/// Piecewise-linear RGB interpolation over ascending input stops
#[derive(Debug, Clone, Copy)]
pub struct ColorStops {
    inputs: &'static [f32],
    outputs: &'static [[u8; 3]],
}

impl ColorStops {
    pub const fn new(inputs: &'static [f32], outputs: &'static [[u8; 3]]) -> Self {
        Self { inputs, outputs }
    }

    /// Color at `t`; inputs outside the table clamp to the end stops
    pub fn at(&self, t: f32) -> Color {
        let n = self.inputs.len().min(self.outputs.len());
        if n == 0 {
            return Color::Reset;
        }
        if t.is_nan() || t <= self.inputs[0] {
            return rgb(self.outputs[0]);
        }
        if t >= self.inputs[n - 1] {
            return rgb(self.outputs[n - 1]);
        }

        // First segment whose upper stop is at or past t
        let i = self.inputs[1..n].iter().position(|&x| t <= x).unwrap_or(n - 2) + 1;
        let (lo, hi) = (self.inputs[i - 1], self.inputs[i]);
        let span = hi - lo;
        let f = if span > 0.0 { (t - lo) / span } else { 1.0 };

        let a = self.outputs[i - 1];
        let b = self.outputs[i];
        Color::Rgb(lerp(a[0], b[0], f), lerp(a[1], b[1], f), lerp(a[2], b[2], f))
    }
}

fn lerp(a: u8, b: u8, f: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * f).round().clamp(0.0, 255.0) as u8
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

const BLACK: [u8; 3] = [0x00, 0x00, 0x00];
const GLOW: [u8; 3] = [0x6f, 0xb2, 0x68];

/// A chevron mark inside the handle
#[derive(Debug, Clone, Copy)]
pub struct Chevron {
    /// Horizontal position as a fraction of the handle width
    pub position: f32,
    pub stops: ColorStops,
}

pub const CHEVRONS: [Chevron; 3] = [
    Chevron {
        position: 25.0 / 92.0,
        stops: ColorStops::new(
            &[0.0, 0.2, 0.7, 1.0],
            &[[0x2C, 0x47, 0x2A], BLACK, GLOW, [0x2C, 0x47, 0x2A]],
        ),
    },
    Chevron {
        position: 43.0 / 92.0,
        stops: ColorStops::new(
            &[0.0, 0.1, 0.6, 1.0],
            &[[0x16, 0x24, 0x15], BLACK, GLOW, [0x16, 0x24, 0x15]],
        ),
    },
    Chevron {
        position: 61.0 / 92.0,
        stops: ColorStops::new(&[0.0, 0.5, 1.0], &[BLACK, GLOW, BLACK]),
    },
];
