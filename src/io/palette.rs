//! Named color scales and their continuous color maps

use image::Rgb;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{RenderError, Result, WithContext, invalid_argument};
use crate::math::interpolation::Cubic;
use crate::spatial::axis::evenly_spaced;

// Control colors sampled at evenly spaced positions of the reference scales
const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const INFERNO: [[u8; 3]; 9] = [
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

const GRAYSCALE: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];

/// Color scale identifier accepted by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Palette {
    /// Black through purple and orange to pale yellow
    #[default]
    Magma,
    /// Black through red and orange to yellow
    Inferno,
    /// Dark purple through teal to yellow
    Viridis,
    /// Black to white
    Grayscale,
}

impl Palette {
    /// Every supported palette, in display order
    pub const ALL: [Self; 4] = [Self::Magma, Self::Inferno, Self::Viridis, Self::Grayscale];

    /// Lowercase identifier used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Magma => "magma",
            Self::Inferno => "inferno",
            Self::Viridis => "viridis",
            Self::Grayscale => "grayscale",
        }
    }

    /// Control colors from the low end of the scale to the high end
    pub const fn control_colors(self) -> &'static [[u8; 3]] {
        match self {
            Self::Magma => &MAGMA,
            Self::Inferno => &INFERNO,
            Self::Viridis => &VIRIDIS,
            Self::Grayscale => &GRAYSCALE,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|palette| palette.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
                invalid_argument(
                    "palette",
                    &s,
                    &format!("unknown palette, expected one of: {}", names.join(", ")),
                )
            })
    }
}

/// Continuous map from `[0, 1]` to RGB built from a palette's control colors
#[derive(Debug, Clone)]
pub struct ColorMap {
    palette: Palette,
    channels: [Cubic; 3],
}

impl ColorMap {
    /// Fit one spline per color channel through the palette's control colors
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Computation`] if a channel spline cannot be fitted
    pub fn new(palette: Palette) -> Result<Self> {
        let colors = palette.control_colors();
        let knots = evenly_spaced(0.0, 1.0, colors.len()).to_vec();

        let channel = |index: usize| -> Result<Cubic> {
            let values = colors
                .iter()
                .map(|rgb| rgb.get(index).copied().map_or(0.0, f64::from))
                .collect();
            Cubic::new(knots.clone(), values).with_operation("palette spline")
        };

        Ok(Self {
            palette,
            channels: [channel(0)?, channel(1)?, channel(2)?],
        })
    }

    /// Palette this map was built from
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Color at position `t`
    ///
    /// `t` is clamped to `[0, 1]`; NaN maps to the low end of the scale.
    pub fn color_at(&self, t: f64) -> Rgb<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let [r, g, b] = &self.channels;
        Rgb([to_channel(r.evaluate(t)), to_channel(g.evaluate(t)), to_channel(b.evaluate(t))])
    }
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
