//! Gamut clipping and quantization of linear RGB.
//!
//! Clipping proceeds in stages. First, negative components are removed, since
//! no display can emit negative light. Second, colors that are too bright are
//! scaled down uniformly. The converter then applies gamma and quantizes the
//! result to integers.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::Float;

/// The policy for removing negative linear RGB components.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "spectrochrome")
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipMethod {
    /// Set negative components to zero. This changes hue.
    ClampToZero,
    /// Add just enough white to cancel the most negative component, while
    /// preserving the largest component. This desaturates but keeps hue
    /// roughly intact.
    #[default]
    AddWhite,
}

impl ClipMethod {
    /// Get this clip method's canonical name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ClampToZero => "clamp-to-zero",
            Self::AddWhite => "add-white",
        }
    }
}

impl std::str::FromStr for ClipMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp-to-zero" | "clamp" => Ok(Self::ClampToZero),
            "add-white" | "whiten" => Ok(Self::AddWhite),
            _ => Err(ConfigError::UnknownClipMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for ClipMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A record of the clipping steps applied to a color.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "spectrochrome")
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClipReport {
    /// Negative components were removed.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub chromaticity: bool,
    /// The color was scaled down to fit the displayable intensity range.
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub intensity: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ClipReport {
    /// Determine whether any clipping occurred.
    pub fn any(&self) -> bool {
        self.chromaticity || self.intensity
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Set negative components to zero.
pub(crate) fn clamp_to_zero(rgb: &[Float; 3]) -> ([Float; 3], bool) {
    let clipped = rgb.iter().any(|c| *c < 0.0);
    (
        [rgb[0].max(0.0), rgb[1].max(0.0), rgb[2].max(0.0)],
        clipped,
    )
}

/// Add white to cancel negative components while preserving the maximum.
pub(crate) fn add_white(rgb: &[Float; 3]) -> ([Float; 3], bool) {
    let min = rgb[0].min(rgb[1]).min(rgb[2]).min(0.0);
    if min >= 0.0 {
        return (*rgb, false);
    }

    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let scale = if max > 0.0 { max / (max - min) } else { 1.0 };

    (
        [
            scale * (rgb[0] - min),
            scale * (rgb[1] - min),
            scale * (rgb[2] - min),
        ],
        true,
    )
}

/// Remove negative components with the given method.
pub(crate) fn clip_chromaticity(method: ClipMethod, rgb: &[Float; 3]) -> ([Float; 3], bool) {
    match method {
        ClipMethod::ClampToZero => clamp_to_zero(rgb),
        ClipMethod::AddWhite => add_white(rgb),
    }
}

/// Scale the color down if its maximum component would not round to at most
/// `max_value` after quantization.
pub(crate) fn clip_intensity(rgb: &[Float; 3], max_value: u32) -> ([Float; 3], bool) {
    let cutoff = 1.0 + 0.5 / max_value as Float;
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if max <= cutoff {
        return (*rgb, false);
    }

    let scale = cutoff / max;
    ([scale * rgb[0], scale * rgb[1], scale * rgb[2]], true)
}

/// Quantize display components in unit range to integers `0..=max_value`.
///
/// Components are scaled, rounded to the nearest integer, and clamped, so
/// that out-of-range inputs still produce valid integers.
pub(crate) fn quantize(rgb: &[Float; 3], max_value: u32) -> [u32; 3] {
    let limit = max_value as Float;
    let convert = |c: Float| (c * limit).round().clamp(0.0, limit) as u32;
    [convert(rgb[0]), convert(rgb[1]), convert(rgb[2])]
}

/// Scale integer components `0..=max_value` to unit range.
pub(crate) fn dequantize(irgb: &[u32; 3], max_value: u32) -> [Float; 3] {
    let limit = max_value as Float;
    [
        irgb[0] as Float / limit,
        irgb[1] as Float / limit,
        irgb[2] as Float / limit,
    ]
}
