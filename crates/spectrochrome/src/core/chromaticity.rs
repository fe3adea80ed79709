//! Chromaticities, primaries, and the plain XYZ helpers built on them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Float;

/// A chromaticity, i.e., a color's x and y coordinates after normalizing XYZ
/// so that `x + y + z = 1`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chromaticity {
    pub x: Float,
    pub y: Float,
}

impl Chromaticity {
    /// The chromaticity of CIE standard illuminant D65, which also is sRGB's
    /// white point.
    pub const D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);

    /// Create a new chromaticity.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Determine the chromaticity of the given XYZ color.
    ///
    /// Black has no chromaticity and maps to `(0, 0)`.
    pub fn from_xyz(xyz: &[Float; 3]) -> Self {
        let [x, y, _] = normalize_sum(xyz);
        Self { x, y }
    }

    /// Convert to an XYZ color with `z = 1 - x - y`.
    ///
    /// The resulting color has whatever luminance `y` implies. Use
    /// [`Chromaticity::to_xyz_with_luminance`] to pick the luminance.
    pub fn to_xyz(&self) -> [Float; 3] {
        [self.x, self.y, 1.0 - self.x - self.y]
    }

    /// Convert to an XYZ color with the given luminance `Y`.
    pub fn to_xyz_with_luminance(&self, luminance: Float) -> [Float; 3] {
        xyz_from_xyy(self.x, self.y, luminance)
    }
}

impl std::fmt::Display for Chromaticity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The chromaticities of a display's three primaries and its white point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white: Chromaticity,
}

impl Primaries {
    /// The primaries of sRGB and ITU-R BT.709 with a D65 white point.
    pub const SRGB: Primaries = Primaries {
        red: Chromaticity::new(0.640, 0.330),
        green: Chromaticity::new(0.300, 0.600),
        blue: Chromaticity::new(0.150, 0.060),
        white: Chromaticity::D65,
    };

    /// The primaries of ITU-R BT.2020 with a D65 white point.
    pub const REC2020: Primaries = Primaries {
        red: Chromaticity::new(0.708, 0.292),
        green: Chromaticity::new(0.170, 0.797),
        blue: Chromaticity::new(0.131, 0.046),
        white: Chromaticity::D65,
    };

    /// Create new primaries.
    pub const fn new(
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Chromaticity,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }
}

impl Default for Primaries {
    fn default() -> Self {
        Self::SRGB
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Create an XYZ color from chromaticity x, y and luminance Y.
///
/// A zero `y` yields black.
pub fn xyz_from_xyy(x: Float, y: Float, luminance: Float) -> [Float; 3] {
    if y == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    [x / y * luminance, luminance, (1.0 - x - y) / y * luminance]
}

/// Scale the XYZ color so that its components add up to one.
///
/// Colors whose components add up to zero are returned unchanged.
#[must_use = "function returns a new color and does not mutate the original value"]
pub fn normalize_sum(xyz: &[Float; 3]) -> [Float; 3] {
    let sum = xyz[0] + xyz[1] + xyz[2];
    if sum == 0.0 {
        return *xyz;
    }

    [xyz[0] / sum, xyz[1] / sum, xyz[2] / sum]
}

/// Scale the XYZ color so that its luminance Y is one.
///
/// Colors with zero luminance are returned unchanged.
#[must_use = "function returns a new color and does not mutate the original value"]
pub fn normalize_y(xyz: &[Float; 3]) -> [Float; 3] {
    let y = xyz[1];
    if y == 0.0 {
        return *xyz;
    }

    [xyz[0] / y, 1.0, xyz[2] / y]
}
