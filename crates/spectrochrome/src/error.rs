//! Utility module with spectrochrome's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{Chromaticity, Float, Primaries};

/// An invalid converter configuration.
///
/// Configurations are validated when a [`ColorConverter`](crate::ColorConverter)
/// is built. An invalid configuration never yields a converter.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Primaries whose chromaticities are collinear or otherwise fail to span
    /// XYZ, so that the conversion matrix cannot be inverted.
    DegeneratePrimaries(Primaries),

    /// A white point that cannot be normalized to unit luminance, i.e., that
    /// has a zero or non-finite y coordinate.
    DegenerateWhitePoint(Chromaticity),

    /// A gamma curve parameter outside its valid range.
    InvalidGammaParameter { name: &'static str, value: Float },

    /// A textual gamma curve name that does not parse.
    UnknownGammaMethod(String),

    /// A textual clip method name that does not parse.
    UnknownClipMethod(String),

    /// A bit depth outside `1..=32`.
    InvalidBitDepth(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ConfigError::*;

        match self {
            DegeneratePrimaries(primaries) => write!(
                f,
                "primaries red {}, green {}, blue {} with white {} do not span XYZ",
                primaries.red, primaries.green, primaries.blue, primaries.white
            ),
            DegenerateWhitePoint(white) => {
                write!(f, "white point {} cannot be normalized to Y = 1", white)
            }
            InvalidGammaParameter { name, value } => {
                write!(f, "gamma parameter {} should be in range but is {}", name, value)
            }
            UnknownGammaMethod(name) => write!(
                f,
                "gamma method should be srgb, srgb-reference, uhdtv10, uhdtv12, or power:<gamma> but is `{}`",
                name
            ),
            UnknownClipMethod(name) => write!(
                f,
                "clip method should be clamp-to-zero or add-white but is `{}`",
                name
            ),
            InvalidBitDepth(depth) => {
                write!(f, "bit depth should be between 1 and 32 but is {}", depth)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(feature = "pyffi")]
impl From<ConfigError> for PyErr {
    fn from(value: ConfigError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kind of erroneous hexadecimal color format.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "spectrochrome")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormatErrorKind {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format whose number of digits is zero or not a multiple of
    /// three. For example, `#00` is missing a hexadecimal digit.
    UnexpectedLength,

    /// A color format with a character other than a hexadecimal digit. For
    /// example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format with more than eight digits per coordinate, which does
    /// not fit into 32 bits.
    OversizedCoordinate,
}

/// An erroneous hexadecimal color format.
///
/// The error carries the offending string, so that it can be reported back to
/// the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFormatError {
    kind: ColorFormatErrorKind,
    input: String,
}

impl ColorFormatError {
    /// Create a new color format error.
    pub fn new(kind: ColorFormatErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    /// Get the kind of error.
    pub fn kind(&self) -> ColorFormatErrorKind {
        self.kind
    }

    /// Get the offending input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatErrorKind::*;

        let message = match self.kind {
            UnknownFormat => "color format should start with `#`",
            UnexpectedLength => "color format should have 3 equally long coordinates",
            MalformedHex => "color format coordinates should be hexadecimal integers",
            OversizedCoordinate => "color format coordinates should have 1-8 hex digits",
        };

        write!(f, "{} but `{}` does not", message, self.input)
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A malformed spectrum.
#[derive(Clone, Debug, PartialEq)]
pub enum SpectrumError {
    /// Wavelengths and intensities of different lengths.
    LengthMismatch { wavelengths: usize, intensities: usize },

    /// A wavelength that does not strictly increase over its predecessor.
    NotIncreasing {
        index: usize,
        previous: Float,
        wavelength: Float,
    },

    /// A wavelength or intensity that is not a number or infinite.
    NonFinite { index: usize, value: Float },
}

impl std::fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use SpectrumError::*;

        match self {
            LengthMismatch {
                wavelengths,
                intensities,
            } => write!(
                f,
                "spectrum should have as many intensities as wavelengths but has {} wavelengths and {} intensities",
                wavelengths, intensities
            ),
            NotIncreasing {
                index,
                previous,
                wavelength,
            } => write!(
                f,
                "spectrum wavelengths should strictly increase but {}nm at index {} follows {}nm",
                wavelength, index, previous
            ),
            NonFinite { index, value } => write!(
                f,
                "spectrum samples should be finite but index {} has {}",
                index, value
            ),
        }
    }
}

impl std::error::Error for SpectrumError {}

#[cfg(feature = "pyffi")]
impl From<SpectrumError> for PyErr {
    fn from(value: SpectrumError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An invalid thin film.
#[derive(Clone, Debug, PartialEq)]
pub enum ThinFilmError {
    /// A refractive index that is not positive or not finite.
    InvalidRefractiveIndex { name: &'static str, value: Float },

    /// A film thickness that is negative or not finite.
    InvalidThickness(Float),
}

impl std::fmt::Display for ThinFilmError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ThinFilmError::*;

        match self {
            InvalidRefractiveIndex { name, value } => write!(
                f,
                "refractive index {} should be positive and finite but is {}",
                name, value
            ),
            InvalidThickness(value) => write!(
                f,
                "film thickness should be non-negative and finite but is {}nm",
                value
            ),
        }
    }
}

impl std::error::Error for ThinFilmError {}

#[cfg(feature = "pyffi")]
impl From<ThinFilmError> for PyErr {
    fn from(value: ThinFilmError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        let error = ColorFormatError::new(ColorFormatErrorKind::MalformedHex, "#12345G");
        assert_eq!(error.kind(), ColorFormatErrorKind::MalformedHex);
        assert_eq!(error.input(), "#12345G");
        assert_eq!(
            error.to_string(),
            "color format coordinates should be hexadecimal integers but `#12345G` does not"
        );

        assert_eq!(
            ConfigError::UnknownClipMethod("sideways".to_string()).to_string(),
            "clip method should be clamp-to-zero or add-white but is `sideways`"
        );
        assert_eq!(
            ConfigError::InvalidBitDepth(0).to_string(),
            "bit depth should be between 1 and 32 but is 0"
        );

        let error = SpectrumError::LengthMismatch {
            wavelengths: 3,
            intensities: 2,
        };
        assert!(error.to_string().contains("has 3 wavelengths and 2 intensities"));

        assert_eq!(
            ThinFilmError::InvalidThickness(-1.0).to_string(),
            "film thickness should be non-negative and finite but is -1nm"
        );
    }
}
