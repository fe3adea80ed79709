#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature to also document the Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Items that are only available in Python are decorated with <i
class=python-only>Python only!</i>. "
)]

//! # Spectrochrome
//!
//! Spectrochrome turns light into displayable colors. It integrates spectral
//! distributions against the CIE 1931 standard observer, converts the
//! resulting XYZ tristimulus values into linear RGB, CIELUV, and CIELAB,
//! applies a display's gamma curve, and clips out-of-gamut colors into
//! integer RGB, which can be formatted as hexadecimal strings.
//!
//!
//! ## 1. Overview
//!
//! Spectrochrome's main abstractions are:
//!
//!   * [`Spectrum`](spectrum::Spectrum) holds intensities on the standard
//!     wavelength range from 360 to 830nm at 1nm resolution. The [`spectrum`]
//!     module also integrates spectra into XYZ.
//!   * The [`physics`] and [`illuminant`] modules generate spectra, notably
//!     blackbody radiation, Rayleigh scattering, and standard illuminants.
//!     The [`thin_film`] module computes the interference colors of soap
//!     bubbles and oil slicks, and [`emission`] the colors of atomic line
//!     spectra.
//!   * [`ColorConverter`] maps between XYZ, linear RGB, Luv, and Lab, applies
//!     a [`GammaCurve`](gamma::GammaCurve), and clips linear RGB into integer
//!     RGB. It is configured through a [`ConverterBuilder`] and immutable once
//!     built.
//!   * The [`pure`] module computes the most saturated colors, spectral
//!     lines and purples, as bright as a display permits.
//!   * [`hex_from_irgb`] and [`irgb_from_hex`] convert between integer RGB and
//!     hexadecimal strings such as `#AB13D2`.
//!
//! Colors are plain arrays `[Float; 3]` throughout. They are XYZ, linear RGB,
//! Luv, or Lab depending on context, with function names spelling out which
//! is which.
//!
//!
//! ## 2. From Light to Pixels
//!
//! ```
//! # use spectrochrome::{ColorConverter, illuminant, physics};
//! # use spectrochrome::error::ConfigError;
//! let converter = ColorConverter::builder().build()?;
//!
//! // Daylight is white.
//! let white = illuminant::d65().to_xyz();
//! assert_eq!(converter.hex_from_xyz(white), "#FFFFFF");
//!
//! // An incandescent lamp is orange.
//! let lamp = physics::blackbody_color(2_856.0);
//! let [r, g, b] = converter.irgb_from_rgb(converter.brightest_rgb_from_xyz(lamp, 1.0));
//! assert!(r > g && g > b);
//! # Ok::<(), ConfigError>(())
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//!   * `pyffi` builds a Python extension module with the converter, the clip
//!     types, and the hexadecimal codec.
//!   * `serde` derives serialization for configuration types such as
//!     [`Primaries`], [`ClipMethod`], and [`GammaCurve`](gamma::GammaCurve).
//!
//! Spectrochrome uses the [`log`](https://docs.rs/log) facade. It logs at debug
//! level when building converters and resampling spectra and at trace level
//! when clipping colors.

/// The floating point type in use.
pub type Float = f64;

mod cie;
mod converter;
mod core;
pub mod emission;
pub mod error;
pub mod gamma;
pub mod illuminant;
pub mod physics;
pub mod pure;
pub mod spectrum;
pub mod thin_film;

pub use converter::{ColorConverter, ConverterBuilder, DEFAULT_BIT_DEPTH};
pub use core::{
    hex_from_irgb, irgb_from_hex, normalize_sum, normalize_y, xyz_from_xyy, Chromaticity,
    ClipMethod, ClipReport, Matrix, Primaries,
};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Format integer RGB as a hexadecimal string. <i class=python-only>Python
/// only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "hex_from_irgb", signature = (irgb, digits_per_channel=2))]
fn py_hex_from_irgb(irgb: [u32; 3], digits_per_channel: usize) -> String {
    hex_from_irgb(&irgb, digits_per_channel)
}

/// Parse a hexadecimal string as integer RGB. <i class=python-only>Python
/// only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "irgb_from_hex")]
fn py_irgb_from_hex(s: &str) -> PyResult<[u32; 3]> {
    Ok(irgb_from_hex(s)?)
}

/// Look up the XYZ color of monochromatic light. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "xyz_from_wavelength")]
fn py_xyz_from_wavelength(wavelength: Float) -> [Float; 3] {
    spectrum::xyz_from_wavelength(wavelength)
}

/// Integrate wavelength, intensity samples into an XYZ color. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "xyz_from_samples")]
fn py_xyz_from_samples(wavelengths: Vec<Float>, intensities: Vec<Float>) -> PyResult<[Float; 3]> {
    Ok(spectrum::xyz_from_samples(&wavelengths, &intensities)?)
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn spectrochrome(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_hex_from_irgb, m)?)?;
    m.add_function(wrap_pyfunction!(py_irgb_from_hex, m)?)?;
    m.add_function(wrap_pyfunction!(py_xyz_from_wavelength, m)?)?;
    m.add_function(wrap_pyfunction!(py_xyz_from_samples, m)?)?;

    m.add_class::<ClipMethod>()?;
    m.add_class::<ClipReport>()?;
    m.add_class::<ColorConverter>()?;
    m.add_class::<error::ColorFormatErrorKind>()?;
    Ok(())
}
