//! Spectra and their integration into CIE XYZ tristimulus values.
//!
//! The [`SpectralDistribution`] trait defines an interface for mapping a fixed,
//! nanometer-aligned range of wavelengths at 1nm resolution to values. With
//! wavelengths restricted to integral nanometers, the interface uses `usize`
//! for their representation. Values are represented by an associated type,
//! which is `Float` for illuminants and spectra and `[Float; 3]` for
//! observers.
//!
//! This module includes the following implementations of the trait:
//!
//!   * [`Observer`] is a table-driven implementation of
//!     `SpectralDistribution<Value=[Float;3]>`.
//!   * [`TabularDistribution`] is a table-driven implementation of
//!     `SpectralDistribution<Value=Float>`.
//!   * [`Spectrum`] is an owned implementation of
//!     `SpectralDistribution<Value=Float>` covering exactly the standard
//!     wavelength range from 360 to 830nm.
//!
//! The module also exports the static tables [`CIE_OBSERVER_2DEG_1931`] and
//! [`CIE_ILLUMINANT_D65`]. [`xyz_from_spectrum`] integrates a spectrum against
//! the former, [`xyz_from_wavelength`] looks up monochromatic light, and
//! [`xyz_from_samples`] resamples arbitrary wavelength, intensity pairs before
//! integrating them.

use crate::core::ThreeSum;
use crate::error::SpectrumError;
use crate::Float;

pub use crate::cie::{CIE_ILLUMINANT_D65, CIE_OBSERVER_2DEG_1931};

/// The first wavelength of the standard range in nanometers.
pub const START_WAVELENGTH: usize = 360;

/// The last wavelength of the standard range in nanometers, inclusive.
pub const END_WAVELENGTH: usize = 830;

/// The number of wavelengths in the standard range.
pub const WAVELENGTH_COUNT: usize = END_WAVELENGTH - START_WAVELENGTH + 1;

/// The sampling interval of the standard range in nanometers.
pub const DELTA_WAVELENGTH: Float = 1.0;

/// A spectral distribution at nanometer resolution.
///
/// A concrete implementation of this trait must provide methods that return a
/// descriptive label, a start wavelength, a length, and the spectral
/// distribution's values.
pub trait SpectralDistribution {
    /// The spectral distribution's value type.
    type Value;

    /// Get a descriptive label for this spectral distribution.
    fn label(&self) -> String;

    /// Get the starting wavelength for this spectral distribution.
    fn start(&self) -> usize;

    /// Get the ending wavelength for this spectral distribution, exclusive.
    fn end(&self) -> usize {
        self.start() + self.len()
    }

    /// Get the range of this spectral distribution.
    fn range(&self) -> std::ops::Range<usize> {
        self.start()..self.end()
    }

    /// Determine whether this distribution is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the length of this spectral distribution.
    fn len(&self) -> usize;

    /// Get this spectral distribution's value for the given wavelength.
    ///
    /// If the wavelength is within this spectral distribution's range, this
    /// method returns some value. Otherwise, it returns none.
    fn at(&self, wavelength: usize) -> Option<Self::Value>;

    /// Get the checksum for this spectral distribution.
    ///
    /// The checksum is the componentwise sum of all values contained in the
    /// distribution.
    fn checksum(&self) -> Self::Value;
}

// --------------------------------------------------------------------------------------------------------------------

/// A table-driven spectral distribution over floating point values.
#[derive(Clone, Debug)]
pub struct TabularDistribution {
    label: &'static str,
    start: usize,
    checksum: Float,
    data: &'static [Float],
}

impl TabularDistribution {
    /// Create a new tabular distribution.
    pub const fn new(
        label: &'static str,
        start: usize,
        checksum: Float,
        data: &'static [Float],
    ) -> Self {
        Self {
            label,
            start,
            checksum,
            data,
        }
    }
}

impl SpectralDistribution for TabularDistribution {
    type Value = Float;

    fn label(&self) -> String {
        self.label.to_string()
    }

    fn start(&self) -> usize {
        self.start
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, wavelength: usize) -> Option<Self::Value> {
        wavelength
            .checked_sub(self.start)
            .and_then(|index| self.data.get(index))
            .copied()
    }

    fn checksum(&self) -> Self::Value {
        self.checksum
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A standard observer at nanometer resolution.
///
/// The CIE's standard observers, or color matching functions, model human color
/// perception. Since humans are trichromatic, the per-wavelength values of
/// standard observers are triples of floating point numbers.
#[derive(Clone, Debug)]
pub struct Observer {
    label: &'static str,
    start: usize,
    checksum: [Float; 3],
    data: &'static [[Float; 3]],
}

impl Observer {
    /// Create a new observer.
    pub const fn new(
        label: &'static str,
        start: usize,
        checksum: [Float; 3],
        data: &'static [[Float; 3]],
    ) -> Self {
        Self {
            label,
            start,
            checksum,
            data,
        }
    }

    /// Get this observer's value for a possibly fractional wavelength.
    ///
    /// Values between two table entries are linearly interpolated. Outside
    /// the table's range, the value is zero.
    pub fn interpolate(&self, wavelength: Float) -> [Float; 3] {
        let black = [0.0, 0.0, 0.0];
        if !wavelength.is_finite() || wavelength < self.start as Float {
            return black;
        }

        let offset = wavelength - self.start as Float;
        let index = offset.floor() as usize;
        let fraction = offset - index as Float;
        let Some(lower) = self.data.get(index) else {
            return black;
        };
        if fraction == 0.0 {
            return *lower;
        }

        let Some(upper) = self.data.get(index + 1) else {
            return black;
        };
        [
            fraction.mul_add(upper[0] - lower[0], lower[0]),
            fraction.mul_add(upper[1] - lower[1], lower[1]),
            fraction.mul_add(upper[2] - lower[2], lower[2]),
        ]
    }
}

impl SpectralDistribution for Observer {
    type Value = [Float; 3];

    fn label(&self) -> String {
        self.label.to_string()
    }

    fn start(&self) -> usize {
        self.start
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, wavelength: usize) -> Option<Self::Value> {
        wavelength
            .checked_sub(self.start)
            .and_then(|index| self.data.get(index))
            .copied()
    }

    fn checksum(&self) -> Self::Value {
        self.checksum
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A spectrum over the standard wavelength range.
///
/// A spectrum holds one intensity for each nanometer from
/// [`START_WAVELENGTH`] through [`END_WAVELENGTH`]. Intensities are in
/// arbitrary units. Spectra are values: operations such as
/// [`Spectrum::scaled`] return a new spectrum.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    intensities: Vec<Float>,
}

impl Spectrum {
    /// Create a new spectrum with all intensities zero.
    pub fn empty() -> Self {
        Self {
            intensities: vec![0.0; WAVELENGTH_COUNT],
        }
    }

    /// Create a new spectrum from intensities for each wavelength of the
    /// standard range.
    pub fn new(intensities: Vec<Float>) -> Result<Self, SpectrumError> {
        if intensities.len() != WAVELENGTH_COUNT {
            return Err(SpectrumError::LengthMismatch {
                wavelengths: WAVELENGTH_COUNT,
                intensities: intensities.len(),
            });
        }
        check_finite(&intensities)?;

        Ok(Self { intensities })
    }

    /// Create a new spectrum by evaluating the function for each wavelength in
    /// nanometers.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(Float) -> Float,
    {
        Self {
            intensities: Self::wavelengths().map(f).collect(),
        }
    }

    /// Create a new spectrum from a spectral distribution. Wavelengths outside
    /// the distribution's range have zero intensity.
    pub fn from_distribution<D>(distribution: &D) -> Self
    where
        D: SpectralDistribution<Value = Float>,
    {
        Self {
            intensities: (START_WAVELENGTH..=END_WAVELENGTH)
                .map(|wavelength| distribution.at(wavelength).unwrap_or(0.0))
                .collect(),
        }
    }

    /// Create a new spectrum by resampling arbitrary samples.
    ///
    /// The wavelengths must strictly increase and pair up with the
    /// intensities. This function interpolates linearly between samples, and
    /// wavelengths outside the sampled range have zero intensity. No samples
    /// at all make for an empty spectrum.
    pub fn from_samples(wavelengths: &[Float], intensities: &[Float]) -> Result<Self, SpectrumError> {
        if wavelengths.len() != intensities.len() {
            return Err(SpectrumError::LengthMismatch {
                wavelengths: wavelengths.len(),
                intensities: intensities.len(),
            });
        }
        check_finite(wavelengths)?;
        check_finite(intensities)?;
        for (index, pair) in wavelengths.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(SpectrumError::NotIncreasing {
                    index: index + 1,
                    previous: pair[0],
                    wavelength: pair[1],
                });
            }
        }

        let (Some(first), Some(last)) = (wavelengths.first(), wavelengths.last()) else {
            return Ok(Self::empty());
        };
        log::debug!(
            "resampling {} samples from {}nm to {}nm",
            wavelengths.len(),
            first,
            last
        );

        let mut segment = 0;
        let spectrum = Self::from_fn(|wavelength| {
            if wavelength < *first || *last < wavelength {
                return 0.0;
            }
            while segment + 1 < wavelengths.len() && wavelengths[segment + 1] <= wavelength {
                segment += 1;
            }
            if wavelengths[segment] == wavelength || segment + 1 == wavelengths.len() {
                return intensities[segment];
            }

            let (w0, w1) = (wavelengths[segment], wavelengths[segment + 1]);
            let (i0, i1) = (intensities[segment], intensities[segment + 1]);
            let t = (wavelength - w0) / (w1 - w0);
            t.mul_add(i1 - i0, i0)
        });

        Ok(spectrum)
    }

    /// Create a new spectrum from emission lines given as wavelength,
    /// intensity pairs.
    ///
    /// A line's intensity is split between the two adjacent nanometers in
    /// proportion to their proximity, so that the spectrum's XYZ color equals
    /// the sum of the lines' interpolated colors. Lines outside the standard
    /// range are dropped.
    pub fn from_lines(lines: &[[Float; 2]]) -> Result<Self, SpectrumError> {
        let last = (WAVELENGTH_COUNT - 1) as Float;
        let mut intensities = vec![0.0; WAVELENGTH_COUNT];

        for (index, line) in lines.iter().enumerate() {
            let [wavelength, intensity] = *line;
            if let Some(value) = [wavelength, intensity].into_iter().find(|v| !v.is_finite()) {
                return Err(SpectrumError::NonFinite { index, value });
            }

            let offset = wavelength - START_WAVELENGTH as Float;
            if !(0.0..=last).contains(&offset) {
                continue;
            }

            let lower = offset.floor() as usize;
            let fraction = offset - lower as Float;
            intensities[lower] += (1.0 - fraction) * intensity;
            if 0.0 < fraction {
                intensities[lower + 1] += fraction * intensity;
            }
        }

        Ok(Self { intensities })
    }

    /// Get an iterator over the standard range's wavelengths in nanometers.
    pub fn wavelengths() -> impl Iterator<Item = Float> {
        (START_WAVELENGTH..=END_WAVELENGTH).map(|wavelength| wavelength as Float)
    }

    /// Get the intensities.
    pub fn intensities(&self) -> &[Float] {
        &self.intensities
    }

    /// Scale all intensities by the given factor.
    #[must_use = "method returns a new spectrum and does not mutate the original value"]
    pub fn scaled(&self, factor: Float) -> Self {
        Self {
            intensities: self.intensities.iter().map(|i| i * factor).collect(),
        }
    }

    /// Multiply this spectrum with another one, wavelength by wavelength.
    ///
    /// This is useful for modelling a reflectance or scattering spectrum under
    /// an illuminant.
    #[must_use = "method returns a new spectrum and does not mutate the original value"]
    pub fn filtered(&self, other: &Spectrum) -> Self {
        Self {
            intensities: self
                .intensities
                .iter()
                .zip(other.intensities.iter())
                .map(|(i1, i2)| i1 * i2)
                .collect(),
        }
    }

    /// Integrate this spectrum into an XYZ tristimulus value.
    pub fn to_xyz(&self) -> [Float; 3] {
        xyz_from_spectrum(self)
    }
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpectralDistribution for Spectrum {
    type Value = Float;

    fn label(&self) -> String {
        "Spectrum".to_string()
    }

    fn start(&self) -> usize {
        START_WAVELENGTH
    }

    fn len(&self) -> usize {
        self.intensities.len()
    }

    fn at(&self, wavelength: usize) -> Option<Self::Value> {
        wavelength
            .checked_sub(START_WAVELENGTH)
            .and_then(|index| self.intensities.get(index))
            .copied()
    }

    fn checksum(&self) -> Self::Value {
        self.intensities
            .iter()
            .fold(crate::core::Accumulator::new(), |sum, i| sum + *i)
            .total()
    }
}

fn check_finite(values: &[Float]) -> Result<(), SpectrumError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SpectrumError::NonFinite {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Integrate the spectrum against the CIE 1931 2º observer.
///
/// The result is in absolute units proportional to the spectrum's intensities.
pub fn xyz_from_spectrum(spectrum: &Spectrum) -> [Float; 3] {
    let mut sum = ThreeSum::new();
    for (wavelength, intensity) in (START_WAVELENGTH..=END_WAVELENGTH).zip(spectrum.intensities.iter()) {
        if let Some([x, y, z]) = CIE_OBSERVER_2DEG_1931.at(wavelength) {
            let weight = intensity * DELTA_WAVELENGTH;
            sum += [weight * x, weight * y, weight * z];
        }
    }
    sum.value()
}

/// Look up the XYZ value of monochromatic light with unit intensity.
///
/// This function returns the matching function's value without scaling by the
/// sampling interval. Fractional wavelengths are linearly interpolated, and
/// wavelengths outside the standard range are black.
pub fn xyz_from_wavelength(wavelength: Float) -> [Float; 3] {
    CIE_OBSERVER_2DEG_1931.interpolate(wavelength)
}

/// Resample the wavelength, intensity pairs onto the standard range and
/// integrate the result.
pub fn xyz_from_samples(wavelengths: &[Float], intensities: &[Float]) -> Result<[Float; 3], SpectrumError> {
    Spectrum::from_samples(wavelengths, intensities).map(|spectrum| spectrum.to_xyz())
}
