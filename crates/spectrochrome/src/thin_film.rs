//! Interference colors of thin films, such as soap bubbles and oil slicks.
//!
//! Light arrives from a medium with refractive index `n1`, strikes a film with
//! index `n2` and thickness `d`, and continues into a medium with index `n3`.
//! Waves reflected at the film's two surfaces interfere, with the film
//! reflecting some wavelengths more strongly than others. The reflection
//! coefficient accounts for all multiple reflections inside the film:
//!
//! ```text
//! R = | (r12 + r23 · e^(iφ)) / (1 + r12 · r23 · e^(iφ)) |²
//! φ = -4π · n2 · d / λ
//! ```
//!
//! Typical refractive indices are 1.0 for air, 1.33 for water, 1.44 for oil,
//! and 1.5 for glass.

use crate::error::ThinFilmError;
use crate::spectrum::Spectrum;
use crate::Float;

/// The shortest wavelength used for checking whether a film is too thick to
/// sample.
const SHORTEST_WAVELENGTH: Float = 380.0;

/// The sampling interval used for checking whether a film is too thick to
/// sample.
const SAMPLE_INTERVAL: Float = 1.0;

/// Compute the reflection coefficient of the electric field for light moving
/// from a medium with index `n1` into one with index `n2`.
pub fn field_reflection_coefficient(n1: Float, n2: Float) -> Float {
    (n1 - n2) / (n1 + n2)
}

/// A thin film of dielectric material between two other media.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThinFilm {
    n1: Float,
    n2: Float,
    n3: Float,
    thickness: Float,
    r12: Float,
    r23: Float,
    too_thick: bool,
}

impl ThinFilm {
    /// Create a new thin film.
    ///
    /// Light arrives from the medium with index `n1`. The film has index `n2`
    /// and the given thickness in nanometers. The medium beyond has index
    /// `n3`. All indices must be positive and finite, and the thickness must
    /// be non-negative and finite.
    pub fn new(n1: Float, n2: Float, n3: Float, thickness: Float) -> Result<Self, ThinFilmError> {
        for (name, value) in [("n1", n1), ("n2", n2), ("n3", n3)] {
            if !(value.is_finite() && 0.0 < value) {
                return Err(ThinFilmError::InvalidRefractiveIndex { name, value });
            }
        }
        if !(thickness.is_finite() && 0.0 <= thickness) {
            return Err(ThinFilmError::InvalidThickness(thickness));
        }

        // The phase changes faster at shorter wavelengths. Beyond this
        // thickness, it changes by more than a quarter period between
        // adjacent samples.
        let max_thickness = 0.25 * SHORTEST_WAVELENGTH * SHORTEST_WAVELENGTH / (n2 * SAMPLE_INTERVAL);

        Ok(Self {
            n1,
            n2,
            n3,
            thickness,
            r12: field_reflection_coefficient(n1, n2),
            r23: field_reflection_coefficient(n2, n3),
            too_thick: max_thickness < thickness,
        })
    }

    /// Get the refractive indices of the incoming medium, the film, and the
    /// medium beyond.
    pub fn refractive_indices(&self) -> [Float; 3] {
        [self.n1, self.n2, self.n3]
    }

    /// Get the thickness in nanometers.
    pub fn thickness(&self) -> Float {
        self.thickness
    }

    /// Determine whether the film is too thick for its interference pattern
    /// to be sampled at nanometer resolution.
    ///
    /// For such films, the interference term averages out to zero and the
    /// reflection coefficient is constant.
    pub fn is_too_thick(&self) -> bool {
        self.too_thick
    }

    /// Compute the fraction of light intensity reflected at the given
    /// wavelength in nanometers.
    pub fn reflection_coefficient(&self, wavelength: Float) -> Float {
        let (r12, r23) = (self.r12, self.r23);
        if self.too_thick {
            return r12.mul_add(r12, r23 * r23);
        }

        // |a + b·e^(iφ)|² = (a + b·cos φ)² + (b·sin φ)² for real a and b.
        let phase = -4.0 * std::f64::consts::PI * self.n2 * self.thickness / wavelength;
        let (sin, cos) = phase.sin_cos();
        let product = r12 * r23;
        let numerator = r23.mul_add(cos, r12).powi(2) + (r23 * sin).powi(2);
        let denominator = product.mul_add(cos, 1.0).powi(2) + (product * sin).powi(2);
        numerator / denominator
    }

    /// Compute the reflection spectrum, independent of illumination.
    pub fn reflection_spectrum(&self) -> Spectrum {
        Spectrum::from_fn(|wavelength| self.reflection_coefficient(wavelength))
    }

    /// Compute the spectrum reflected under the given illuminant.
    pub fn illuminated_spectrum(&self, illuminant: &Spectrum) -> Spectrum {
        self.reflection_spectrum().filtered(illuminant)
    }

    /// Compute the XYZ color reflected under the given illuminant.
    pub fn illuminated_color(&self, illuminant: &Spectrum) -> [Float; 3] {
        self.illuminated_spectrum(illuminant).to_xyz()
    }
}
