//! Physical spectrum generators: blackbody radiation and Rayleigh scattering.

use crate::spectrum::{Spectrum, DELTA_WAVELENGTH};
use crate::Float;

/// Planck's constant in J·s.
const PLANCK_CONSTANT: Float = 6.6237e-34;
/// The speed of light in m/s.
const SPEED_OF_LIGHT: Float = 2.997925e8;
/// Boltzmann's constant in J/K.
const BOLTZMANN_CONSTANT: Float = 1.3802e-23;

/// The surface temperature of the sun in K.
pub const SUN_TEMPERATURE: Float = 5778.0;

const BLACKBODY_A: Float = PLANCK_CONSTANT * SPEED_OF_LIGHT / BOLTZMANN_CONSTANT;
const BLACKBODY_B: Float = 2.0 * PLANCK_CONSTANT * SPEED_OF_LIGHT * SPEED_OF_LIGHT;

/// Exponents larger than the inverse of this bound yield effectively zero
/// intensity.
const MIN_INVERSE_EXPONENT: Float = 1.0 / 500.0;

/// The wavelength at which Rayleigh scattering is normalized to one.
const RAYLEIGH_REFERENCE_WAVELENGTH: Float = 555.0;

/// Compute the specific intensity of a blackbody with Planck's law.
///
/// This is the energy radiated per second per unit wavelength per unit solid
/// angle, for the wavelength in nanometers and the temperature in Kelvin.
/// Non-positive temperatures and wavelengths radiate nothing.
pub fn blackbody_specific_intensity(wavelength: Float, temperature: Float) -> Float {
    if !(wavelength > 0.0 && temperature > 0.0) || !(wavelength * temperature).is_finite() {
        return 0.0;
    }

    let wavelength = wavelength * 1e-9;
    let inverse_exponent = wavelength * temperature / BLACKBODY_A;
    if inverse_exponent < MIN_INVERSE_EXPONENT {
        return 0.0;
    }

    BLACKBODY_B / (wavelength.powi(5) * inverse_exponent.recip().exp_m1())
}

/// Compute the spectrum of a blackbody at the given temperature in Kelvin.
///
/// Intensities are scaled by the sampling interval in meters.
pub fn blackbody_spectrum(temperature: Float) -> Spectrum {
    let interval = DELTA_WAVELENGTH * 1e-9;
    Spectrum::from_fn(|wavelength| blackbody_specific_intensity(wavelength, temperature) * interval)
}

/// Compute the XYZ color of a blackbody at the given temperature in Kelvin.
pub fn blackbody_color(temperature: Float) -> [Float; 3] {
    blackbody_spectrum(temperature).to_xyz()
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the Rayleigh scattering factor, which is proportional to the
/// inverse fourth power of the wavelength and one at 555nm.
pub fn rayleigh_scattering(wavelength: Float) -> Float {
    (wavelength / RAYLEIGH_REFERENCE_WAVELENGTH).powi(-4)
}

/// Compute the Rayleigh scattering spectrum.
pub fn rayleigh_spectrum() -> Spectrum {
    Spectrum::from_fn(rayleigh_scattering)
}

/// Compute the spectrum of light scattered from the illuminant.
pub fn rayleigh_illuminated_spectrum(illuminant: &Spectrum) -> Spectrum {
    rayleigh_spectrum().filtered(illuminant)
}

/// Compute the XYZ color of light scattered from the illuminant.
pub fn rayleigh_illuminated_color(illuminant: &Spectrum) -> [Float; 3] {
    rayleigh_illuminated_spectrum(illuminant).to_xyz()
}
