//! Standard illuminants as spectra normalized to unit luminance.

use crate::physics::blackbody_spectrum;
use crate::spectrum::{Spectrum, CIE_ILLUMINANT_D65};
use crate::Float;

/// The temperature of CIE standard illuminant A in Kelvin.
pub const ILLUMINANT_A_TEMPERATURE: Float = 2856.0;

/// Scale the spectrum so that its luminance Y is one. Spectra with zero
/// luminance remain unchanged.
#[must_use = "function returns a new spectrum and does not mutate the original value"]
pub fn normalize(spectrum: &Spectrum) -> Spectrum {
    let [_, y, _] = spectrum.to_xyz();
    if y == 0.0 {
        spectrum.clone()
    } else {
        spectrum.scaled(y.recip())
    }
}

/// Get CIE standard illuminant D65, which approximates daylight around noon.
pub fn d65() -> Spectrum {
    normalize(&Spectrum::from_distribution(&CIE_ILLUMINANT_D65))
}

/// Get CIE standard illuminant A, i.e., a blackbody at 2856K, which
/// approximates incandescent light.
pub fn a() -> Spectrum {
    blackbody(ILLUMINANT_A_TEMPERATURE)
}

/// Get a blackbody illuminant at the given temperature in Kelvin.
pub fn blackbody(temperature: Float) -> Spectrum {
    normalize(&blackbody_spectrum(temperature))
}

/// Get an illuminant with equal intensity at all wavelengths.
pub fn constant() -> Spectrum {
    normalize(&Spectrum::from_fn(|_| 1.0))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unit_luminance() {
        for illuminant in [d65(), a(), blackbody(6500.0), constant()] {
            let [_, y, _] = illuminant.to_xyz();
            assert!((y - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_white_points() {
        let [x, y, z] = d65().to_xyz();
        assert!((x - 0.95047).abs() < 1e-3);
        assert!((z - 1.08883).abs() < 1e-3);
        assert!((y - 1.0).abs() < 1e-12);

        let [x, y, z] = a().to_xyz();
        assert!((x - 1.0985).abs() < 5e-3);
        assert!((z - 0.3558).abs() < 5e-3);
        assert!((y - 1.0).abs() < 1e-12);

        // Equal energy has chromaticity (1/3, 1/3).
        let [x, y, z] = constant().to_xyz();
        assert!((x / (x + y + z) - 1.0 / 3.0).abs() < 1e-3);
        assert!((y / (x + y + z) - 1.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_blackbody() {
        assert_eq!(blackbody(0.0), Spectrum::empty());
    }
}
