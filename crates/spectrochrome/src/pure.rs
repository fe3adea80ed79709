//! The most saturated colors: spectral lines and purples.
//!
//! Monochromatic light traces the horseshoe-shaped outline of the chromaticity
//! diagram. The straight line closing the horseshoe consists of purples, mixes
//! of the shortest and longest visible wavelengths. None of these colors can
//! be displayed exactly, so all functions in this module scale each color so
//! that the largest component of its linear RGB equals the given brightness,
//! which keeps chromaticity and makes the color as bright as the display
//! permits.
//!
//! The nominal visible range extends from 360 to 830nm. Near those ends, light
//! is barely perceptible and its chromaticity poorly defined, so pure colors
//! span the more practical range from 380 to 780nm by default.

use crate::spectrum::xyz_from_wavelength;
use crate::{ColorConverter, Float};

/// The wavelength of practically pure violet in nanometers.
pub const PURE_VIOLET_WAVELENGTH: Float = 380.0;

/// The wavelength of practically pure red in nanometers.
pub const PURE_RED_WAVELENGTH: Float = 780.0;

fn brightest(converter: &ColorConverter, xyz: [Float; 3], brightness: Float) -> [Float; 3] {
    converter.xyz_from_rgb(converter.brightest_rgb_from_xyz(xyz, brightness))
}

/// Compute `count` evenly spaced values from `start` to `end`, inclusive.
///
/// A single value is `start`.
fn linspace(start: Float, end: Float, count: usize) -> Vec<Float> {
    if count < 2 {
        return vec![start; count];
    }

    let step = (end - start) / (count - 1) as Float;
    (0..count)
        .map(|index| {
            if index == count - 1 {
                end
            } else {
                (index as Float).mul_add(step, start)
            }
        })
        .collect()
}

/// Compute the XYZ colors of the given wavelengths in nanometers.
#[must_use = "function returns new colors and does not mutate arguments"]
pub fn spectral_colors(converter: &ColorConverter, wavelengths: &[Float], brightness: Float) -> Vec<[Float; 3]> {
    wavelengths
        .iter()
        .map(|&wavelength| brightest(converter, xyz_from_wavelength(wavelength), brightness))
        .collect()
}

/// Compute the XYZ colors of purples by interpolating between violet and red.
///
/// A fraction of 0 yields red and a fraction of 1 yields violet.
#[must_use = "function returns new colors and does not mutate arguments"]
pub fn purple_colors(
    converter: &ColorConverter,
    fractions: &[Float],
    violet: [Float; 3],
    red: [Float; 3],
    brightness: Float,
) -> Vec<[Float; 3]> {
    fractions
        .iter()
        .map(|&t| {
            let xyz = [0, 1, 2].map(|index| t.mul_add(violet[index], (1.0 - t) * red[index]));
            brightest(converter, xyz, brightness)
        })
        .collect()
}

/// Compute the XYZ colors of the given wavelengths followed by purples.
///
/// The purples interpolate between the first and last wavelength's colors.
/// Without wavelengths, there are no endpoints to interpolate between and the
/// result is empty.
#[must_use = "function returns new colors and does not mutate arguments"]
pub fn pure_colors(
    converter: &ColorConverter,
    wavelengths: &[Float],
    fractions: &[Float],
    brightness: Float,
) -> Vec<[Float; 3]> {
    let mut colors = spectral_colors(converter, wavelengths, brightness);
    let (Some(&violet), Some(&red)) = (colors.first(), colors.last()) else {
        return colors;
    };

    colors.extend(purple_colors(converter, fractions, violet, red, brightness));
    colors
}

/// Compute evenly spaced pure colors.
///
/// The result has `spectral_count` spectral colors from pure violet to pure
/// red followed by `purple_count` purples from red to violet.
#[must_use = "function returns new colors and does not mutate arguments"]
pub fn evenly_spaced_pure_colors(
    converter: &ColorConverter,
    spectral_count: usize,
    purple_count: usize,
    brightness: Float,
) -> Vec<[Float; 3]> {
    let wavelengths = linspace(PURE_VIOLET_WAVELENGTH, PURE_RED_WAVELENGTH, spectral_count);
    let fractions = linspace(0.0, 1.0, purple_count);
    pure_colors(converter, &wavelengths, &fractions, brightness)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close;

    fn srgb() -> ColorConverter {
        ColorConverter::builder()
            .build()
            .expect("default configuration is valid")
    }

    fn max_rgb(converter: &ColorConverter, xyz: [Float; 3]) -> Float {
        let [r, g, b] = converter.rgb_from_xyz(xyz);
        r.max(g).max(b)
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<Float>::new());
        assert_eq!(linspace(380.0, 780.0, 1), vec![380.0]);
        assert_eq!(linspace(380.0, 780.0, 5), vec![380.0, 480.0, 580.0, 680.0, 780.0]);
    }

    #[test]
    fn test_spectral_colors() {
        let converter = srgb();
        let colors = spectral_colors(&converter, &[450.0, 555.0, 620.0], 0.8);
        assert_eq!(colors.len(), 3);

        for xyz in &colors {
            assert!((max_rgb(&converter, *xyz) - 0.8).abs() < 1e-12);
        }

        // Chromaticity is preserved.
        let original = xyz_from_wavelength(555.0);
        let scaled = colors[1];
        let scale = scaled[1] / original[1];
        assert_close!(scaled, original.map(|c| c * scale), 1e-12);

        let [r, g, b] = converter.rgb_from_xyz(scaled);
        assert!(g > r && g > b);
    }

    #[test]
    fn test_purple_colors() {
        let converter = srgb();
        let ends = spectral_colors(&converter, &[PURE_VIOLET_WAVELENGTH, PURE_RED_WAVELENGTH], 1.0);
        let (violet, red) = (ends[0], ends[1]);

        let purples = purple_colors(&converter, &[0.0, 0.5, 1.0], violet, red, 1.0);
        assert_eq!(purples.len(), 3);
        assert_close!(purples[0], red, 1e-12);
        assert_close!(purples[2], violet, 1e-12);

        let [r, g, b] = converter.rgb_from_xyz(purples[1]);
        assert!(r > g && b > g);
        assert!((r.max(g).max(b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pure_colors() {
        let converter = srgb();
        assert!(pure_colors(&converter, &[], &[0.0, 0.5, 1.0], 1.0).is_empty());

        let colors = evenly_spaced_pure_colors(&converter, 41, 10, 0.5);
        assert_eq!(colors.len(), 51);
        for xyz in &colors {
            assert!((max_rgb(&converter, *xyz) - 0.5).abs() < 1e-12);
        }

        // The first purple is the last spectral color and the last purple the
        // first spectral color.
        assert_close!(colors[41], colors[40], 1e-12);
        assert_close!(colors[50], colors[0], 1e-12);

        assert_eq!(evenly_spaced_pure_colors(&converter, 5, 0, 1.0).len(), 5);
    }
}
