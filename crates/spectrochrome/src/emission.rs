//! Atomic emission lines.
//!
//! Heated or electrically excited gases emit light at a few discrete
//! wavelengths only. This module carries the visible lines of hydrogen,
//! helium, and neon as wavelength, relative intensity pairs and computes the
//! colors of such line spectra.
//! [`Spectrum::from_lines`](crate::spectrum::Spectrum::from_lines) samples
//! them onto the standard wavelength range.

use crate::core::ThreeSum;
use crate::spectrum::xyz_from_wavelength;
use crate::Float;

/// The visible emission lines of hydrogen as wavelength in nanometers and
/// relative intensity.
pub static HYDROGEN_LINES: [[Float; 2]; 8] = [
    [383.538, 5.0],
    [388.905, 6.0],
    [397.007, 8.0],
    [410.174, 15.0],
    [434.047, 30.0],
    [486.133, 80.0],
    [656.272, 120.0],
    [656.285, 180.0],
];

/// The visible emission lines of helium as wavelength in nanometers and
/// relative intensity.
pub static HELIUM_LINES: [[Float; 2]; 26] = [
    [381.961, 10.0],
    [381.976, 1.0],
    [388.865, 500.0],
    [396.473, 20.0],
    [400.927, 1.0],
    [402.619, 50.0],
    [402.636, 5.0],
    [412.082, 12.0],
    [412.099, 2.0],
    [414.376, 3.0],
    [438.793, 10.0],
    [443.755, 3.0],
    [447.148, 200.0],
    [447.168, 25.0],
    [471.315, 30.0],
    [471.338, 4.0],
    [492.193, 20.0],
    [501.568, 100.0],
    [504.774, 10.0],
    [587.562, 500.0],
    [587.597, 100.0],
    [667.815, 100.0],
    [686.748, 3.0],
    [706.519, 200.0],
    [706.571, 30.0],
    [728.135, 50.0],
];

/// The visible emission lines of neon as wavelength in nanometers and
/// relative intensity.
pub static NEON_LINES: [[Float; 2]; 67] = [
    [453.775, 10.0],
    [454.038, 10.0],
    [470.440, 15.0],
    [470.886, 12.0],
    [471.007, 10.0],
    [471.207, 10.0],
    [471.535, 15.0],
    [475.273, 10.0],
    [478.893, 12.0],
    [479.022, 10.0],
    [482.734, 10.0],
    [488.492, 10.0],
    [500.516, 4.0],
    [503.775, 10.0],
    [514.494, 10.0],
    [533.078, 25.0],
    [534.109, 20.0],
    [534.328, 8.0],
    [540.056, 60.0],
    [556.277, 5.0],
    [565.666, 10.0],
    [571.923, 5.0],
    [574.830, 12.0],
    [576.442, 80.0],
    [580.445, 12.0],
    [582.016, 40.0],
    [585.249, 500.0],
    [587.283, 100.0],
    [588.190, 100.0],
    [590.246, 60.0],
    [590.643, 60.0],
    [594.483, 100.0],
    [596.547, 100.0],
    [597.463, 100.0],
    [597.553, 120.0],
    [598.791, 80.0],
    [603.000, 100.0],
    [607.434, 100.0],
    [609.616, 80.0],
    [612.845, 60.0],
    [614.306, 100.0],
    [616.359, 120.0],
    [618.215, 250.0],
    [621.728, 150.0],
    [626.650, 150.0],
    [630.479, 60.0],
    [633.443, 100.0],
    [638.299, 120.0],
    [640.225, 200.0],
    [650.653, 150.0],
    [653.288, 60.0],
    [659.895, 150.0],
    [665.209, 70.0],
    [667.828, 90.0],
    [671.704, 20.0],
    [692.947, 100.0],
    [702.405, 90.0],
    [703.241, 100.0],
    [705.129, 50.0],
    [705.911, 80.0],
    [717.394, 100.0],
    [724.517, 100.0],
    [747.244, 40.0],
    [748.887, 90.0],
    [753.577, 80.0],
    [754.404, 60.0],
    [772.463, 100.0],
];

// --------------------------------------------------------------------------------------------------------------------

/// Compute the XYZ color of the given emission lines.
///
/// Each line contributes its intensity times the interpolated color of
/// monochromatic light at its wavelength. Lines outside the standard range
/// from 360 to 830nm are black.
pub fn xyz_from_lines(lines: &[[Float; 2]]) -> [Float; 3] {
    let mut sum = ThreeSum::new();
    for &[wavelength, intensity] in lines {
        let [x, y, z] = xyz_from_wavelength(wavelength);
        sum += [intensity * x, intensity * y, intensity * z];
    }
    sum.value()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close;
    use crate::spectrum::Spectrum;

    fn chromaticity(xyz: [Float; 3]) -> [Float; 2] {
        let sum = xyz[0] + xyz[1] + xyz[2];
        [xyz[0] / sum, xyz[1] / sum]
    }

    #[test]
    fn test_tables() {
        for lines in [&HYDROGEN_LINES[..], &HELIUM_LINES[..], &NEON_LINES[..]] {
            assert!(lines.windows(2).all(|pair| pair[0][0] <= pair[1][0]));
            assert!(lines.iter().all(|&[wavelength, intensity]| {
                (360.0..=830.0).contains(&wavelength) && 0.0 < intensity
            }));
        }
    }

    #[test]
    fn test_line_colors() {
        // Hydrogen glows pinkish purple, helium peach, and neon orange red.
        for (lines, expected) in [
            (&HYDROGEN_LINES[..], [0.35983, 0.17813]),
            (&HELIUM_LINES[..], [0.40205, 0.30186]),
            (&NEON_LINES[..], [0.58563, 0.38134]),
        ] {
            let [x, y] = chromaticity(xyz_from_lines(lines));
            assert!((x - expected[0]).abs() < 1e-3, "x is {} not {}", x, expected[0]);
            assert!((y - expected[1]).abs() < 1e-3, "y is {} not {}", y, expected[1]);
        }
    }

    #[test]
    fn test_lines_and_spectra_agree() {
        let xyz = xyz_from_lines(&NEON_LINES);
        let spectrum = Spectrum::from_lines(&NEON_LINES).unwrap();
        assert_close!(spectrum.to_xyz(), xyz, 1e-9);

        assert_eq!(xyz_from_lines(&[]), [0.0, 0.0, 0.0]);
        assert_eq!(xyz_from_lines(&[[300.0, 100.0], [900.0, 100.0]]), [0.0, 0.0, 0.0]);
    }
}
