//! Conversions between XYZ and the nearly perceptually uniform Luv and Lab.
//!
//! Both conversions are relative to a reference white, which the caller
//! normalizes to `Y = 1`.

use crate::Float;

/// The ratio `Y / Y_white` at which the lightness function switches from its
/// linear to its cubic branch.
pub(crate) const LUMINANCE_CUTOFF: Float = 0.008856;

const L_LUM_A: Float = 116.0;
const L_LUM_B: Float = 16.0;

/// The slope of the linear branch, chosen so that both branches agree at
/// [`LUMINANCE_CUTOFF`] to machine precision.
#[allow(clippy::excessive_precision)]
const L_LUM_C: Float = 903.29629551307664;

/// The slope of Lab's linear branch, again agreeing with the cube root at the
/// cutoff to machine precision.
#[allow(clippy::excessive_precision)]
const LAB_F_A: Float = 7.7870370302851422;
const LAB_F_B: Float = 16.0 / 116.0;

/// Compute lightness `L` for the relative luminance `Y / Y_white`.
pub(crate) fn lightness(y: Float) -> Float {
    if y > LUMINANCE_CUTOFF {
        L_LUM_A.mul_add(y.cbrt(), -L_LUM_B)
    } else {
        L_LUM_C * y
    }
}

/// Compute relative luminance `Y / Y_white` for lightness `L`.
pub(crate) fn lightness_inverse(lightness: Float) -> Float {
    if lightness <= L_LUM_C * LUMINANCE_CUTOFF {
        lightness / L_LUM_C
    } else {
        let t = (lightness + L_LUM_B) / L_LUM_A;
        t * t * t
    }
}

/// Lab's companding function.
pub(crate) fn lab_f(t: Float) -> Float {
    if t > LUMINANCE_CUTOFF {
        t.cbrt()
    } else {
        LAB_F_A.mul_add(t, LAB_F_B)
    }
}

/// The inverse of Lab's companding function.
pub(crate) fn lab_f_inverse(f: Float) -> Float {
    if f <= LAB_F_A.mul_add(LUMINANCE_CUTOFF, LAB_F_B) {
        (f - LAB_F_B) / LAB_F_A
    } else {
        f * f * f
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the u′ and v′ chromaticity coordinates.
///
/// Black has a zero denominator and maps to `[0, 0]`.
pub(crate) fn uv_primes(xyz: &[Float; 3]) -> [Float; 2] {
    let [x, y, z] = *xyz;
    let denominator = 15.0_f64.mul_add(y, 3.0_f64.mul_add(z, x));
    if denominator == 0.0 {
        return [0.0, 0.0];
    }

    [4.0 * x / denominator, 9.0 * y / denominator]
}

/// Recover XYZ from u′, v′, and the known luminance `Y`.
///
/// A zero v′ only arises for black and maps to black.
pub(crate) fn uv_primes_inverse(u_prime: Float, v_prime: Float, y: Float) -> [Float; 3] {
    if v_prime == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let w = 9.0 * y / v_prime;
    let x = 0.25 * u_prime * w;
    let z = (w - x - 15.0 * y) / 3.0;
    [x, y, z]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert XYZ to Luv.
pub(crate) fn luv_from_xyz(xyz: &[Float; 3], white: &[Float; 3], white_uv: &[Float; 2]) -> [Float; 3] {
    let [u_prime, v_prime] = uv_primes(xyz);
    let l = lightness(xyz[1] / white[1]);

    [
        l,
        13.0 * l * (u_prime - white_uv[0]),
        13.0 * l * (v_prime - white_uv[1]),
    ]
}

/// Convert Luv to XYZ.
///
/// Zero lightness is black, whatever u and v.
pub(crate) fn xyz_from_luv(luv: &[Float; 3], white: &[Float; 3], white_uv: &[Float; 2]) -> [Float; 3] {
    let [l, u, v] = *luv;
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let y = lightness_inverse(l) * white[1];
    let l13 = 13.0 * l;
    uv_primes_inverse(white_uv[0] + u / l13, white_uv[1] + v / l13, y)
}

/// Convert XYZ to Lab.
pub(crate) fn lab_from_xyz(xyz: &[Float; 3], white: &[Float; 3]) -> [Float; 3] {
    let x_p = xyz[0] / white[0];
    let y_p = xyz[1] / white[1];
    let z_p = xyz[2] / white[2];

    let f_x = lab_f(x_p);
    let f_y = lab_f(y_p);
    let f_z = lab_f(z_p);

    [lightness(y_p), 500.0 * (f_x - f_y), 200.0 * (f_y - f_z)]
}

/// Convert Lab to XYZ.
pub(crate) fn xyz_from_lab(lab: &[Float; 3], white: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *lab;
    let y_p = lightness_inverse(l);
    let f_y = lab_f(y_p);
    let x_p = lab_f_inverse(f_y + a / 500.0);
    let z_p = lab_f_inverse(f_y - b / 200.0);

    [x_p * white[0], y_p * white[1], z_p * white[2]]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close;
    use proptest::prelude::*;

    const D65: [Float; 3] = [0.9504559270516716, 1.0, 1.0890577507598784];

    fn d65_uv() -> [Float; 2] {
        uv_primes(&D65)
    }

    #[test]
    fn test_boundary_continuity() {
        // Compare the floats immediately below and above the cutoff, which
        // fall into different branches.
        let below = Float::from_bits(LUMINANCE_CUTOFF.to_bits() - 1);
        let above = Float::from_bits(LUMINANCE_CUTOFF.to_bits() + 1);
        assert!((lightness(above) - lightness(below)).abs() < 1e-12);
        assert!((lab_f(above) - lab_f(below)).abs() < 1e-14);
        assert!((lightness(LUMINANCE_CUTOFF) - lightness(above)).abs() < 1e-12);

        let threshold = L_LUM_C * LUMINANCE_CUTOFF;
        let below = Float::from_bits(threshold.to_bits() - 1);
        let above = Float::from_bits(threshold.to_bits() + 1);
        assert!((lightness_inverse(above) - lightness_inverse(below)).abs() < 1e-16);

        let threshold = LAB_F_A.mul_add(LUMINANCE_CUTOFF, LAB_F_B);
        let below = Float::from_bits(threshold.to_bits() - 1);
        let above = Float::from_bits(threshold.to_bits() + 1);
        assert!((lab_f_inverse(above) - lab_f_inverse(below)).abs() < 1e-16);

        // At the cutoff itself, the branches agree to machine precision.
        let cubic = L_LUM_A * LUMINANCE_CUTOFF.cbrt() - L_LUM_B;
        assert!((cubic - L_LUM_C * LUMINANCE_CUTOFF).abs() < 1e-12);
        let cubic = LUMINANCE_CUTOFF.cbrt();
        assert!((cubic - (LAB_F_A * LUMINANCE_CUTOFF + LAB_F_B)).abs() < 1e-14);
    }

    #[test]
    fn test_lightness() {
        assert_eq!(lightness(0.0), 0.0);
        assert!((lightness(1.0) - 100.0).abs() < 1e-12);
        assert!((lightness_inverse(100.0) - 1.0).abs() < 1e-15);
        assert!((lightness(0.18) - 49.496).abs() < 1e-3);
        assert_eq!(lightness_inverse(0.0), 0.0);
    }

    #[test]
    fn test_uv_primes() {
        assert_eq!(uv_primes(&[0.0, 0.0, 0.0]), [0.0, 0.0]);
        assert_eq!(uv_primes_inverse(0.3, 0.0, 0.5), [0.0, 0.0, 0.0]);

        let [u, v] = d65_uv();
        assert!((u - 0.19783).abs() < 1e-5);
        assert!((v - 0.46832).abs() < 1e-5);
        assert_close!(uv_primes_inverse(u, v, 1.0), D65, 1e-14);
    }

    #[test]
    fn test_black_and_white() {
        let black = [0.0, 0.0, 0.0];
        assert_close!(luv_from_xyz(&black, &D65, &d65_uv()), black, 0.0);
        assert_close!(xyz_from_luv(&black, &D65, &d65_uv()), black, 0.0);
        assert_close!(lab_from_xyz(&black, &D65), black, 0.0);
        assert_close!(xyz_from_lab(&black, &D65), black, 1e-15);

        assert_close!(luv_from_xyz(&D65, &D65, &d65_uv()), [100.0, 0.0, 0.0], 1e-12);
        assert_close!(lab_from_xyz(&D65, &D65), [100.0, 0.0, 0.0], 1e-12);
        assert_close!(xyz_from_luv(&[100.0, 0.0, 0.0], &D65, &d65_uv()), D65, 1e-12);
        assert_close!(xyz_from_lab(&[100.0, 0.0, 0.0], &D65), D65, 1e-12);
    }

    #[test]
    fn test_zero_lightness_is_black() {
        assert_eq!(
            xyz_from_luv(&[0.0, 12.0, -7.0], &D65, &d65_uv()),
            [0.0, 0.0, 0.0]
        );
    }

    proptest! {
        // Near black, recovering v′ as white v′ + v / 13L divides by a tiny
        // lightness, so absolute accuracy degrades with Y. Very dark colors
        // are covered separately with a relative bound.
        #[test]
        fn prop_luv_round_trip(x in 0.0f64..10.0, y in 0.001f64..10.0, z in 0.0f64..10.0) {
            let xyz = [x, y, z];
            let luv = luv_from_xyz(&xyz, &D65, &d65_uv());
            let back = xyz_from_luv(&luv, &D65, &d65_uv());
            assert_close!(back, xyz, 1e-10);
            let again = luv_from_xyz(&back, &D65, &d65_uv());
            assert_close!(again, luv, 1e-10);
        }

        #[test]
        fn prop_luv_round_trip_near_black(
            x in 0.0f64..10.0,
            exponent in -9.0f64..-3.0,
            z in 0.0f64..10.0,
        ) {
            let y = 10.0_f64.powf(exponent);
            let xyz = [x, y, z];
            let back = xyz_from_luv(&luv_from_xyz(&xyz, &D65, &d65_uv()), &D65, &d65_uv());

            // Luminance depends on lightness only and stays accurate. X and Z
            // lose precision in proportion to the conditioning of v′.
            let denominator = 15.0_f64.mul_add(y, 3.0_f64.mul_add(z, x));
            let tolerance = 1e-16 * denominator * denominator / y;
            prop_assert!((back[1] - y).abs() / y < 1e-13);
            prop_assert!((back[0] - x).abs() <= tolerance, "{:?} vs {:?}", back, xyz);
            prop_assert!((back[2] - z).abs() <= tolerance, "{:?} vs {:?}", back, xyz);
        }

        #[test]
        fn prop_lab_round_trip(x in 0.0f64..10.0, y in 0.0f64..10.0, z in 0.0f64..10.0) {
            let xyz = [x, y, z];
            let lab = lab_from_xyz(&xyz, &D65);
            let back = xyz_from_lab(&lab, &D65);
            assert_close!(back, xyz, 1e-10);
            let again = lab_from_xyz(&back, &D65);
            assert_close!(again, lab, 1e-10);
        }
    }
}
