//! The configurable color converter.
//!
//! A [`ColorConverter`] bundles everything needed to turn XYZ colors into
//! displayable RGB: the primaries and white point determining the linear RGB
//! space, the reference white for Luv and Lab, the gamma curve, the clip
//! method, and the bit depth. It is created through a [`ConverterBuilder`],
//! validated once, and immutable thereafter. As a result, a converter can be
//! freely cloned and shared between threads, and independent converters with
//! different configurations can coexist.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clip_chromaticity, clip_intensity, column_stack, dequantize, hex_from_irgb, invert,
    lab_from_xyz, luv_from_xyz, multiply, normalize_y, quantize, solve, uv_primes,
    xyz_from_lab, xyz_from_luv, Chromaticity, ClipMethod, ClipReport, Matrix, Primaries,
};
use crate::error::ConfigError;
use crate::gamma::GammaCurve;
use crate::Float;

/// The default bit depth of integer RGB.
pub const DEFAULT_BIT_DEPTH: u32 = 8;

/// Determine the XYZ color of the given white point with unit luminance.
fn normalized_white(white: &Chromaticity) -> Result<[Float; 3], ConfigError> {
    if !white.x.is_finite() || !white.y.is_finite() || white.y == 0.0 {
        return Err(ConfigError::DegenerateWhitePoint(*white));
    }

    Ok(normalize_y(&white.to_xyz()))
}

/// Compute the matrix converting linear RGB to XYZ for the given primaries.
fn xyz_from_rgb_matrix(primaries: &Primaries) -> Result<Matrix, ConfigError> {
    let white = normalized_white(&primaries.white)?;
    let red = primaries.red.to_xyz();
    let green = primaries.green.to_xyz();
    let blue = primaries.blue.to_xyz();

    let intensities = solve(&column_stack(&[red, green, blue]), &white)
        .ok_or(ConfigError::DegeneratePrimaries(*primaries))?;
    let scale = |xyz: [Float; 3], factor: Float| xyz.map(|c| c * factor);

    Ok(column_stack(&[
        scale(red, intensities[0]),
        scale(green, intensities[1]),
        scale(blue, intensities[2]),
    ]))
}

// --------------------------------------------------------------------------------------------------------------------

/// A builder of color converters.
///
/// All options have sensible defaults, i.e., sRGB primaries with a D65 white
/// point, the same white point for Luv and Lab, the sRGB gamma curve, the
/// add-white clip method, and a bit depth of 8.
///
/// ```
/// # use spectrochrome::{ClipMethod, ColorConverter, Primaries};
/// # use spectrochrome::error::ConfigError;
/// let converter = ColorConverter::builder()
///     .with_primaries(Primaries::REC2020)
///     .with_clip_method(ClipMethod::ClampToZero)
///     .with_bit_depth(10)
///     .build()?;
/// assert_eq!(converter.max_value(), 1023);
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConverterBuilder {
    primaries: Primaries,
    reference_white: Option<Chromaticity>,
    gamma: GammaCurve,
    clip_method: ClipMethod,
    bit_depth: u32,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self {
            primaries: Primaries::default(),
            reference_white: None,
            gamma: GammaCurve::default(),
            clip_method: ClipMethod::default(),
            bit_depth: DEFAULT_BIT_DEPTH,
        }
    }
}

impl ConverterBuilder {
    /// Use the given primaries, including their white point.
    #[must_use = "method returns a new builder and does not mutate original value"]
    pub fn with_primaries(mut self, primaries: Primaries) -> Self {
        self.primaries = primaries;
        self
    }

    /// Use the given white point for linear RGB.
    #[must_use = "method returns a new builder and does not mutate original value"]
    pub fn with_white_point(mut self, white: Chromaticity) -> Self {
        self.primaries.white = white;
        self
    }

    /// Use the given reference white for Luv and Lab.
    ///
    /// Unless this method is invoked, Luv and Lab use the white point of the
    /// primaries.
    #[must_use = "method returns a new builder and does not mutate original value"]
    pub fn with_reference_white(mut self, white: Chromaticity) -> Self {
        self.reference_white = Some(white);
        self
    }

    /// Use the given gamma curve.
    #[must_use = "method returns a new builder and does not mutate original value"]
    pub fn with_gamma(mut self, gamma: GammaCurve) -> Self {
        self.gamma = gamma;
        self
    }

    /// Use the given clip method.
    #[must_use = "method returns a new builder and does not mutate original value"]
    pub fn with_clip_method(mut self, clip_method: ClipMethod) -> Self {
        self.clip_method = clip_method;
        self
    }

    /// Use the given bit depth for integer RGB, which must be between 1 and
    /// 32 inclusive.
    #[must_use = "method returns a new builder and does not mutate original value"]
    pub fn with_bit_depth(mut self, bit_depth: u32) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Validate the configuration and build the converter.
    ///
    /// This method fails if the bit depth is out of range, if a gamma curve
    /// parameter is invalid, if a white point has a zero y coordinate, or if
    /// the primaries do not span XYZ.
    pub fn build(&self) -> Result<ColorConverter, ConfigError> {
        if !(1..=32).contains(&self.bit_depth) {
            return Err(ConfigError::InvalidBitDepth(self.bit_depth));
        }

        let gamma = self.gamma.validate()?;
        let xyz_from_rgb = xyz_from_rgb_matrix(&self.primaries)?;
        let rgb_from_xyz =
            invert(&xyz_from_rgb).ok_or(ConfigError::DegeneratePrimaries(self.primaries))?;

        let reference_white =
            normalized_white(&self.reference_white.unwrap_or(self.primaries.white))?;
        let reference_uv = uv_primes(&reference_white);
        let max_value = ((1_u64 << self.bit_depth) - 1) as u32;

        log::debug!(
            "built color converter with xyz_from_rgb {:?}, rgb_from_xyz {:?}, reference white {:?}, \
             gamma {:?}, {} clipping, {}-bit output",
            xyz_from_rgb,
            rgb_from_xyz,
            reference_white,
            gamma,
            self.clip_method,
            self.bit_depth
        );

        Ok(ColorConverter {
            primaries: self.primaries,
            xyz_from_rgb,
            rgb_from_xyz,
            reference_white,
            reference_uv,
            gamma,
            clip_method: self.clip_method,
            bit_depth: self.bit_depth,
            max_value,
        })
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color converter.
///
/// The converter maps between XYZ, linear RGB, Luv, and Lab, converts between
/// linear and display RGB, and clips arbitrary linear RGB into integer RGB
/// with the configured bit depth. Use [`ColorConverter::builder`] to
/// configure a new instance.
///
/// ```
/// # use spectrochrome::ColorConverter;
/// # use spectrochrome::error::ConfigError;
/// let converter = ColorConverter::builder().build()?;
/// let (irgb, report) = converter.clip_rgb([1.2, 0.64, 0.0]);
/// assert_eq!(irgb, [255, 193, 0]);
/// assert!(report.intensity && !report.chromaticity);
/// assert_eq!(converter.hex_from_rgb([1.2, 0.64, 0.0]), "#FFC100");
/// # Ok::<(), ConfigError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "spectrochrome"))]
#[derive(Clone, Debug)]
pub struct ColorConverter {
    primaries: Primaries,
    xyz_from_rgb: Matrix,
    rgb_from_xyz: Matrix,
    reference_white: [Float; 3],
    reference_uv: [Float; 2],
    gamma: GammaCurve,
    clip_method: ClipMethod,
    bit_depth: u32,
    max_value: u32,
}

impl ColorConverter {
    /// Create a new builder with default options.
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// Get the primaries.
    pub fn primaries(&self) -> Primaries {
        self.primaries
    }

    /// Get the gamma curve.
    pub fn gamma(&self) -> GammaCurve {
        self.gamma
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorConverter {
    /// Create a new color converter. <i class=python-only>Python only!</i>
    ///
    /// The gamma curve and clip method are given by name.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (gamma="srgb", clip_method="add-white", bit_depth=8))]
    pub fn py_new(gamma: &str, clip_method: &str, bit_depth: u32) -> PyResult<Self> {
        Ok(Self::builder()
            .with_gamma(gamma.parse()?)
            .with_clip_method(clip_method.parse()?)
            .with_bit_depth(bit_depth)
            .build()?)
    }

    /// Get the matrix converting linear RGB to XYZ.
    pub fn xyz_from_rgb_matrix(&self) -> Matrix {
        self.xyz_from_rgb
    }

    /// Get the matrix converting XYZ to linear RGB.
    pub fn rgb_from_xyz_matrix(&self) -> Matrix {
        self.rgb_from_xyz
    }

    /// Get the reference white for Luv and Lab, with unit luminance.
    pub fn reference_white(&self) -> [Float; 3] {
        self.reference_white
    }

    /// Get the clip method.
    pub fn clip_method(&self) -> ClipMethod {
        self.clip_method
    }

    /// Get the bit depth of integer RGB.
    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// Get the maximum integer RGB component, i.e., `2^bit_depth - 1`.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Get the number of hexadecimal digits per component.
    pub fn hex_digits(&self) -> usize {
        self.bit_depth.div_ceil(4) as usize
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert XYZ to linear RGB.
    pub fn rgb_from_xyz(&self, xyz: [Float; 3]) -> [Float; 3] {
        multiply(&self.rgb_from_xyz, &xyz)
    }

    /// Convert linear RGB to XYZ.
    pub fn xyz_from_rgb(&self, rgb: [Float; 3]) -> [Float; 3] {
        multiply(&self.xyz_from_rgb, &rgb)
    }

    /// Convert XYZ to linear RGB and scale the result so that its largest
    /// component equals the given brightness.
    ///
    /// If the largest component is zero, the linear RGB is returned as is.
    pub fn brightest_rgb_from_xyz(&self, xyz: [Float; 3], brightness: Float) -> [Float; 3] {
        let rgb = self.rgb_from_xyz(xyz);
        let max = rgb[0].max(rgb[1]).max(rgb[2]);
        if max == 0.0 {
            return rgb;
        }

        let scale = brightness / max;
        rgb.map(|c| c * scale)
    }

    /// Convert XYZ to CIELUV relative to the reference white.
    pub fn luv_from_xyz(&self, xyz: [Float; 3]) -> [Float; 3] {
        luv_from_xyz(&xyz, &self.reference_white, &self.reference_uv)
    }

    /// Convert CIELUV relative to the reference white to XYZ.
    pub fn xyz_from_luv(&self, luv: [Float; 3]) -> [Float; 3] {
        xyz_from_luv(&luv, &self.reference_white, &self.reference_uv)
    }

    /// Convert XYZ to CIELAB relative to the reference white.
    pub fn lab_from_xyz(&self, xyz: [Float; 3]) -> [Float; 3] {
        lab_from_xyz(&xyz, &self.reference_white)
    }

    /// Convert CIELAB relative to the reference white to XYZ.
    pub fn xyz_from_lab(&self, lab: [Float; 3]) -> [Float; 3] {
        xyz_from_lab(&lab, &self.reference_white)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Apply the gamma curve to a single linear component.
    pub fn display_from_linear_component(&self, linear: Float) -> Float {
        self.gamma.display_from_linear(linear)
    }

    /// Undo the gamma curve for a single display component.
    pub fn linear_from_display_component(&self, display: Float) -> Float {
        self.gamma.linear_from_display(display)
    }

    /// Apply the gamma curve to linear RGB.
    pub fn display_from_linear(&self, rgb: [Float; 3]) -> [Float; 3] {
        rgb.map(|c| self.gamma.display_from_linear(c))
    }

    /// Undo the gamma curve for display RGB.
    pub fn linear_from_display(&self, rgb: [Float; 3]) -> [Float; 3] {
        rgb.map(|c| self.gamma.linear_from_display(c))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Clip linear RGB into displayable integer RGB.
    ///
    /// This method first removes negative components with the configured clip
    /// method, then scales down colors that are too bright, then applies the
    /// gamma curve, and finally quantizes to the configured bit depth. The
    /// returned report records which of the two clipping steps changed the
    /// color.
    pub fn clip_rgb(&self, rgb: [Float; 3]) -> ([u32; 3], ClipReport) {
        let (rgb, chromaticity) = clip_chromaticity(self.clip_method, &rgb);
        let (rgb, intensity) = clip_intensity(&rgb, self.max_value);
        let irgb = quantize(&self.display_from_linear(rgb), self.max_value);

        let report = ClipReport {
            chromaticity,
            intensity,
        };
        if report.any() {
            log::trace!("clipped linear RGB to {:?} with {:?}", irgb, report);
        }

        (irgb, report)
    }

    /// Clip linear RGB into displayable integer RGB, dropping the report.
    pub fn irgb_from_rgb(&self, rgb: [Float; 3]) -> [u32; 3] {
        self.clip_rgb(rgb).0
    }

    /// Convert integer RGB back to linear RGB.
    pub fn rgb_from_irgb(&self, irgb: [u32; 3]) -> [Float; 3] {
        self.linear_from_display(dequantize(&irgb, self.max_value))
    }

    /// Convert XYZ to displayable integer RGB.
    pub fn irgb_from_xyz(&self, xyz: [Float; 3]) -> [u32; 3] {
        self.irgb_from_rgb(self.rgb_from_xyz(xyz))
    }

    /// Convert linear RGB to a hexadecimal string with as many digits per
    /// component as the bit depth requires.
    pub fn hex_from_rgb(&self, rgb: [Float; 3]) -> String {
        hex_from_irgb(&self.irgb_from_rgb(rgb), self.hex_digits())
    }

    /// Convert XYZ to a hexadecimal string with as many digits per component
    /// as the bit depth requires.
    pub fn hex_from_xyz(&self, xyz: [Float; 3]) -> String {
        hex_from_irgb(&self.irgb_from_xyz(xyz), self.hex_digits())
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_close, multiply_matrices};
    use crate::error::ConfigError;
    use crate::gamma::HybridCurve;
    use proptest::prelude::*;

    const IDENTITY: Matrix = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    fn srgb() -> ColorConverter {
        ColorConverter::builder()
            .build()
            .expect("default configuration is valid")
    }

    #[test]
    fn test_srgb_matrices() {
        let converter = srgb();
        let matrix = converter.xyz_from_rgb_matrix();

        assert_close!(matrix[0], [0.4124, 0.3576, 0.1805], 1e-4);
        assert_close!(matrix[1], [0.2126, 0.7152, 0.0722], 1e-4);
        assert_close!(matrix[2], [0.0193, 0.1192, 0.9505], 1e-4);

        let product = multiply_matrices(&converter.rgb_from_xyz_matrix(), &matrix);
        for row in 0..3 {
            assert_close!(product[row], IDENTITY[row], 1e-8);
        }
    }

    #[test]
    fn test_white_maps_to_unit_rgb() {
        let converter = srgb();
        let white = converter.reference_white();
        assert_close!(converter.rgb_from_xyz(white), [1.0, 1.0, 1.0], 1e-12);
        assert_eq!(converter.hex_from_xyz(white), "#FFFFFF");
        assert_eq!(converter.irgb_from_xyz([0.0, 0.0, 0.0]), [0, 0, 0]);
    }

    #[test]
    fn test_brightest() {
        let converter = srgb();
        let rgb = converter.brightest_rgb_from_xyz([0.2, 0.3, 0.1], 1.0);
        assert_close!([rgb[0].max(rgb[1]).max(rgb[2])], [1.0], 1e-12);

        let rgb = converter.brightest_rgb_from_xyz([0.2, 0.3, 0.1], 0.5);
        assert_close!([rgb[0].max(rgb[1]).max(rgb[2])], [0.5], 1e-12);

        assert_eq!(
            converter.brightest_rgb_from_xyz([0.0, 0.0, 0.0], 1.0),
            [0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_clip_rgb() {
        let converter = srgb();

        let (irgb, report) = converter.clip_rgb([1.2, 0.64, 0.0]);
        assert_eq!(irgb, [255, 193, 0]);
        assert_eq!(
            report,
            ClipReport {
                chromaticity: false,
                intensity: true
            }
        );

        // Adding white turns this color into the previous one.
        let (irgb, report) = converter.clip_rgb([1.2, 0.5, -0.3]);
        assert_eq!(irgb, [255, 193, 0]);
        assert!(report.chromaticity);
        assert!(report.intensity);

        let (_, report) = converter.clip_rgb([0.25, 0.5, 0.75]);
        assert!(!report.any());
    }

    #[test]
    fn test_clamp_to_zero() -> Result<(), ConfigError> {
        let converter = ColorConverter::builder()
            .with_clip_method(ClipMethod::ClampToZero)
            .build()?;

        let (irgb, report) = converter.clip_rgb([1.0, -0.5, 0.0]);
        assert_eq!(irgb, [255, 0, 0]);
        assert!(report.chromaticity);
        assert!(!report.intensity);
        Ok(())
    }

    #[test]
    fn test_power_gamma() -> Result<(), ConfigError> {
        let converter = ColorConverter::builder()
            .with_gamma(GammaCurve::power(2.0)?)
            .build()?;

        assert_close!(
            converter.display_from_linear([0.16, 0.0, 1.0]),
            [0.4, 0.0, 1.0],
            1e-15
        );
        assert_eq!(converter.irgb_from_rgb([0.16, 0.0, 1.0]), [102, 0, 255]);
        Ok(())
    }

    #[test]
    fn test_bit_depth() -> Result<(), ConfigError> {
        let converter = ColorConverter::builder().with_bit_depth(16).build()?;
        assert_eq!(converter.max_value(), 65_535);
        assert_eq!(converter.hex_digits(), 4);
        assert_eq!(converter.hex_from_rgb([1.0, 0.0, 1.0]), "#FFFF0000FFFF");

        let converter = ColorConverter::builder().with_bit_depth(10).build()?;
        assert_eq!(converter.max_value(), 1_023);
        assert_eq!(converter.hex_digits(), 3);
        assert_eq!(converter.hex_from_rgb([1.0, 0.0, 0.0]), "#3FF000000");

        let converter = ColorConverter::builder().with_bit_depth(1).build()?;
        assert_eq!(converter.max_value(), 1);
        assert_eq!(converter.irgb_from_rgb([1.0, 0.0, 0.0]), [1, 0, 0]);

        let converter = ColorConverter::builder().with_bit_depth(32).build()?;
        assert_eq!(converter.max_value(), u32::MAX);
        assert_eq!(converter.irgb_from_rgb([1.0, 0.0, 0.0]), [u32::MAX, 0, 0]);

        for depth in [0, 33, 64] {
            assert_eq!(
                ColorConverter::builder().with_bit_depth(depth).build().err(),
                Some(ConfigError::InvalidBitDepth(depth))
            );
        }
        Ok(())
    }

    #[test]
    fn test_degenerate_primaries() {
        let collinear = Primaries::new(
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.3, 0.3),
            Chromaticity::new(0.4, 0.4),
            Chromaticity::D65,
        );
        assert_eq!(
            ColorConverter::builder()
                .with_primaries(collinear)
                .build()
                .err(),
            Some(ConfigError::DegeneratePrimaries(collinear))
        );

        let flat_white = Chromaticity::new(0.3, 0.0);
        assert_eq!(
            ColorConverter::builder()
                .with_white_point(flat_white)
                .build()
                .err(),
            Some(ConfigError::DegenerateWhitePoint(flat_white))
        );
        assert_eq!(
            ColorConverter::builder()
                .with_reference_white(flat_white)
                .build()
                .err(),
            Some(ConfigError::DegenerateWhitePoint(flat_white))
        );
    }

    #[test]
    fn test_invalid_gamma() {
        let gamma = GammaCurve::Power { gamma: 0.0 };
        assert!(matches!(
            ColorConverter::builder().with_gamma(gamma).build(),
            Err(ConfigError::InvalidGammaParameter { name: "gamma", .. })
        ));
    }

    #[test]
    fn test_reference_white() -> Result<(), ConfigError> {
        let d50 = Chromaticity::new(0.3457, 0.3585);
        let converter = ColorConverter::builder().with_reference_white(d50).build()?;
        let white = d50.to_xyz_with_luminance(1.0);

        assert_close!(converter.reference_white(), white, 1e-14);
        assert_close!(converter.lab_from_xyz(white), [100.0, 0.0, 0.0], 1e-10);
        assert_close!(converter.luv_from_xyz(white), [100.0, 0.0, 0.0], 1e-10);

        // Linear RGB still uses D65.
        assert_close!(
            converter.rgb_from_xyz(Chromaticity::D65.to_xyz_with_luminance(1.0)),
            [1.0, 1.0, 1.0],
            1e-12
        );
        Ok(())
    }

    #[test]
    fn test_rec2020() -> Result<(), ConfigError> {
        let converter = ColorConverter::builder()
            .with_primaries(Primaries::REC2020)
            .with_gamma(GammaCurve::Hybrid(HybridCurve::uhdtv12()))
            .with_bit_depth(12)
            .build()?;

        let product = multiply_matrices(
            &converter.rgb_from_xyz_matrix(),
            &converter.xyz_from_rgb_matrix(),
        );
        for row in 0..3 {
            assert_close!(product[row], IDENTITY[row], 1e-8);
        }

        assert_close!(converter.xyz_from_rgb_matrix()[1], [0.2627, 0.6780, 0.0593], 1e-4);
        assert_eq!(converter.hex_from_rgb([1.0, 1.0, 1.0]), "#FFFFFFFFF");
        Ok(())
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorConverter>();
        assert_send_sync::<ConverterBuilder>();

        let converter = std::sync::Arc::new(srgb());
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let converter = std::sync::Arc::clone(&converter);
                std::thread::spawn(move || converter.irgb_from_rgb([n as Float * 0.25, 0.5, 1.0]))
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let irgb = handle.join().expect("thread does not panic");
            assert_eq!(irgb, converter.irgb_from_rgb([n as Float * 0.25, 0.5, 1.0]));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_rgb_xyz_roundtrip(
            x in 0.0..10.0_f64,
            y in 0.0..10.0_f64,
            z in 0.0..10.0_f64,
        ) {
            let converter = srgb();
            let xyz = [x, y, z];
            assert_close!(converter.xyz_from_rgb(converter.rgb_from_xyz(xyz)), xyz, 1e-10);
        }

        #[test]
        fn test_identity_for_arbitrary_primaries(
            rx in 0.55..0.72_f64, ry in 0.25..0.35_f64,
            gx in 0.15..0.35_f64, gy in 0.55..0.80_f64,
            bx in 0.12..0.16_f64, by in 0.03..0.08_f64,
        ) {
            let primaries = Primaries::new(
                Chromaticity::new(rx, ry),
                Chromaticity::new(gx, gy),
                Chromaticity::new(bx, by),
                Chromaticity::D65,
            );
            let converter = ColorConverter::builder()
                .with_primaries(primaries)
                .build()
                .expect("primaries span XYZ");

            let product = multiply_matrices(
                &converter.rgb_from_xyz_matrix(),
                &converter.xyz_from_rgb_matrix(),
            );
            for row in 0..3 {
                assert_close!(product[row], IDENTITY[row], 1e-8);
            }
        }

        #[test]
        fn test_clip_always_in_range(
            r in -10.0..10.0_f64,
            g in -10.0..10.0_f64,
            b in -10.0..10.0_f64,
            depth in 1..=16_u32,
        ) {
            let converter = ColorConverter::builder()
                .with_bit_depth(depth)
                .build()
                .expect("bit depth is valid");
            let (irgb, _) = converter.clip_rgb([r, g, b]);
            for c in irgb {
                prop_assert!(c <= converter.max_value());
            }
        }

        #[test]
        fn test_irgb_roundtrip(r in 0..=255_u32, g in 0..=255_u32, b in 0..=255_u32) {
            let converter = srgb();
            let irgb = [r, g, b];
            prop_assert_eq!(converter.irgb_from_rgb(converter.rgb_from_irgb(irgb)), irgb);
        }
    }
}
