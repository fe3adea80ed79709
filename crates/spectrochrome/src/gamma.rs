//! Gamma curves mapping between linear and display components.
//!
//! Linear components are proportional to physical light intensity, whereas
//! display components are what a display's palette expects. A [`GammaCurve`]
//! maps in both directions. Its variants cover a simple power law, the sRGB
//! standard's piecewise formula with its published constants, a [`HybridCurve`]
//! generalizing sRGB and Rec. 2020, and a pair of caller-supplied functions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::Float;

/// A piecewise curve with a linear segment near black and a power law
/// elsewhere.
///
/// ```text
/// display = Φ · linear                     if linear < K0 / Φ
///         = (1 + a) · linear^(1/γ) - a     otherwise
///
/// linear  = display / Φ                    if display < K0
///         = ((display + a) / (1 + a))^γ    otherwise
/// ```
///
/// Curves created with [`HybridCurve::with_continuous_slope`] and the presets
/// derive K0 and Φ from γ and a, so that both value and slope are continuous
/// where the two segments meet.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HybridCurve {
    gamma: Float,
    a: Float,
    k0: Float,
    phi: Float,
}

impl HybridCurve {
    /// Create a new hybrid curve with explicit constants.
    ///
    /// Gamma and Φ must be positive, a must exceed -1, and K0 must not be
    /// negative. All must be finite.
    pub fn new(gamma: Float, a: Float, k0: Float, phi: Float) -> Result<Self, ConfigError> {
        check("gamma", gamma, gamma > 0.0)?;
        check("a", a, a > -1.0)?;
        check("K0", k0, k0 >= 0.0)?;
        check("Phi", phi, phi > 0.0)?;
        Ok(Self { gamma, a, k0, phi })
    }

    /// Create a new hybrid curve whose linear segment joins the power law with
    /// continuous value and slope.
    ///
    /// This requires a gamma greater than one and a positive offset a.
    pub fn with_continuous_slope(gamma: Float, a: Float) -> Result<Self, ConfigError> {
        check("gamma", gamma, gamma > 1.0)?;
        check("a", a, a > 0.0)?;
        Ok(Self::continuous(gamma, a))
    }

    fn continuous(gamma: Float, a: Float) -> Self {
        let k0 = a / (gamma - 1.0);
        let phi = ((1.0 + a).powf(gamma) * (gamma - 1.0).powf(gamma - 1.0))
            / (a.powf(gamma - 1.0) * gamma.powf(gamma));
        Self { gamma, a, k0, phi }
    }

    /// The sRGB curve with gamma 2.4 and offset 0.055.
    pub fn srgb() -> Self {
        Self::continuous(2.4, 0.055)
    }

    /// The Rec. 2020 curve for 10 bits per component.
    pub fn uhdtv10() -> Self {
        Self::continuous(1.0 / 0.45, 0.099)
    }

    /// The Rec. 2020 curve for 12 bits per component.
    pub fn uhdtv12() -> Self {
        Self::continuous(1.0 / 0.45, 0.0993)
    }

    /// Get the exponent γ.
    pub fn gamma(&self) -> Float {
        self.gamma
    }

    /// Get the offset a.
    pub fn a(&self) -> Float {
        self.a
    }

    /// Get the display value K0 where the linear segment ends.
    pub fn k0(&self) -> Float {
        self.k0
    }

    /// Get the slope Φ of the linear segment.
    pub fn phi(&self) -> Float {
        self.phi
    }

    /// Convert a linear component to a display component.
    pub fn display_from_linear(&self, linear: Float) -> Float {
        if linear < self.k0 / self.phi {
            self.phi * linear
        } else {
            (1.0 + self.a).mul_add(linear.powf(self.gamma.recip()), -self.a)
        }
    }

    /// Convert a display component to a linear component.
    pub fn linear_from_display(&self, display: Float) -> Float {
        if display < self.k0 {
            display / self.phi
        } else {
            ((display + self.a) / (1.0 + self.a)).powf(self.gamma)
        }
    }
}

fn check(name: &'static str, value: Float, valid: bool) -> Result<(), ConfigError> {
    if value.is_finite() && valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidGammaParameter { name, value })
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A gamma curve.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug)]
pub enum GammaCurve {
    /// A simple power law with the given exponent. Non-positive components
    /// pass through unchanged, so that negative intermediate values survive
    /// until clipping.
    Power { gamma: Float },

    /// The sRGB standard's piecewise formula with its published constants.
    SrgbStandard,

    /// A hybrid curve.
    Hybrid(HybridCurve),

    /// Caller-supplied functions, which should be each other's inverse.
    #[cfg_attr(feature = "serde", serde(skip))]
    Functions {
        display_from_linear: fn(Float) -> Float,
        linear_from_display: fn(Float) -> Float,
    },
}

impl GammaCurve {
    /// Create a power law with the given positive, finite exponent.
    pub fn power(gamma: Float) -> Result<Self, ConfigError> {
        Self::Power { gamma }.validate()
    }

    /// Validate the curve's parameters.
    ///
    /// Since enum variants are public, a power law or hybrid curve may have
    /// been constructed with out-of-range parameters. This method checks them
    /// again and returns the curve if they are valid.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Power { gamma } => check("gamma", gamma, gamma > 0.0)?,
            Self::Hybrid(curve) => {
                HybridCurve::new(curve.gamma, curve.a, curve.k0, curve.phi)?;
            }
            Self::SrgbStandard | Self::Functions { .. } => (),
        }
        Ok(self)
    }

    /// Convert a linear component to a display component.
    pub fn display_from_linear(&self, linear: Float) -> Float {
        match self {
            Self::Power { gamma } => {
                if linear <= 0.0 {
                    linear
                } else {
                    linear.powf(gamma.recip())
                }
            }
            Self::SrgbStandard => {
                if linear <= 0.00304 {
                    12.92 * linear
                } else {
                    1.055_f64.mul_add(linear.powf(1.0 / 2.4), -0.055)
                }
            }
            Self::Hybrid(curve) => curve.display_from_linear(linear),
            Self::Functions {
                display_from_linear,
                ..
            } => display_from_linear(linear),
        }
    }

    /// Convert a display component to a linear component.
    pub fn linear_from_display(&self, display: Float) -> Float {
        match self {
            Self::Power { gamma } => {
                if display <= 0.0 {
                    display
                } else {
                    display.powf(*gamma)
                }
            }
            Self::SrgbStandard => {
                if display <= 0.03928 {
                    display / 12.92
                } else {
                    ((display + 0.055) / 1.055).powf(2.4)
                }
            }
            Self::Hybrid(curve) => curve.linear_from_display(display),
            Self::Functions {
                linear_from_display,
                ..
            } => linear_from_display(display),
        }
    }
}

impl Default for GammaCurve {
    fn default() -> Self {
        Self::Hybrid(HybridCurve::srgb())
    }
}

impl std::str::FromStr for GammaCurve {
    type Err = ConfigError;

    /// Parse a gamma curve name.
    ///
    /// The names are `srgb`, `srgb-reference`, `uhdtv10` (or `rec2020-10`),
    /// `uhdtv12` (or `rec2020-12`), and `power:<gamma>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "srgb" => return Ok(Self::Hybrid(HybridCurve::srgb())),
            "srgb-reference" => return Ok(Self::SrgbStandard),
            "uhdtv10" | "rec2020-10" => return Ok(Self::Hybrid(HybridCurve::uhdtv10())),
            "uhdtv12" | "rec2020-12" => return Ok(Self::Hybrid(HybridCurve::uhdtv12())),
            _ => (),
        }

        let gamma = name
            .strip_prefix("power:")
            .and_then(|g| g.trim().parse::<Float>().ok())
            .ok_or_else(|| ConfigError::UnknownGammaMethod(s.to_string()))?;
        Self::power(gamma)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn all_curves() -> Vec<GammaCurve> {
        vec![
            GammaCurve::Power { gamma: 2.2 },
            GammaCurve::Power { gamma: 2.45 },
            GammaCurve::SrgbStandard,
            GammaCurve::Hybrid(HybridCurve::srgb()),
            GammaCurve::Hybrid(HybridCurve::uhdtv10()),
            GammaCurve::Hybrid(HybridCurve::uhdtv12()),
            GammaCurve::Hybrid(
                HybridCurve::new(2.4, 0.055, 0.03928, 12.92).expect("constants are valid"),
            ),
            GammaCurve::Functions {
                display_from_linear: Float::sqrt,
                linear_from_display: |x| x * x,
            },
        ]
    }

    #[test]
    fn test_continuous_slope() {
        let srgb = HybridCurve::srgb();
        assert!((srgb.k0() - 0.03928571428571429).abs() < 1e-15);
        assert!((srgb.phi() - 12.923210180787855).abs() < 1e-12);

        // Value and slope continuity at the breakpoint.
        for curve in [HybridCurve::srgb(), HybridCurve::uhdtv10(), HybridCurve::uhdtv12()] {
            let knee = curve.k0() / curve.phi();
            let power = (1.0 + curve.a()) * knee.powf(1.0 / curve.gamma()) - curve.a();
            assert!((power - curve.k0()).abs() < 1e-12);

            let h = 1e-9;
            let slope = (curve.display_from_linear(knee + h) - curve.display_from_linear(knee)) / h;
            assert!((slope - curve.phi()).abs() / curve.phi() < 1e-5);
        }

        let uhdtv10 = HybridCurve::uhdtv10();
        assert!((uhdtv10.phi() - 4.5).abs() < 0.05);
        assert!((uhdtv10.k0() / uhdtv10.phi() - 0.018).abs() < 0.001);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            HybridCurve::with_continuous_slope(1.0, 0.055),
            Err(ConfigError::InvalidGammaParameter {
                name: "gamma",
                value: 1.0
            })
        );
        assert!(HybridCurve::with_continuous_slope(2.4, 0.0).is_err());
        assert!(HybridCurve::new(2.4, 0.055, 0.03928, 0.0).is_err());
        assert!(HybridCurve::new(2.4, 0.055, Float::NAN, 12.92).is_err());
        assert!(HybridCurve::new(2.4, 0.055, 0.03928, 12.92).is_ok());

        assert!(GammaCurve::power(0.0).is_err());
        assert!(GammaCurve::power(Float::INFINITY).is_err());
        assert!(GammaCurve::Power { gamma: -2.0 }.validate().is_err());
        assert!(GammaCurve::SrgbStandard.validate().is_ok());
    }

    #[test]
    fn test_parsing() {
        assert!(matches!("srgb".parse::<GammaCurve>(), Ok(GammaCurve::Hybrid(c)) if c == HybridCurve::srgb()));
        assert!(matches!("SRGB-Reference".parse::<GammaCurve>(), Ok(GammaCurve::SrgbStandard)));
        assert!(matches!("rec2020-12".parse::<GammaCurve>(), Ok(GammaCurve::Hybrid(c)) if c == HybridCurve::uhdtv12()));
        assert!(matches!("power: 2.2".parse::<GammaCurve>(), Ok(GammaCurve::Power { gamma }) if gamma == 2.2));
        assert!(matches!(
            "power:-1".parse::<GammaCurve>(),
            Err(ConfigError::InvalidGammaParameter { name: "gamma", .. })
        ));
        assert_eq!(
            "power:x".parse::<GammaCurve>().unwrap_err(),
            ConfigError::UnknownGammaMethod("power:x".to_string())
        );
        assert_eq!(
            "linear".parse::<GammaCurve>().unwrap_err(),
            ConfigError::UnknownGammaMethod("linear".to_string())
        );
    }

    #[test]
    fn test_power_law_passes_non_positive_values() {
        let curve = GammaCurve::Power { gamma: 2.2 };
        assert_eq!(curve.display_from_linear(-0.25), -0.25);
        assert_eq!(curve.linear_from_display(-0.25), -0.25);
        assert_eq!(curve.display_from_linear(0.0), 0.0);
        assert_eq!(curve.display_from_linear(1.0), 1.0);
    }

    #[test]
    fn test_srgb_reference() {
        let curve = GammaCurve::SrgbStandard;
        assert!((curve.display_from_linear(0.001) - 0.01292).abs() < 1e-17);
        assert!((curve.display_from_linear(1.0) - 1.0).abs() < 1e-15);
        assert!((curve.linear_from_display(0.5) - 0.21404114048223255).abs() < 1e-15);
    }

    proptest! {
        #[test]
        fn prop_linear_round_trip(x in 1e-6f64..1.0) {
            for curve in all_curves() {
                let back = curve.linear_from_display(curve.display_from_linear(x));
                prop_assert!((back - x).abs() / x < 1e-14, "{:?} maps {} to {}", curve, x, back);
            }
        }

        #[test]
        fn prop_display_round_trip(x in 1e-6f64..1.0) {
            // The published sRGB constants, whether built in or explicit,
            // leave a sliver of display values that no linear value maps to.
            prop_assume!(!(0.0392..0.0394).contains(&x));
            for curve in all_curves() {
                let back = curve.display_from_linear(curve.linear_from_display(x));
                prop_assert!((back - x).abs() / x < 1e-14, "{:?} maps {} to {}", curve, x, back);
            }
        }
    }
}
