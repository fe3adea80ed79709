mod chromaticity;
mod clip;
mod equality;
mod math;
mod matrix;
mod percept;
mod string;

// chromaticity
pub use chromaticity::{normalize_sum, normalize_y, xyz_from_xyy, Chromaticity, Primaries};

// clip
pub use clip::{ClipMethod, ClipReport};
pub(crate) use clip::{clip_chromaticity, clip_intensity, dequantize, quantize};

// equality
#[cfg(test)]
pub(crate) use equality::assert_close;

// math
pub(crate) use math::{Accumulator, ThreeSum};

// matrix
pub use matrix::Matrix;
pub(crate) use matrix::{column_stack, invert, multiply, solve};
#[cfg(test)]
pub(crate) use matrix::multiply_matrices;

// percept
pub(crate) use percept::{lab_from_xyz, luv_from_xyz, uv_primes, xyz_from_lab, xyz_from_luv};

// string
pub use string::{hex_from_irgb, irgb_from_hex};
