mod d_series;
mod two_deg;

pub use d_series::CIE_ILLUMINANT_D65;
pub use two_deg::CIE_OBSERVER_2DEG_1931;
