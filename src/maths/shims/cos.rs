//! cos(x) at single and double precision.
//!
//! Thin wrappers around the selected platform routine. No range reduction or
//! kernel polynomial lives here.

use super::backend;

/// Cosine of `x` in single precision.
///
/// Total over `f32`: NaN and infinities come back as NaN.
#[inline(always)]
pub fn cosine_f32(x: f32) -> f32 {
    backend::cosf(x)
}

/// Cosine of `x` in double precision.
///
/// Total over `f64`: NaN and infinities come back as NaN.
#[inline(always)]
pub fn cosine_f64(x: f64) -> f64 {
    backend::cos(x)
}

/// Width-generic access to the cosine shims.
pub trait Cosine: Copy {
    fn cosine(self) -> Self;
}

impl Cosine for f32 {
    #[inline(always)]
    fn cosine(self) -> Self {
        cosine_f32(self)
    }
}

impl Cosine for f64 {
    #[inline(always)]
    fn cosine(self) -> Self {
        cosine_f64(self)
    }
}
