//! C ABI exports.
//!
//! `cosine_f32` / `cosine_f64` are the primary symbols. `libm_cosf` /
//! `libm_cos` keep the names of the old inline header so existing callers
//! relink unchanged. Declarations live in `include/media_shims.h`.

use super::{cosine_f32, cosine_f64};

#[unsafe(export_name = "cosine_f32")]
pub extern "C" fn c_cosine_f32(x: f32) -> f32 {
    cosine_f32(x)
}

#[unsafe(export_name = "cosine_f64")]
pub extern "C" fn c_cosine_f64(x: f64) -> f64 {
    cosine_f64(x)
}

#[unsafe(no_mangle)]
pub extern "C" fn libm_cosf(x: f32) -> f32 {
    cosine_f32(x)
}

#[unsafe(no_mangle)]
pub extern "C" fn libm_cos(x: f64) -> f64 {
    cosine_f64(x)
}
