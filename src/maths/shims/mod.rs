//! Forwarding shims over the platform math library.
//!
//! Nothing here computes a result itself. Each entry point hands its argument
//! to the routine picked in `backend`, so accuracy and speed are whatever the
//! platform libm provides.

mod backend;
mod cos;
#[cfg(feature = "ffi")]
pub mod ffi;

pub use cos::{Cosine, cosine_f32, cosine_f64};
