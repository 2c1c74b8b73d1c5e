#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod maths;

pub use maths::shims;
pub use maths::shims::{Cosine, cosine_f32, cosine_f64};
