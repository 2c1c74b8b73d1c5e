//! Platform routine selection.
//!
//! Exactly one of the blocks below is compiled in:
//! - `std`: the standard library float methods, lowered to the libm call.
//! - `libm` without `std`: the pure-Rust `libm` crate.
//! - neither: `cos` / `cosf` imported straight from the C math library.

#[cfg(feature = "std")]
mod imp {
    #[inline(always)]
    pub(crate) fn cos(x: f64) -> f64 {
        x.cos()
    }

    #[inline(always)]
    pub(crate) fn cosf(x: f32) -> f32 {
        x.cos()
    }
}

#[cfg(all(feature = "libm", not(feature = "std")))]
mod imp {
    #[inline(always)]
    pub(crate) fn cos(x: f64) -> f64 {
        libm::cos(x)
    }

    #[inline(always)]
    pub(crate) fn cosf(x: f32) -> f32 {
        libm::cosf(x)
    }
}

#[cfg(not(any(feature = "std", feature = "libm")))]
mod imp {
    #[cfg_attr(unix, link(name = "m"))]
    unsafe extern "C" {
        #[link_name = "cos"]
        safe fn c_cos(x: f64) -> f64;
        #[link_name = "cosf"]
        safe fn c_cosf(x: f32) -> f32;
    }

    #[inline(always)]
    pub(crate) fn cos(x: f64) -> f64 {
        c_cos(x)
    }

    #[inline(always)]
    pub(crate) fn cosf(x: f32) -> f32 {
        c_cosf(x)
    }
}

pub(crate) use imp::{cos, cosf};
