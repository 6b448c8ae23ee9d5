//! Channel sample types.
//!
//! A [`Sample`] is the scalar stored in every channel of a pixel. Three
//! precisions are supported:
//!
//! - `f32` - single precision
//! - `f64` - double precision
//! - [`Extended`] - extended precision (see below)
//!
//! plus [`half::f16`], the usual storage type for half-float VFX plates.
//!
//! # Extended precision
//!
//! Stable Rust has no 80-bit or 128-bit float, so [`Extended`] names the
//! widest stable float, `f64`. Layouts declared over `Extended` keep their
//! own aliases (`RgbaLd`, ...) so call sites read the same as a build with a
//! wider type would.
//!
//! # Zero test
//!
//! [`Sample::is_zero`] is exact equality with [`Sample::ZERO`]. No tolerance
//! is applied: an alpha of `1e-30` is nonzero and will be divided by.

use half::f16;
use std::fmt;
use std::ops::{Div, Mul};

/// Extended-precision sample type.
pub type Extended = f64;

/// Trait for channel sample types.
///
/// # Example
///
/// ```
/// use slim_core::Sample;
///
/// assert!(0.0f32.is_zero());
/// assert!((-0.0f64).is_zero());
/// assert!(!f32::MIN_POSITIVE.is_zero());
/// ```
pub trait Sample:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Returns `true` when the value compares equal to zero.
    ///
    /// Both signed zeros count as zero.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Sample for f32 {
    const ZERO: Self = 0.0;
}

impl Sample for f64 {
    const ZERO: Self = 0.0;
}

impl Sample for f16 {
    const ZERO: Self = f16::ZERO;
}
