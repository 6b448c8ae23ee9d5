//! Pixel layouts.
//!
//! Four layouts are provided, each generic over its [`Sample`] type:
//!
//! - [`Rgb`] - `{ r, g, b }` colour
//! - [`Rgba`] - `{ r, g, b, a }` colour with alpha
//! - [`Xyz`] - `{ x, y, z }` coordinates (or CIE XYZ)
//! - [`Xyza`] - `{ x, y, z, a }` coordinates with alpha
//!
//! # Memory Layout
//!
//! All layouts are `#[repr(C)]` with fields in the order listed above, so a
//! slice of pixels can be shared with foreign or memory-mapped buffers that
//! expect exactly that layout. There is no padding for `f32`/`f64`.
//!
//! # Aliases
//!
//! Every layout has one alias per precision, suffixed `F` (f32), `D` (f64),
//! `Ld` ([`Extended`](crate::Extended)) and `H` ([`half::f16`]):
//!
//! ```
//! use slim_core::{Pixel, RgbaF, XyzD};
//!
//! let px = RgbaF::new(1.0, 0.5, 0.25, 1.0);
//! assert_eq!(px.to_array(), [1.0, 0.5, 0.25, 1.0]);
//! assert_eq!(XyzD::CHANNELS, 3);
//! ```

use crate::sample::{Extended, Sample};
use half::f16;
use std::fmt;

/// A pixel layout: a fixed-size tuple of samples.
///
/// Implementors are plain `Copy` values with no identity.
pub trait Pixel: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Sample type of every channel.
    type Sample: Sample;

    /// Number of channels.
    const CHANNELS: usize;
}

/// A pixel layout whose last channel is alpha (`a`).
pub trait HasAlpha: Pixel {
    /// Returns the alpha channel.
    fn alpha(&self) -> Self::Sample;

    /// Returns a mutable reference to the alpha channel.
    fn alpha_mut(&mut self) -> &mut Self::Sample;
}

macro_rules! pixel_layout {
    (
        $(#[$doc:meta])*
        $name:ident, $label:literal, $n:literal { $($field:ident => $fdoc:literal),+ }
    ) => {
        $(#[$doc])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T> {
            $(
                #[doc = $fdoc]
                pub $field: T,
            )+
        }

        impl<T: Sample> $name<T> {
            /// Creates a pixel from its channels, in field order.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a pixel with every channel set to `v`.
            #[inline]
            pub fn splat(v: T) -> Self {
                Self { $($field: v),+ }
            }

            /// Returns the channels as an array, in field order.
            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Creates a pixel from an array, in field order.
            #[inline]
            pub fn from_array(arr: [T; $n]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }
        }

        impl<T: Sample> Pixel for $name<T> {
            type Sample = T;
            const CHANNELS: usize = $n;
        }

        impl<T: Sample> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let [first, rest @ ..] = self.to_array();
                write!(f, "{}({}", $label, first)?;
                for v in rest {
                    write!(f, ", {}", v)?;
                }
                f.write_str(")")
            }
        }
    };
}

pixel_layout! {
    /// RGB colour pixel.
    Rgb, "RGB", 3 { r => "Red channel.", g => "Green channel.", b => "Blue channel." }
}

pixel_layout! {
    /// RGBA colour pixel.
    ///
    /// Whether the colour channels are premultiplied is up to the caller;
    /// `slim-ops` converts between the two encodings.
    Rgba, "RGBA", 4 {
        r => "Red channel.",
        g => "Green channel.",
        b => "Blue channel.",
        a => "Alpha channel."
    }
}

pixel_layout! {
    /// Three-component coordinate pixel.
    Xyz, "XYZ", 3 { x => "X component.", y => "Y component.", z => "Z component." }
}

pixel_layout! {
    /// Three-component coordinate pixel with alpha.
    Xyza, "XYZA", 4 {
        x => "X component.",
        y => "Y component.",
        z => "Z component.",
        a => "Alpha channel."
    }
}

impl<T: Sample> HasAlpha for Rgba<T> {
    #[inline]
    fn alpha(&self) -> T {
        self.a
    }

    #[inline]
    fn alpha_mut(&mut self) -> &mut T {
        &mut self.a
    }
}

impl<T: Sample> HasAlpha for Xyza<T> {
    #[inline]
    fn alpha(&self) -> T {
        self.a
    }

    #[inline]
    fn alpha_mut(&mut self) -> &mut T {
        &mut self.a
    }
}

/// Single-precision RGB.
pub type RgbF = Rgb<f32>;
/// Double-precision RGB.
pub type RgbD = Rgb<f64>;
/// Extended-precision RGB.
pub type RgbLd = Rgb<Extended>;
/// Half-precision RGB.
pub type RgbH = Rgb<f16>;

/// Single-precision RGBA.
pub type RgbaF = Rgba<f32>;
/// Double-precision RGBA.
pub type RgbaD = Rgba<f64>;
/// Extended-precision RGBA.
pub type RgbaLd = Rgba<Extended>;
/// Half-precision RGBA.
pub type RgbaH = Rgba<f16>;

/// Single-precision XYZ.
pub type XyzF = Xyz<f32>;
/// Double-precision XYZ.
pub type XyzD = Xyz<f64>;
/// Extended-precision XYZ.
pub type XyzLd = Xyz<Extended>;
/// Half-precision XYZ.
pub type XyzH = Xyz<f16>;

/// Single-precision XYZA.
pub type XyzaF = Xyza<f32>;
/// Double-precision XYZA.
pub type XyzaD = Xyza<f64>;
/// Extended-precision XYZA.
pub type XyzaLd = Xyza<Extended>;
/// Half-precision XYZA.
pub type XyzaH = Xyza<f16>;
