//! # slim-core
//!
//! Core types for in-memory pixel-buffer transforms.
//!
//! - [`Sample`] - channel scalar (`f32`, `f64`, [`Extended`], `f16`)
//! - [`Rgb`], [`Rgba`], [`Xyz`], [`Xyza`] - `#[repr(C)]` pixel layouts
//! - [`channel`] - compile-time channel selectors (`R`, `G`, `B`, `A`, `X`, `Y`, `Z`)
//! - [`ImageView`], [`ImageViewMut`] - strided views over caller storage
//! - [`Rect`] - rectangles for crops and sub-views
//!
//! ## Design Philosophy
//!
//! Nothing here allocates. The caller owns every buffer; a view is a
//! borrowed slice plus `width`, `height` and `hblank` (row padding), built
//! right before a call and dropped right after:
//!
//! ```
//! use slim_core::prelude::*;
//!
//! let mut storage = vec![RgbaF::default(); 4 * 3];
//! let mut view = ImageViewMut::new(&mut storage, 4, 3, 0).unwrap();
//! view.set_pixel(1, 2, RgbaF::new(1.0, 0.0, 0.0, 1.0));
//! assert_eq!(storage[2 * 4 + 1].r, 1.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! slim-core (this crate)
//!    ^
//!    |
//!    +-- slim-ops (fill, flip/flop/transpose/rotate, crop, channels, alpha)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for pixel layouts, [`ImageMeta`] and [`Rect`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod image;
pub mod pixel;
pub mod rect;
pub mod sample;

pub use channel::{Channel, ChannelSet, Routing};
pub use error::{Error, Result};
pub use image::{ImageMeta, ImageView, ImageViewMut, Rows, RowsMut};
pub use pixel::*;
pub use rect::Rect;
pub use sample::{Extended, Sample};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use slim_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{A, B, Channel, ChannelSet, G, R, Routing, X, Y, Z};
    pub use crate::error::{Error, Result};
    pub use crate::image::{ImageMeta, ImageView, ImageViewMut};
    pub use crate::pixel::{
        HasAlpha, Pixel, Rgb, RgbD, RgbF, RgbH, RgbLd, Rgba, RgbaD, RgbaF, RgbaH, RgbaLd, Xyz,
        XyzD, XyzF, XyzH, XyzLd, Xyza, XyzaD, XyzaF, XyzaH, XyzaLd,
    };
    pub use crate::rect::Rect;
    pub use crate::sample::{Extended, Sample};
}
