//! # slim-ops
//!
//! Pixel-buffer transforms over [`slim_core`] views.
//!
//! Every operation reads one source view and writes one destination view in
//! a single pass. Nothing is allocated and nothing is retained between
//! calls; the caller composes operations one call at a time.
//!
//! # Modules
//!
//! - [`fill`] - Uniform fill
//! - [`transform`] - Flop, flip, transpose, rotations and crop
//! - [`channels`] - Channel swaps and selective channel sets
//! - [`alpha`] - Premultiplication and unpremultiplication
//!
//! # Contracts
//!
//! Operations do not validate their inputs. The destination storage must
//! hold the output geometry with the destination's own `hblank`; a crop
//! rectangle must lie inside its source. Violations panic on slice bounds
//! (and on `debug_assert!` in debug builds); they are never clamped.
//!
//! Row variants (`*_row`) work on plain slices for callers streaming one row
//! at a time. The destination row must be at least as long as the source
//! row; only the first `src.len()` pixels are written.
//!
//! # Example
//!
//! ```rust
//! use slim_core::prelude::*;
//! use slim_ops::{alpha::premultiply, transform::rotate_90};
//!
//! let src: Vec<RgbaF> = (0..6).map(|i| RgbaF::new(i as f32, 0.0, 0.0, 0.5)).collect();
//! let src = ImageView::new(&src, 3, 2, 0).unwrap();
//!
//! let mut rotated = vec![RgbaF::default(); 6];
//! let mut rotated = ImageViewMut::new(&mut rotated, 3, 2, 0).unwrap();
//! rotate_90(&mut rotated, &src);
//! assert_eq!(rotated.dimensions(), (2, 3));
//!
//! let mut premul = vec![RgbaF::default(); 6];
//! let mut premul = ImageViewMut::new(&mut premul, 2, 3, 0).unwrap();
//! premultiply(&mut premul, &rotated.as_view(), (R, G, B));
//! assert_eq!(premul.pixel(1, 2).r, 1.0); // source (2, 0) scaled by 0.5
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alpha;
pub mod channels;
pub mod fill;
pub mod transform;

pub use alpha::{premultiply, unpremultiply, unpremultiply_zero};
pub use channels::{set_channels, swap_channels};
pub use fill::fill;
pub use transform::{crop, flip, flop, rotate_180, rotate_270, rotate_90, transpose};
