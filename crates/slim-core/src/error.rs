//! Error types for slim-core.
//!
//! Transform operations in `slim-ops` are infallible: their preconditions are
//! documented contracts and a violation panics on slice bounds. The only
//! fallible step is describing caller storage as a view, which is where
//! [`Error`] comes from.
//!
//! # Usage
//!
//! ```rust
//! use slim_core::{Error, ImageView, RgbF};
//!
//! let storage = vec![RgbF::default(); 10];
//! let err = ImageView::new(&storage, 4, 3, 0).unwrap_err();
//! assert!(matches!(err, Error::BufferTooSmall { required: 12, len: 10 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for `Display` and `std::error::Error`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while describing caller-owned storage as a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The storage is shorter than the view addresses.
    ///
    /// `required` is `(height - 1) * (width + hblank) + width` elements.
    #[error("buffer holds {len} pixels but the view addresses {required}")]
    BufferTooSmall {
        /// Pixels the view needs
        required: usize,
        /// Pixels the storage holds
        len: usize,
    },

    /// A rectangle does not lie inside the view it was taken from.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds image bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: usize,
        /// Region Y origin
        ry: usize,
        /// Region width
        rw: usize,
        /// Region height
        rh: usize,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },

    /// Width, height and hblank overflow `usize` when combined.
    #[error("dimensions {width}x{height} with hblank {hblank} overflow the address space")]
    DimensionOverflow {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Requested hblank
        hblank: usize,
    },
}

impl Error {
    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, len: usize) -> Self {
        Self::BufferTooSmall { required, len }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(region: crate::Rect, width: usize, height: usize) -> Self {
        Self::InvalidRegion {
            rx: region.x,
            ry: region.y,
            rw: region.width,
            rh: region.height,
            width,
            height,
        }
    }
}
