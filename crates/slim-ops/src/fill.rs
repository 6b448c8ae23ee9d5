//! Uniform fill.
//!
//! # Example
//!
//! ```rust
//! use slim_core::prelude::*;
//! use slim_ops::fill::fill;
//!
//! let mut storage = vec![RgbF::default(); 2 * 3 + 1];
//! let mut view = ImageViewMut::new(&mut storage, 2, 2, 3).unwrap();
//! fill(&mut view, RgbF::splat(1.0));
//!
//! // padding between rows is untouched
//! assert_eq!(storage[2], RgbF::default());
//! assert_eq!(storage[5], RgbF::splat(1.0));
//! ```

use slim_core::{ImageViewMut, Pixel};
use tracing::trace;

/// Overwrites every pixel of `row` with `colour`.
#[inline]
pub fn fill_row<P: Pixel>(row: &mut [P], colour: P) {
    row.fill(colour);
}

/// Overwrites every content pixel of `dst` with `colour`.
///
/// Padding is not written.
pub fn fill<P: Pixel>(dst: &mut ImageViewMut<'_, P>, colour: P) {
    trace!(width = dst.width(), height = dst.height(), "fill");
    for row in dst.rows_mut() {
        fill_row(row, colour);
    }
}
