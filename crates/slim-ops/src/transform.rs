//! Geometric transforms and crop.
//!
//! # Operations
//!
//! - [`flop`] / [`flop_row`] - Horizontal mirror
//! - [`flip`] - Vertical mirror (row copies)
//! - [`transpose`] - Swap axes
//! - [`rotate_90`], [`rotate_180`], [`rotate_270`] - Clockwise rotations
//! - [`crop`] - Extract a rectangle
//!
//! In-place variants exist for the transforms that keep the image shape:
//! [`flop_in_place`], [`flip_in_place`], [`rotate_180_in_place`].
//!
//! # Rotation
//!
//! Rotations are one pass each, writing every destination pixel from the
//! source pixel the rotation maps onto it:
//!
//! | Op           | Output size | `dst[x, y]` reads            |
//! |--------------|-------------|------------------------------|
//! | `transpose`  | H x W       | `src[y, x]`                  |
//! | `rotate_90`  | H x W       | `src[y, H - 1 - x]`          |
//! | `rotate_180` | W x H       | `src[W - 1 - x, H - 1 - y]`  |
//! | `rotate_270` | H x W       | `src[W - 1 - y, x]`          |
//!
//! # Example
//!
//! ```rust
//! use slim_core::prelude::*;
//! use slim_ops::transform::rotate_90;
//!
//! // 2x1 -> 1x2
//! let src = [RgbF::splat(1.0), RgbF::splat(2.0)];
//! let src = ImageView::new(&src, 2, 1, 0).unwrap();
//! let mut out = [RgbF::default(); 2];
//! let mut dst = ImageViewMut::new(&mut out, 2, 1, 0).unwrap();
//!
//! rotate_90(&mut dst, &src);
//! assert_eq!(dst.dimensions(), (1, 2));
//! assert_eq!(dst.pixel(0, 0), RgbF::splat(1.0));
//! assert_eq!(dst.pixel(0, 1), RgbF::splat(2.0));
//! ```

use slim_core::{ImageView, ImageViewMut, Pixel, Rect};
use tracing::trace;

/// Mirrors one row: `dst[i] = src[len - 1 - i]` for every `i`.
///
/// Only the first `src.len()` pixels of `dst` are written.
#[inline]
pub fn flop_row<P: Pixel>(dst: &mut [P], src: &[P]) {
    for (d, s) in dst[..src.len()].iter_mut().zip(src.iter().rev()) {
        *d = *s;
    }
}

/// Mirrors `src` left-right into `dst`.
///
/// `dst` takes the dimensions of `src`.
pub fn flop<P: Pixel>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>) {
    trace!(width = src.width(), height = src.height(), "flop");
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows()) {
        flop_row(d, s);
    }
}

/// Mirrors `src` top-bottom into `dst`.
///
/// Rows are copied whole; pixels within a row keep their order.
/// `dst` takes the dimensions of `src`.
pub fn flip<P: Pixel>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>) {
    trace!(width = src.width(), height = src.height(), "flip");
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows().rev()) {
        d.copy_from_slice(s);
    }
}

/// Transposes `src` into `dst`: `dst[x, y] = src[y, x]`.
///
/// `dst` becomes `src.height()` wide and `src.width()` tall.
pub fn transpose<P: Pixel>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>) {
    trace!(width = src.width(), height = src.height(), "transpose");
    remap(dst, src, src.height(), src.width(), |x, y| (y, x));
}

/// Rotates `src` 90 degrees clockwise into `dst`.
///
/// `dst` becomes `src.height()` wide and `src.width()` tall.
pub fn rotate_90<P: Pixel>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>) {
    trace!(width = src.width(), height = src.height(), "rotate_90");
    let last_row = src.height().wrapping_sub(1);
    remap(dst, src, src.height(), src.width(), |x, y| (y, last_row - x));
}

/// Rotates `src` 180 degrees into `dst`.
///
/// `dst` takes the dimensions of `src`.
pub fn rotate_180<P: Pixel>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>) {
    trace!(width = src.width(), height = src.height(), "rotate_180");
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows().rev()) {
        flop_row(d, s);
    }
}

/// Rotates `src` 270 degrees clockwise (90 counter-clockwise) into `dst`.
///
/// `dst` becomes `src.height()` wide and `src.width()` tall.
pub fn rotate_270<P: Pixel>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>) {
    trace!(width = src.width(), height = src.height(), "rotate_270");
    let last_col = src.width().wrapping_sub(1);
    remap(dst, src, src.height(), src.width(), |x, y| (last_col - y, x));
}

/// Resizes `dst` to `width` x `height` and gathers each of its pixels from
/// the source coordinate `map(x, y)`.
#[inline]
fn remap<P, F>(
    dst: &mut ImageViewMut<'_, P>,
    src: &ImageView<'_, P>,
    width: usize,
    height: usize,
    map: F,
) where
    P: Pixel,
    F: Fn(usize, usize) -> (usize, usize),
{
    dst.set_dimensions(width, height);
    for (y, row) in dst.rows_mut().enumerate() {
        for (x, d) in row.iter_mut().enumerate() {
            let (sx, sy) = map(x, y);
            *d = src.pixel(sx, sy);
        }
    }
}

/// Mirrors `view` left-right in place.
pub fn flop_in_place<P: Pixel>(view: &mut ImageViewMut<'_, P>) {
    trace!(width = view.width(), height = view.height(), "flop_in_place");
    for row in view.rows_mut() {
        row.reverse();
    }
}

/// Mirrors `view` top-bottom in place by swapping row pairs.
pub fn flip_in_place<P: Pixel>(view: &mut ImageViewMut<'_, P>) {
    trace!(width = view.width(), height = view.height(), "flip_in_place");
    let h = view.height();
    for y in 0..h / 2 {
        let (top, bottom) = view.row_pair_mut(y, h - 1 - y);
        top.swap_with_slice(bottom);
    }
}

/// Rotates `view` 180 degrees in place.
pub fn rotate_180_in_place<P: Pixel>(view: &mut ImageViewMut<'_, P>) {
    trace!(width = view.width(), height = view.height(), "rotate_180_in_place");
    let h = view.height();
    for y in 0..h / 2 {
        let (top, bottom) = view.row_pair_mut(y, h - 1 - y);
        top.swap_with_slice(bottom);
        top.reverse();
        bottom.reverse();
    }
    if h % 2 == 1 {
        view.row_mut(h / 2).reverse();
    }
}

/// Copies the `rect` region of `src` into `dst`.
///
/// `dst` becomes `rect.width` x `rect.height`. The rectangle is not checked
/// against the source dimensions outside debug builds: a rectangle that
/// spills into padding reads the padding, one that spills past the storage
/// panics.
///
/// # Example
///
/// ```rust
/// use slim_core::prelude::*;
/// use slim_ops::transform::crop;
///
/// let src: Vec<RgbF> = (0..20).map(|i| RgbF::splat(i as f32)).collect();
/// let src = ImageView::new(&src, 5, 4, 0).unwrap();
/// let mut out = vec![RgbF::default(); 6];
/// let mut dst = ImageViewMut::new(&mut out, 3, 2, 0).unwrap();
///
/// crop(&mut dst, &src, Rect::new(2, 1, 3, 2));
/// assert_eq!(dst.pixel(0, 0), src.pixel(2, 1));
/// assert_eq!(dst.pixel(2, 1), src.pixel(4, 2));
/// ```
pub fn crop<P: Pixel>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>, rect: Rect) {
    trace!(
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        "crop"
    );
    debug_assert!(
        rect.fits_within(src.width(), src.height()),
        "crop {:?} exceeds source {}x{}",
        rect,
        src.width(),
        src.height()
    );
    dst.set_dimensions(rect.width, rect.height);
    if rect.width == 0 {
        return;
    }
    let meta = src.meta();
    let data = src.data();
    for (i, d) in dst.rows_mut().enumerate() {
        let start = meta.offset(rect.x, rect.y + i);
        d.copy_from_slice(&data[start..start + rect.width]);
    }
}
