//! Strided views over caller-owned pixel storage.
//!
//! A view never owns memory. It pairs a borrowed slice with an
//! [`ImageMeta`] describing how the slice is read as an image:
//!
//! ```text
//!  ◄──────── stride = width + hblank ────────►
//!  ┌──────────────────────────┬──────────────┐
//!  │ row 0 (width pixels)     │ hblank       │
//!  ├──────────────────────────┼──────────────┤
//!  │ row 1                    │ hblank       │
//!  ├──────────────────────────┼──────────────┘
//!  │ row height-1             │  (optional)
//!  └──────────────────────────┘
//! ```
//!
//! Pixel `(x, y)` lives at index `y * (width + hblank) + x`. Padding is never
//! read as content nor written. Choosing `hblank` as the enclosing row length
//! minus a sub-region width addresses a rectangle of a larger allocation
//! without copying; [`ImageView::subview`] does exactly that.
//!
//! # Views
//!
//! - [`ImageView`] - shared borrow, used as an operation source
//! - [`ImageViewMut`] - exclusive borrow, used as an operation destination;
//!   operations may redefine its `width`/`height` but never its `hblank`
//!
//! Because the source is borrowed shared and the destination exclusively,
//! a two-view operation can never alias its input and output.
//!
//! # Example
//!
//! ```rust
//! use slim_core::{ImageView, RgbF};
//!
//! // 3x2 image with one pixel of padding per row
//! let storage: Vec<RgbF> = (0..8).map(|i| RgbF::splat(i as f32)).collect();
//! let view = ImageView::new(&storage, 3, 2, 1).unwrap();
//!
//! assert_eq!(view.stride(), 4);
//! assert_eq!(view.pixel(0, 1), RgbF::splat(4.0));
//! assert_eq!(view.rows().count(), 2);
//! ```

use crate::{Error, Pixel, Rect, Result};
use std::fmt;
use std::iter::FusedIterator;

/// Geometry of a strided image: dimensions plus per-row padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageMeta {
    /// Active pixels per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Padding pixels after each row, excluded from content
    pub hblank: usize,
}

impl ImageMeta {
    /// Creates image geometry.
    #[inline]
    pub const fn new(width: usize, height: usize, hblank: usize) -> Self {
        Self {
            width,
            height,
            hblank,
        }
    }

    /// Distance in pixels between the starts of consecutive rows.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.width + self.hblank
    }

    /// Index of pixel `(x, y)` relative to the first pixel.
    #[inline]
    pub const fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride() + x
    }

    /// Number of pixels the storage must hold.
    ///
    /// The last row needs no trailing padding, so this is
    /// `(height - 1) * stride + width`, or 0 for an empty image.
    /// Returns `None` on overflow.
    pub fn required_len(&self) -> Option<usize> {
        if self.width == 0 || self.height == 0 {
            return Some(0);
        }
        self.width
            .checked_add(self.hblank)?
            .checked_mul(self.height - 1)?
            .checked_add(self.width)
    }

    /// Checks that `len` pixels of storage cover this geometry.
    pub fn validate(&self, len: usize) -> Result<()> {
        let required = self.required_len().ok_or(Error::DimensionOverflow {
            width: self.width,
            height: self.height,
            hblank: self.hblank,
        })?;
        if required > len {
            return Err(Error::buffer_too_small(required, len));
        }
        Ok(())
    }

    /// Storage range of row `y`. Zero-width rows occupy no storage, matching
    /// [`required_len`](Self::required_len).
    #[inline]
    fn row_range(&self, y: usize) -> std::ops::Range<usize> {
        if self.width == 0 {
            return 0..0;
        }
        let start = y * self.stride();
        start..start + self.width
    }

    /// Geometry of a sub-rectangle, sharing this stride.
    fn sub(&self, rect: Rect) -> Result<(usize, Self)> {
        if !rect.fits_within(self.width, self.height) {
            return Err(Error::invalid_region(rect, self.width, self.height));
        }
        let meta = Self::new(rect.width, rect.height, self.stride() - rect.width);
        let start = if rect.is_empty() {
            0
        } else {
            self.offset(rect.x, rect.y)
        };
        Ok((start, meta))
    }
}

/// Immutable strided view into caller storage.
pub struct ImageView<'a, P: Pixel> {
    meta: ImageMeta,
    data: &'a [P],
}

impl<P: Pixel> Clone for ImageView<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Pixel> Copy for ImageView<'_, P> {}

impl<'a, P: Pixel> ImageView<'a, P> {
    /// Describes `data` as a `width` x `height` image with `hblank` padding
    /// pixels after each row.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `data` is shorter than the geometry
    /// addresses, [`Error::DimensionOverflow`] if the geometry overflows.
    pub fn new(data: &'a [P], width: usize, height: usize, hblank: usize) -> Result<Self> {
        Self::from_meta(data, ImageMeta::new(width, height, hblank))
    }

    /// Same as [`new`](Self::new) with prebuilt geometry.
    pub fn from_meta(data: &'a [P], meta: ImageMeta) -> Result<Self> {
        meta.validate(data.len())?;
        Ok(Self { meta, data })
    }

    /// Returns the geometry.
    #[inline]
    pub fn meta(&self) -> ImageMeta {
        self.meta
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.meta.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.meta.height
    }

    /// Returns the padding after each row.
    #[inline]
    pub fn hblank(&self) -> usize {
        self.meta.hblank
    }

    /// Returns the row stride in pixels.
    #[inline]
    pub fn stride(&self) -> usize {
        self.meta.stride()
    }

    /// Returns (width, height).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.meta.width, self.meta.height)
    }

    /// Returns the underlying storage, starting at the first pixel.
    #[inline]
    pub fn data(&self) -> &'a [P] {
        self.data
    }

    /// Returns the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> P {
        debug_assert!(x < self.meta.width && y < self.meta.height, "pixel out of bounds");
        self.data[self.meta.offset(x, y)]
    }

    /// Returns row `y` without its padding.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [P] {
        debug_assert!(y < self.meta.height, "row out of bounds");
        &self.data[self.meta.row_range(y)]
    }

    /// Iterates over rows, top to bottom, without padding.
    #[inline]
    pub fn rows(&self) -> Rows<'a, P> {
        Rows {
            view: *self,
            front: 0,
            back: self.meta.height,
        }
    }

    /// Creates a view of a rectangle of this view, sharing its storage.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRegion`] if `rect` does not fit inside this view.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slim_core::{ImageView, Rect, XyzF};
    ///
    /// let storage: Vec<XyzF> = (0..20).map(|i| XyzF::splat(i as f32)).collect();
    /// let full = ImageView::new(&storage, 5, 4, 0).unwrap();
    /// let sub = full.subview(Rect::new(2, 1, 3, 2)).unwrap();
    ///
    /// assert_eq!(sub.hblank(), 2);
    /// assert_eq!(sub.pixel(0, 0), full.pixel(2, 1));
    /// assert_eq!(sub.pixel(2, 1), full.pixel(4, 2));
    /// ```
    pub fn subview(&self, rect: Rect) -> Result<ImageView<'a, P>> {
        let (start, meta) = self.meta.sub(rect)?;
        Ok(ImageView {
            meta,
            data: &self.data[start..],
        })
    }
}

impl<P: Pixel> fmt::Debug for ImageView<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageView")
            .field("meta", &self.meta)
            .field("pixel", &std::any::type_name::<P>())
            .finish()
    }
}

/// Mutable strided view into caller storage.
///
/// Operations writing into this view may redefine its width and height to
/// match their output via [`set_dimensions`](Self::set_dimensions); the
/// caller must have sized the storage for that output and this view's own
/// `hblank`.
pub struct ImageViewMut<'a, P: Pixel> {
    meta: ImageMeta,
    data: &'a mut [P],
}

impl<'a, P: Pixel> ImageViewMut<'a, P> {
    /// Describes `data` as a `width` x `height` image with `hblank` padding
    /// pixels after each row.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `data` is shorter than the geometry
    /// addresses, [`Error::DimensionOverflow`] if the geometry overflows.
    pub fn new(data: &'a mut [P], width: usize, height: usize, hblank: usize) -> Result<Self> {
        Self::from_meta(data, ImageMeta::new(width, height, hblank))
    }

    /// Same as [`new`](Self::new) with prebuilt geometry.
    pub fn from_meta(data: &'a mut [P], meta: ImageMeta) -> Result<Self> {
        meta.validate(data.len())?;
        Ok(Self { meta, data })
    }

    /// Returns the geometry.
    #[inline]
    pub fn meta(&self) -> ImageMeta {
        self.meta
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.meta.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.meta.height
    }

    /// Returns the padding after each row.
    #[inline]
    pub fn hblank(&self) -> usize {
        self.meta.hblank
    }

    /// Returns the row stride in pixels.
    #[inline]
    pub fn stride(&self) -> usize {
        self.meta.stride()
    }

    /// Returns (width, height).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.meta.width, self.meta.height)
    }

    /// Redefines width and height, keeping `hblank`.
    ///
    /// No check is made that the storage covers the new geometry; writing
    /// past it panics.
    #[inline]
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.meta.width = width;
        self.meta.height = height;
        debug_assert!(
            self.meta.validate(self.data.len()).is_ok(),
            "destination storage too small for {}x{} (hblank {})",
            width,
            height,
            self.meta.hblank
        );
    }

    /// Reborrows as an immutable view.
    #[inline]
    pub fn as_view(&self) -> ImageView<'_, P> {
        ImageView {
            meta: self.meta,
            data: &*self.data,
        }
    }

    /// Reborrows mutably for a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> ImageViewMut<'_, P> {
        ImageViewMut {
            meta: self.meta,
            data: &mut *self.data,
        }
    }

    /// Returns the underlying storage, starting at the first pixel.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [P] {
        &mut *self.data
    }

    /// Returns the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> P {
        debug_assert!(x < self.meta.width && y < self.meta.height, "pixel out of bounds");
        self.data[self.meta.offset(x, y)]
    }

    /// Sets the pixel at (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: P) {
        debug_assert!(x < self.meta.width && y < self.meta.height, "pixel out of bounds");
        self.data[self.meta.offset(x, y)] = px;
    }

    /// Returns row `y` without its padding.
    #[inline]
    pub fn row(&self, y: usize) -> &[P] {
        debug_assert!(y < self.meta.height, "row out of bounds");
        &self.data[self.meta.row_range(y)]
    }

    /// Returns row `y` mutably, without its padding.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [P] {
        debug_assert!(y < self.meta.height, "row out of bounds");
        &mut self.data[self.meta.row_range(y)]
    }

    /// Returns two distinct rows mutably, `a` first.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn row_pair_mut(&mut self, a: usize, b: usize) -> (&mut [P], &mut [P]) {
        assert_ne!(a, b, "row_pair_mut needs two distinct rows");
        let (ra, rb) = (self.meta.row_range(a), self.meta.row_range(b));
        if a < b {
            let (head, tail) = self.data.split_at_mut(rb.start);
            (&mut head[ra], &mut tail[..self.meta.width])
        } else {
            let (head, tail) = self.data.split_at_mut(ra.start);
            (&mut tail[..self.meta.width], &mut head[rb])
        }
    }

    /// Iterates over rows mutably, top to bottom, without padding.
    #[inline]
    pub fn rows_mut(&mut self) -> RowsMut<'_, P> {
        RowsMut {
            rest: &mut self.data[..],
            width: self.meta.width,
            stride: self.meta.stride(),
            remaining: self.meta.height,
        }
    }

    /// Creates a mutable view of a rectangle of this view.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRegion`] if `rect` does not fit inside this view.
    pub fn subview_mut(&mut self, rect: Rect) -> Result<ImageViewMut<'_, P>> {
        let (start, meta) = self.meta.sub(rect)?;
        Ok(ImageViewMut {
            meta,
            data: &mut self.data[start..],
        })
    }
}

impl<P: Pixel> fmt::Debug for ImageViewMut<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageViewMut")
            .field("meta", &self.meta)
            .field("pixel", &std::any::type_name::<P>())
            .finish()
    }
}

/// Iterator over the rows of an [`ImageView`].
#[derive(Debug, Clone)]
pub struct Rows<'a, P: Pixel> {
    view: ImageView<'a, P>,
    front: usize,
    back: usize,
}

impl<'a, P: Pixel> Iterator for Rows<'a, P> {
    type Item = &'a [P];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let row = self.view.row(self.front);
        self.front += 1;
        Some(row)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<P: Pixel> DoubleEndedIterator for Rows<'_, P> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.view.row(self.back))
    }
}

impl<P: Pixel> ExactSizeIterator for Rows<'_, P> {}
impl<P: Pixel> FusedIterator for Rows<'_, P> {}

/// Iterator over the rows of an [`ImageViewMut`].
#[derive(Debug)]
pub struct RowsMut<'a, P: Pixel> {
    rest: &'a mut [P],
    width: usize,
    stride: usize,
    remaining: usize,
}

impl<'a, P: Pixel> Iterator for RowsMut<'a, P> {
    type Item = &'a mut [P];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let rest = std::mem::take(&mut self.rest);
        // the last row may have no padding behind it, and zero-width rows
        // have no storage at all
        if self.remaining == 0 || self.width == 0 {
            return Some(&mut rest[..self.width]);
        }
        let (head, tail) = rest.split_at_mut(self.stride);
        self.rest = tail;
        Some(&mut head[..self.width])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P: Pixel> ExactSizeIterator for RowsMut<'_, P> {}
impl<P: Pixel> FusedIterator for RowsMut<'_, P> {}
