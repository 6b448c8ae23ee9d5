//! Rectangles in pixel coordinates.
//!
//! Origin (0, 0) is the top-left pixel; X grows right, Y grows down.
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │   Rect   │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! Used by [`crate::ImageView::subview`] and by crop in `slim-ops`.

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// # Example
///
/// ```rust
/// use slim_core::Rect;
///
/// let rect = Rect::new(2, 1, 3, 2);
/// assert!(rect.fits_within(5, 4));
/// assert!(!rect.fits_within(4, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: usize,
    /// Y coordinate of the top edge (inclusive)
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the rectangle lies inside a `width` x `height`
    /// image anchored at the origin.
    ///
    /// Overflowing edges never fit.
    #[inline]
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        matches!(self.x.checked_add(self.width), Some(r) if r <= width)
            && matches!(self.y.checked_add(self.height), Some(b) if b <= height)
    }
}
