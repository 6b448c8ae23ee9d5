//! Alpha premultiplication and unpremultiplication.
//!
//! The channels to scale are named with a [`ChannelSet`], typically
//! `(R, G, B)` or `(X, Y, Z)`; the alpha channel is the layout's `a`.
//!
//! # Zero alpha
//!
//! Unpremultiplying divides by alpha only when alpha is not exactly zero
//! ([`Sample::is_zero`]). For zero alpha two policies exist:
//!
//! - [`unpremultiply`] - pass-through: the copied premultiplied values stay
//! - [`unpremultiply_zero`] - the named channels take a fallback colour
//!
//! No clamping is applied; alphas outside `[0, 1]` divide as floats do.
//!
//! # Example
//!
//! ```rust
//! use slim_core::prelude::*;
//! use slim_ops::alpha::{premultiply, unpremultiply_zero};
//!
//! let straight = [RgbaF::new(1.0, 0.5, 0.25, 0.5), RgbaF::new(1.0, 1.0, 1.0, 0.0)];
//! let straight = ImageView::new(&straight, 2, 1, 0).unwrap();
//!
//! let mut premul = [RgbaF::default(); 2];
//! let mut premul = ImageViewMut::new(&mut premul, 2, 1, 0).unwrap();
//! premultiply(&mut premul, &straight, (R, G, B));
//! assert_eq!(premul.pixel(0, 0), RgbaF::new(0.5, 0.25, 0.125, 0.5));
//!
//! let mut back = [RgbaF::default(); 2];
//! let mut back = ImageViewMut::new(&mut back, 2, 1, 0).unwrap();
//! let magenta = RgbaF::new(1.0, 0.0, 1.0, 0.0);
//! unpremultiply_zero(&mut back, &premul.as_view(), &magenta, (R, G, B));
//! assert_eq!(back.pixel(0, 0), RgbaF::new(1.0, 0.5, 0.25, 0.5));
//! assert_eq!(back.pixel(1, 0), RgbaF::new(1.0, 0.0, 1.0, 0.0));
//! ```

use slim_core::{ChannelSet, HasAlpha, ImageView, ImageViewMut, Sample};
use tracing::trace;

#[inline(always)]
fn premultiply_px<P: HasAlpha, S: ChannelSet<P>>(dst: &mut P, src: &P, channels: S) {
    let a = src.alpha();
    let mut scaled = *src;
    channels.for_each(&mut scaled, |v: &mut P::Sample| *v = *v * a);
    channels.copy_from(dst, &scaled);
    *dst.alpha_mut() = a;
}

#[inline(always)]
fn unpremultiply_px<P: HasAlpha, S: ChannelSet<P>>(
    dst: &mut P,
    src: &P,
    zero: Option<&P>,
    channels: S,
) {
    let a = src.alpha();
    *dst = *src;
    if !a.is_zero() {
        channels.for_each(dst, |v: &mut P::Sample| *v = *v / a);
    } else if let Some(zero) = zero {
        channels.copy_from(dst, zero);
    }
}

/// Premultiplies one row: each named channel becomes `src * alpha` and
/// alpha is copied.
///
/// Destination channels that are neither named nor alpha are not written.
#[inline]
pub fn premultiply_row<P, S>(dst: &mut [P], src: &[P], channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    for (d, s) in dst[..src.len()].iter_mut().zip(src) {
        premultiply_px(d, s, channels);
    }
}

/// Premultiplies every pixel of `src` into `dst`.
///
/// `dst` takes the dimensions of `src`. See [`premultiply_row`].
pub fn premultiply<P, S>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>, channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    trace!(
        width = src.width(),
        height = src.height(),
        channels = S::LEN,
        "premultiply"
    );
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows()) {
        premultiply_row(d, s, channels);
    }
}

/// Unpremultiplies one row, leaving zero-alpha pixels as copied.
///
/// Each source pixel is copied whole; the named channels are then divided
/// by alpha when alpha is nonzero.
#[inline]
pub fn unpremultiply_row<P, S>(dst: &mut [P], src: &[P], channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    for (d, s) in dst[..src.len()].iter_mut().zip(src) {
        unpremultiply_px(d, s, None, channels);
    }
}

/// Unpremultiplies every pixel of `src` into `dst`, leaving zero-alpha
/// pixels as copied.
///
/// `dst` takes the dimensions of `src`. See [`unpremultiply_row`].
pub fn unpremultiply<P, S>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>, channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    trace!(
        width = src.width(),
        height = src.height(),
        channels = S::LEN,
        "unpremultiply"
    );
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows()) {
        unpremultiply_row(d, s, channels);
    }
}

/// Unpremultiplies one row, giving zero-alpha pixels the named channels of
/// `zero`.
#[inline]
pub fn unpremultiply_zero_row<P, S>(dst: &mut [P], src: &[P], zero: &P, channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    for (d, s) in dst[..src.len()].iter_mut().zip(src) {
        unpremultiply_px(d, s, Some(zero), channels);
    }
}

/// Unpremultiplies every pixel of `src` into `dst`, giving zero-alpha pixels
/// the named channels of `zero`.
///
/// `dst` takes the dimensions of `src`. See [`unpremultiply_zero_row`].
pub fn unpremultiply_zero<P, S>(
    dst: &mut ImageViewMut<'_, P>,
    src: &ImageView<'_, P>,
    zero: &P,
    channels: S,
) where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    trace!(
        width = src.width(),
        height = src.height(),
        channels = S::LEN,
        "unpremultiply_zero"
    );
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows()) {
        unpremultiply_zero_row(d, s, zero, channels);
    }
}

/// Premultiplies `view` in place.
pub fn premultiply_in_place<P, S>(view: &mut ImageViewMut<'_, P>, channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    trace!(width = view.width(), height = view.height(), "premultiply_in_place");
    for row in view.rows_mut() {
        for px in row {
            let src = *px;
            premultiply_px(px, &src, channels);
        }
    }
}

/// Unpremultiplies `view` in place, leaving zero-alpha pixels unchanged.
pub fn unpremultiply_in_place<P, S>(view: &mut ImageViewMut<'_, P>, channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    trace!(width = view.width(), height = view.height(), "unpremultiply_in_place");
    for row in view.rows_mut() {
        for px in row {
            let src = *px;
            unpremultiply_px(px, &src, None, channels);
        }
    }
}

/// Unpremultiplies `view` in place, giving zero-alpha pixels the named
/// channels of `zero`.
pub fn unpremultiply_zero_in_place<P, S>(view: &mut ImageViewMut<'_, P>, zero: &P, channels: S)
where
    P: HasAlpha,
    S: ChannelSet<P>,
{
    trace!(
        width = view.width(),
        height = view.height(),
        "unpremultiply_zero_in_place"
    );
    for row in view.rows_mut() {
        for px in row {
            let src = *px;
            unpremultiply_px(px, &src, Some(zero), channels);
        }
    }
}
