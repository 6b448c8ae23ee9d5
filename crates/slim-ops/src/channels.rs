//! Channel swaps and selective channel sets.
//!
//! Channels are named with the selectors from [`slim_core::channel`], so the
//! choice of channels is fixed at compile time:
//!
//! ```rust
//! use slim_core::prelude::*;
//! use slim_ops::channels::{set_channels, swap_channels};
//!
//! let src = [RgbaF::new(1.0, 0.5, 0.25, 0.75)];
//! let src = ImageView::new(&src, 1, 1, 0).unwrap();
//!
//! // RGBA -> BGRA
//! let mut out = [RgbaF::default()];
//! let mut dst = ImageViewMut::new(&mut out, 1, 1, 0).unwrap();
//! swap_channels(&mut dst, &src, ((R, B), (G, G), (B, R), (A, A)));
//! assert_eq!(dst.pixel(0, 0), RgbaF::new(0.25, 0.5, 1.0, 0.75));
//!
//! // force opaque
//! let opaque = RgbaF::new(0.0, 0.0, 0.0, 1.0);
//! set_channels(&mut dst, &src, &opaque, (A,));
//! assert_eq!(dst.pixel(0, 0), RgbaF::new(1.0, 0.5, 0.25, 1.0));
//! ```

use slim_core::{ChannelSet, ImageView, ImageViewMut, Pixel, Routing};
use tracing::trace;

/// Routes channels of each source pixel into the destination pixel.
///
/// For every `(input, output)` pair of `routing`, the destination's output
/// channel receives the source's input channel. Destination channels not
/// named as an output keep their previous value.
#[inline]
pub fn swap_channels_row<P, S>(dst: &mut [P], src: &[P], routing: S)
where
    P: Pixel,
    S: Routing<P>,
{
    for (d, s) in dst[..src.len()].iter_mut().zip(src) {
        routing.route(d, s);
    }
}

/// Routes channels of every pixel of `src` into `dst`.
///
/// `dst` takes the dimensions of `src`. See [`swap_channels_row`].
pub fn swap_channels<P, S>(dst: &mut ImageViewMut<'_, P>, src: &ImageView<'_, P>, routing: S)
where
    P: Pixel,
    S: Routing<P>,
{
    trace!(
        width = src.width(),
        height = src.height(),
        channels = S::LEN,
        "swap_channels"
    );
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows()) {
        swap_channels_row(d, s, routing);
    }
}

/// Copies each source pixel, then overwrites the `channels` subset with the
/// matching channels of `colour`.
#[inline]
pub fn set_channels_row<P, S>(dst: &mut [P], src: &[P], colour: &P, channels: S)
where
    P: Pixel,
    S: ChannelSet<P>,
{
    for (d, s) in dst[..src.len()].iter_mut().zip(src) {
        *d = *s;
        channels.copy_from(d, colour);
    }
}

/// Copies `src` into `dst`, forcing the `channels` subset to the values in
/// `colour`.
///
/// `dst` takes the dimensions of `src`.
pub fn set_channels<P, S>(
    dst: &mut ImageViewMut<'_, P>,
    src: &ImageView<'_, P>,
    colour: &P,
    channels: S,
) where
    P: Pixel,
    S: ChannelSet<P>,
{
    trace!(
        width = src.width(),
        height = src.height(),
        channels = S::LEN,
        "set_channels"
    );
    dst.set_dimensions(src.width(), src.height());
    for (d, s) in dst.rows_mut().zip(src.rows()) {
        set_channels_row(d, s, colour, channels);
    }
}
