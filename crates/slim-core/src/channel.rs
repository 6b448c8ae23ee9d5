//! Compile-time channel selection.
//!
//! Operations that touch only some channels (swap, selective set,
//! premultiply) name those channels with zero-sized selectors rather than
//! runtime indices. Each combination is its own monomorphised instantiation
//! and a selector that a layout lacks is a compile error:
//!
//! ```compile_fail
//! use slim_core::{channel::{Channel, X}, RgbF};
//!
//! let px = RgbF::new(1.0, 0.0, 0.0);
//! X.get(&px); // RGB has no X channel
//! ```
//!
//! # Selectors
//!
//! | Selector | Layouts            |
//! |----------|--------------------|
//! | [`R`] [`G`] [`B`] | `Rgb`, `Rgba` |
//! | [`X`] [`Y`] [`Z`] | `Xyz`, `Xyza` |
//! | [`A`]    | `Rgba`, `Xyza`     |
//!
//! # Sets and routings
//!
//! - [`ChannelSet`] - a tuple of 1 to 4 selectors, e.g. `(R, G, B)`
//! - [`Routing`] - a tuple of 2 to 4 `(input, output)` selector pairs,
//!   e.g. `((R, B), (B, R))` to swap red and blue

use crate::pixel::{Pixel, Rgb, Rgba, Xyz, Xyza};
use crate::sample::Sample;

/// One named channel of a pixel layout `P`.
pub trait Channel<P: Pixel>: Copy {
    /// Reads the channel.
    fn get(self, px: &P) -> P::Sample;

    /// Borrows the channel mutably.
    fn get_mut(self, px: &mut P) -> &mut P::Sample;

    /// Writes the channel.
    #[inline]
    fn set(self, px: &mut P, v: P::Sample) {
        *self.get_mut(px) = v;
    }
}

macro_rules! selector {
    ($($sel:ident => $doc:literal),+ $(,)?) => {
        $(
            #[doc = $doc]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $sel;
        )+
    };
}

selector! {
    R => "Red channel selector.",
    G => "Green channel selector.",
    B => "Blue channel selector.",
    A => "Alpha channel selector.",
    X => "X channel selector.",
    Y => "Y channel selector.",
    Z => "Z channel selector.",
}

macro_rules! impl_channel {
    ($layout:ident: $($sel:ident => $field:ident),+) => {
        $(
            impl<T: Sample> Channel<$layout<T>> for $sel {
                #[inline(always)]
                fn get(self, px: &$layout<T>) -> T {
                    px.$field
                }

                #[inline(always)]
                fn get_mut(self, px: &mut $layout<T>) -> &mut T {
                    &mut px.$field
                }
            }
        )+
    };
}

impl_channel!(Rgb: R => r, G => g, B => b);
impl_channel!(Rgba: R => r, G => g, B => b, A => a);
impl_channel!(Xyz: X => x, Y => y, Z => z);
impl_channel!(Xyza: X => x, Y => y, Z => z, A => a);

/// A named subset of the channels of `P`.
///
/// Implemented for tuples of one to four [`Channel`] selectors. The same
/// selector may appear twice; it is then visited twice.
pub trait ChannelSet<P: Pixel>: Copy {
    /// Number of selectors in the set.
    const LEN: usize;

    /// Calls `f` on each selected channel of `px`, in tuple order.
    fn for_each<F: FnMut(&mut P::Sample)>(self, px: &mut P, f: F);

    /// Copies the selected channels from `from` into `px`.
    fn copy_from(self, px: &mut P, from: &P);
}

macro_rules! impl_channel_set {
    ($len:literal: $($c:ident),+) => {
        impl<P: Pixel, $($c: Channel<P>),+> ChannelSet<P> for ($($c,)+) {
            const LEN: usize = $len;

            #[inline(always)]
            #[allow(non_snake_case)]
            fn for_each<F: FnMut(&mut P::Sample)>(self, px: &mut P, mut f: F) {
                let ($($c,)+) = self;
                $( f($c.get_mut(px)); )+
            }

            #[inline(always)]
            #[allow(non_snake_case)]
            fn copy_from(self, px: &mut P, from: &P) {
                let ($($c,)+) = self;
                $( $c.set(px, $c.get(from)); )+
            }
        }
    };
}

impl_channel_set!(1: C1);
impl_channel_set!(2: C1, C2);
impl_channel_set!(3: C1, C2, C3);
impl_channel_set!(4: C1, C2, C3, C4);

/// A channel permutation over `P`: for each pair `(input, output)`, the
/// output channel of the destination receives the input channel of the
/// source.
///
/// Implemented for tuples of two to four pairs. Channels of the destination
/// not named as an output are left as they were.
pub trait Routing<P: Pixel>: Copy {
    /// Number of routed channels.
    const LEN: usize;

    /// Writes the routed channels of `src` into `dst`.
    fn route(self, dst: &mut P, src: &P);
}

macro_rules! impl_routing {
    ($len:literal: $(($i:ident, $o:ident)),+) => {
        impl<P: Pixel, $($i: Channel<P>, $o: Channel<P>),+> Routing<P> for ($(($i, $o),)+) {
            const LEN: usize = $len;

            #[inline(always)]
            #[allow(non_snake_case)]
            fn route(self, dst: &mut P, src: &P) {
                let ($(($i, $o),)+) = self;
                $( $o.set(dst, $i.get(src)); )+
            }
        }
    };
}

impl_routing!(2: (I1, O1), (I2, O2));
impl_routing!(3: (I1, O1), (I2, O2), (I3, O3));
impl_routing!(4: (I1, O1), (I2, O2), (I3, O3), (I4, O4));
