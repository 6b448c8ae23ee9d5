//! Integration tests for slim-rs crates.
//!
//! This crate checks the algebraic laws the transforms obey across pixel
//! layouts, sample precisions and strides.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use half::f16;
    use slim_core::prelude::*;
    use slim_ops::alpha::{premultiply, unpremultiply, unpremultiply_zero};
    use slim_ops::channels::{set_channels, swap_channels};
    use slim_ops::fill::fill;
    use slim_ops::transform::{
        crop, flip, flip_in_place, flop, flop_in_place, rotate_180, rotate_180_in_place,
        rotate_270, rotate_90, transpose,
    };

    /// Owned storage plus the geometry it is read with.
    struct Owned<P> {
        data: Vec<P>,
        meta: ImageMeta,
    }

    impl<P: Pixel> Owned<P> {
        /// Builds an image whose content pixel `i` (row-major) is `f(i)` and
        /// whose padding holds `P::default()`.
        fn generate(width: usize, height: usize, hblank: usize, f: impl Fn(usize) -> P) -> Self {
            let meta = ImageMeta::new(width, height, hblank);
            let mut data = vec![P::default(); meta.required_len().unwrap()];
            for y in 0..height {
                for x in 0..width {
                    data[meta.offset(x, y)] = f(y * width + x);
                }
            }
            Self { data, meta }
        }

        fn view(&self) -> ImageView<'_, P> {
            ImageView::from_meta(&self.data, self.meta).unwrap()
        }

        fn view_mut(&mut self) -> ImageViewMut<'_, P> {
            ImageViewMut::from_meta(&mut self.data, self.meta).unwrap()
        }

        fn content(&self) -> Vec<P> {
            self.view().rows().flat_map(|row| row.iter().copied()).collect()
        }

        fn padding(&self) -> Vec<P> {
            let stride = self.meta.stride();
            (0..self.data.len())
                .filter(|i| stride > 0 && i % stride >= self.meta.width)
                .map(|i| self.data[i])
                .collect()
        }
    }

    /// Runs a two-view operation into a fresh destination with `hblank`
    /// padding, sized for either orientation of the source.
    fn apply<P: Pixel>(
        src: &Owned<P>,
        hblank: usize,
        op: impl FnOnce(&mut ImageViewMut<'_, P>, &ImageView<'_, P>),
    ) -> Owned<P> {
        let side = src.meta.width.max(src.meta.height);
        let mut data = vec![P::default(); (side + hblank) * side];
        let meta = {
            let mut dst = ImageViewMut::new(&mut data, side, side, hblank).unwrap();
            op(&mut dst, &src.view());
            dst.meta()
        };
        Owned { data, meta }
    }

    fn rgba(i: usize) -> RgbaF {
        let v = i as f32;
        RgbaF::new(v, v + 0.25, v + 0.5, 1.0)
    }

    fn xyz(i: usize) -> XyzD {
        XyzD::new(i as f64, -(i as f64), 0.5)
    }

    fn xyza_half(i: usize) -> XyzaH {
        let v = f16::from_f32((i % 64) as f32);
        XyzaH::new(v, v, v, f16::ONE)
    }

    /// Like [`rgba`], with alphas cycling through 0, 0.25, 0.5 and 0.75.
    fn rgba_varied(i: usize) -> RgbaF {
        let px = rgba(i);
        RgbaF::new(px.r, px.g, px.b, (i % 4) as f32 / 4.0)
    }

    type Op = fn(&mut ImageViewMut<'_, RgbaF>, &ImageView<'_, RgbaF>);

    fn swap_bgra(dst: &mut ImageViewMut<'_, RgbaF>, src: &ImageView<'_, RgbaF>) {
        swap_channels(dst, src, ((R, B), (G, G), (B, R), (A, A)));
    }

    fn force_opaque(dst: &mut ImageViewMut<'_, RgbaF>, src: &ImageView<'_, RgbaF>) {
        set_channels(dst, src, &RgbaF::new(0.0, 0.0, 0.0, 1.0), (A,));
    }

    fn premultiply_rgb(dst: &mut ImageViewMut<'_, RgbaF>, src: &ImageView<'_, RgbaF>) {
        premultiply(dst, src, (R, G, B));
    }

    fn unpremultiply_rgb(dst: &mut ImageViewMut<'_, RgbaF>, src: &ImageView<'_, RgbaF>) {
        unpremultiply(dst, src, (R, G, B));
    }

    fn unpremultiply_rgb_or_grey(dst: &mut ImageViewMut<'_, RgbaF>, src: &ImageView<'_, RgbaF>) {
        unpremultiply_zero(dst, src, &RgbaF::splat(0.5), (R, G, B));
    }

    /// Every two-view operation, fixed to RGBA.
    fn every_op() -> [Op; 11] {
        [
            flop,
            flip,
            transpose,
            rotate_90,
            rotate_180,
            rotate_270,
            swap_bgra,
            force_opaque,
            premultiply_rgb,
            unpremultiply_rgb,
            unpremultiply_rgb_or_grey,
        ]
    }

    fn sizes() -> [(usize, usize, usize); 5] {
        [(1, 1, 0), (4, 3, 0), (3, 4, 2), (5, 1, 1), (1, 5, 3)]
    }

    fn assert_geometry_laws<P: Pixel>(src: &Owned<P>) {
        let (w, h) = (src.meta.width, src.meta.height);
        let original = src.content();

        let twice = apply(&apply(src, 1, flop), 0, flop);
        assert_eq!(twice.content(), original, "flop twice on {w}x{h}");

        let twice = apply(&apply(src, 0, flip), 2, flip);
        assert_eq!(twice.content(), original, "flip twice on {w}x{h}");

        let twice = apply(&apply(src, 3, transpose), 0, transpose);
        assert_eq!(twice.meta.width, w);
        assert_eq!(twice.content(), original, "transpose twice on {w}x{h}");

        let mut quarter = apply(src, 1, rotate_90);
        assert_eq!((quarter.meta.width, quarter.meta.height), (h, w));
        for _ in 0..3 {
            quarter = apply(&quarter, 0, rotate_90);
        }
        assert_eq!(quarter.content(), original, "rotate_90 four times on {w}x{h}");

        let twice = apply(&apply(src, 0, rotate_180), 1, rotate_180);
        assert_eq!(twice.content(), original, "rotate_180 twice on {w}x{h}");

        let back = apply(&apply(src, 2, rotate_90), 0, rotate_270);
        assert_eq!(back.content(), original, "rotate_90 then rotate_270 on {w}x{h}");

        let half_turn = apply(&apply(src, 0, rotate_90), 0, rotate_90);
        assert_eq!(half_turn.content(), apply(src, 0, rotate_180).content());

        let composed = apply(&apply(src, 0, transpose), 0, flop);
        assert_eq!(composed.content(), apply(src, 0, rotate_90).content());

        let composed = apply(&apply(src, 0, flip), 0, flop);
        assert_eq!(composed.content(), apply(src, 0, rotate_180).content());
    }

    #[test]
    fn test_geometry_laws_rgba_f32() {
        for (w, h, hb) in sizes() {
            assert_geometry_laws(&Owned::generate(w, h, hb, rgba));
        }
    }

    #[test]
    fn test_geometry_laws_xyz_f64() {
        for (w, h, hb) in sizes() {
            assert_geometry_laws(&Owned::generate(w, h, hb, xyz));
        }
    }

    #[test]
    fn test_geometry_laws_xyza_f16() {
        for (w, h, hb) in sizes() {
            assert_geometry_laws(&Owned::generate(w, h, hb, xyza_half));
        }
    }

    #[test]
    fn test_in_place_matches_two_buffer() {
        for (w, h, hb) in sizes() {
            let src = Owned::generate(w, h, hb, rgba);

            let mut own = Owned::generate(w, h, hb, rgba);
            flop_in_place(&mut own.view_mut());
            assert_eq!(own.content(), apply(&src, 0, flop).content());

            let mut own = Owned::generate(w, h, hb, rgba);
            flip_in_place(&mut own.view_mut());
            assert_eq!(own.content(), apply(&src, 0, flip).content());

            let mut own = Owned::generate(w, h, hb, rgba);
            rotate_180_in_place(&mut own.view_mut());
            assert_eq!(own.content(), apply(&src, 0, rotate_180).content());
            assert!(own.padding().iter().all(|px| *px == RgbaF::default()));
        }
    }

    #[test]
    fn test_result_independent_of_stride() {
        let compact = Owned::generate(4, 3, 0, rgba_varied);
        let padded = Owned::generate(4, 3, 5, rgba_varied);
        assert_eq!(compact.content(), padded.content());

        for (i, op) in every_op().into_iter().enumerate() {
            let a = apply(&compact, 0, op);
            let b = apply(&padded, 7, op);
            assert_eq!(a.meta.width, b.meta.width, "op {i}");
            assert_eq!(a.content(), b.content(), "op {i}");
        }
    }

    #[test]
    fn test_padding_never_written() {
        let src = Owned::generate(3, 4, 2, rgba_varied);
        let marker = RgbaF::splat(-1.0);
        for (n, op) in every_op().into_iter().enumerate() {
            // 4x4 destination with 2 pixels of padding, large enough for 4x3 or 3x4
            let mut data = vec![marker; 6 * 4];
            let meta = {
                let mut dst = ImageViewMut::new(&mut data, 4, 4, 2).unwrap();
                op(&mut dst, &src.view());
                dst.meta()
            };
            let stride = meta.stride();
            for (i, px) in data.iter().enumerate() {
                let row = i / stride;
                let in_content = i % stride < meta.width && row < meta.height;
                if in_content {
                    assert_ne!(*px, marker, "op {n}: pixel {i} not written");
                } else {
                    assert_eq!(*px, marker, "op {n}: pixel {i} outside {}x{}", meta.width, meta.height);
                }
            }
        }
    }

    #[test]
    fn test_crop_example() {
        let src = Owned::generate(5, 4, 0, |i| RgbF::new((i % 5) as f32, (i / 5) as f32, 0.0));
        let out = apply(&src, 0, |dst, src| crop(dst, src, Rect::new(2, 1, 3, 2)));
        assert_eq!((out.meta.width, out.meta.height), (3, 2));

        let coords: Vec<(f32, f32)> = out.content().iter().map(|px| (px.r, px.g)).collect();
        assert_eq!(
            coords,
            [(2.0, 1.0), (3.0, 1.0), (4.0, 1.0), (2.0, 2.0), (3.0, 2.0), (4.0, 2.0)]
        );
    }

    #[test]
    fn test_crop_matches_subview() {
        let src = Owned::generate(6, 5, 3, xyz);
        let rect = Rect::new(1, 2, 4, 3);
        let cropped = apply(&src, 1, |dst, s| crop(dst, s, rect));

        let view = src.view();
        let sub = view.subview(rect).unwrap();
        let via_sub: Vec<XyzD> = sub.rows().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(cropped.content(), via_sub);

        let copied = apply(&src, 0, |dst, _| flop(dst, &sub));
        let back = apply(&copied, 0, flop);
        assert_eq!(back.content(), via_sub);
    }

    #[test]
    fn test_fill_leaves_padding() {
        let mut img = Owned::generate(3, 3, 2, rgba);
        let colour = RgbaF::new(0.1, 0.2, 0.3, 0.4);
        fill(&mut img.view_mut(), colour);
        assert!(img.content().iter().all(|px| *px == colour));
        assert!(img.padding().iter().all(|px| *px == RgbaF::default()));
    }

    #[test]
    fn test_swap_inverse_is_identity() {
        let src = Owned::generate(4, 2, 1, |i| {
            let v = i as f32;
            RgbaF::new(v, v * 2.0, v * 3.0, v * 4.0)
        });
        let rotated = apply(&src, 0, |dst, s| {
            swap_channels(dst, s, ((R, G), (G, B), (B, R), (A, A)))
        });
        assert_eq!(rotated.view().pixel(1, 0), RgbaF::new(3.0, 1.0, 2.0, 4.0));

        let back = apply(&rotated, 2, |dst, s| {
            swap_channels(dst, s, ((G, R), (B, G), (R, B), (A, A)))
        });
        assert_eq!(back.content(), src.content());
    }

    #[test]
    fn test_set_channels_then_swap() {
        let src = Owned::generate(2, 2, 0, xyz);
        let forced = apply(&src, 0, |dst, s| {
            set_channels(dst, s, &XyzD::new(0.0, 7.0, 0.0), (Y,))
        });
        let swapped = apply(&forced, 0, |dst, s| {
            swap_channels(dst, s, ((X, Y), (Y, X), (Z, Z)))
        });
        for (px, orig) in swapped.content().iter().zip(src.content()) {
            assert_eq!(*px, XyzD::new(7.0, orig.x, 0.5));
        }
    }

    #[test]
    fn test_premultiply_roundtrip_f32() {
        let src = Owned::generate(5, 3, 2, |i| {
            let a = (i + 1) as f32 / 16.0;
            RgbaF::new(i as f32 / 15.0, 0.5, 1.0 - i as f32 / 15.0, a)
        });
        let premul = apply(&src, 1, |dst, s| premultiply(dst, s, (R, G, B)));
        let back = apply(&premul, 0, |dst, s| unpremultiply(dst, s, (R, G, B)));

        for (got, want) in back.content().iter().zip(src.content()) {
            assert_relative_eq!(got.r, want.r, epsilon = 1e-6);
            assert_relative_eq!(got.g, want.g, epsilon = 1e-6);
            assert_relative_eq!(got.b, want.b, epsilon = 1e-6);
            assert_eq!(got.a, want.a);
        }
    }

    #[test]
    fn test_premultiply_roundtrip_f64_xyz() {
        let src = Owned::generate(3, 3, 0, |i| {
            XyzaD::new(0.1 * i as f64, 0.2, 0.3, 0.125 * (i + 1) as f64)
        });
        let premul = apply(&src, 0, |dst, s| premultiply(dst, s, (X, Y, Z)));
        let back = apply(&premul, 0, |dst, s| unpremultiply(dst, s, (X, Y, Z)));
        for (got, want) in back.content().iter().zip(src.content()) {
            assert_relative_eq!(got.x, want.x, epsilon = 1e-12);
            assert_relative_eq!(got.y, want.y, epsilon = 1e-12);
            assert_relative_eq!(got.z, want.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_premultiply_roundtrip_f16_exact() {
        // powers of two keep every product exact in half precision
        let src = Owned::generate(2, 2, 0, |i| {
            let a = f16::from_f32(1.0 / (1 << i) as f32);
            RgbaH::new(f16::from_f32(0.75), f16::from_f32(0.5), f16::from_f32(0.25), a)
        });
        let premul = apply(&src, 0, |dst, s| premultiply(dst, s, (R, G, B)));
        let back = apply(&premul, 0, |dst, s| unpremultiply(dst, s, (R, G, B)));
        assert_eq!(back.content(), src.content());
    }

    #[test]
    fn test_zero_alpha_policies() {
        let src = Owned::generate(2, 1, 0, |i| {
            if i == 0 {
                RgbaD::new(0.2, 0.4, 0.6, 0.0)
            } else {
                RgbaD::new(0.2, 0.4, 0.6, 0.5)
            }
        });

        let kept = apply(&src, 0, |dst, s| unpremultiply(dst, s, (R, G, B)));
        assert_eq!(kept.view().pixel(0, 0), RgbaD::new(0.2, 0.4, 0.6, 0.0));

        let fallback = RgbaD::new(1.0, 0.0, 1.0, 1.0);
        let replaced = apply(&src, 0, |dst, s| unpremultiply_zero(dst, s, &fallback, (R, G, B)));
        assert_eq!(replaced.view().pixel(0, 0), RgbaD::new(1.0, 0.0, 1.0, 0.0));
        assert_relative_eq!(replaced.view().pixel(1, 0).g, 0.8);
    }

    #[test]
    fn test_empty_images() {
        for (w, h) in [(0, 0), (0, 3), (3, 0)] {
            for (src_hblank, dst_hblank) in [(0, 0), (2, 0), (0, 2), (2, 3)] {
                let src = Owned::generate(w, h, src_hblank, rgba);
                for (i, op) in every_op().into_iter().enumerate() {
                    let out = apply(&src, dst_hblank, op);
                    assert!(out.content().is_empty(), "op {i} on {w}x{h}");
                }

                let mut own = Owned::generate(w, h, src_hblank, rgba);
                fill(&mut own.view_mut(), RgbaF::splat(1.0));
                flop_in_place(&mut own.view_mut());
                flip_in_place(&mut own.view_mut());
                rotate_180_in_place(&mut own.view_mut());
                assert!(own.content().is_empty());
            }
        }
    }
}
