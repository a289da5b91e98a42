// render.rs - RGBA framebuffer and glow rasterizer
//
// The buffer is the drawing surface: RGBA8, non-premultiplied, row-major,
// opaque black after a clear. The wasm host wraps it in an ImageData and
// blits it to the canvas each frame.

// Gradient endpoints: solid gray at the glow center, darker gray at the rim.
const CORE_GRAY: f32 = 150.0;
const EDGE_GRAY: f32 = 50.0;

pub struct Framebuffer {
    data: Vec<u8>,
    w: u32,
    h: u32,
}

impl Framebuffer {
    pub fn new(w: u32, h: u32) -> Self {
        let mut fb = Self {
            data: vec![0; (w * h * 4) as usize],
            w,
            h,
        };
        fb.clear();
        fb
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.data.resize((w * h * 4) as usize, 0);
        self.clear();
    }

    /// Fill the whole surface with opaque black.
    pub fn clear(&mut self) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            px[3] = 255;
        }
    }

    /// Paint one glow: a disc whose color fades from rgba(150,150,150,alpha)
    /// at the center to rgba(50,50,50,0) at the rim, composited source-over.
    /// Stops interpolate in straight (non-premultiplied) space, matching
    /// canvas radial gradients. Off-surface parts are clipped.
    pub fn glow(&mut self, cx: f32, cy: f32, radius: f32, alpha: f32) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }

        let w = self.w as i32;
        let h = self.h as i32;
        let x0 = ((cx - radius).floor() as i32).max(0);
        let x1 = ((cx + radius).ceil() as i32).min(w - 1);
        let y0 = ((cy - radius).floor() as i32).max(0);
        let y1 = ((cy + radius).ceil() as i32).min(h - 1);

        let inv_r = 1.0 / radius;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt() * inv_r;
                if d >= 1.0 {
                    continue;
                }

                let src_a = alpha * (1.0 - d);
                let gray = CORE_GRAY + (EDGE_GRAY - CORE_GRAY) * d;

                let i = ((py * w + px) * 4) as usize;
                let dst = &mut self.data[i..i + 4];

                // Source-over in premultiplied space, stored straight.
                let dst_a = dst[3] as f32 * (1.0 / 255.0);
                let out_a = src_a + dst_a * (1.0 - src_a);
                if out_a <= 0.0 {
                    continue;
                }
                let back = dst_a * (1.0 - src_a);
                let inv = 1.0 / out_a;

                dst[0] = ((gray * src_a + dst[0] as f32 * back) * inv + 0.5) as u8;
                dst[1] = ((gray * src_a + dst[1] as f32 * back) * inv + 0.5) as u8;
                dst[2] = ((gray * src_a + dst[2] as f32 * back) * inv + 0.5) as u8;
                dst[3] = (out_a * 255.0 + 0.5).min(255.0) as u8;
            }
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_fills_opaque_black() {
        let fb = Framebuffer::new(8, 8);
        for px in fb.data().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let mut fb = Framebuffer::new(16, 16);
        fb.glow(8.0, 8.0, 5.0, 0.3);
        fb.clear();
        let once = fb.data().to_vec();
        fb.clear();
        assert_eq!(fb.data(), &once[..]);
    }

    #[test]
    fn glow_paints_inside_disc_only() {
        let mut fb = Framebuffer::new(64, 64);
        fb.glow(32.0, 32.0, 10.0, 0.3);

        for py in 0..64u32 {
            for px in 0..64u32 {
                let dx = px as f32 + 0.5 - 32.0;
                let dy = py as f32 + 0.5 - 32.0;
                let dist = (dx * dx + dy * dy).sqrt();
                let i = ((py * 64 + px) * 4) as usize;
                let p = &fb.data()[i..i + 4];
                if dist >= 10.0 {
                    assert_eq!(p, &[0, 0, 0, 255], "pixel ({px}, {py}) outside disc");
                } else {
                    assert_eq!(p[0], p[1]);
                    assert_eq!(p[1], p[2]);
                    assert_eq!(p[3], 255, "opaque backdrop stays opaque");
                }
            }
        }

        // Pixel nearest the center carries the brightest gray.
        let center = fb.data()[((32 * 64 + 32) * 4) as usize];
        let rim = fb.data()[((32 * 64 + 40) * 4) as usize];
        assert!(center > rim, "center {center} should outshine rim {rim}");
        assert!(center > 0);
    }

    #[test]
    fn glow_with_zero_alpha_is_a_no_op() {
        let mut fb = Framebuffer::new(32, 32);
        fb.glow(16.0, 16.0, 8.0, 0.0);
        for px in fb.data().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn glow_clips_at_surface_edges() {
        let mut fb = Framebuffer::new(32, 32);
        fb.glow(-4.0, -4.0, 10.0, 0.3);
        fb.glow(31.5, 31.5, 10.0, 0.3);
        fb.glow(500.0, 500.0, 10.0, 0.3);
        assert!(fb.data()[0] > 0, "corner overlapped by the first glow");
    }

    #[test]
    fn overlapping_glows_brighten() {
        let mut fb = Framebuffer::new(32, 32);
        fb.glow(16.0, 16.0, 8.0, 0.2);
        let single = fb.data()[((16 * 32 + 16) * 4) as usize];
        fb.glow(16.0, 16.0, 8.0, 0.2);
        let double = fb.data()[((16 * 32 + 16) * 4) as usize];
        assert!(double > single);
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut fb = Framebuffer::new(16, 16);
        fb.glow(8.0, 8.0, 6.0, 0.3);
        fb.resize(20, 10);
        assert_eq!(fb.len(), 20 * 10 * 4);
        for px in fb.data().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, 255]);
        }
    }
}
