// sim/ - Glow field simulation
//
// One world owns the particle field, the framebuffer and the RNG state.
// One tick per animation frame; the host blits the buffer afterwards and
// re-arms its own scheduler.

mod particle;

pub use particle::{BASE_OPACITY, Particles};

use crate::post;
use crate::render::Framebuffer;

/// Fixed field population. Slots are never added or removed at runtime.
pub const PARTICLE_COUNT: usize = 100;

const DEFAULT_SEED: u32 = 0xDEADBEEF;

pub struct GlowWorld {
    // Surface dimensions
    w: u32,
    h: u32,

    // Entities
    particles: Particles,

    // Output
    fb: Framebuffer,

    // RNG state
    rng: u32,
}

impl GlowWorld {
    pub fn new(w: u32, h: u32, seed: u32) -> Self {
        // xorshift32 never leaves zero; remap to the default stream.
        let mut rng = if seed == 0 { DEFAULT_SEED } else { seed };
        let particles = Particles::new(PARTICLE_COUNT, w as f32, h as f32, &mut rng);
        log::debug!("glow field: {w}x{h} surface, {PARTICLE_COUNT} particles");

        Self {
            w,
            h,
            particles,
            fb: Framebuffer::new(w, h),
            rng,
        }
    }

    /// Track a viewport change. Particles keep their positions; anything
    /// now off-surface respawns through the boundary check on the next tick.
    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.fb.resize(w, h);
        log::debug!("glow field resized to {w}x{h}");
    }

    /// Advance and render one frame. `time` is the host's monotonically
    /// increasing timestamp in milliseconds.
    pub fn tick(&mut self, time: f64) {
        self.fb.clear();

        self.particles
            .update(self.w as f32, self.h as f32, time, &mut self.rng);

        for i in 0..self.particles.count() {
            self.fb.glow(
                self.particles.x[i],
                self.particles.y[i],
                self.particles.size[i],
                self.particles.opacity[i],
            );
        }

        post::apply_grain(self.fb.data_mut(), &mut self.rng);
    }

    // Random number generator (xorshift32), uniform in [0, 1)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    /// Full RGBA8 frame, row-major. Native hosts read this directly.
    pub fn pixels(&self) -> &[u8] {
        self.fb.data()
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const u8 {
        self.fb.ptr()
    }
    pub fn output_len(&self) -> usize {
        self.fb.len()
    }
    pub fn width(&self) -> u32 {
        self.w
    }
    pub fn height(&self) -> u32 {
        self.h
    }
}
