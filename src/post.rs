// post.rs - Film-grain pass
//
// Per-pixel luminance grain plus sporadic alpha flicker, applied to every
// pixel a glow touched this frame. The cleared background is pure black, so
// a nonzero red channel marks touched pixels and everything else is skipped.
// One full-surface scan per frame; hosts that need the frame time back can
// drop this stage without touching the simulation.

use crate::sim::GlowWorld;

const GRAIN_AMPLITUDE: f32 = 10.0;
const FLICKER_THRESHOLD: f32 = 0.9;
const FLICKER_MIN: f32 = 0.9;
const FLICKER_SPREAD: f32 = 0.2;

/// Roughen an RGBA8 buffer in place. One shared delta per pixel keeps the
/// hue, fresh draws every pixel every frame keep the grain alive.
pub fn apply_grain(data: &mut [u8], rng: &mut u32) {
    for px in data.chunks_exact_mut(4) {
        if px[0] == 0 {
            continue;
        }

        let delta = (GlowWorld::rand(rng) - 0.5) * GRAIN_AMPLITUDE;
        px[0] = (px[0] as f32 + delta).clamp(0.0, 255.0) as u8;
        px[1] = (px[1] as f32 + delta).clamp(0.0, 255.0) as u8;
        px[2] = (px[2] as f32 + delta).clamp(0.0, 255.0) as u8;

        if GlowWorld::rand(rng) > FLICKER_THRESHOLD {
            let scale = FLICKER_MIN + GlowWorld::rand(rng) * FLICKER_SPREAD;
            px[3] = (px[3] as f32 * scale).clamp(0.0, 255.0) as u8;
        }
    }
}
