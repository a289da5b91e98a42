// particle.rs - Drifting glow particles
//
// Structure-of-Arrays layout for cache-friendly iteration. The population
// is fixed at construction; slots are never freed, only respawned in place
// once they drift further than their own radius off the surface.

use std::f32::consts::TAU;

use super::GlowWorld;
use crate::noise;

// Field parameters
pub const BASE_OPACITY: f32 = 0.3;
const SIZE_MIN: f32 = 20.0;
const SIZE_SPREAD: f32 = 80.0;
const SPEED_MIN: f32 = 0.1;
const SPEED_SPREAD: f32 = 0.5;
const ANGLE_JITTER: f32 = 0.05;
const NOISE_SCALE: f32 = 0.005;
const NOISE_STRENGTH: f32 = 30.0;

pub struct Particles {
    // Position
    pub x: Vec<f32>,
    pub y: Vec<f32>,

    // Fixed per-slot traits
    pub size: Vec<f32>,
    pub speed: Vec<f32>,

    // Recomputed every frame
    pub opacity: Vec<f32>,

    // Heading, jittered every frame
    pub angle: Vec<f32>,
}

impl Particles {
    /// Populate `count` slots uniformly over a w x h surface.
    pub fn new(count: usize, w: f32, h: f32, rng: &mut u32) -> Self {
        let mut field = Self {
            x: vec![0.0; count],
            y: vec![0.0; count],
            size: vec![0.0; count],
            speed: vec![0.0; count],
            opacity: vec![0.0; count],
            angle: vec![0.0; count],
        };

        for i in 0..count {
            field.x[i] = GlowWorld::rand(rng) * w;
            field.y[i] = GlowWorld::rand(rng) * h;
            field.size[i] = GlowWorld::rand(rng) * SIZE_SPREAD + SIZE_MIN;
            field.speed[i] = GlowWorld::rand(rng) * SPEED_SPREAD + SPEED_MIN;
            field.opacity[i] = GlowWorld::rand(rng) * BASE_OPACITY;
            field.angle[i] = GlowWorld::rand(rng) * TAU;
        }

        field
    }

    pub fn count(&self) -> usize {
        self.x.len()
    }

    /// Advance every slot by one frame. `time` is the host timestamp in ms.
    pub fn update(&mut self, w: f32, h: f32, time: f64, rng: &mut u32) {
        let z = (time * 0.001) as f32;

        for i in 0..self.x.len() {
            let size = self.size[i];

            // Step along the current heading. The jitter below only bends
            // the path from the next frame on.
            let mut x = self.x[i] + self.angle[i].cos() * self.speed[i];
            let mut y = self.y[i] + self.angle[i].sin() * self.speed[i];
            let mut angle = self.angle[i] + (GlowWorld::rand(rng) - 0.5) * ANGLE_JITTER;

            // Noise-driven flicker, sampled at the new position. The sine
            // mapping keeps it non-negative and below BASE_OPACITY.
            let n = noise::sample(x * NOISE_SCALE, y * NOISE_SCALE, z);
            self.opacity[i] = ((n * NOISE_STRENGTH).sin() * 0.5 + 0.5) * BASE_OPACITY;

            // More than a radius off-surface: respawn somewhere visible
            // with a fresh heading. Size and speed stay with the slot.
            if x < -size || x > w + size || y < -size || y > h + size {
                x = GlowWorld::rand(rng) * w;
                y = GlowWorld::rand(rng) * h;
                angle = GlowWorld::rand(rng) * TAU;
            }

            self.x[i] = x;
            self.y[i] = y;
            self.angle[i] = angle;
        }
    }
}
