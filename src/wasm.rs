// wasm.rs - Browser bindings
//
// JS owns the loop: each requestAnimationFrame callback calls tick() with
// the frame timestamp, wraps the wasm memory at output_ptr() in an
// ImageData and blits it to the canvas, then re-arms the next frame. The
// resize handler forwards the new viewport size.

use wasm_bindgen::prelude::*;

use crate::sim::GlowWorld;

#[wasm_bindgen]
pub struct GlowEngine {
    world: GlowWorld,
}

#[wasm_bindgen]
impl GlowEngine {
    /// Build an engine sized to the viewport, seeded from the host RNG.
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> GlowEngine {
        let _ = console_log::init_with_level(log::Level::Debug);
        console_error_panic_hook::set_once();

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
        GlowEngine {
            world: GlowWorld::new(w, h, seed),
        }
    }

    /// Render one frame. `time` is the requestAnimationFrame timestamp (ms).
    pub fn tick(&mut self, time: f64) {
        self.world.tick(time);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.world.resize(w, h);
    }

    pub fn output_ptr(&self) -> *const u8 {
        self.world.output_ptr()
    }

    pub fn output_len(&self) -> usize {
        self.world.output_len()
    }

    pub fn width(&self) -> u32 {
        self.world.width()
    }

    pub fn height(&self) -> u32 {
        self.world.height()
    }
}
